//! Magnitude prefixes
//!
//! Decimal (milli through yotta) and binary (kibi through yobi) scale
//! factors, plus `Base` for an unscaled unit and `Invalid` for a spelling
//! that is not a prefix at all.

use std::fmt;

use serde::{Deserialize, Serialize};

const KIBI: f64 = 1024.0;

/// Multiplicative scale applied to a measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Prefix {
    #[default]
    Invalid,
    Base,
    Nano,
    Micro,
    Milli,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    Pebi,
    Exbi,
    Zebi,
    Yobi,
}

impl Prefix {
    /// Exact, case-sensitive lookup of a prefix spelling.
    ///
    /// The empty string is [`Prefix::Base`]. Casing is deliberately uneven:
    /// "m" is milli and "M" mega, "u" and "n" only exist lowercase, and of
    /// the binary prefixes "mi" and "ti" are not accepted.
    pub fn parse(letters: &str) -> Prefix {
        match letters {
            "" => Prefix::Base,
            "k" | "K" => Prefix::Kilo,
            "m" => Prefix::Milli,
            "M" => Prefix::Mega,
            "g" | "G" => Prefix::Giga,
            "t" | "T" => Prefix::Tera,
            "p" | "P" => Prefix::Peta,
            "e" | "E" => Prefix::Exa,
            "z" | "Z" => Prefix::Zetta,
            "y" | "Y" => Prefix::Yotta,
            "u" => Prefix::Micro,
            "n" => Prefix::Nano,
            "ki" | "Ki" => Prefix::Kibi,
            "Mi" => Prefix::Mebi,
            "gi" | "Gi" => Prefix::Gibi,
            "Ti" => Prefix::Tebi,
            _ => Prefix::Invalid,
        }
    }

    pub fn is_valid(self) -> bool {
        self != Prefix::Invalid
    }

    /// Numeric scale factor, `None` for [`Prefix::Invalid`]
    pub fn scale(self) -> Option<f64> {
        let scale = match self {
            Prefix::Invalid => return None,
            Prefix::Base => 1.0,
            Prefix::Nano => 1e-9,
            Prefix::Micro => 1e-6,
            Prefix::Milli => 1e-3,
            Prefix::Kilo => 1e3,
            Prefix::Mega => 1e6,
            Prefix::Giga => 1e9,
            Prefix::Tera => 1e12,
            Prefix::Peta => 1e15,
            Prefix::Exa => 1e18,
            Prefix::Zetta => 1e21,
            Prefix::Yotta => 1e24,
            Prefix::Kibi => KIBI,
            Prefix::Mebi => KIBI.powi(2),
            Prefix::Gibi => KIBI.powi(3),
            Prefix::Tebi => KIBI.powi(4),
            Prefix::Pebi => KIBI.powi(5),
            Prefix::Exbi => KIBI.powi(6),
            Prefix::Zebi => KIBI.powi(7),
            Prefix::Yobi => KIBI.powi(8),
        };
        Some(scale)
    }

    /// Long name like "Kilo" or "Gibi"; empty for `Base`
    pub fn long_name(self) -> &'static str {
        match self {
            Prefix::Invalid => "Inval",
            Prefix::Base => "",
            Prefix::Nano => "Nano",
            Prefix::Micro => "Micro",
            Prefix::Milli => "Milli",
            Prefix::Kilo => "Kilo",
            Prefix::Mega => "Mega",
            Prefix::Giga => "Giga",
            Prefix::Tera => "Tera",
            Prefix::Peta => "Peta",
            Prefix::Exa => "Exa",
            Prefix::Zetta => "Zetta",
            Prefix::Yotta => "Yotta",
            Prefix::Kibi => "Kibi",
            Prefix::Mebi => "Mebi",
            Prefix::Gibi => "Gibi",
            Prefix::Tebi => "Tebi",
            Prefix::Pebi => "Pebi",
            Prefix::Exbi => "Exbi",
            Prefix::Zebi => "Zebi",
            Prefix::Yobi => "Yobi",
        }
    }

    /// Short letters like "K" or "Gi"; empty for `Base`
    pub fn short_letter(self) -> &'static str {
        match self {
            Prefix::Invalid => "<inval>",
            Prefix::Base => "",
            Prefix::Nano => "n",
            Prefix::Micro => "u",
            Prefix::Milli => "m",
            Prefix::Kilo => "K",
            Prefix::Mega => "M",
            Prefix::Giga => "G",
            Prefix::Tera => "T",
            Prefix::Peta => "P",
            Prefix::Exa => "E",
            Prefix::Zetta => "Z",
            Prefix::Yotta => "Y",
            Prefix::Kibi => "Ki",
            Prefix::Mebi => "Mi",
            Prefix::Gibi => "Gi",
            Prefix::Tebi => "Ti",
            Prefix::Pebi => "Pi",
            Prefix::Exbi => "Ei",
            Prefix::Zebi => "Zi",
            Prefix::Yobi => "Yi",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_letter())
    }
}
