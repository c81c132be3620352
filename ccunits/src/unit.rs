//! Units: a prefix, a measure and an optional denominator

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Measure, Prefix, UnitError};

/// Leading prefix letters. "e", "z", "y", "u" and "n" are never consumed
/// here, so units spelled with those prefixes do not parse.
static PREFIX_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[kKmMgGtTpP]?i?").expect("prefix pattern is valid"));

/// A measurement unit like "MB/s", "GHz" or "%"
///
/// A denominator of [`Measure::Invalid`] means the unit is not a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    prefix: Prefix,
    measure: Measure,
    denominator: Measure,
}

impl Unit {
    /// The unit every failed parse produces
    pub const INVALID: Unit = Unit {
        prefix: Prefix::Invalid,
        measure: Measure::Invalid,
        denominator: Measure::Invalid,
    };

    #[cfg(test)]
    pub(crate) const fn from_parts(prefix: Prefix, measure: Measure, denominator: Measure) -> Self {
        Unit { prefix, measure, denominator }
    }

    /// Parse a unit spelling.
    ///
    /// Never fails: an unrecognized spelling yields [`Unit::INVALID`], so
    /// check [`is_valid`](Self::is_valid) before using the result.
    pub fn new(unit_str: &str) -> Self {
        let split = PREFIX_LETTERS.find(unit_str).map_or(0, |m| m.end());
        let (letters, remainder) = unit_str.split_at(split);
        let (numerator, denominator) = match remainder.split_once('/') {
            Some((num, den)) => (num, Some(den)),
            None => (remainder, None),
        };

        let mut prefix = Prefix::parse(letters);
        let mut measure = Measure::parse(numerator);

        // "packets" reads as Peta + "ackets", "percent" as Peta + "ercent"
        if measure == Measure::Invalid && matches!(prefix, Prefix::Peta | Prefix::Exa) {
            let retried = Measure::parse(&format!("{}{}", letters, numerator));
            if retried.is_valid() {
                debug!(unit = unit_str, measure = ?retried, "prefix letters belong to the measure");
                measure = retried;
                prefix = Prefix::Base;
            }
        }

        let denominator = denominator.map_or(Measure::Invalid, Measure::parse);

        match measure {
            Measure::Bytes
            | Measure::Flops
            | Measure::Packets
            | Measure::Events
            | Measure::Cycles
            | Measure::Requests
                if prefix == Prefix::Milli =>
            {
                debug!(unit = unit_str, "no milli form for {:?}, reading as mega", measure);
                prefix = Prefix::Mega;
            }
            Measure::Percentage => prefix = Prefix::Base,
            _ => {}
        }

        if !prefix.is_valid() || !measure.is_valid() {
            trace!(unit = unit_str, ?prefix, ?measure, "unit spelling rejected");
            return Unit::INVALID;
        }

        Unit { prefix, measure, denominator }
    }

    /// Both prefix and measure parsed
    pub fn is_valid(&self) -> bool {
        self.prefix.is_valid() && self.measure.is_valid()
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Denominator measure, [`Measure::Invalid`] when not a rate
    pub fn denominator(&self) -> Measure {
        self.denominator
    }

    pub fn is_rate(&self) -> bool {
        self.denominator.is_valid()
    }

    /// Turn the unit into a rate "per `div`"
    pub fn set_denominator(&mut self, div: Measure) {
        self.denominator = div;
    }

    pub(crate) fn set_prefix(&mut self, prefix: Prefix) {
        self.prefix = prefix;
    }

    /// Long form like "Gigabyte/Seconds"
    pub fn long_name(&self) -> String {
        if self.is_rate() {
            format!(
                "{}{}/{}",
                self.prefix.long_name(),
                self.measure.long_name(),
                self.denominator.long_name()
            )
        } else {
            format!("{}{}", self.prefix.long_name(), self.measure.long_name())
        }
    }

    /// Short form like "GB/s"; parses back to the same unit
    pub fn short_name(&self) -> String {
        self.to_string()
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::INVALID
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix.short_letter(), self.measure.short_name())?;
        if self.is_rate() {
            write!(f, "/{}", self.denominator.short_name())?;
        }
        Ok(())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = Unit::new(s);
        if unit.is_valid() {
            Ok(unit)
        } else {
            Err(UnitError::InvalidUnit(s.to_string()))
        }
    }
}
