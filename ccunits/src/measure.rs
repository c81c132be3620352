//! What a unit counts
//!
//! A closed set of measures, each with a long name, a short name and a
//! prefix-anchored recognizer. Recognizers accept progressive spellings
//! ("b", "by", "byte", "bytes") and ignore whatever trails the match, so a
//! denominator suffix or a plural never stops recognition.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The kind of quantity a unit counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Measure {
    #[default]
    Invalid,
    Bytes,
    Flops,
    Percentage,
    TemperatureC,
    TemperatureF,
    Rotation,
    Hertz,
    Time,
    Watt,
    Joule,
    Cycles,
    Requests,
    Packets,
    Events,
}

/// Recognizers in try order. Spellings are chosen so no earlier pattern
/// swallows a later measure's name; reordering breaks that.
static RECOGNIZERS: LazyLock<Vec<(Measure, Regex)>> = LazyLock::new(|| {
    [
        (Measure::Bytes, r"^[bB][yY]?[tT]?[eE]?[sS]?"),
        (Measure::Flops, r"^[fF][lL]?[oO]?[pP]?[sS]?"),
        (Measure::Percentage, r"^(%|[pP]ercent)"),
        (Measure::TemperatureC, r"^(deg[Cc]|°[cC])"),
        (Measure::TemperatureF, r"^(deg[fF]|°[fF])"),
        (Measure::Rotation, r"^[rR][pP][mM]"),
        (Measure::Hertz, r"^[hH][eE]?[rR]?[tT]?[zZ]"),
        (Measure::Time, r"^[sS][eE]?[cC]?[oO]?[nN]?[dD]?[sS]?"),
        (Measure::Cycles, r"^[cC][yY][cC]?[lL]?[eE]?[sS]?"),
        (Measure::Watt, r"^[wW][aA]?[tT]?[tT]?[sS]?"),
        (Measure::Joule, r"^[jJ][oO]?[uU]?[lL]?[eE]?[sS]?"),
        (Measure::Requests, r"^[rR][eE][qQ][uU]?[eE]?[sS]?[tT]?[sS]?"),
        (Measure::Packets, r"^[pP][aA]?[cC]?[kK][eE]?[tT][sS]?"),
        (Measure::Events, r"^[eE][vV]?[eE]?[nN][tT][sS]?"),
    ]
    .into_iter()
    .map(|(measure, pattern)| {
        let regex = Regex::new(pattern).expect("measure patterns are valid");
        (measure, regex)
    })
    .collect()
});

impl Measure {
    /// All valid measures, in recognizer try order
    pub const ALL: [Measure; 14] = [
        Measure::Bytes,
        Measure::Flops,
        Measure::Percentage,
        Measure::TemperatureC,
        Measure::TemperatureF,
        Measure::Rotation,
        Measure::Hertz,
        Measure::Time,
        Measure::Cycles,
        Measure::Watt,
        Measure::Joule,
        Measure::Requests,
        Measure::Packets,
        Measure::Events,
    ];

    /// Recognize the measure at the start of `token`.
    ///
    /// Returns [`Measure::Invalid`] when nothing matches.
    pub fn parse(token: &str) -> Measure {
        RECOGNIZERS
            .iter()
            .find(|(_, regex)| regex.is_match(token))
            .map_or(Measure::Invalid, |(measure, _)| *measure)
    }

    pub fn is_valid(self) -> bool {
        self != Measure::Invalid
    }

    /// Long name like "Percent" or "Seconds"
    pub fn long_name(self) -> &'static str {
        match self {
            Measure::Bytes => "byte",
            Measure::Flops => "Flops",
            Measure::Percentage => "Percent",
            Measure::TemperatureC => "DegreeC",
            Measure::TemperatureF => "DegreeF",
            Measure::Rotation => "RPM",
            Measure::Hertz => "Hertz",
            Measure::Time => "Seconds",
            Measure::Watt => "Watts",
            Measure::Joule => "Joules",
            Measure::Cycles => "Cycles",
            Measure::Requests => "Requests",
            Measure::Packets => "Packets",
            Measure::Events => "Events",
            Measure::Invalid => "Invalid",
        }
    }

    /// Short name like "B", "s" or "W". Prefer this over [`long_name`](Self::long_name)
    /// for display; it parses back to the same measure.
    pub fn short_name(self) -> &'static str {
        match self {
            Measure::Bytes => "B",
            Measure::Flops => "Flops",
            Measure::Percentage => "Percent",
            Measure::TemperatureC => "degC",
            Measure::TemperatureF => "degF",
            Measure::Rotation => "RPM",
            Measure::Hertz => "Hz",
            Measure::Time => "s",
            Measure::Watt => "W",
            Measure::Joule => "J",
            Measure::Cycles => "cyc",
            Measure::Requests => "requests",
            Measure::Packets => "packets",
            Measure::Events => "events",
            Measure::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
