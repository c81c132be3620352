//! Request handling: one whitespace-separated command per line

use std::fmt;

use ccunits::{unit_string_prefix_string_factor, unit_unit_factor, Conversion, Prefix, Unit, UnitError};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

const COMMANDS: [&str; 5] = [
    "parse <unit>",
    "convert <value> <from-unit> <to-unit>",
    "prefix <value> <unit> <prefix>",
    "help",
    "quit",
];

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// A metric value as written on the command line. Integer literals stay
/// integers through conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn parse(s: &str) -> Result<Self, RequestError> {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        s.parse::<f64>()
            .map(Number::Float)
            .map_err(|_| RequestError::InvalidNumber(s.to_string()))
    }

    fn convert(self, conversion: Conversion) -> Self {
        match self {
            Number::Int(i) => Number::Int(conversion.apply(i)),
            Number::Float(f) => Number::Float(conversion.apply(f)),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Parsed {
        input: String,
        valid: bool,
        unit: Unit,
        short: String,
        long: String,
    },
    Converted {
        value: Number,
        unit: String,
    },
    Help {
        commands: &'static [&'static str],
    },
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Parsed { input, valid: true, short, long, .. } => {
                write!(f, "{} -> {} ({})", input, short, long)
            }
            Response::Parsed { input, valid: false, .. } => write!(f, "{} -> invalid", input),
            Response::Converted { value, unit } => write!(f, "{} {}", value, unit),
            Response::Help { commands } => write!(f, "{}", commands.join("\n")),
        }
    }
}

/// Handle one input line. `Ok(None)` asks the caller to stop.
pub fn handle_line(line: &str) -> Result<Option<Response>, RequestError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    debug!(?words, "request");

    let response = match words.as_slice() {
        ["quit"] | ["exit"] => return Ok(None),
        ["help"] => Response::Help { commands: &COMMANDS },
        ["parse", unit] => parse(unit),
        ["parse", ..] => return Err(RequestError::Usage(COMMANDS[0])),
        ["convert", value, from, to] => convert(value, from, to)?,
        ["convert", ..] => return Err(RequestError::Usage(COMMANDS[1])),
        ["prefix", value, unit, prefix] => rescale(value, unit, prefix)?,
        ["prefix", ..] => return Err(RequestError::Usage(COMMANDS[2])),
        [command, ..] => return Err(RequestError::UnknownCommand(command.to_string())),
        [] => return Err(RequestError::Usage("help")),
    };
    Ok(Some(response))
}

fn parse(input: &str) -> Response {
    let unit = Unit::new(input);
    Response::Parsed {
        input: input.to_string(),
        valid: unit.is_valid(),
        unit,
        short: unit.short_name(),
        long: unit.long_name(),
    }
}

fn convert(value: &str, from: &str, to: &str) -> Result<Response, RequestError> {
    let value = Number::parse(value)?;
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;
    let conversion = unit_unit_factor(&from, &to)?;
    Ok(Response::Converted {
        value: value.convert(conversion),
        unit: to.short_name(),
    })
}

fn rescale(value: &str, unit: &str, prefix: &str) -> Result<Response, RequestError> {
    let value = Number::parse(value)?;
    if !Prefix::parse(prefix).is_valid() {
        return Err(UnitError::InvalidPrefix(prefix.to_string()).into());
    }
    let (conversion, out_unit) = unit_string_prefix_string_factor(unit, prefix);
    if !out_unit.is_valid() {
        return Err(UnitError::InvalidUnit(unit.to_string()).into());
    }
    Ok(Response::Converted {
        value: value.convert(conversion),
        unit: out_unit.short_name(),
    })
}
