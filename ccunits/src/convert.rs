//! Conversion factors between prefixes and units
//!
//! Builders return a [`Conversion`], a small value describing the
//! transformation. Applying it keeps the caller's numeric representation:
//! integers go through an `f64` intermediate and come back as the same
//! integer type, floats keep their width.

use tracing::debug;

use crate::{Measure, Prefix, Scalar, Unit, UnitError};

/// A value-transforming function between two units or prefixes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// Leaves values untouched
    Identity,
    /// `value * (from / to)`, the ratio of two prefix scales
    Scale { from: f64, to: f64 },
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl Conversion {
    /// Apply the conversion to one value
    pub fn apply<T: Scalar>(&self, value: T) -> T {
        let v = value.to_f64();
        let converted = match *self {
            Conversion::Identity => return value,
            // Integers multiply first so whole-number results stay exact; the
            // largest integer times the largest scale is far below f64::MAX
            Conversion::Scale { from, to } if T::INTEGER => v * from / to,
            Conversion::Scale { from, to } => v * (from / to),
            Conversion::CelsiusToFahrenheit => v * 1.8 + 32.0,
            Conversion::FahrenheitToCelsius => (v - 32.0) / 1.8,
        };
        T::from_f64(converted)
    }

    /// The multiplicative factor, if the conversion is purely multiplicative
    pub fn factor(&self) -> Option<f64> {
        match *self {
            Conversion::Identity => Some(1.0),
            Conversion::Scale { from, to } => Some(from / to),
            Conversion::CelsiusToFahrenheit | Conversion::FahrenheitToCelsius => None,
        }
    }

    /// The conversion as a closure over one numeric type
    pub fn into_fn<T: Scalar>(self) -> impl Fn(T) -> T {
        move |value| self.apply(value)
    }
}

// ========== Prefix to prefix ==========

/// Conversion from values in `in_prefix` to values in `out_prefix`.
///
/// An invalid prefix has no scale; the result is then [`Conversion::Identity`].
pub fn prefix_factor(in_prefix: Prefix, out_prefix: Prefix) -> Conversion {
    match (in_prefix.scale(), out_prefix.scale()) {
        (Some(from), Some(to)) => Conversion::Scale { from, to },
        _ => {
            debug!(?in_prefix, ?out_prefix, "no scale for invalid prefix");
            Conversion::Identity
        }
    }
}

/// [`prefix_factor`] for prefix spellings like "K" or "Gi"
pub fn prefix_factor_by_name(in_prefix: &str, out_prefix: &str) -> Conversion {
    prefix_factor(Prefix::parse(in_prefix), Prefix::parse(out_prefix))
}

// ========== Unit to prefix ==========

/// Rescale `in_unit` to `out_prefix`, keeping its measure and denominator.
///
/// Returns the conversion together with the rescaled unit. If `in_unit`
/// (or the rescaled unit) is not valid the pair is
/// `(Conversion::Identity, Unit::INVALID)`.
pub fn unit_prefix_factor(in_unit: &Unit, out_prefix: Prefix) -> (Conversion, Unit) {
    // Re-parse the short form to get a clean measure and denominator
    let mut out_unit = Unit::new(&in_unit.short_name());
    if !out_unit.is_valid() || !out_prefix.is_valid() {
        debug!(unit = %in_unit, ?out_prefix, "cannot rescale unit");
        return (Conversion::Identity, Unit::INVALID);
    }
    out_unit.set_prefix(out_prefix);
    (prefix_factor(in_unit.prefix(), out_prefix), out_unit)
}

/// [`unit_prefix_factor`] for a prefix spelling
pub fn unit_prefix_factor_by_name(in_unit: &Unit, out_prefix: &str) -> (Conversion, Unit) {
    unit_prefix_factor(in_unit, Prefix::parse(out_prefix))
}

/// [`unit_prefix_factor`] for a unit spelling and a prefix spelling
pub fn unit_string_prefix_string_factor(in_unit: &str, out_prefix: &str) -> (Conversion, Unit) {
    unit_prefix_factor_by_name(&Unit::new(in_unit), out_prefix)
}

// ========== Unit to unit ==========

/// Conversion from values in `in_unit` to values in `out_unit`.
///
/// Celsius and Fahrenheit convert into each other regardless of prefix.
/// Otherwise measure and denominator must match and only the prefixes are
/// scaled. On error, [`UnitError::fallback`] is the inert conversion.
pub fn unit_unit_factor(in_unit: &Unit, out_unit: &Unit) -> Result<Conversion, UnitError> {
    if !in_unit.is_valid() {
        return Err(UnitError::InvalidUnit(in_unit.to_string()));
    }
    if !out_unit.is_valid() {
        return Err(UnitError::InvalidUnit(out_unit.to_string()));
    }

    match (in_unit.measure(), out_unit.measure()) {
        (Measure::TemperatureC, Measure::TemperatureF) => Ok(Conversion::CelsiusToFahrenheit),
        (Measure::TemperatureF, Measure::TemperatureC) => Ok(Conversion::FahrenheitToCelsius),
        (from, to) if from != to || in_unit.denominator() != out_unit.denominator() => {
            debug!(from = %in_unit, to = %out_unit, "incompatible measures");
            Err(UnitError::IncompatibleMeasures {
                from: in_unit.to_string(),
                to: out_unit.to_string(),
            })
        }
        _ => Ok(prefix_factor(in_unit.prefix(), out_unit.prefix())),
    }
}

/// [`unit_unit_factor`] for two unit spellings
pub fn unit_unit_factor_by_name(in_unit: &str, out_unit: &str) -> Result<Conversion, UnitError> {
    unit_unit_factor(&Unit::new(in_unit), &Unit::new(out_unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * b.abs().max(1.0)
    }

    #[test]
    fn test_prefix_factor() {
        let conv = prefix_factor(Prefix::Kilo, Prefix::Base);
        assert_eq!(conv.apply(5i64), 5000);
        assert_eq!(conv.factor(), Some(1000.0));

        let conv = prefix_factor(Prefix::Base, Prefix::Kibi);
        assert_eq!(conv.apply(2048u32), 2);
        assert_eq!(conv.apply(1.0f64), 1.0 / 1024.0);
    }

    #[test]
    fn test_prefix_factor_by_name() {
        assert_eq!(prefix_factor_by_name("Gi", "Mi").apply(3u64), 3072);
        assert_eq!(prefix_factor_by_name("", "m").apply(2i32), 2000);
        assert_eq!(prefix_factor_by_name("bogus", "K"), Conversion::Identity);
    }

    #[test]
    fn test_representation_preserved() {
        let conv = prefix_factor(Prefix::Tera, Prefix::Kilo);
        let big: u64 = 123_456_789;
        assert_eq!(conv.apply(big), 123_456_789_000_000_000);
        let f: f32 = conv.apply(1.5f32);
        assert_eq!(f, 1.5e9f32);
    }

    #[test]
    fn test_kilobytes_to_gigabytes() {
        let conv = unit_unit_factor(&Unit::new("KB"), &Unit::new("GB")).unwrap();
        assert_eq!(conv.apply(1_000_000i64), 1);
        assert_eq!(conv.apply(1_000_000_000i64), 1000);
        for x in [1.0f64, 2.5, 4.11, 12345.678, 1e12] {
            assert_eq!(conv.apply(x), x * 1e-6, "{}", x);
        }
        for i in 1..10_000 {
            let x = f64::from(i) * 1.37;
            assert_eq!(conv.apply(x), x * 1e-6, "{}", x);
        }
    }

    #[test]
    fn test_temperature() {
        let c2f = unit_unit_factor(&Unit::new("degC"), &Unit::new("degF")).unwrap();
        let f2c = unit_unit_factor(&Unit::new("degF"), &Unit::new("degC")).unwrap();
        assert_eq!(c2f.apply(0i32), 32);
        assert_eq!(f2c.apply(32i32), 0);
        assert!(approx(c2f.apply(100.0f64), 212.0));
        assert!(approx(f2c.apply(-40.0f64), -40.0));
        assert_eq!(c2f.factor(), None);
    }

    #[test]
    fn test_incompatible_measures() {
        let err = unit_unit_factor(&Unit::new("KB"), &Unit::new("Hz")).unwrap_err();
        assert_eq!(
            err,
            UnitError::IncompatibleMeasures { from: "KB".to_string(), to: "Hz".to_string() }
        );
        assert_eq!(err.fallback(), Conversion::Identity);
    }

    #[test]
    fn test_incompatible_denominators() {
        assert!(unit_unit_factor_by_name("MB/s", "MB").is_err());
        assert!(unit_unit_factor_by_name("MB/s", "KB/s").is_ok());
    }

    #[test]
    fn test_invalid_units_rejected() {
        let err = unit_unit_factor_by_name("xyz", "KB").unwrap_err();
        assert!(matches!(err, UnitError::InvalidUnit(_)));
    }

    #[test]
    fn test_unit_prefix_factor() {
        let (conv, unit) = unit_prefix_factor(&Unit::new("KB/s"), Prefix::Mega);
        assert_eq!(unit, Unit::new("MB/s"));
        assert_eq!(conv.apply(3000i64), 3);

        let (conv, unit) = unit_string_prefix_string_factor("GiB", "Mi");
        assert_eq!(unit.short_name(), "MiB");
        assert_eq!(conv.apply(2u64), 2048);
    }

    #[test]
    fn test_unit_prefix_factor_round_trip() {
        for (s, prefix) in [("GB/s", Prefix::Kilo), ("%", Prefix::Base), ("s", Prefix::Milli), ("packets", Prefix::Kilo)] {
            let (_, unit) = unit_prefix_factor(&Unit::new(s), prefix);
            assert!(unit.is_valid(), "{:?}", s);
            let reparsed = Unit::new(&unit.short_name());
            assert_eq!(
                (reparsed.prefix(), reparsed.measure(), reparsed.denominator()),
                (unit.prefix(), unit.measure(), unit.denominator()),
                "{:?}",
                s
            );
        }
    }

    #[test]
    fn test_same_prefix_no_overflow() {
        let conv = prefix_factor(Prefix::Yotta, Prefix::Yotta);
        assert_eq!(conv.apply(1e290f64), 1e290);
        assert_eq!(conv.apply(f32::MAX), f32::MAX);
        assert_eq!(conv.apply(i64::MAX), i64::MAX);
        assert_eq!(prefix_factor(Prefix::Yotta, Prefix::Kilo).apply(1e280f64), 1e280 * 1e21);
    }

    #[test]
    fn test_unit_prefix_factor_outside_grammar() {
        // milli on a count re-reads as mega
        let (_, unit) = unit_prefix_factor(&Unit::new("KB"), Prefix::Milli);
        assert_eq!(unit.short_name(), "mB");
        assert_eq!(Unit::new(&unit.short_name()).prefix(), Prefix::Mega);

        // "u", "E" and binary letters above "Ti" are not prefix letters
        for (s, prefix) in [("s", Prefix::Micro), ("KB", Prefix::Exa), ("Hz", Prefix::Nano), ("GiB", Prefix::Pebi)] {
            let (_, unit) = unit_prefix_factor(&Unit::new(s), prefix);
            assert!(unit.is_valid(), "{:?}", s);
            assert_eq!(Unit::new(&unit.short_name()), Unit::INVALID, "{:?}", unit.short_name());
        }
    }

    #[test]
    fn test_unit_prefix_factor_invalid() {
        assert_eq!(unit_prefix_factor(&Unit::INVALID, Prefix::Kilo), (Conversion::Identity, Unit::INVALID));
        assert_eq!(unit_prefix_factor_by_name(&Unit::new("KB"), "mi"), (Conversion::Identity, Unit::INVALID));
    }

    #[test]
    fn test_into_fn() {
        let f = prefix_factor(Prefix::Mega, Prefix::Kilo).into_fn::<i64>();
        assert_eq!(f(7), 7000);
    }
}
