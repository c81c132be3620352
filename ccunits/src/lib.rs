//! ccunits - Measurement units for metrics
//!
//! Parses free-form unit spellings from monitoring data ("MB/s", "GHz",
//! "%", "degC") into a structured [`Unit`] and builds conversions between
//! units and prefixes.
//!
//! Measures:
//! - Bytes, Flops, Cycles, Requests, Packets, Events (counts and capacity)
//! - Percentage
//! - Temperature (degC, degF)
//! - Rotation (RPM), Frequency (Hz)
//! - Time (s)
//! - Power (W), Energy (J)
//!
//! Unrecognized spellings never error: they produce `Invalid` sentinels.
//! Only unit-to-unit conversion reports an explicit [`UnitError`].

mod measure;
mod prefix;
mod unit;
mod convert;
mod scalar;
mod error;

pub use measure::Measure;
pub use prefix::Prefix;
pub use unit::Unit;
pub use convert::{
    Conversion,
    prefix_factor, prefix_factor_by_name,
    unit_prefix_factor, unit_prefix_factor_by_name, unit_string_prefix_string_factor,
    unit_unit_factor, unit_unit_factor_by_name,
};
pub use scalar::Scalar;
pub use error::UnitError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Conversion, Measure, Prefix, Unit, UnitError};
}
