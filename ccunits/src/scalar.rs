//! Numeric representations accepted by conversions
//!
//! Every conversion runs through an `f64` intermediate and is cast back to
//! the caller's type, so an `i64` byte counter stays an `i64` and an `f32`
//! stays an `f32`.

use num_traits::AsPrimitive;

/// A primitive number a [`Conversion`](crate::Conversion) can be applied to
pub trait Scalar: Copy {
    /// Whole-number type; conversions may reorder arithmetic to stay exact
    const INTEGER: bool;

    fn to_f64(self) -> f64;

    /// Cast back from the intermediate. Integers truncate toward zero and
    /// saturate at their bounds; NaN becomes zero.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_scalar {
    ($integer:literal: $($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                const INTEGER: bool = $integer;

                #[inline]
                fn to_f64(self) -> f64 {
                    self.as_()
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value.as_()
                }
            }
        )*
    };
}

impl_scalar!(true: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar!(false: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_cast_truncates() {
        assert_eq!(i64::from_f64(2.9), 2);
        assert_eq!(i64::from_f64(-2.9), -2);
    }

    #[test]
    fn test_integer_cast_saturates() {
        assert_eq!(u8::from_f64(300.0), u8::MAX);
        assert_eq!(u32::from_f64(-1.0), 0);
        assert_eq!(i32::from_f64(f64::NAN), 0);
    }

    #[test]
    fn test_float_width_kept() {
        let v: f32 = f32::from_f64(0.5f32.to_f64() * 3.0);
        assert_eq!(v, 1.5f32);
    }

    #[test]
    fn test_integer_flag() {
        assert!(i64::INTEGER && u8::INTEGER);
        assert!(!f32::INTEGER && !f64::INTEGER);
    }

    #[test]
    fn test_large_integer_exact() {
        let v = 1_000_000_000_000i64;
        assert_eq!(i64::from_f64(v.to_f64()), v);
    }
}
