//! Element types an adjacency matrix can hold.

use std::fmt;

/// A cell value of an [`AdjacencyMatrix`](crate::matrix::AdjacencyMatrix).
///
/// The ratchet seeds are the starting points of the running extrema: every
/// value of the type compares `>=` to `RATCHET_MAX_SEED` and `<=` to
/// `RATCHET_MIN_SEED`, so the first write always moves both.
pub trait Weight: Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Fill value used when a matrix is resized without an explicit one.
    const ZERO: Self;
    /// Initial value of the running maximum.
    const RATCHET_MAX_SEED: Self;
    /// Initial value of the running minimum.
    const RATCHET_MIN_SEED: Self;

    /// Convert from the `f64` the text format is parsed as. Integer types
    /// truncate toward zero and saturate, `bool` is `value != 0`.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Render a single cell for the text format and the row printer.
    fn fmt_cell(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;
                const RATCHET_MAX_SEED: Self = <$t>::NEG_INFINITY;
                const RATCHET_MIN_SEED: Self = <$t>::INFINITY;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const RATCHET_MAX_SEED: Self = <$t>::MIN;
                const RATCHET_MIN_SEED: Self = <$t>::MAX;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);
impl_int_weight!(i32, i64, u32, u64, usize);

impl Weight for bool {
    const ZERO: Self = false;
    const RATCHET_MAX_SEED: Self = false;
    const RATCHET_MIN_SEED: Self = true;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value != 0.0
    }

    #[inline]
    fn to_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }

    fn fmt_cell(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Adapter that formats a weight through [`Weight::fmt_cell`].
#[derive(Debug, Clone, Copy)]
pub struct Cell<W>(pub W);

impl<W: Weight> fmt::Display for Cell<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_cell(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_conversion_truncates() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(u32::from_f64(-1.0), 0);
    }

    #[test]
    fn test_bool_conversion() {
        assert!(bool::from_f64(0.5));
        assert!(!bool::from_f64(0.0));
        assert_eq!(true.to_f64(), 1.0);
    }

    #[test]
    fn test_seeds_bound_every_value() {
        assert!(f64::RATCHET_MAX_SEED < f64::MIN);
        assert!(f64::RATCHET_MIN_SEED > f64::MAX);
        assert_eq!(i32::RATCHET_MAX_SEED, i32::MIN);
        assert_eq!(i32::RATCHET_MIN_SEED, i32::MAX);
    }

    #[test]
    fn test_cell_formatting() {
        assert_eq!(Cell(true).to_string(), "1");
        assert_eq!(Cell(false).to_string(), "0");
        assert_eq!(Cell(0.6_f64).to_string(), "0.6");
        assert_eq!(Cell(999_i32).to_string(), "999");
    }
}
