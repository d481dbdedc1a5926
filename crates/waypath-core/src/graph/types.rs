use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use std::ops::Add;

/// Capability bound for vertex identifiers: comparable and hashable.
///
/// Blanket-implemented, so any `Clone + Ord + Hash + Debug` type (integers,
/// strings, tuples) can key a [`Graph`](super::Graph).
pub trait VertexId: Clone + Ord + Hash + fmt::Debug {}

impl<T: Clone + Ord + Hash + fmt::Debug> VertexId for T {}

/// An edge weight usable by the shortest-path engine.
///
/// Weights must be non-negative. `is_valid` also rejects values that do not
/// compare against zero at all (NaN) and, for floats, infinities.
pub trait EdgeWeight: Copy + PartialOrd + Add<Output = Self> + fmt::Debug {
    /// The additive identity, used as the source's distance.
    const ZERO: Self;

    fn is_valid(&self) -> bool {
        *self >= Self::ZERO
    }

    /// Sum of two distances, or `None` if it is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_float_weight {
    ($($ty:ty),*) => {
        $(
            impl EdgeWeight for $ty {
                const ZERO: Self = 0.0;

                fn is_valid(&self) -> bool {
                    self.is_finite() && *self >= 0.0
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

macro_rules! impl_int_weight {
    ($($ty:ty),*) => {
        $(
            impl EdgeWeight for $ty {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }
            }
        )*
    };
}

impl_float_weight!(f64, f32);
impl_int_weight!(u32, u64, usize);

/// Shortest known distance from the source.
///
/// `Unreachable` is the "infinite" sentinel. Variant order makes it compare
/// greater than every `Finite` value, so frontier ordering needs no magic
/// numbers. Serializes as the bare weight, or `null` when unreachable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(untagged)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
}

impl<W: Copy> Distance<W> {
    /// The finite value, or `None` for the sentinel
    pub fn finite(&self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl<W> Default for Distance<W> {
    fn default() -> Self {
        Distance::Unreachable
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => w.fmt(f),
            Distance::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Limits for a single shortest-path query.
///
/// The default is unbounded. `max_settled` caps how many vertices may be
/// finalized before the search stops and reports itself as truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub max_settled: Option<usize>,
}

impl SearchOptions {
    pub fn with_max_settled(max_settled: usize) -> Self {
        Self {
            max_settled: Some(max_settled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_orders_after_every_finite_value() {
        assert!(Distance::Finite(f64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(0u32) < Distance::Finite(1u32));
        assert!(Distance::<u64>::Unreachable > Distance::Finite(u64::MAX));
    }

    #[test]
    fn test_distance_accessors() {
        let d = Distance::Finite(2.5f64);
        assert_eq!(d.finite(), Some(2.5));
        assert!(d.is_reachable());

        let u: Distance<f64> = Distance::default();
        assert_eq!(u, Distance::Unreachable);
        assert_eq!(u.finite(), None);
        assert!(!u.is_reachable());
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::Finite(3u32).to_string(), "3");
        assert_eq!(Distance::<u32>::Unreachable.to_string(), "unreachable");
    }

    #[test]
    fn test_distance_serializes_as_number_or_null() {
        let reachable = serde_json::to_value(Distance::Finite(1.5f64)).unwrap();
        assert_eq!(reachable, serde_json::json!(1.5));
        let unreachable = serde_json::to_value(Distance::<f64>::Unreachable).unwrap();
        assert_eq!(unreachable, serde_json::Value::Null);
    }

    #[test]
    fn test_weight_validity() {
        assert!(0.0f64.is_valid());
        assert!(4.2f64.is_valid());
        assert!(!(-0.5f64).is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f32::NEG_INFINITY.is_valid());
        assert!(7u32.is_valid());
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(EdgeWeight::checked_add(2u64, 3), Some(5));
        assert_eq!(EdgeWeight::checked_add(u64::MAX, 1), None);
        assert_eq!(EdgeWeight::checked_add(1.5f64, 2.0), Some(3.5));
        assert_eq!(EdgeWeight::checked_add(f64::MAX, f64::MAX), None);
    }
}
