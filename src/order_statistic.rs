/// A zero-based rank into the sorted order of a set.
///
/// # Examples
///
/// ```
/// use wbtree::{Rank, SortedSet};
///
/// let set = SortedSet::from(["a", "b"]);
///
/// assert_eq!(set[Rank(1)], "b");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);

/// Conversion of a caller-supplied position into a rank.
///
/// Positional lookups accept any primitive number. Values that cannot name a
/// slot in a sorted sequence (negative numbers, fractions, `NaN`, infinities,
/// values beyond `usize::MAX`) convert to `None`, which the lookups treat as
/// "absent" rather than as an error.
///
/// # Examples
///
/// ```
/// use wbtree::RankIndex;
///
/// assert_eq!(3_i64.to_rank(), Some(3));
/// assert_eq!((-1_i32).to_rank(), None);
/// assert_eq!(2.0_f64.to_rank(), Some(2));
/// assert_eq!(2.5_f64.to_rank(), None);
/// assert_eq!(f64::NAN.to_rank(), None);
/// assert_eq!(f64::INFINITY.to_rank(), None);
/// ```
pub trait RankIndex {
    /// Returns the rank this value names, if any.
    fn to_rank(self) -> Option<usize>;
}

impl RankIndex for Rank {
    #[inline]
    fn to_rank(self) -> Option<usize> {
        Some(self.0)
    }
}

impl RankIndex for usize {
    #[inline]
    fn to_rank(self) -> Option<usize> {
        Some(self)
    }
}

macro_rules! integer_rank_index {
    ($($int:ty),* $(,)?) => {
        $(
            impl RankIndex for $int {
                #[inline]
                fn to_rank(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

integer_rank_index!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, isize);

// 2^53: past this an `f64` no longer represents every integer.
const F64_EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

impl RankIndex for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss, clippy::float_cmp)]
    fn to_rank(self) -> Option<usize> {
        if self.is_nan() || self < 0.0 || self > F64_EXACT_LIMIT {
            return None;
        }
        let whole = self as u64;
        if whole as f64 != self {
            return None;
        }
        usize::try_from(whole).ok()
    }
}

impl RankIndex for f32 {
    #[inline]
    fn to_rank(self) -> Option<usize> {
        f64::from(self).to_rank()
    }
}
