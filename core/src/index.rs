//! Index validation shared by every positional list operation
//!
//! Callers may address a list with any primitive numeric type. Conversion to
//! a position rejects negative values and, for floats, anything that is not
//! a finite whole number. Bounds are checked by
//! [`ItemList::validate_index`](crate::ItemList::validate_index).

use std::fmt;

/// A value that can address a position in an [`ItemList`](crate::ItemList)
pub trait ListIndex: Copy + fmt::Display {
    /// Returns the zero-based position this value denotes, or `None` if the
    /// value cannot denote any position.
    fn position(self) -> Option<usize>;
}

macro_rules! integer_index {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ListIndex for $ty {
                fn position(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

integer_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl ListIndex for f64 {
    #[allow(
        clippy::float_cmp,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn position(self) -> Option<usize> {
        let whole = self.is_finite() && self.trunc() == self;
        if whole && self >= 0.0 && self <= usize::MAX as f64 {
            Some(self as usize)
        } else {
            None
        }
    }
}

impl ListIndex for f32 {
    fn position(self) -> Option<usize> {
        f64::from(self).position()
    }
}
