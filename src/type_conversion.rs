use crate::array_error::{ArrayError, Result};

/// Conversions for the `i32` lengths and indices the compiled language passes in
pub trait FromAbiInt {
    fn into_length(self) -> Result<usize>;

    fn into_index(self) -> Result<usize>;
}

impl FromAbiInt for i32 {
    fn into_length(self) -> Result<usize> {
        usize::try_from(self).map_err(|_| ArrayError::NegativeLength(self))
    }

    fn into_index(self) -> Result<usize> {
        usize::try_from(self).map_err(|_| ArrayError::NegativeIndex(self))
    }
}

pub trait ToAbiInt {
    fn into_abi_int(self) -> i32;
}

impl ToAbiInt for usize {
    fn into_abi_int(self) -> i32 {
        i32::try_from(self).expect("array lengths are bounded by MAX_CAPACITY")
    }
}
