use thiserror::Error;

use crate::element_kind::ElementKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArrayError {
    #[error("cannot allocate {capacity} elements for {kind} array")]
    AllocationFailed { kind: ElementKind, capacity: usize },

    #[error("capacity overflow for {kind} array: {requested} elements requested")]
    CapacityOverflow { kind: ElementKind, requested: usize },

    #[error("array index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    #[error("negative array length: {0}")]
    NegativeLength(i32),

    #[error("negative array index: {0}")]
    NegativeIndex(i32),

    #[error("null {0} array")]
    NullArray(ElementKind),
}

pub type Result<T> = std::result::Result<T, ArrayError>;
