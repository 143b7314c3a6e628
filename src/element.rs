use std::fmt::{Debug, Display};

use crate::{element_kind::ElementKind, growth::InitialCapacity, opaque_ptr::OpaquePtr};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
    impl Sealed for crate::opaque_ptr::OpaquePtr {}
}

/// A type that can be stored in a [crate::typed_array::TypedArray].
/// Implemented for exactly the four element kinds and cannot be implemented elsewhere.
pub trait Element: Copy + PartialEq + Debug + Display + sealed::Sealed {
    const KIND: ElementKind;

    const INITIAL_CAPACITY: InitialCapacity;
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Int;
    const INITIAL_CAPACITY: InitialCapacity = InitialCapacity::Headroom;
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Double;
    const INITIAL_CAPACITY: InitialCapacity = InitialCapacity::Headroom;
}

impl Element for bool {
    const KIND: ElementKind = ElementKind::Bool;
    const INITIAL_CAPACITY: InitialCapacity = InitialCapacity::Headroom;
}

// Pointer arrays get no headroom at construction.
impl Element for OpaquePtr {
    const KIND: ElementKind = ElementKind::Ptr;
    const INITIAL_CAPACITY: InitialCapacity = InitialCapacity::Exact;
}
