pub mod array;
pub mod array_error;
pub mod element;
pub mod element_kind;
pub mod ffi;
pub mod growth;
pub mod opaque_ptr;
pub mod runtime;
mod type_conversion;
pub mod typed_array;
