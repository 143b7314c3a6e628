use std::{
    ffi::c_void,
    fmt::{Display, Formatter},
};

/// A pointer whose pointee type and lifetime belong to the caller. Arrays of these
/// own the buffer of pointers, never the pointees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct OpaquePtr(*mut c_void);

impl OpaquePtr {
    pub const fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    pub fn as_raw(self) -> *mut c_void {
        self.0
    }
}

impl Default for OpaquePtr {
    fn default() -> Self {
        Self::null()
    }
}

impl From<*mut c_void> for OpaquePtr {
    fn from(ptr: *mut c_void) -> Self {
        Self(ptr)
    }
}

impl From<OpaquePtr> for *mut c_void {
    fn from(ptr: OpaquePtr) -> Self {
        ptr.0
    }
}

impl Display for OpaquePtr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#0x}", self.0 as usize)
    }
}
