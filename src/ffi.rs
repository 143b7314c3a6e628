//! C ABI entry points called by generated code.
//!
//! Arrays cross the boundary as opaque pointers obtained from the `make_*` functions.
//! The signatures have no error channel, so any error (negative length, index out of
//! bounds, allocation failure, null handle) is logged and aborts the process.

use std::ffi::c_void;

use log::error;

use crate::{
    array::Array,
    array_error::{ArrayError, Result},
    element::Element,
    opaque_ptr::OpaquePtr,
    runtime,
    type_conversion::{FromAbiInt, ToAbiInt},
    typed_array::{BoolArray, DoubleArray, IntArray, PtrArray, TypedArray},
};

fn or_abort<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!("fatal runtime error: {err}");
            eprintln!("fatal runtime error: {err}");
            std::process::abort()
        }
    }
}

fn make_array<T: Element>(length: i32, fill: T) -> *mut TypedArray<T> {
    let array = or_abort(length.into_length().and_then(|length| TypedArray::new(length, fill)));
    Box::into_raw(Box::new(array))
}

/// # Safety
/// `array` must be null or a live pointer returned by the matching `make_*` function
unsafe fn array_ref<'a, T: Element>(array: *const TypedArray<T>) -> &'a TypedArray<T> {
    match array.as_ref() {
        Some(array) => array,
        None => or_abort(Err(ArrayError::NullArray(T::KIND))),
    }
}

/// # Safety
/// `array` must be null or a live pointer returned by the matching `make_*` function,
/// not aliased by any other reference for the duration of the call
unsafe fn array_mut<'a, T: Element>(array: *mut TypedArray<T>) -> &'a mut TypedArray<T> {
    match array.as_mut() {
        Some(array) => array,
        None => or_abort(Err(ArrayError::NullArray(T::KIND))),
    }
}

unsafe fn push<T: Element>(array: *mut TypedArray<T>, value: T) {
    or_abort(array_mut(array).push(value))
}

unsafe fn get<T: Element>(array: *const TypedArray<T>, index: i32) -> T {
    or_abort(index.into_index().and_then(|index| array_ref(array).get(index)))
}

unsafe fn put<T: Element>(array: *mut TypedArray<T>, index: i32, value: T) {
    or_abort(
        index
            .into_index()
            .and_then(|index| array_mut(array).put(index, value)),
    )
}

unsafe fn length<T: Element>(array: *const TypedArray<T>) -> i32 {
    array_ref(array).len().into_abi_int()
}

unsafe fn free<T: Element>(array: *mut TypedArray<T>) {
    if !array.is_null() {
        drop(Box::from_raw(array));
    }
}

fn bool_from_byte(value: u8) -> bool {
    value != 0
}

/// Installs the logger. Safe to call more than once.
#[no_mangle]
pub extern "C" fn runtime_init() {
    let _ = runtime::init_logging();
}

// Construction

#[no_mangle]
pub extern "C" fn make_int_array(length: i32, init_value: i32) -> *mut IntArray {
    make_array(length, init_value)
}

#[no_mangle]
pub extern "C" fn make_double_array(length: i32, init_value: f64) -> *mut DoubleArray {
    make_array(length, init_value)
}

#[no_mangle]
pub extern "C" fn make_bool_array(length: i32, init_value: u8) -> *mut BoolArray {
    make_array(length, bool_from_byte(init_value))
}

/// The returned array has no spare capacity: its first push always grows it
#[no_mangle]
pub extern "C" fn make_ptr_array(length: i32, init_value: *mut c_void) -> *mut PtrArray {
    make_array(length, OpaquePtr::from(init_value))
}

// Length

/// # Safety
/// `arr` must be a live pointer returned by [make_int_array]
#[no_mangle]
pub unsafe extern "C" fn array_int_length(arr: *const IntArray) -> i32 {
    length(arr)
}

/// # Safety
/// `arr` must be a live pointer returned by [make_double_array]
#[no_mangle]
pub unsafe extern "C" fn array_double_length(arr: *const DoubleArray) -> i32 {
    length(arr)
}

/// # Safety
/// `arr` must be a live pointer returned by [make_bool_array]
#[no_mangle]
pub unsafe extern "C" fn array_bool_length(arr: *const BoolArray) -> i32 {
    length(arr)
}

/// # Safety
/// `arr` must be a live pointer returned by [make_ptr_array]
#[no_mangle]
pub unsafe extern "C" fn array_ptr_length(arr: *const PtrArray) -> i32 {
    length(arr)
}

// Push

/// # Safety
/// `arr` must be a live pointer returned by [make_int_array]
#[no_mangle]
pub unsafe extern "C" fn array_int_push(arr: *mut IntArray, value: i32) {
    push(arr, value)
}

/// # Safety
/// `arr` must be a live pointer returned by [make_double_array]
#[no_mangle]
pub unsafe extern "C" fn array_double_push(arr: *mut DoubleArray, value: f64) {
    push(arr, value)
}

/// # Safety
/// `arr` must be a live pointer returned by [make_bool_array]
#[no_mangle]
pub unsafe extern "C" fn array_bool_push(arr: *mut BoolArray, value: u8) {
    push(arr, bool_from_byte(value))
}

/// # Safety
/// `arr` must be a live pointer returned by [make_ptr_array]. The pointee of `value`
/// is not owned by the array.
#[no_mangle]
pub unsafe extern "C" fn array_ptr_push(arr: *mut PtrArray, value: *mut c_void) {
    push(arr, OpaquePtr::from(value))
}

// Get

/// # Safety
/// `arr` must be a live pointer returned by [make_int_array]
#[no_mangle]
pub unsafe extern "C" fn array_int_get(arr: *const IntArray, index: i32) -> i32 {
    get(arr, index)
}

/// # Safety
/// `arr` must be a live pointer returned by [make_double_array]
#[no_mangle]
pub unsafe extern "C" fn array_double_get(arr: *const DoubleArray, index: i32) -> f64 {
    get(arr, index)
}

/// Returns 1 for true and 0 for false.
///
/// # Safety
/// `arr` must be a live pointer returned by [make_bool_array]
#[no_mangle]
pub unsafe extern "C" fn array_bool_get(arr: *const BoolArray, index: i32) -> u8 {
    u8::from(get(arr, index))
}

/// # Safety
/// `arr` must be a live pointer returned by [make_ptr_array]
#[no_mangle]
pub unsafe extern "C" fn array_ptr_get(arr: *const PtrArray, index: i32) -> *mut c_void {
    get(arr, index).as_raw()
}

// Put

/// # Safety
/// `arr` must be a live pointer returned by [make_int_array]
#[no_mangle]
pub unsafe extern "C" fn array_int_put(arr: *mut IntArray, index: i32, value: i32) {
    put(arr, index, value)
}

/// # Safety
/// `arr` must be a live pointer returned by [make_double_array]
#[no_mangle]
pub unsafe extern "C" fn array_double_put(arr: *mut DoubleArray, index: i32, value: f64) {
    put(arr, index, value)
}

/// # Safety
/// `arr` must be a live pointer returned by [make_bool_array]
#[no_mangle]
pub unsafe extern "C" fn array_bool_put(arr: *mut BoolArray, index: i32, value: u8) {
    put(arr, index, bool_from_byte(value))
}

/// # Safety
/// `arr` must be a live pointer returned by [make_ptr_array]
#[no_mangle]
pub unsafe extern "C" fn array_ptr_put(arr: *mut PtrArray, index: i32, value: *mut c_void) {
    put(arr, index, OpaquePtr::from(value))
}

// Release

/// Releases the array's buffer. Null is ignored.
///
/// # Safety
/// `arr` must be null or a live pointer returned by [make_int_array], and must not
/// be used afterwards
#[no_mangle]
pub unsafe extern "C" fn free_int_array(arr: *mut IntArray) {
    free(arr)
}

/// # Safety
/// `arr` must be null or a live pointer returned by [make_double_array], and must
/// not be used afterwards
#[no_mangle]
pub unsafe extern "C" fn free_double_array(arr: *mut DoubleArray) {
    free(arr)
}

/// # Safety
/// `arr` must be null or a live pointer returned by [make_bool_array], and must not
/// be used afterwards
#[no_mangle]
pub unsafe extern "C" fn free_bool_array(arr: *mut BoolArray) {
    free(arr)
}

/// Releases the buffer of pointers; the pointees are left untouched.
///
/// # Safety
/// `arr` must be null or a live pointer returned by [make_ptr_array], and must not
/// be used afterwards
#[no_mangle]
pub unsafe extern "C" fn free_ptr_array(arr: *mut PtrArray) {
    free(arr)
}
