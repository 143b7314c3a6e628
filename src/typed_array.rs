use std::fmt::{Debug, Formatter};

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    array::Array,
    array_error::{ArrayError, Result},
    element::Element,
    element_kind::ElementKind,
    growth::grown_capacity,
    opaque_ptr::OpaquePtr,
};

pub type IntArray = TypedArray<i32>;
pub type DoubleArray = TypedArray<f64>;
pub type BoolArray = TypedArray<bool>;
pub type PtrArray = TypedArray<OpaquePtr>;

/// A growable array of one element kind.
///
/// `capacity` is tracked separately from the buffer, so that the growth law is
/// exactly `capacity * 2 + 1` regardless of what the allocator hands back.
/// The buffer always has room for at least `capacity` elements.
pub struct TypedArray<T: Element> {
    data: Vec<T>,
    capacity: usize,
}

impl<T: Element> TypedArray<T> {
    /// Creates an array containing `length` copies of `fill`
    pub fn new(length: usize, fill: T) -> Result<Self> {
        let capacity = T::INITIAL_CAPACITY.capacity_for(length).ok_or(
            ArrayError::CapacityOverflow {
                kind: T::KIND,
                requested: T::INITIAL_CAPACITY.requested_for(length),
            },
        )?;

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ArrayError::AllocationFailed {
                kind: T::KIND,
                capacity,
            })?;
        data.resize(length, fill);

        debug!(
            "allocated {} array: length {} capacity {} ({} bytes)",
            T::KIND,
            length,
            capacity,
            capacity * std::mem::size_of::<T>()
        );
        Ok(Self { data, capacity })
    }

    /// Appends `value`, growing the buffer first if it is full
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.data.len() >= self.capacity {
            self.grow()?;
        }
        trace!("push {} at index {}", value, self.data.len());
        self.data.push(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = grown_capacity(self.capacity).ok_or(ArrayError::CapacityOverflow {
            kind: T::KIND,
            requested: self.capacity.saturating_mul(2).saturating_add(1),
        })?;

        let additional = new_capacity - self.data.len();
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| ArrayError::AllocationFailed {
                kind: T::KIND,
                capacity: new_capacity,
            })?;

        debug!(
            "growing {} array from capacity {} to {}",
            T::KIND,
            self.capacity,
            new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Errors will be returned if the index is not in `[0, len)`
    pub fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Errors will be returned if the index is not in `[0, len)`
    pub fn put(&mut self, index: usize, value: T) -> Result<()> {
        let length = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ArrayError::IndexOutOfBounds { index, length }),
        }
    }

    /// Reads an element without checking the index.
    ///
    /// # Safety
    /// The caller must guarantee `index < self.len()`
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        debug_assert!(index < self.data.len());
        *self.data.get_unchecked(index)
    }

    /// Writes an element without checking the index.
    ///
    /// # Safety
    /// The caller must guarantee `index < self.len()`
    pub unsafe fn put_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index < self.data.len());
        *self.data.get_unchecked_mut(index) = value;
    }

    fn out_of_bounds(&self, index: usize) -> ArrayError {
        ArrayError::IndexOutOfBounds {
            index,
            length: self.data.len(),
        }
    }
}

impl<T: Element> Array for TypedArray<T> {
    fn elements_type(&self) -> ElementKind {
        T::KIND
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Element> Debug for TypedArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} array len {} capacity {} [{}]",
            T::KIND,
            self.data.len(),
            self.capacity,
            self.data.iter().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        array::{length_of, Array},
        array_error::ArrayError,
        element_kind::ElementKind,
        growth::MAX_CAPACITY,
        opaque_ptr::OpaquePtr,
        typed_array::{BoolArray, DoubleArray, IntArray, PtrArray},
    };

    #[test]
    fn new_array_is_filled() {
        let array = IntArray::new(3, 10).unwrap();
        assert_eq!(3, array.len());
        assert_eq!(7, array.capacity());
        assert_eq!(ElementKind::Int, array.elements_type());
        for i in 0..3 {
            assert_eq!(Ok(10), array.get(i));
        }
    }

    #[test]
    fn empty_array_still_has_one_slot() {
        let array = DoubleArray::new(0, 1.5).unwrap();
        assert!(array.is_empty());
        assert_eq!(1, array.capacity());
    }

    #[test]
    fn empty_array_rejects_every_index() {
        let mut array = BoolArray::new(0, true).unwrap();
        assert_eq!(
            Err(ArrayError::IndexOutOfBounds {
                index: 0,
                length: 0
            }),
            array.get(0)
        );
        assert_eq!(
            Err(ArrayError::IndexOutOfBounds {
                index: 0,
                length: 0
            }),
            array.put(0, false)
        );
    }

    #[test]
    fn push_appends_at_the_end() {
        let mut array = IntArray::new(2, 0).unwrap();
        array.push(5).unwrap();
        assert_eq!(3, array.len());
        assert_eq!(Ok(5), array.get(2));
        assert_eq!(Ok(0), array.get(1));
    }

    #[test]
    fn push_grows_only_when_full() {
        let mut array = IntArray::new(1, 0).unwrap();
        assert_eq!(3, array.capacity());
        array.push(1).unwrap();
        array.push(2).unwrap();
        assert_eq!(3, array.capacity());
        array.push(3).unwrap();
        assert_eq!(7, array.capacity());
        assert_eq!(4, array.len());
    }

    #[test]
    fn pointer_arrays_have_no_headroom() {
        let mut array = PtrArray::new(5, OpaquePtr::null()).unwrap();
        assert_eq!(5, array.capacity());
        array.push(OpaquePtr::null()).unwrap();
        assert_eq!(11, array.capacity());
        assert_eq!(6, array.len());
    }

    #[test]
    fn empty_pointer_array_grows_from_zero() {
        let mut array = PtrArray::new(0, OpaquePtr::null()).unwrap();
        assert_eq!(0, array.capacity());
        array.push(OpaquePtr::null()).unwrap();
        assert_eq!(1, array.capacity());
    }

    #[test]
    fn put_overwrites_a_single_element() {
        let mut array = DoubleArray::new(3, 0.0).unwrap();
        array.put(1, 2.5).unwrap();
        assert_eq!(Ok(0.0), array.get(0));
        assert_eq!(Ok(2.5), array.get(1));
        assert_eq!(Ok(0.0), array.get(2));
    }

    #[test]
    fn index_equal_to_length_is_out_of_bounds() {
        let array = IntArray::new(2, 0).unwrap();
        assert_eq!(
            Err(ArrayError::IndexOutOfBounds {
                index: 2,
                length: 2
            }),
            array.get(2)
        );
    }

    #[test]
    fn unused_capacity_is_not_readable() {
        let array = IntArray::new(1, 0).unwrap();
        assert!(array.capacity() > 1);
        assert!(array.get(1).is_err());
    }

    #[test]
    fn unchecked_access_within_bounds() {
        let mut array = IntArray::new(2, 4).unwrap();
        unsafe {
            array.put_unchecked(1, 8);
            assert_eq!(8, array.get_unchecked(1));
            assert_eq!(4, array.get_unchecked(0));
        }
    }

    #[test]
    fn too_large_arrays_are_rejected() {
        assert_eq!(
            Err(ArrayError::CapacityOverflow {
                kind: ElementKind::Int,
                requested: usize::MAX
            }),
            IntArray::new(usize::MAX, 0).map(|_| ())
        );
    }

    #[test]
    fn overflow_reports_the_requested_capacity() {
        assert_eq!(
            Err(ArrayError::CapacityOverflow {
                kind: ElementKind::Int,
                requested: MAX_CAPACITY * 2 + 1
            }),
            IntArray::new(MAX_CAPACITY, 0).map(|_| ())
        );
        assert_eq!(
            Err(ArrayError::CapacityOverflow {
                kind: ElementKind::Ptr,
                requested: MAX_CAPACITY + 1
            }),
            PtrArray::new(MAX_CAPACITY + 1, OpaquePtr::null()).map(|_| ())
        );
    }

    #[test]
    fn length_of_works_for_every_kind() {
        let int_array = IntArray::new(1, 0).unwrap();
        let double_array = DoubleArray::new(2, 0.0).unwrap();
        let bool_array = BoolArray::new(3, false).unwrap();
        let ptr_array = PtrArray::new(4, OpaquePtr::null()).unwrap();

        let arrays: Vec<&dyn Array> = vec![&int_array, &double_array, &bool_array, &ptr_array];
        let lengths: Vec<usize> = arrays.into_iter().map(length_of).collect();
        assert_eq!(vec![1, 2, 3, 4], lengths);
    }

    #[test]
    fn can_format_array() {
        let mut array = IntArray::new(2, 1).unwrap();
        array.push(3).unwrap();
        assert_eq!(
            "Int array len 3 capacity 5 [1, 1, 3]",
            format!("{array:?}")
        );
    }
}
