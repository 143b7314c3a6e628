use crate::element_kind::ElementKind;

/// Capabilities shared by arrays of every element kind
pub trait Array {
    fn elements_type(&self) -> ElementKind;

    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Length of an array of any kind
pub fn length_of(array: &dyn Array) -> usize {
    array.len()
}
