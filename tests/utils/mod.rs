use log::info;

use minimbt_runtime::{array::Array, element::Element, typed_array::TypedArray};

/// Reads back every live element through the checked accessor
pub fn elements<T: Element>(array: &TypedArray<T>) -> Vec<T> {
    let elements = (0..array.len())
        .map(|index| array.get(index).expect("index should be in range"))
        .collect();
    info!("array contents: {:?}", array);
    elements
}
