/// Largest number of slots an array may have. Lengths and indices cross the C ABI as
/// `i32`, so capacity is bounded by the same range.
pub const MAX_CAPACITY: usize = i32::MAX as usize;

/// How many slots a freshly constructed array reserves for a given length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialCapacity {
    /// `length * 2 + 1` slots
    Headroom,
    /// Exactly `length` slots: the first push after construction always grows
    Exact,
}

impl InitialCapacity {
    /// Returns `None` if the capacity would exceed [MAX_CAPACITY]
    pub fn capacity_for(self, length: usize) -> Option<usize> {
        let capacity = match self {
            InitialCapacity::Headroom => length.checked_mul(2)?.checked_add(1)?,
            InitialCapacity::Exact => length,
        };
        bounded(capacity)
    }

    /// The capacity `length` asks for, saturating instead of overflowing.
    /// Used to report requests that [Self::capacity_for] rejects.
    pub fn requested_for(self, length: usize) -> usize {
        match self {
            InitialCapacity::Headroom => length.saturating_mul(2).saturating_add(1),
            InitialCapacity::Exact => length,
        }
    }
}

/// Capacity after one growth step: `capacity * 2 + 1`.
/// Returns `None` if the result would exceed [MAX_CAPACITY].
pub fn grown_capacity(capacity: usize) -> Option<usize> {
    capacity.checked_mul(2)?.checked_add(1).and_then(bounded)
}

fn bounded(capacity: usize) -> Option<usize> {
    (capacity <= MAX_CAPACITY).then_some(capacity)
}
