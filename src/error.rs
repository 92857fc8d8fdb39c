use thiserror::Error;

/// Error types for [`SlotArray`](crate::SlotArray) operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ArrayError {
    /// Index is beyond the array capacity on a mutating operation
    #[error("index {index} out of range for capacity {capacity}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Number of addressable slots
        capacity: usize,
    },
    /// Index is beyond the array capacity on a read operation
    #[error("no slot at index {index} (capacity {capacity})")]
    NotFound {
        /// Index that was accessed
        index: usize,
        /// Number of addressable slots
        capacity: usize,
    },
    /// Type operation on a simple array, or copy between mismatched variants
    #[error("operation requires a compatible array variant")]
    IncompatibleResource,
    /// Search bound is beyond the array capacity
    #[error("search bound {bound} out of range for capacity {capacity}")]
    BadParameter {
        /// Offending bound
        bound: usize,
        /// Number of addressable slots
        capacity: usize,
    },
    /// No slot in the searched range matched
    #[error("no matching slot in the searched range")]
    NoMatch,
    /// Backing storage could not be allocated
    #[error("allocation of {required} slots failed")]
    OutOfMemory {
        /// Number of slots that could not be obtained
        required: usize,
    },
}

/// Error types for [`SortedList`](crate::SortedList) operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ListError {
    /// Operation requires a positioned cursor but none is set
    #[error("no current node")]
    NoCurrentNode,
    /// Seek index is beyond the number of entries
    #[error("index {index} out of range for {entries} entries")]
    OutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of linked entries
        entries: usize,
    },
    /// Cursor is already on the last node
    #[error("end of list")]
    EndOfList,
    /// Cursor is already on the first node
    #[error("start of list")]
    StartOfList,
    /// Search on a list with no entries
    #[error("list is empty")]
    EmptyList,
    /// No node matched within the iteration budget
    #[error("no matching entry found")]
    NoMatch,
    /// A new node could not be allocated
    #[error("node allocation failed")]
    OutOfMemory,
}

/// Error types for [`Stack`](crate::Stack) operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum StackError {
    /// Push or insert on a stack holding its maximum number of entries
    #[error("stack full: {limit} is the highest valid entry index")]
    Full {
        /// Highest valid `max_entries` value
        limit: usize,
    },
    /// Pop on a stack with no entries
    #[error("stack is empty")]
    Empty,
    /// Insert position is more than one past the topmost entry
    #[error("insert position {index} out of range (top {top})")]
    OutOfRange {
        /// Position that was requested
        index: usize,
        /// First free slot index
        top: usize,
    },
    /// No entry exists at the addressed slot
    #[error("no entry at index {index} (top {top})")]
    NotFound {
        /// Index that was accessed
        index: usize,
        /// First free slot index
        top: usize,
    },
    /// Resize would discard existing entries
    #[error("cannot resize to {requested} with {entries} entries held")]
    TooSmall {
        /// Requested `max_entries` value
        requested: usize,
        /// Current number of entries
        entries: usize,
    },
    /// Backing storage could not be allocated
    #[error("allocation of {required} slots failed")]
    OutOfMemory {
        /// Number of slots that could not be obtained
        required: usize,
    },
}

/// Error types for [`Bitmap`](crate::Bitmap) operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BitmapError {
    /// Range base is beyond the highest addressable bit
    #[error("base {base} out of range (highest bit {num_bits})")]
    OutOfRange {
        /// Offending base bit index
        base: usize,
        /// Highest addressable bit index
        num_bits: usize,
    },
    /// `base + limit` wraps around or exceeds the highest addressable bit
    #[error("range {base}+{limit} overflows the bitmap (highest bit {num_bits})")]
    RangeOverflow {
        /// Range base bit index
        base: usize,
        /// Range extent; 0 means one bit
        limit: usize,
        /// Highest addressable bit index
        num_bits: usize,
    },
    /// Requested block is larger than the whole bitmap
    #[error("block size {block_size} exceeds the bitmap (highest bit {num_bits})")]
    BadParameter {
        /// Requested block size; 0 means one bit
        block_size: usize,
        /// Highest addressable bit index
        num_bits: usize,
    },
    /// No sufficiently large run of clear bits exists
    #[error("no free run of {block_size} + 1 bits")]
    NoMatch {
        /// Requested block size; 0 means one bit
        block_size: usize,
    },
    /// Backing storage could not be allocated
    #[error("allocation of {required} words failed")]
    OutOfMemory {
        /// Number of words that could not be obtained
        required: usize,
    },
}
