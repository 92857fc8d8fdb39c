//! Index-addressable, resizable LIFO container.
//!
//! Entries occupy slots `0..top`; `top` is the first free slot. Besides
//! plain push/pop, entries can be inserted or removed at any index, with
//! the slots above shifted to make or close the gap.

use alloc::vec::Vec;

use crate::error::StackError;

/// A resizable stack of resource references with mid-stack access.
///
/// The capacity is `limit + 1` slots, where `limit` is the `max_entries`
/// value the stack was created or last resized with.
#[derive(Debug)]
pub struct Stack<R> {
    entries: Vec<Option<R>>,
    limit: usize,
}

impl<R: Copy> Stack<R> {
    /// Creates a stack holding at most `max_entries + 1` entries.
    ///
    /// # Errors
    ///
    /// Returns `StackError::OutOfMemory` if the backing storage cannot be
    /// obtained.
    pub fn new(max_entries: usize) -> Result<Self, StackError> {
        let capacity = max_entries
            .checked_add(1)
            .ok_or(StackError::OutOfMemory { required: usize::MAX })?;
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|_| StackError::OutOfMemory { required: capacity })?;
        Ok(Self {
            entries,
            limit: max_entries,
        })
    }

    /// Number of entries currently held (the `top` index).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest `max_entries` value the stack can currently hold.
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.limit
    }

    /// Pushes a resource reference onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns `StackError::Full` if every slot is in use.
    pub fn push(&mut self, resource: Option<R>) -> Result<(), StackError> {
        if self.entries.len() > self.limit {
            return Err(StackError::Full { limit: self.limit });
        }
        self.entries.push(resource);
        Ok(())
    }

    /// Removes and returns the topmost entry.
    ///
    /// A stored null reference pops as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StackError::Empty` if the stack holds no entries.
    pub fn pop(&mut self) -> Result<Option<R>, StackError> {
        self.entries.pop().ok_or(StackError::Empty)
    }

    /// Inserts a resource reference at slot `n`, shifting the entries at
    /// `n` and above up by one.
    ///
    /// # Errors
    ///
    /// Returns `StackError::Full` if every slot is in use and
    /// `StackError::OutOfRange` if `n` is more than one past the topmost
    /// entry.
    pub fn insert(&mut self, n: usize, resource: Option<R>) -> Result<(), StackError> {
        if self.entries.len() > self.limit {
            return Err(StackError::Full { limit: self.limit });
        }
        if n > self.entries.len() {
            return Err(StackError::OutOfRange {
                index: n,
                top: self.entries.len(),
            });
        }
        self.entries.insert(n, resource);
        Ok(())
    }

    /// Removes and returns the entry at slot `n`, shifting the entries
    /// above it down by one.
    ///
    /// # Errors
    ///
    /// Returns `StackError::NotFound` if no entry exists at `n`.
    pub fn remove(&mut self, n: usize) -> Result<Option<R>, StackError> {
        if n >= self.entries.len() {
            return Err(StackError::NotFound {
                index: n,
                top: self.entries.len(),
            });
        }
        Ok(self.entries.remove(n))
    }

    /// Replaces the entry at slot `n` in place.
    ///
    /// # Errors
    ///
    /// Returns `StackError::NotFound` if no entry exists at `n`.
    pub fn set(&mut self, n: usize, resource: Option<R>) -> Result<(), StackError> {
        let top = self.entries.len();
        let slot = self
            .entries
            .get_mut(n)
            .ok_or(StackError::NotFound { index: n, top })?;
        *slot = resource;
        Ok(())
    }

    /// Reads the entry at slot `n`.
    ///
    /// A stored null reference reads back as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `StackError::NotFound` if no entry exists at `n`.
    pub fn get(&self, n: usize) -> Result<Option<R>, StackError> {
        let top = self.entries.len();
        self.entries
            .get(n)
            .copied()
            .ok_or(StackError::NotFound { index: n, top })
    }

    /// Resizes the stack to hold at most `max_entries + 1` entries,
    /// preserving the current entries and `top`.
    ///
    /// Shrinking to exactly the current entry count is allowed; the stack
    /// is then full.
    ///
    /// # Errors
    ///
    /// Returns `StackError::TooSmall` if the current entries would not
    /// fit, and `StackError::OutOfMemory` on reallocation failure; the
    /// stack keeps its prior state in both cases.
    pub fn resize(&mut self, max_entries: usize) -> Result<(), StackError> {
        if self.entries.len() > max_entries.saturating_add(1) {
            return Err(StackError::TooSmall {
                requested: max_entries,
                entries: self.entries.len(),
            });
        }
        let capacity = max_entries
            .checked_add(1)
            .ok_or(StackError::OutOfMemory { required: usize::MAX })?;
        if capacity > self.entries.len() {
            let additional = capacity - self.entries.len();
            self.entries
                .try_reserve_exact(additional)
                .map_err(|_| StackError::OutOfMemory { required: capacity })?;
        }
        self.entries.shrink_to(capacity);
        self.limit = max_entries;
        Ok(())
    }
}
