//! Resizable random-access array of tagged resource slots.
//!
//! A [`SlotArray`] is created in one of two variants, fixed for its
//! lifetime: `Simple` slots hold a resource reference only, `Typed` slots
//! additionally carry a [`TypeTag`]. An empty slot is `(None, 0)`.

use alloc::vec::Vec;

use crate::error::ArrayError;
use crate::TypeTag;

/// Slot layout variant, fixed when the array is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    /// Slots hold a resource reference only; type tags are stored as 0.
    Simple,
    /// Slots hold a resource reference and a type tag.
    Typed,
}

#[derive(Debug, Clone, Copy)]
struct Slot<R> {
    resource: Option<R>,
    tag: TypeTag,
}

impl<R> Slot<R> {
    const EMPTY: Self = Slot {
        resource: None,
        tag: 0,
    };
}

/// A resizable random-access array of `(resource, tag)` slots.
///
/// All indices below [`capacity`](Self::capacity) are addressable; indices
/// at or beyond it always fail. The array never interprets the stored
/// resource references.
#[derive(Debug)]
pub struct SlotArray<R> {
    slots: Vec<Slot<R>>,
    kind: ArrayKind,
}

impl<R: Copy + PartialEq> SlotArray<R> {
    /// Creates an array of `max_index + 1` empty slots in the given variant.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::OutOfMemory` if the backing storage cannot be
    /// obtained.
    pub fn new(max_index: usize, kind: ArrayKind) -> Result<Self, ArrayError> {
        let capacity = max_index
            .checked_add(1)
            .ok_or(ArrayError::OutOfMemory { required: usize::MAX })?;
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ArrayError::OutOfMemory { required: capacity })?;
        slots.resize(capacity, Slot::EMPTY);
        Ok(Self { slots, kind })
    }

    /// Number of addressable slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The variant the array was created with.
    #[must_use]
    pub fn kind(&self) -> ArrayKind {
        self.kind
    }

    /// Writes a slot. The tag is stored as 0 in a `Simple` array.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::OutOfRange` if `index >= capacity`.
    pub fn add_entry(
        &mut self,
        index: usize,
        resource: Option<R>,
        tag: TypeTag,
    ) -> Result<(), ArrayError> {
        let capacity = self.slots.len();
        let kind = self.kind;
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, capacity })?;
        slot.resource = resource;
        slot.tag = match kind {
            ArrayKind::Typed => tag,
            ArrayKind::Simple => 0,
        };
        Ok(())
    }

    /// Clears a slot back to `(None, 0)`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::OutOfRange` if `index >= capacity`.
    pub fn remove_entry(&mut self, index: usize) -> Result<(), ArrayError> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, capacity })?;
        *slot = Slot::EMPTY;
        Ok(())
    }

    /// Reads the resource reference stored at `index`.
    ///
    /// A slot holding a null reference reads back as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::NotFound` if `index >= capacity`.
    pub fn resource(&self, index: usize) -> Result<Option<R>, ArrayError> {
        let capacity = self.slots.len();
        self.slots
            .get(index)
            .map(|slot| slot.resource)
            .ok_or(ArrayError::NotFound { index, capacity })
    }

    /// Reads the type tag stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::IncompatibleResource` on a `Simple` array,
    /// whatever the index, and `ArrayError::NotFound` if
    /// `index >= capacity`.
    pub fn type_tag(&self, index: usize) -> Result<TypeTag, ArrayError> {
        if self.kind == ArrayKind::Simple {
            return Err(ArrayError::IncompatibleResource);
        }
        let capacity = self.slots.len();
        self.slots
            .get(index)
            .map(|slot| slot.tag)
            .ok_or(ArrayError::NotFound { index, capacity })
    }

    /// Replaces the resource reference at `index`, leaving the tag alone.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::OutOfRange` if `index >= capacity`.
    pub fn set_resource(&mut self, index: usize, resource: Option<R>) -> Result<(), ArrayError> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, capacity })?;
        slot.resource = resource;
        Ok(())
    }

    /// Replaces the type tag at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::IncompatibleResource` on a `Simple` array and
    /// `ArrayError::OutOfRange` if `index >= capacity`.
    pub fn set_type_tag(&mut self, index: usize, tag: TypeTag) -> Result<(), ArrayError> {
        if self.kind == ArrayKind::Simple {
            return Err(ArrayError::IncompatibleResource);
        }
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, capacity })?;
        slot.tag = tag;
        Ok(())
    }

    /// Positionally overwrites this array's slots from `src`.
    ///
    /// Copies `min(self.capacity, src.capacity)` slots; when this array is
    /// larger, the remaining slots keep their prior values. This is an
    /// overwrite, not a resize.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::IncompatibleResource` if the variants differ.
    pub fn copy_from(&mut self, src: &SlotArray<R>) -> Result<(), ArrayError> {
        if self.kind != src.kind {
            return Err(ArrayError::IncompatibleResource);
        }
        let n = self.slots.len().min(src.slots.len());
        self.slots[..n].copy_from_slice(&src.slots[..n]);
        Ok(())
    }

    /// Resizes the array to `max_index + 1` slots.
    ///
    /// Growing zero-fills the new slots; shrinking discards the slots
    /// beyond the new capacity.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::OutOfMemory` on reallocation failure, leaving
    /// the array in its prior state.
    pub fn resize(&mut self, max_index: usize) -> Result<(), ArrayError> {
        let capacity = max_index
            .checked_add(1)
            .ok_or(ArrayError::OutOfMemory { required: usize::MAX })?;
        if capacity > self.slots.len() {
            let additional = capacity - self.slots.len();
            self.slots
                .try_reserve_exact(additional)
                .map_err(|_| ArrayError::OutOfMemory { required: capacity })?;
            self.slots.resize(capacity, Slot::EMPTY);
        } else {
            self.slots.truncate(capacity);
            self.slots.shrink_to(capacity);
        }
        Ok(())
    }

    /// Scans the inclusive index range for the first slot whose resource
    /// equals `value`, returning its index.
    ///
    /// The scan runs forward when `start <= stop` and backward otherwise.
    /// A `value` of `None` matches empty slots.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::BadParameter` if either bound is
    /// `>= capacity` and `ArrayError::NoMatch` if nothing in the range
    /// matches.
    pub fn find_resource(
        &self,
        start: usize,
        stop: usize,
        value: Option<R>,
    ) -> Result<usize, ArrayError> {
        self.check_bounds(start, stop)?;
        self.scan(start, stop, |slot| slot.resource == value)
    }

    /// Scans the inclusive index range for the first slot whose tag equals
    /// `tag`, returning its index.
    ///
    /// # Errors
    ///
    /// Returns `ArrayError::BadParameter` if either bound is
    /// `>= capacity`, `ArrayError::IncompatibleResource` on a `Simple`
    /// array, and `ArrayError::NoMatch` if nothing in the range matches.
    pub fn find_type(&self, start: usize, stop: usize, tag: TypeTag) -> Result<usize, ArrayError> {
        self.check_bounds(start, stop)?;
        if self.kind == ArrayKind::Simple {
            return Err(ArrayError::IncompatibleResource);
        }
        self.scan(start, stop, |slot| slot.tag == tag)
    }

    fn check_bounds(&self, start: usize, stop: usize) -> Result<(), ArrayError> {
        let capacity = self.slots.len();
        for bound in [start, stop] {
            if bound >= capacity {
                return Err(ArrayError::BadParameter { bound, capacity });
            }
        }
        Ok(())
    }

    fn scan<F>(&self, start: usize, stop: usize, matches: F) -> Result<usize, ArrayError>
    where
        F: Fn(&Slot<R>) -> bool,
    {
        if start <= stop {
            for i in start..=stop {
                if matches(&self.slots[i]) {
                    return Ok(i);
                }
            }
        } else {
            for i in (stop..=start).rev() {
                if matches(&self.slots[i]) {
                    return Ok(i);
                }
            }
        }
        Err(ArrayError::NoMatch)
    }
}
