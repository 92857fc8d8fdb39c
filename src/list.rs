//! Doubly-linked list of tagged entries ordered by a signed sort key.
//!
//! Nodes live in a slot arena: a `Vec` of nodes addressed by stable
//! indices, with removed slots collected on a free list for reuse. The
//! `next`/`prev` links are index fields, which keeps unlink and relink
//! O(1) without reference-counted cells or raw pointers.
//!
//! Higher sort keys sort toward the head. Entries with equal keys are
//! placed newest-first; callers must not rely on that order, only on its
//! stability across operations.

use alloc::vec::Vec;

use crate::error::ListError;
use crate::{ResourceId, SortKey, TypeTag};

#[derive(Debug, Clone)]
struct Node<R> {
    resource: Option<R>,
    id: ResourceId,
    tag: TypeTag,
    sort_key: SortKey,
    next: Option<usize>,
    prev: Option<usize>,
}

/// A sorted doubly-linked list with a single movable cursor.
///
/// Most operations act on the *current node*, positioned with
/// [`seek`](Self::seek), [`next`](Self::next), [`prev`](Self::prev), or a
/// successful search. The cursor may be unset, in which case those
/// operations fail with `ListError::NoCurrentNode`.
#[derive(Debug)]
pub struct SortedList<R> {
    nodes: Vec<Node<R>>,
    free: Vec<usize>,
    head: Option<usize>,
    current: Option<usize>,
    len: usize,
}

impl<R: Copy + PartialEq> SortedList<R> {
    /// Creates an empty list. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            current: None,
            len: 0,
        }
    }

    /// Number of linked entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Consumes the list.
    ///
    /// # Errors
    ///
    /// Returns the list back, untouched, if entries remain. Destroying a
    /// non-empty list would silently lose track of the caller-owned
    /// resource references it stores.
    pub fn destroy(self) -> Result<(), Self> {
        if self.len == 0 {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Inserts a new entry, keeping the list ordered by descending sort
    /// key. Among equal keys the new entry lands before the existing ones.
    ///
    /// The cursor is left where it was.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfMemory` if a node slot cannot be
    /// allocated.
    pub fn add(
        &mut self,
        resource: Option<R>,
        id: ResourceId,
        tag: TypeTag,
        sort_key: SortKey,
    ) -> Result<(), ListError> {
        let node = Node {
            resource,
            id,
            tag,
            sort_key,
            next: None,
            prev: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes
                    .try_reserve(1)
                    .map_err(|_| ListError::OutOfMemory)?;
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.link(idx);
        Ok(())
    }

    /// Unlinks and frees the current node, clearing the cursor.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset.
    pub fn remove(&mut self) -> Result<(), ListError> {
        let idx = self.current.ok_or(ListError::NoCurrentNode)?;
        self.unlink(idx);
        self.current = None;
        self.nodes[idx].resource = None;
        self.free.push(idx);
        Ok(())
    }

    /// Sets the cursor to the `index`-th node counted from the head.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfRange` if `index >= len`.
    pub fn seek(&mut self, index: usize) -> Result<(), ListError> {
        if index >= self.len {
            return Err(ListError::OutOfRange {
                index,
                entries: self.len,
            });
        }
        let Some(mut cur) = self.head else {
            return Err(ListError::OutOfRange {
                index,
                entries: self.len,
            });
        };
        for _ in 0..index {
            match self.nodes[cur].next {
                Some(n) => cur = n,
                None => break,
            }
        }
        self.current = Some(cur);
        Ok(())
    }

    /// Moves the cursor one node toward the tail.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset and
    /// `ListError::EndOfList` if it is already on the last node; the
    /// cursor is unchanged in both cases.
    pub fn next(&mut self) -> Result<(), ListError> {
        let idx = self.current.ok_or(ListError::NoCurrentNode)?;
        match self.nodes[idx].next {
            Some(n) => {
                self.current = Some(n);
                Ok(())
            }
            None => Err(ListError::EndOfList),
        }
    }

    /// Moves the cursor one node toward the head.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset and
    /// `ListError::StartOfList` if it is already on the first node; the
    /// cursor is unchanged in both cases.
    pub fn prev(&mut self) -> Result<(), ListError> {
        let idx = self.current.ok_or(ListError::NoCurrentNode)?;
        match self.nodes[idx].prev {
            Some(p) => {
                self.current = Some(p);
                Ok(())
            }
            None => Err(ListError::StartOfList),
        }
    }

    /// Reads the current node's resource reference.
    ///
    /// A stored null reference reads back as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset.
    pub fn resource(&self) -> Result<Option<R>, ListError> {
        self.current_node().map(|node| node.resource)
    }

    /// Reads the current node's id.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset.
    pub fn id(&self) -> Result<ResourceId, ListError> {
        self.current_node().map(|node| node.id)
    }

    /// Reads the current node's type tag.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset.
    pub fn type_tag(&self) -> Result<TypeTag, ListError> {
        self.current_node().map(|node| node.tag)
    }

    /// Reads the current node's sort key.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset.
    pub fn sort_key(&self) -> Result<SortKey, ListError> {
        self.current_node().map(|node| node.sort_key)
    }

    /// Replaces the current node's resource reference.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset.
    pub fn set_resource(&mut self, resource: Option<R>) -> Result<(), ListError> {
        self.current_node_mut()?.resource = resource;
        Ok(())
    }

    /// Replaces the current node's id.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset.
    pub fn set_id(&mut self, id: ResourceId) -> Result<(), ListError> {
        self.current_node_mut()?.id = id;
        Ok(())
    }

    /// Replaces the current node's type tag.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset.
    pub fn set_type_tag(&mut self, tag: TypeTag) -> Result<(), ListError> {
        self.current_node_mut()?.tag = tag;
        Ok(())
    }

    /// Rekeys the current node, relocating it so the list stays sorted.
    ///
    /// The node keeps its identity and the cursor stays on it.
    ///
    /// # Errors
    ///
    /// Returns `ListError::NoCurrentNode` if the cursor is unset.
    pub fn set_sort_key(&mut self, sort_key: SortKey) -> Result<(), ListError> {
        let idx = self.current.ok_or(ListError::NoCurrentNode)?;
        self.unlink(idx);
        self.nodes[idx].sort_key = sort_key;
        self.link(idx);
        Ok(())
    }

    /// Searches for a node whose resource equals `value`.
    ///
    /// See [`find_id`](Self::find_id) for the walk semantics. A `value`
    /// of `None` matches entries holding a null reference.
    ///
    /// # Errors
    ///
    /// As for [`find_id`](Self::find_id).
    pub fn find_resource(&mut self, iterations: isize, value: Option<R>) -> Result<(), ListError> {
        self.search(iterations, |node| node.resource == value)
    }

    /// Searches for a node whose id equals `id`, starting at the current
    /// node and testing it first.
    ///
    /// With no cursor set, the walk starts at the head for
    /// `iterations >= 0` and at the tail otherwise. Up to `|iterations|`
    /// nodes are tested, stepping tailward for `iterations >= 0` and
    /// headward otherwise; `0` means scan to the respective end of the
    /// list. On a match the cursor lands on the matching node.
    ///
    /// # Errors
    ///
    /// - `ListError::EmptyList` if the list has no entries.
    /// - `ListError::EndOfList` / `ListError::StartOfList` if the walk hit
    ///   the boundary first; the cursor is left on the boundary node.
    /// - `ListError::NoMatch` if the iteration budget ran out first; the
    ///   cursor is left on the last node tested.
    pub fn find_id(&mut self, iterations: isize, id: ResourceId) -> Result<(), ListError> {
        self.search(iterations, |node| node.id == id)
    }

    /// Searches for a node whose type tag equals `tag`.
    ///
    /// See [`find_id`](Self::find_id) for the walk semantics.
    ///
    /// # Errors
    ///
    /// As for [`find_id`](Self::find_id).
    pub fn find_type(&mut self, iterations: isize, tag: TypeTag) -> Result<(), ListError> {
        self.search(iterations, |node| node.tag == tag)
    }

    /// Searches for a node whose sort key equals `sort_key`.
    ///
    /// See [`find_id`](Self::find_id) for the walk semantics.
    ///
    /// # Errors
    ///
    /// As for [`find_id`](Self::find_id).
    pub fn find_sort_key(&mut self, iterations: isize, sort_key: SortKey) -> Result<(), ListError> {
        self.search(iterations, |node| node.sort_key == sort_key)
    }

    fn current_node(&self) -> Result<&Node<R>, ListError> {
        let idx = self.current.ok_or(ListError::NoCurrentNode)?;
        Ok(&self.nodes[idx])
    }

    fn current_node_mut(&mut self) -> Result<&mut Node<R>, ListError> {
        let idx = self.current.ok_or(ListError::NoCurrentNode)?;
        Ok(&mut self.nodes[idx])
    }

    /// Links a filled node slot into position by its sort key.
    fn link(&mut self, idx: usize) {
        self.len += 1;
        let key = self.nodes[idx].sort_key;
        match self.head {
            Some(first) if self.nodes[first].sort_key > key => {
                // Walk to the last node still sorting ahead of the new key.
                let mut tail = first;
                while let Some(next) = self.nodes[tail].next {
                    if self.nodes[next].sort_key > key {
                        tail = next;
                    } else {
                        break;
                    }
                }
                let next = self.nodes[tail].next;
                self.nodes[idx].prev = Some(tail);
                self.nodes[idx].next = next;
                if let Some(n) = next {
                    self.nodes[n].prev = Some(idx);
                }
                self.nodes[tail].next = Some(idx);
            }
            other => {
                // Empty list, or the new key sorts at or ties with the head.
                self.nodes[idx].prev = None;
                self.nodes[idx].next = other;
                if let Some(n) = other {
                    self.nodes[n].prev = Some(idx);
                }
                self.head = Some(idx);
            }
        }
    }

    /// Detaches a node from the chain. Does not touch the cursor or the
    /// node's own links.
    fn unlink(&mut self, idx: usize) {
        self.len -= 1;
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        if let Some(n) = next {
            self.nodes[n].prev = prev;
        }
    }

    fn tail(&self) -> Option<usize> {
        let mut cur = self.head?;
        while let Some(next) = self.nodes[cur].next {
            cur = next;
        }
        Some(cur)
    }

    fn search<F>(&mut self, iterations: isize, matches: F) -> Result<(), ListError>
    where
        F: Fn(&Node<R>) -> bool,
    {
        if self.len == 0 {
            return Err(ListError::EmptyList);
        }
        let forward = iterations >= 0;
        let start = match self.current {
            Some(cur) => Some(cur),
            None if forward => self.head,
            None => self.tail(),
        };
        let Some(mut cur) = start else {
            return Err(ListError::EmptyList);
        };
        let mut budget = if iterations == 0 {
            self.len
        } else {
            iterations.unsigned_abs()
        };
        loop {
            self.current = Some(cur);
            if matches(&self.nodes[cur]) {
                return Ok(());
            }
            let step = if forward {
                self.nodes[cur].next
            } else {
                self.nodes[cur].prev
            };
            let Some(next) = step else {
                return Err(if forward {
                    ListError::EndOfList
                } else {
                    ListError::StartOfList
                });
            };
            budget -= 1;
            if budget == 0 {
                return Err(ListError::NoMatch);
            }
            cur = next;
        }
    }
}

impl<R: Copy + PartialEq> Default for SortedList<R> {
    fn default() -> Self {
        Self::new()
    }
}
