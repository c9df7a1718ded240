extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::mem;

/// An opaque reference to a node in a [`RecencyList`].
///
/// A handle is only valid while the node it names is linked into the list.
/// Handles are `(slot index, generation)` pairs: when a slot is vacated and
/// later reused, its generation is bumped, so a handle held across a removal
/// resolves to nothing instead of aliasing the new occupant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Handle {
    index: usize,
    generation: u32,
}

/// A node occupying a slot: the stored value plus links to its neighbors.
struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

enum SlotState<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

struct Slot<T> {
    /// Bumped every time the slot is vacated, invalidating old handles.
    generation: u32,
    state: SlotState<T>,
}

/// An ordered recency list: most recently used at the front, least recently
/// used at the back.
///
/// This is a doubly linked list stored in a slab of slots and addressed by
/// integer indices rather than pointers. Removal marks a slot vacant and
/// pushes it onto a free list for reuse; no per-node allocation happens after
/// the backing vector stops growing. All structural operations are O(1):
/// insert at front, move any node to the front, remove any node, and peek at
/// either end.
///
/// Using a [`Handle`] whose node has been removed is a caller bug, but a
/// detectable one: such calls return `None` (or `false`) instead of touching
/// unrelated data.
///
/// # Examples
///
/// ```ignore
/// use lru_rs::list::RecencyList;
///
/// let mut list = RecencyList::with_capacity(3);
/// let a = list.push_front(10);
/// let b = list.push_front(20);
///
/// assert_eq!(list.front(), Some(b));
/// assert!(list.move_to_front(a));
/// assert_eq!(list.front(), Some(a));
/// ```
pub struct RecencyList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<T> RecencyList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        RecencyList {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    /// Creates an empty list with space reserved for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        RecencyList {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    /// Returns the current number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no nodes.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a handle to the most recently used node, if any.
    pub fn front(&self) -> Option<Handle> {
        self.head.map(|index| Handle {
            index,
            generation: self.slots[index].generation,
        })
    }

    /// Returns a handle to the least recently used node, if any.
    pub fn back(&self) -> Option<Handle> {
        self.tail.map(|index| Handle {
            index,
            generation: self.slots[index].generation,
        })
    }

    /// Inserts a value as the new most recently used node.
    ///
    /// Always succeeds; the slab grows as needed, reusing vacated slots
    /// first. Returns a handle valid until the node is removed.
    pub fn push_front(&mut self, value: T) -> Handle {
        let index = self.alloc_slot(Node {
            value,
            prev: None,
            next: None,
        });
        let generation = self.slots[index].generation;
        self.link_front(index);
        self.len += 1;
        Handle { index, generation }
    }

    /// Moves the referenced node to the front in O(1).
    ///
    /// No-op (returning `true`) if the node is already at the front.
    /// Returns `false` if the handle is stale.
    pub fn move_to_front(&mut self, handle: Handle) -> bool {
        let Some(index) = self.resolve(handle) else {
            return false;
        };
        if self.head == Some(index) {
            return true;
        }
        self.unlink(index);
        self.link_front(index);
        true
    }

    /// Unlinks the referenced node from wherever it sits and returns its
    /// value.
    ///
    /// The handle (and every copy of it) is invalid afterwards. Returns
    /// `None` if the handle is already stale.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let index = self.resolve(handle)?;
        self.unlink(index);
        let next_free = self.free;
        let slot = &mut self.slots[index];
        slot.generation = slot.generation.wrapping_add(1);
        let state = mem::replace(&mut slot.state, SlotState::Vacant { next_free });
        self.free = Some(index);
        self.len -= 1;
        match state {
            SlotState::Occupied(node) => Some(node.value),
            // resolve() only returns occupied slots
            SlotState::Vacant { .. } => None,
        }
    }

    /// Returns a reference to the value behind the handle, or `None` if the
    /// handle is stale.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        let index = self.resolve(handle)?;
        match &self.slots[index].state {
            SlotState::Occupied(node) => Some(&node.value),
            SlotState::Vacant { .. } => None,
        }
    }

    /// Returns a mutable reference to the value behind the handle, or `None`
    /// if the handle is stale.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let index = self.resolve(handle)?;
        match &mut self.slots[index].state {
            SlotState::Occupied(node) => Some(&mut node.value),
            SlotState::Vacant { .. } => None,
        }
    }

    /// Removes all nodes, dropping their values.
    ///
    /// Slots are vacated in place (generations bumped), so handles from
    /// before the clear stay detectably stale and slot storage is reused.
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
        let mut free = None;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if matches!(slot.state, SlotState::Occupied(_)) {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.state = SlotState::Vacant { next_free: free };
            free = Some(index);
        }
        self.free = free;
    }

    /// Maps a handle to its slot index, checking liveness and generation.
    fn resolve(&self, handle: Handle) -> Option<usize> {
        let slot = self.slots.get(handle.index)?;
        if slot.generation != handle.generation {
            return None;
        }
        match slot.state {
            SlotState::Occupied(_) => Some(handle.index),
            SlotState::Vacant { .. } => None,
        }
    }

    /// Places a node into a vacant slot, or grows the slab.
    fn alloc_slot(&mut self, node: Node<T>) -> usize {
        if let Some(index) = self.free {
            // the free list only ever links vacant slots
            if let SlotState::Vacant { next_free } = self.slots[index].state {
                self.free = next_free;
                self.slots[index].state = SlotState::Occupied(node);
                return index;
            }
            debug_assert!(false, "free list entry was occupied");
        }
        self.slots.push(Slot {
            generation: 0,
            state: SlotState::Occupied(node),
        });
        self.slots.len() - 1
    }

    /// Links an unlinked occupied slot in as the new head.
    fn link_front(&mut self, index: usize) {
        let old_head = self.head;
        if let SlotState::Occupied(node) = &mut self.slots[index].state {
            node.prev = None;
            node.next = old_head;
        }
        match old_head {
            Some(h) => {
                if let SlotState::Occupied(node) = &mut self.slots[h].state {
                    node.prev = Some(index);
                }
            }
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    /// Detaches an occupied slot from its neighbors, fixing head/tail.
    fn unlink(&mut self, index: usize) {
        let (prev, next) = match &self.slots[index].state {
            SlotState::Occupied(node) => (node.prev, node.next),
            SlotState::Vacant { .. } => return,
        };
        match prev {
            Some(p) => {
                if let SlotState::Occupied(node) = &mut self.slots[p].state {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let SlotState::Occupied(node) = &mut self.slots[n].state {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
        if let SlotState::Occupied(node) = &mut self.slots[index].state {
            node.prev = None;
            node.next = None;
        }
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RecencyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyList")
            .field("length", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}
