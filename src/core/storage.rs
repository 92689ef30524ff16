use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::core::{BodyHandle, JointHandle};
use crate::error::DebugDrawError;
use crate::Result;

/// A handle type that can be minted from a sequential id
pub trait StorageHandle: Copy + Ord + Debug {
    /// Wraps a raw id
    fn from_raw(id: u32) -> Self;

    /// Human-readable kind, used in error messages
    fn kind() -> &'static str;
}

impl StorageHandle for BodyHandle {
    fn from_raw(id: u32) -> Self {
        BodyHandle(id)
    }

    fn kind() -> &'static str {
        "Body"
    }
}

impl StorageHandle for JointHandle {
    fn from_raw(id: u32) -> Self {
        JointHandle(id)
    }

    fn kind() -> &'static str {
        "Joint"
    }
}

/// Handle-addressed storage that iterates in insertion order
///
/// Handles are minted from an increasing counter and kept in a `BTreeMap`,
/// so iteration order equals insertion order and is stable across frames.
#[derive(Debug, Clone)]
pub struct OrderedStorage<H, T> {
    items: BTreeMap<H, T>,
    next_id: u32,
}

/// Storage for bodies
pub type BodyStorage<T> = OrderedStorage<BodyHandle, T>;

/// Storage for joints
pub type JointStorage<T> = OrderedStorage<JointHandle, T>;

impl<H: StorageHandle, T> OrderedStorage<H, T> {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    /// Adds an item to the storage and returns its handle
    pub fn add(&mut self, item: T) -> H {
        let handle = H::from_raw(self.next_id);
        self.next_id += 1;
        self.items.insert(handle, item);
        handle
    }

    pub fn get(&self, handle: H) -> Option<&T> {
        self.items.get(&handle)
    }

    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        self.items.get_mut(&handle)
    }

    /// Gets an item by its handle, returning an error if not found
    pub fn get_checked(&self, handle: H) -> Result<&T> {
        self.get(handle).ok_or_else(|| {
            DebugDrawError::ResourceNotFound(format!("{} with handle {:?} not found", H::kind(), handle))
        })
    }

    pub fn remove(&mut self, handle: H) -> Option<T> {
        self.items.remove(&handle)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items; handles are never reused
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates `(handle, item)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (H, &T)> + '_ {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (H, &mut T)> + '_ {
        self.items.iter_mut().map(|(h, item)| (*h, item))
    }
}

impl<H: StorageHandle, T> Default for OrderedStorage<H, T> {
    fn default() -> Self {
        Self::new()
    }
}
