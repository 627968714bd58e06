//! Descriptor chains.
//!
//! A chain is the ordered, index-addressable history of controlled
//! descriptors for one (object, key) pair. Insertion order is preserved and
//! the most recently appended entry is the chain's currently effective
//! descriptor.
//!
//! # Origin seeding
//!
//! A chain is constructed from an initial *origin* descriptor. The origin is
//! not an indexed entry: appended entries are indexed from 0, and
//! [`last`][DescriptorChain::last] falls back to the origin while no entries
//! exist, so resolution of "the current descriptor" stays total across the
//! chain's whole lifetime.

use smallvec::SmallVec;

use crate::control::descriptor::ControlledDescriptor;

/// Number of chain entries stored inline before the store spills to the
/// heap. Chains are decorator stacks in practice and rarely grow past a
/// handful of layers.
pub const INLINE_CHAIN_DEPTH: usize = 4;

/// Contract for a descriptor chain collaborator.
pub trait DescriptorChain {
    /// Constructs the chain from its origin descriptor.
    fn with_initial(descriptor: ControlledDescriptor) -> Self
    where
        Self: Sized;

    /// Appends `descriptor` as the new most-recent entry, stamping its chain
    /// index.
    fn add(&mut self, descriptor: ControlledDescriptor);

    /// Returns the entry at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&ControlledDescriptor>;

    /// Removes the entry at `index`, preserving the relative order of the
    /// remaining entries. Returns `false` when `index` is out of range.
    fn delete(&mut self, index: usize) -> bool;

    /// The most recently appended entry. Defined whenever at least one entry
    /// exists; implementations may additionally answer for an empty chain.
    fn last(&self) -> Option<&ControlledDescriptor>;

    /// Number of indexed entries (the origin is not counted).
    fn len(&self) -> usize;

    /// Returns `true` if the chain has no indexed entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The default chain store.
pub struct ChainStore {
    origin: ControlledDescriptor,
    entries: SmallVec<[ControlledDescriptor; INLINE_CHAIN_DEPTH]>,
}

impl ChainStore {
    /// Returns the origin descriptor the chain was seeded with.
    pub fn origin(&self) -> &ControlledDescriptor {
        &self.origin
    }

    /// Restamps the `index` field of every entry from `start` onward.
    ///
    /// Keeps stamped indices contiguous after a removal, so an entry's own
    /// `index` always agrees with its position.
    fn restamp_from(&mut self, start: usize) {
        for (position, entry) in self.entries.iter_mut().enumerate().skip(start) {
            entry.index = Some(position);
        }
    }
}

impl DescriptorChain for ChainStore {
    fn with_initial(descriptor: ControlledDescriptor) -> Self {
        Self {
            origin: descriptor,
            entries: SmallVec::new(),
        }
    }

    fn add(&mut self, mut descriptor: ControlledDescriptor) {
        descriptor.index = Some(self.entries.len());
        self.entries.push(descriptor);
    }

    fn get(&self, index: usize) -> Option<&ControlledDescriptor> {
        self.entries.get(index)
    }

    fn delete(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.entries.remove(index);
            self.restamp_from(index);
            true
        } else {
            false
        }
    }

    fn last(&self) -> Option<&ControlledDescriptor> {
        Some(self.entries.last().unwrap_or(&self.origin))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
