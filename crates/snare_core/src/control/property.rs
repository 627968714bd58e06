//! Chain-owning property controllers.
//!
//! [`PropertyControl`] is the contract a chain-owning controller exposes;
//! [`ControllerBase`] is the concrete state behind it, generic over the
//! chain collaborator; [`PropertyController`] pins the default
//! [`ChainStore`] in place.
//!
//! # Two activation policies
//!
//! The indexed [`is_active`][PropertyControl::is_active] here reads only the
//! uniform scalar form of an entry's flag; a per-direction flag reports
//! `false`. That is narrower than the direction-aware query on
//! [`DescriptorController`][crate::control::controller::DescriptorController],
//! and the two policies are kept distinct on purpose.

use std::cell::RefCell;
use std::rc::Rc;

use crate::control::chain::{ChainStore, DescriptorChain};
use crate::control::descriptor::{ControlledDescriptor, GetHook, PriorDescriptor, SetHook};
use crate::host::descriptor::{Getter, Setter};
use crate::host::object::HostObject;

/// Contract for a controller that owns a descriptor chain and/or a single
/// fallback descriptor for one property.
pub trait PropertyControl {
    /// The chain collaborator type.
    type Chain: DescriptorChain;

    /// The currently effective descriptor: the chain's most recent entry
    /// when a chain exists, else the fallback descriptor.
    fn descriptor(&self) -> Option<&ControlledDescriptor>;

    /// Bulk view of all descriptors; `None` when the controller does not
    /// provide one.
    fn descriptors(&self) -> Option<&[ControlledDescriptor]>;

    /// The predecessor link of the currently effective descriptor.
    fn previous_descriptor(&self) -> Option<&PriorDescriptor>;

    /// The private storage key of the currently effective descriptor.
    fn private_key(&self) -> Option<&str>;

    /// The currently effective read accessor.
    fn get(&self) -> Option<Getter>;

    /// The currently effective write accessor.
    fn set(&self) -> Option<Setter>;

    /// The currently effective read hook.
    fn on_get(&self) -> Option<GetHook>;

    /// The currently effective write hook.
    fn on_set(&self) -> Option<SetHook>;

    /// The chain this controller owns, if it owns one.
    fn descriptor_chain(&self) -> Option<&Self::Chain>;

    /// The controlled property's key.
    fn key(&self) -> &str;

    /// The host object this controller instruments (shared, never owned).
    fn object(&self) -> &Rc<RefCell<HostObject>>;

    /// Appends a descriptor to the chain, making it current. Without a
    /// chain this is a no-op.
    fn add_descriptor(&mut self, descriptor: ControlledDescriptor) -> &mut Self;

    /// Installation placeholder. Wiring the live accessor pair onto the
    /// host object belongs to an external installer.
    fn attach(&mut self) -> &mut Self;

    /// Whether the chain entry at `index` is active, reading only the
    /// uniform scalar form; a per-direction flag, a missing entry, and a
    /// missing chain all report `false`.
    fn is_active(&self, index: usize) -> bool;

    /// The chain entry at `index`; `None` when out of range or without a
    /// chain.
    fn get_descriptor(&self, index: usize) -> Option<&ControlledDescriptor>;

    /// Removes the chain entry at `index`. Without a chain this is a no-op.
    fn remove_descriptor(&mut self, index: usize) -> &mut Self;

    /// Placeholder for flipping a chain entry's activation. Currently a
    /// no-op: entries keep their recorded state, and live gating belongs to
    /// the installation layer.
    fn set_active(&mut self, index: usize, active: bool) -> &mut Self;
}

/// Concrete chain-owning controller state, generic over the chain
/// collaborator.
pub struct ControllerBase<C: DescriptorChain> {
    object: Rc<RefCell<HostObject>>,
    key: String,
    descriptor: ControlledDescriptor,
    chain: Option<C>,
}

impl<C: DescriptorChain> ControllerBase<C> {
    /// Creates a chainless controller: `descriptor` is the sole current
    /// descriptor.
    pub fn new(
        object: Rc<RefCell<HostObject>>,
        key: impl Into<String>,
        descriptor: ControlledDescriptor,
    ) -> Self {
        Self {
            object,
            key: key.into(),
            descriptor,
            chain: None,
        }
    }

    /// Creates a chain-owning controller. The chain is constructed once,
    /// here, seeded with a copy of the fallback descriptor as its origin.
    pub fn with_chain(
        object: Rc<RefCell<HostObject>>,
        key: impl Into<String>,
        descriptor: ControlledDescriptor,
    ) -> Self {
        let chain = C::with_initial(descriptor.clone());
        Self {
            object,
            key: key.into(),
            descriptor,
            chain: Some(chain),
        }
    }
}

impl<C: DescriptorChain> PropertyControl for ControllerBase<C> {
    type Chain = C;

    fn descriptor(&self) -> Option<&ControlledDescriptor> {
        match &self.chain {
            Some(chain) => chain.last(),
            None => Some(&self.descriptor),
        }
    }

    fn descriptors(&self) -> Option<&[ControlledDescriptor]> {
        None
    }

    fn previous_descriptor(&self) -> Option<&PriorDescriptor> {
        self.descriptor().and_then(|d| d.previous.as_ref())
    }

    fn private_key(&self) -> Option<&str> {
        self.descriptor().map(|d| d.private_key.as_str())
    }

    fn get(&self) -> Option<Getter> {
        self.descriptor().and_then(|d| d.get.clone())
    }

    fn set(&self) -> Option<Setter> {
        self.descriptor().and_then(|d| d.set.clone())
    }

    fn on_get(&self) -> Option<GetHook> {
        self.descriptor().and_then(|d| d.on_get.clone())
    }

    fn on_set(&self) -> Option<SetHook> {
        self.descriptor().and_then(|d| d.on_set.clone())
    }

    fn descriptor_chain(&self) -> Option<&C> {
        self.chain.as_ref()
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn object(&self) -> &Rc<RefCell<HostObject>> {
        &self.object
    }

    fn add_descriptor(&mut self, descriptor: ControlledDescriptor) -> &mut Self {
        if let Some(chain) = &mut self.chain {
            chain.add(descriptor);
        }
        self
    }

    fn attach(&mut self) -> &mut Self {
        self
    }

    fn is_active(&self, index: usize) -> bool {
        match self.chain.as_ref().and_then(|chain| chain.get(index)) {
            Some(entry) => entry.active.as_uniform().unwrap_or(false),
            None => false,
        }
    }

    fn get_descriptor(&self, index: usize) -> Option<&ControlledDescriptor> {
        self.chain.as_ref().and_then(|chain| chain.get(index))
    }

    fn remove_descriptor(&mut self, index: usize) -> &mut Self {
        if let Some(chain) = &mut self.chain {
            chain.delete(index);
        }
        self
    }

    fn set_active(&mut self, _index: usize, _active: bool) -> &mut Self {
        self
    }
}

/// The default property controller: a [`ControllerBase`] over the
/// [`ChainStore`] collaborator. Adds nothing beyond pinning the chain type.
pub type PropertyController = ControllerBase<ChainStore>;
