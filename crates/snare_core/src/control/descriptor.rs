//! Controlled descriptor records.
//!
//! A [`ControlledDescriptor`] is one version of an instrumented property: the
//! accessor functions that fire when interception is live, the side-channel
//! hooks invoked alongside them, the activation and enabled flags, and a
//! non-owning link to whatever it superseded. Records are plain data; the
//! state machines that mutate them live in
//! [`controller`][crate::control::controller] and
//! [`property`][crate::control::property].

use std::fmt;
use std::rc::Rc;

use crate::control::active::ActiveState;
use crate::host::descriptor::{Getter, NativeDescriptor, Setter};
use crate::host::object::HostObject;
use crate::host::value::PropertyValue;

/// Side-channel callback fired on intercepted reads, receiving the host and
/// the resolved value.
pub type GetHook = Rc<dyn Fn(&HostObject, &PropertyValue)>;

/// Side-channel callback fired on intercepted writes, receiving the host and
/// the incoming value.
pub type SetHook = Rc<dyn Fn(&HostObject, &PropertyValue)>;

/// Non-owning back-reference to the state a descriptor superseded.
#[derive(Clone, Debug)]
pub enum PriorDescriptor {
    /// Snapshot of the host object's own descriptor at capture time.
    Native(NativeDescriptor),
    /// An explicitly supplied controlled predecessor.
    Controlled(Box<ControlledDescriptor>),
    /// Index of the predecessor within the owning chain. Resolution goes
    /// through the chain and degrades to "absent" if the index has gone
    /// stale, so the link can never dangle.
    Chained(usize),
}

/// One version of a controlled property.
#[derive(Clone)]
pub struct ControlledDescriptor {
    /// The property identifier on the host object.
    pub key: String,
    /// Storage key for the real value beneath the public accessor slot.
    pub private_key: String,
    /// Which directions of interception are live.
    pub active: ActiveState,
    /// Master on/off flag, orthogonal to `active`. Gating of dispatch on
    /// this flag belongs to the installation layer, not this record.
    pub enabled: bool,
    /// Underlying accessor invoked on intercepted reads.
    pub get: Option<Getter>,
    /// Underlying accessor invoked on intercepted writes.
    pub set: Option<Setter>,
    /// Side-channel read hook.
    pub on_get: Option<GetHook>,
    /// Side-channel write hook.
    pub on_set: Option<SetHook>,
    /// Enumerable flag forwarded to the host slot on installation.
    pub enumerable: Option<bool>,
    /// Configurable flag forwarded to the host slot on installation.
    pub configurable: Option<bool>,
    /// Position in the owning chain, if any.
    pub index: Option<usize>,
    /// What this descriptor replaced.
    pub previous: Option<PriorDescriptor>,
}

/// Partial configuration for building a [`ControlledDescriptor`].
///
/// Every field is optional; defaults are applied once, at construction, by
/// [`ControlledDescriptor::with_config`] or
/// [`DescriptorController::new`][crate::control::controller::DescriptorController::new].
#[derive(Clone, Default)]
pub struct DescriptorConfig {
    /// Activation flag; defaults to uniformly live.
    pub active: Option<ActiveState>,
    /// Enabled flag; defaults to `true`.
    pub enabled: Option<bool>,
    /// Underlying read accessor.
    pub get: Option<Getter>,
    /// Underlying write accessor.
    pub set: Option<Setter>,
    /// Side-channel read hook.
    pub on_get: Option<GetHook>,
    /// Side-channel write hook.
    pub on_set: Option<SetHook>,
    /// Private storage key; defaults to the key prefixed with `_`.
    pub private_key: Option<String>,
    /// Enumerable flag for the installed slot.
    pub enumerable: Option<bool>,
    /// Configurable flag for the installed slot.
    pub configurable: Option<bool>,
    /// Chain position.
    pub index: Option<usize>,
    /// Explicit predecessor link.
    pub previous: Option<PriorDescriptor>,
}

impl ControlledDescriptor {
    /// Creates a descriptor for `key` with record-level defaults: uniformly
    /// active, enabled, private key `_<key>`, no accessors, no history.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            private_key: format!("_{key}"),
            key,
            active: ActiveState::default(),
            enabled: true,
            get: None,
            set: None,
            on_get: None,
            on_set: None,
            enumerable: None,
            configurable: None,
            index: None,
            previous: None,
        }
    }

    /// Creates a descriptor for `key` from a partial configuration, applying
    /// record-level defaults for every absent field.
    ///
    /// This constructor performs no host lookup; capturing the host's own
    /// descriptor as the predecessor is the
    /// [`DescriptorController`][crate::control::controller::DescriptorController]'s
    /// job.
    pub fn with_config(key: impl Into<String>, config: DescriptorConfig) -> Self {
        let key = key.into();
        Self {
            private_key: config.private_key.unwrap_or_else(|| format!("_{key}")),
            key,
            active: config.active.unwrap_or_default(),
            enabled: config.enabled.unwrap_or(true),
            get: config.get,
            set: config.set,
            on_get: config.on_get,
            on_set: config.on_set,
            enumerable: config.enumerable,
            configurable: config.configurable,
            index: config.index,
            previous: config.previous,
        }
    }
}

impl fmt::Debug for ControlledDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledDescriptor")
            .field("key", &self.key)
            .field("private_key", &self.private_key)
            .field("active", &self.active)
            .field("enabled", &self.enabled)
            .field("get", &self.get.is_some())
            .field("set", &self.set.is_some())
            .field("on_get", &self.on_get.is_some())
            .field("on_set", &self.on_set.is_some())
            .field("enumerable", &self.enumerable)
            .field("configurable", &self.configurable)
            .field("index", &self.index)
            .field("previous", &self.previous)
            .finish()
    }
}
