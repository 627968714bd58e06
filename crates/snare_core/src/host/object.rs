//! The host object property table.
//!
//! # Access model
//!
//! Rust has no transparent property-access traps, so a [`HostObject`] exposes
//! explicit [`read_property`][HostObject::read_property] /
//! [`write_property`][HostObject::write_property] methods in place of field
//! syntax. That is a contract change at the boundary only: an installed
//! accessor slot still dispatches to its getter/setter exactly as a trapped
//! field access would.
//!
//! # Descriptor snapshots
//!
//! [`own_descriptor`][HostObject::own_descriptor] returns a point-in-time
//! clone of the slot. Controllers capture it once at construction; later
//! mutation of the host does not retroactively change a captured snapshot.

use std::collections::HashMap;

use crate::error::{SnareError, SnareResult};
use crate::host::descriptor::NativeDescriptor;
use crate::host::value::PropertyValue;

/// A dynamic object with string-keyed property slots.
#[derive(Debug, Default)]
pub struct HostObject {
    properties: HashMap<String, NativeDescriptor>,
}

impl HostObject {
    /// Creates an empty host object with no properties.
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
        }
    }

    /// Returns `true` if this object has a property named `key`.
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns a point-in-time snapshot of the slot at `key`, or `None` if
    /// the property does not exist.
    ///
    /// Accessor snapshots share their getter/setter functions with the live
    /// slot (`Rc` clones); the flags and any data value are copied.
    pub fn own_descriptor(&self, key: &str) -> Option<NativeDescriptor> {
        self.properties.get(key).cloned()
    }

    /// Reads the property at `key`.
    ///
    /// Data slots return a clone of the stored value. Accessor slots dispatch
    /// to their getter, or yield [`PropertyValue::Undefined`] when no getter
    /// is present. Missing properties also yield `Undefined`.
    pub fn read_property(&self, key: &str) -> PropertyValue {
        match self.properties.get(key) {
            Some(NativeDescriptor::Data { value, .. }) => value.clone(),
            Some(NativeDescriptor::Accessor { get: Some(get), .. }) => get.clone()(self),
            Some(NativeDescriptor::Accessor { get: None, .. }) | None => {
                PropertyValue::Undefined
            }
        }
    }

    /// Writes `value` to the property at `key`.
    ///
    /// Updates an existing writable data slot, dispatches to an accessor
    /// slot's setter, or creates a new writable data slot when the property
    /// does not exist.
    ///
    /// Returns [`SnareError::ReadOnlyProperty`] if the slot is a non-writable
    /// data slot or an accessor slot without a setter.
    pub fn write_property(&mut self, key: &str, value: PropertyValue) -> SnareResult<()> {
        // Resolve the dispatch target before any mutation; the setter clone
        // releases the borrow on the table.
        let setter = match self.properties.get(key) {
            Some(NativeDescriptor::Data { writable: false, .. })
            | Some(NativeDescriptor::Accessor { set: None, .. }) => {
                return Err(SnareError::ReadOnlyProperty(key.to_string()));
            }
            Some(NativeDescriptor::Accessor { set: Some(set), .. }) => Some(set.clone()),
            Some(NativeDescriptor::Data { .. }) | None => None,
        };

        if let Some(set) = setter {
            set(self, value);
        } else if let Some(NativeDescriptor::Data { value: slot, .. }) =
            self.properties.get_mut(key)
        {
            *slot = value;
        } else {
            self.properties
                .insert(key.to_string(), NativeDescriptor::data(value));
        }
        Ok(())
    }

    /// Defines or redefines the slot at `key` with an explicit descriptor.
    ///
    /// An existing non-configurable slot constrains redefinition:
    ///
    /// * the configurable flag cannot change from `false` to `true`,
    /// * the enumerable flag cannot change,
    /// * a data slot's writable flag cannot change from `false` to `true`,
    /// * the slot kind (data vs accessor) cannot change.
    ///
    /// Returns [`SnareError::NonConfigurable`] when a constraint is violated.
    pub fn define_property(&mut self, key: &str, descriptor: NativeDescriptor) -> SnareResult<()> {
        if let Some(existing) = self.properties.get(key)
            && !existing.configurable()
        {
            let kind_changed = existing.is_accessor() != descriptor.is_accessor();
            let unlocks_write = matches!(
                (existing, &descriptor),
                (
                    NativeDescriptor::Data {
                        writable: false, ..
                    },
                    NativeDescriptor::Data { writable: true, .. },
                )
            );
            if descriptor.configurable()
                || descriptor.enumerable() != existing.enumerable()
                || kind_changed
                || unlocks_write
            {
                return Err(SnareError::NonConfigurable(key.to_string()));
            }
        }
        self.properties.insert(key.to_string(), descriptor);
        Ok(())
    }

    /// Deletes the property at `key`.
    ///
    /// Returns `true` if the property was removed or did not exist, `false`
    /// if the slot is non-configurable and therefore cannot be deleted.
    pub fn delete_property(&mut self, key: &str) -> bool {
        match self.properties.get(key) {
            None => true,
            Some(desc) if !desc.configurable() => false,
            Some(_) => {
                self.properties.remove(key);
                true
            }
        }
    }

    /// Returns the number of property slots on this object.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}
