//! Native property descriptors.
//!
//! A [`NativeDescriptor`] describes one slot of a host object: either a plain
//! data slot (value + writability) or an accessor slot (getter/setter pair).
//! Accessor functions are shared, single-threaded callbacks (`Rc<dyn Fn>`);
//! the engine is synchronous throughout and makes no `Send`/`Sync` claims.

use std::fmt;
use std::rc::Rc;

use crate::host::object::HostObject;
use crate::host::value::PropertyValue;

/// An accessor-slot getter: resolves the property's current value.
pub type Getter = Rc<dyn Fn(&HostObject) -> PropertyValue>;

/// An accessor-slot setter: consumes the incoming value.
pub type Setter = Rc<dyn Fn(&mut HostObject, PropertyValue)>;

/// One property slot of a [`HostObject`].
#[derive(Clone)]
pub enum NativeDescriptor {
    /// A plain data slot.
    Data {
        /// The stored value.
        value: PropertyValue,
        /// Whether [`HostObject::write_property`] may replace the value.
        writable: bool,
        /// Whether the slot shows up in enumeration.
        enumerable: bool,
        /// Whether the slot may be redefined or deleted.
        configurable: bool,
    },
    /// An accessor slot: reads and writes dispatch to the stored functions.
    Accessor {
        /// Getter invoked by [`HostObject::read_property`], if any.
        get: Option<Getter>,
        /// Setter invoked by [`HostObject::write_property`], if any.
        set: Option<Setter>,
        /// Whether the slot shows up in enumeration.
        enumerable: bool,
        /// Whether the slot may be redefined or deleted.
        configurable: bool,
    },
}

impl NativeDescriptor {
    /// Creates a writable, enumerable, configurable data slot.
    pub fn data(value: PropertyValue) -> Self {
        Self::Data {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Creates a read-only (but enumerable, configurable) data slot.
    pub fn read_only(value: PropertyValue) -> Self {
        Self::Data {
            value,
            writable: false,
            enumerable: true,
            configurable: true,
        }
    }

    /// Creates an enumerable, configurable accessor slot.
    pub fn accessor(get: Option<Getter>, set: Option<Setter>) -> Self {
        Self::Accessor {
            get,
            set,
            enumerable: true,
            configurable: true,
        }
    }

    /// Returns `true` if this is an accessor slot.
    #[inline]
    pub fn is_accessor(&self) -> bool {
        matches!(self, Self::Accessor { .. })
    }

    /// Returns the stored value of a data slot, or `None` for accessors.
    pub fn value(&self) -> Option<&PropertyValue> {
        match self {
            Self::Data { value, .. } => Some(value),
            Self::Accessor { .. } => None,
        }
    }

    /// Returns `true` if a write may replace this slot's value.
    ///
    /// Accessor slots report `true` exactly when a setter is present.
    pub fn writable(&self) -> bool {
        match self {
            Self::Data { writable, .. } => *writable,
            Self::Accessor { set, .. } => set.is_some(),
        }
    }

    /// Returns the slot's enumerable flag.
    pub fn enumerable(&self) -> bool {
        match self {
            Self::Data { enumerable, .. } | Self::Accessor { enumerable, .. } => *enumerable,
        }
    }

    /// Returns the slot's configurable flag.
    pub fn configurable(&self) -> bool {
        match self {
            Self::Data { configurable, .. } | Self::Accessor { configurable, .. } => *configurable,
        }
    }
}

impl fmt::Debug for NativeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data {
                value,
                writable,
                enumerable,
                configurable,
            } => f
                .debug_struct("Data")
                .field("value", value)
                .field("writable", writable)
                .field("enumerable", enumerable)
                .field("configurable", configurable)
                .finish(),
            Self::Accessor {
                get,
                set,
                enumerable,
                configurable,
            } => f
                .debug_struct("Accessor")
                .field("get", &get.is_some())
                .field("set", &set.is_some())
                .field("enumerable", enumerable)
                .field("configurable", configurable)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_constructor_defaults() {
        let desc = NativeDescriptor::data(PropertyValue::Int(1));
        assert!(!desc.is_accessor());
        assert!(desc.writable());
        assert!(desc.enumerable());
        assert!(desc.configurable());
        assert_eq!(desc.value(), Some(&PropertyValue::Int(1)));
    }

    #[test]
    fn read_only_rejects_writability() {
        let desc = NativeDescriptor::read_only(PropertyValue::Bool(true));
        assert!(!desc.writable());
        assert!(desc.configurable());
    }

    #[test]
    fn accessor_writability_tracks_setter() {
        let get: Getter = Rc::new(|_| PropertyValue::Int(7));
        let without_setter = NativeDescriptor::accessor(Some(get.clone()), None);
        assert!(without_setter.is_accessor());
        assert!(!without_setter.writable());
        assert_eq!(without_setter.value(), None);

        let set: Setter = Rc::new(|_, _| {});
        let with_setter = NativeDescriptor::accessor(Some(get), Some(set));
        assert!(with_setter.writable());
    }
}
