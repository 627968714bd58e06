//! The standalone per-descriptor controller.
//!
//! A [`DescriptorController`] owns the live interception state for one
//! property of one host object: the activation toggles, the enabled flag,
//! the accessor and hook references, and the single back-reference to
//! whatever its descriptor replaced. It does not install anything on the
//! host — an installer reads the accessor functions off the controller's
//! descriptor and wires them into the object's slot.

use std::cell::RefCell;
use std::rc::Rc;

use crate::control::active::{ActiveState, Direction};
use crate::control::descriptor::{
    ControlledDescriptor, DescriptorConfig, GetHook, PriorDescriptor, SetHook,
};
use crate::error::SnareResult;
use crate::host::descriptor::{Getter, Setter};
use crate::host::object::HostObject;

/// Controls interception of one property on one host object.
pub struct DescriptorController {
    object: Rc<RefCell<HostObject>>,
    descriptor: ControlledDescriptor,
}

impl DescriptorController {
    /// Default activation state applied when a configuration leaves `active`
    /// unset.
    pub const DEFAULT_ACTIVE: bool = true;

    /// Default enabled state applied when a configuration leaves `enabled`
    /// unset.
    pub const DEFAULT_ENABLED: bool = true;

    /// Creates a controller for `key` on `object`, filling every absent
    /// configuration field:
    ///
    /// * `active` — [`DEFAULT_ACTIVE`][Self::DEFAULT_ACTIVE], uniform;
    /// * `enabled` — [`DEFAULT_ENABLED`][Self::DEFAULT_ENABLED];
    /// * `previous` — a point-in-time snapshot of the object's own
    ///   descriptor at `key` (absent when the object has no such property);
    /// * `private_key` — `key` prefixed with an underscore.
    pub fn new(
        object: Rc<RefCell<HostObject>>,
        key: impl Into<String>,
        config: DescriptorConfig,
    ) -> Self {
        let key = key.into();
        let previous = match config.previous {
            Some(previous) => Some(previous),
            None => object
                .borrow()
                .own_descriptor(&key)
                .map(PriorDescriptor::Native),
        };
        let descriptor = ControlledDescriptor {
            private_key: config
                .private_key
                .unwrap_or_else(|| format!("_{key}")),
            key,
            active: config
                .active
                .unwrap_or(ActiveState::Uniform(Self::DEFAULT_ACTIVE)),
            enabled: config.enabled.unwrap_or(Self::DEFAULT_ENABLED),
            get: config.get,
            set: config.set,
            on_get: config.on_get,
            on_set: config.on_set,
            enumerable: config.enumerable,
            configurable: config.configurable,
            index: config.index,
            previous,
        };
        Self { object, descriptor }
    }

    // ── State queries ─────────────────────────────────────────────────────────

    /// The controlled property's key.
    pub fn key(&self) -> &str {
        &self.descriptor.key
    }

    /// The host object this controller instruments (shared, never owned).
    pub fn object(&self) -> &Rc<RefCell<HostObject>> {
        &self.object
    }

    /// The full descriptor record this controller owns.
    pub fn descriptor(&self) -> &ControlledDescriptor {
        &self.descriptor
    }

    /// Consumes the controller, yielding its descriptor record — for
    /// appending the controller's state to a chain.
    pub fn into_descriptor(self) -> ControlledDescriptor {
        self.descriptor
    }

    /// The current activation flag.
    pub fn active(&self) -> ActiveState {
        self.descriptor.active
    }

    /// The current enabled flag.
    pub fn enabled(&self) -> bool {
        self.descriptor.enabled
    }

    /// The private storage key.
    pub fn private_key(&self) -> &str {
        &self.descriptor.private_key
    }

    /// The descriptor's position in its owning chain, if any.
    pub fn index(&self) -> Option<usize> {
        self.descriptor.index
    }

    /// What this controller's descriptor replaced.
    pub fn previous(&self) -> Option<&PriorDescriptor> {
        self.descriptor.previous.as_ref()
    }

    /// The underlying read accessor.
    pub fn get(&self) -> Option<Getter> {
        self.descriptor.get.clone()
    }

    /// The underlying write accessor.
    pub fn set(&self) -> Option<Setter> {
        self.descriptor.set.clone()
    }

    /// The side-channel read hook.
    pub fn on_get(&self) -> Option<GetHook> {
        self.descriptor.on_get.clone()
    }

    /// The side-channel write hook.
    pub fn on_set(&self) -> Option<SetHook> {
        self.descriptor.on_set.clone()
    }

    // ── Toggles ───────────────────────────────────────────────────────────────

    /// Turns interception on for `direction`, following the
    /// [toggle precedence][crate::control::active].
    pub fn activate(&mut self, direction: Direction) -> &mut Self {
        self.descriptor.active.apply(direction, true);
        self
    }

    /// Turns interception off for `direction`, following the
    /// [toggle precedence][crate::control::active].
    pub fn deactivate(&mut self, direction: Direction) -> &mut Self {
        self.descriptor.active.apply(direction, false);
        self
    }

    /// Sets the enabled flag. Dispatch is not gated here; the installation
    /// layer decides what a disabled descriptor means for live accesses.
    pub fn enable(&mut self) -> &mut Self {
        self.descriptor.enabled = true;
        self
    }

    /// Clears the enabled flag.
    pub fn disable(&mut self) -> &mut Self {
        self.descriptor.enabled = false;
        self
    }

    /// Whether interception is live for `direction`.
    pub fn is_active(&self, direction: Direction) -> bool {
        self.descriptor.active.covers(direction)
    }

    /// String-typed variant of [`is_active`][Self::is_active] for dynamic
    /// callers.
    ///
    /// Returns [`SnareError::InvalidDirection`][crate::error::SnareError::InvalidDirection]
    /// for any name outside `both` / `onGet` / `onSet`.
    pub fn is_active_named(&self, direction: &str) -> SnareResult<bool> {
        Ok(self.is_active(direction.parse::<Direction>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnareError;
    use crate::host::descriptor::NativeDescriptor;
    use crate::host::value::PropertyValue;

    fn host_with_age() -> Rc<RefCell<HostObject>> {
        let host = Rc::new(RefCell::new(HostObject::new()));
        host.borrow_mut()
            .write_property("age", PropertyValue::Int(30))
            .unwrap();
        host
    }

    fn controller(config: DescriptorConfig) -> DescriptorController {
        DescriptorController::new(host_with_age(), "age", config)
    }

    // ── Construction defaults ─────────────────────────────────────────────────

    #[test]
    fn test_defaults_active_and_enabled() {
        let ctl = controller(DescriptorConfig::default());
        assert_eq!(ctl.active(), ActiveState::Uniform(true));
        assert!(ctl.enabled());
        assert_eq!(ctl.private_key(), "_age");
        assert_eq!(ctl.key(), "age");
    }

    #[test]
    fn test_previous_captured_from_host() {
        let ctl = controller(DescriptorConfig::default());
        match ctl.previous() {
            Some(PriorDescriptor::Native(native)) => {
                assert_eq!(native.value(), Some(&PropertyValue::Int(30)));
            }
            other => panic!("expected a native snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_previous_absent_when_host_lacks_property() {
        let host = Rc::new(RefCell::new(HostObject::new()));
        let ctl = DescriptorController::new(host, "ghost", DescriptorConfig::default());
        assert!(ctl.previous().is_none());
    }

    #[test]
    fn test_explicit_previous_wins_over_host_snapshot() {
        let supplied = ControlledDescriptor::new("age");
        let config = DescriptorConfig {
            previous: Some(PriorDescriptor::Controlled(Box::new(supplied))),
            ..DescriptorConfig::default()
        };
        let ctl = controller(config);
        assert!(matches!(
            ctl.previous(),
            Some(PriorDescriptor::Controlled(_))
        ));
    }

    #[test]
    fn test_snapshot_is_point_in_time() {
        let host = host_with_age();
        let ctl = DescriptorController::new(Rc::clone(&host), "age", DescriptorConfig::default());
        host.borrow_mut()
            .write_property("age", PropertyValue::Int(99))
            .unwrap();
        match ctl.previous() {
            Some(PriorDescriptor::Native(native)) => {
                assert_eq!(native.value(), Some(&PropertyValue::Int(30)));
            }
            other => panic!("expected a native snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_config_overrides_defaults() {
        let config = DescriptorConfig {
            active: Some(ActiveState::Uniform(false)),
            enabled: Some(false),
            private_key: Some("shadow_age".to_string()),
            ..DescriptorConfig::default()
        };
        let ctl = controller(config);
        assert_eq!(ctl.active(), ActiveState::Uniform(false));
        assert!(!ctl.enabled());
        assert_eq!(ctl.private_key(), "shadow_age");
    }

    // ── Activation queries ────────────────────────────────────────────────────

    #[test]
    fn test_is_active_both_truth_table() {
        let mut ctl = controller(DescriptorConfig::default());
        assert!(ctl.is_active(Direction::Both));

        ctl.descriptor.active = ActiveState::PerDirection {
            on_get: true,
            on_set: true,
        };
        assert!(ctl.is_active(Direction::Both));

        ctl.descriptor.active = ActiveState::PerDirection {
            on_get: true,
            on_set: false,
        };
        assert!(!ctl.is_active(Direction::Both));
    }

    #[test]
    fn test_scalar_active_answers_both_directions() {
        let config = DescriptorConfig {
            active: Some(ActiveState::Uniform(false)),
            ..DescriptorConfig::default()
        };
        let ctl = controller(config);
        assert!(!ctl.is_active(Direction::OnGet));
        assert!(!ctl.is_active(Direction::OnSet));
    }

    #[test]
    fn test_structured_active_reads_sub_fields() {
        let config = DescriptorConfig {
            active: Some(ActiveState::per_direction(Some(true), None)),
            ..DescriptorConfig::default()
        };
        let ctl = controller(config);
        assert!(ctl.is_active(Direction::OnGet));
        assert!(!ctl.is_active(Direction::OnSet));
    }

    #[test]
    fn test_is_active_named_rejects_unknown_direction() {
        let ctl = controller(DescriptorConfig::default());
        assert_eq!(ctl.is_active_named("both"), Ok(true));
        let err = ctl.is_active_named("invalid-value").unwrap_err();
        assert_eq!(
            err,
            SnareError::InvalidDirection("invalid-value".to_string())
        );
    }

    // ── Toggles ───────────────────────────────────────────────────────────────

    #[test]
    fn test_deactivate_direction_on_scalar_collapses_to_scalar() {
        let mut ctl = controller(DescriptorConfig::default());
        ctl.deactivate(Direction::OnGet);
        // The scalar is replaced wholesale, so the other direction goes dead
        // with it.
        assert_eq!(ctl.active(), ActiveState::Uniform(false));
        assert!(!ctl.is_active(Direction::OnSet));
    }

    #[test]
    fn test_deactivate_direction_on_structured_mutates_in_place() {
        let config = DescriptorConfig {
            active: Some(ActiveState::PerDirection {
                on_get: true,
                on_set: false,
            }),
            ..DescriptorConfig::default()
        };
        let mut ctl = controller(config);
        ctl.deactivate(Direction::OnGet);
        assert_eq!(
            ctl.active(),
            ActiveState::PerDirection {
                on_get: false,
                on_set: false,
            }
        );
    }

    #[test]
    fn test_activate_both_collapses_structured_form() {
        let config = DescriptorConfig {
            active: Some(ActiveState::per_direction(Some(true), Some(false))),
            ..DescriptorConfig::default()
        };
        let mut ctl = controller(config);
        ctl.activate(Direction::Both);
        assert_eq!(ctl.active(), ActiveState::Uniform(true));
    }

    #[test]
    fn test_enable_disable_are_unconditional() {
        let mut ctl = controller(DescriptorConfig::default());
        ctl.disable();
        assert!(!ctl.enabled());
        ctl.enable();
        assert!(ctl.enabled());
        // Orthogonal to activation.
        ctl.disable().deactivate(Direction::Both);
        assert!(!ctl.enabled());
        assert!(!ctl.is_active(Direction::Both));
    }

    #[test]
    fn test_toggles_chain_fluently() {
        let mut ctl = controller(DescriptorConfig::default());
        ctl.deactivate(Direction::Both).enable().activate(Direction::OnGet);
        assert_eq!(ctl.active(), ActiveState::Uniform(true));
        assert!(ctl.enabled());
    }

    #[test]
    fn test_into_descriptor_keeps_state() {
        let mut ctl = controller(DescriptorConfig::default());
        ctl.disable();
        let desc = ctl.into_descriptor();
        assert_eq!(desc.key, "age");
        assert!(!desc.enabled);
        assert!(desc.previous.is_some());
    }
}
