//! `snr` — Snare demonstration shell.
//!
//! Drives the engine end to end: builds a host object, plays the installer
//! role the core leaves external (moving the real value into the private
//! slot and wiring the controller's accessor pair into the public one), and
//! walks through activation toggles and queries.

use std::cell::RefCell;
use std::rc::Rc;

use snare_core::control::active::Direction;
use snare_core::control::controller::DescriptorController;
use snare_core::control::descriptor::DescriptorConfig;
use snare_core::error::SnareResult;
use snare_core::host::descriptor::{Getter, NativeDescriptor, Setter};
use snare_core::host::object::HostObject;
use snare_core::host::value::PropertyValue;

fn main() -> SnareResult<()> {
    let host = Rc::new(RefCell::new(HostObject::new()));
    host.borrow_mut()
        .write_property("age", PropertyValue::Int(30))?;

    // Accessors that route through the private storage slot.
    let get: Getter = Rc::new(|host| host.read_property("_age"));
    let set: Setter = Rc::new(|host, value| {
        // The private slot is a plain writable data slot; this cannot fail.
        let _ = host.write_property("_age", value);
    });

    let config = DescriptorConfig {
        get: Some(get),
        set: Some(set),
        ..DescriptorConfig::default()
    };
    let mut controller = DescriptorController::new(Rc::clone(&host), "age", config);
    println!("controlling `{}` (private slot `{}`)", controller.key(), controller.private_key());

    // Installer role: stash the current value, then replace the public slot
    // with the controller's accessor pair.
    {
        let mut object = host.borrow_mut();
        let current = object.read_property("age");
        object.write_property(controller.private_key(), current)?;
        object.define_property(
            "age",
            NativeDescriptor::accessor(controller.get(), controller.set()),
        )?;
    }

    println!("read through accessor: age = {}", host.borrow().read_property("age"));
    host.borrow_mut()
        .write_property("age", PropertyValue::Int(31))?;
    println!("after write: age = {}", host.borrow().read_property("age"));

    controller.deactivate(Direction::OnGet);
    println!("deactivated onGet (scalar flag collapses both directions):");
    for direction in [Direction::Both, Direction::OnGet, Direction::OnSet] {
        println!("  active({direction}) = {}", controller.is_active(direction));
    }

    if let Err(err) = controller.is_active_named("sideways") {
        println!("rejected query: {err}");
    }

    Ok(())
}
