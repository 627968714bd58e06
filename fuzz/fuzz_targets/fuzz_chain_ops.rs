#![no_main]

use std::cell::RefCell;
use std::rc::Rc;

use libfuzzer_sys::fuzz_target;
use snare_core::control::active::ActiveState;
use snare_core::control::chain::DescriptorChain;
use snare_core::control::descriptor::ControlledDescriptor;
use snare_core::control::property::{PropertyControl, PropertyController};
use snare_core::host::object::HostObject;

// Fuzz random `add` / `remove` / `query` operations on a chain-owning
// property controller and verify that the chain never loses index
// consistency and that descriptor resolution stays total.
//
// Each operation is encoded in two bytes:
//   byte 0  bits [1:0] – operation selector (0=add, 1=remove, 2=query, 3=set_active)
//           bits [7:2] – flag payload (active / enabled bits for new entries)
//   byte 1            – index operand, taken modulo a small window so that
//                       both in-range and out-of-range lookups are exercised
//
// A small bounded op count keeps individual runs fast while still driving
// the chain through growth, removal-with-restamping, and origin fallback.
fuzz_target!(|data: &[u8]| {
    let host = Rc::new(RefCell::new(HostObject::new()));
    let mut ctl = PropertyController::with_chain(host, "p", ControlledDescriptor::new("p"));
    const MAX_OPS: usize = 256;
    let mut ops = 0;

    for chunk in data.chunks_exact(2) {
        if ops >= MAX_OPS {
            break;
        }
        ops += 1;

        let op_byte = chunk[0];
        let index = (chunk[1] as usize) % (ctl.descriptor_chain().unwrap().len() + 4);

        match op_byte & 0x3 {
            0 => {
                let mut entry = ControlledDescriptor::new("p");
                entry.enabled = op_byte & 0x4 != 0;
                entry.active = ActiveState::Uniform(op_byte & 0x8 != 0);
                ctl.add_descriptor(entry);
            }
            1 => {
                // Out-of-range removals must be refused without panicking.
                ctl.remove_descriptor(index);
            }
            2 => {
                // Queries are total: they never panic, in or out of range.
                let _ = ctl.is_active(index);
                let _ = ctl.get_descriptor(index);
                let _ = ctl.previous_descriptor();
            }
            _ => {
                // Documented no-op; must leave the entry untouched.
                let before = ctl.get_descriptor(index).map(|d| d.active);
                ctl.set_active(index, op_byte & 0x4 != 0);
                let after = ctl.get_descriptor(index).map(|d| d.active);
                assert_eq!(before, after);
            }
        }
    }

    // Post-conditions: stamped indices agree with positions, and the current
    // descriptor resolves even after arbitrary removals (origin fallback).
    let chain = ctl.descriptor_chain().unwrap();
    for position in 0..chain.len() {
        let entry = chain.get(position).expect("entry within len must exist");
        assert_eq!(entry.index, Some(position));
    }
    assert!(chain.get(chain.len()).is_none());
    assert!(ctl.descriptor().is_some());
});
