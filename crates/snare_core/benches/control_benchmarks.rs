use std::cell::RefCell;
use std::rc::Rc;

use criterion::{Criterion, criterion_group, criterion_main};
use snare_core::control::active::{ActiveState, Direction};
use snare_core::control::chain::{ChainStore, DescriptorChain};
use snare_core::control::controller::DescriptorController;
use snare_core::control::descriptor::{ControlledDescriptor, DescriptorConfig};
use snare_core::control::property::{PropertyControl, PropertyController};
use snare_core::host::object::HostObject;
use snare_core::host::value::PropertyValue;

// ---------------------------------------------------------------------------
// Chain operations
// ---------------------------------------------------------------------------

fn bench_chain_append(c: &mut Criterion) {
    c.bench_function("chain_append_8_entries", |b| {
        b.iter(|| {
            let mut chain = ChainStore::with_initial(ControlledDescriptor::new("p"));
            for _ in 0..8 {
                chain.add(ControlledDescriptor::new("p"));
            }
            chain.len()
        });
    });
}

fn bench_chain_lookup(c: &mut Criterion) {
    let mut chain = ChainStore::with_initial(ControlledDescriptor::new("p"));
    for _ in 0..8 {
        chain.add(ControlledDescriptor::new("p"));
    }

    c.bench_function("chain_get_mid", |b| {
        b.iter(|| chain.get(4).map(|d| d.index));
    });

    c.bench_function("chain_last", |b| {
        b.iter(|| chain.last().map(|d| d.index));
    });
}

fn bench_chain_delete_restamp(c: &mut Criterion) {
    c.bench_function("chain_delete_front_of_8", |b| {
        b.iter(|| {
            let mut chain = ChainStore::with_initial(ControlledDescriptor::new("p"));
            for _ in 0..8 {
                chain.add(ControlledDescriptor::new("p"));
            }
            chain.delete(0);
            chain.len()
        });
    });
}

// ---------------------------------------------------------------------------
// Activation state machine
// ---------------------------------------------------------------------------

fn bench_active_state(c: &mut Criterion) {
    c.bench_function("active_state_covers", |b| {
        let state = ActiveState::PerDirection {
            on_get: true,
            on_set: false,
        };
        b.iter(|| state.covers(Direction::Both));
    });

    c.bench_function("active_state_apply_toggle", |b| {
        b.iter(|| {
            let mut state = ActiveState::Uniform(true);
            state.apply(Direction::OnGet, false);
            state.apply(Direction::Both, true);
            state
        });
    });
}

// ---------------------------------------------------------------------------
// Controller construction and queries
// ---------------------------------------------------------------------------

fn bench_controller(c: &mut Criterion) {
    let host = Rc::new(RefCell::new(HostObject::new()));
    host.borrow_mut()
        .write_property("age", PropertyValue::Int(30))
        .unwrap();

    c.bench_function("descriptor_controller_new", |b| {
        b.iter(|| {
            DescriptorController::new(Rc::clone(&host), "age", DescriptorConfig::default())
        });
    });

    c.bench_function("descriptor_controller_is_active", |b| {
        let ctl = DescriptorController::new(Rc::clone(&host), "age", DescriptorConfig::default());
        b.iter(|| ctl.is_active(Direction::OnGet));
    });

    c.bench_function("property_controller_resolve_current", |b| {
        let mut ctl = PropertyController::with_chain(
            Rc::clone(&host),
            "age",
            ControlledDescriptor::new("age"),
        );
        for _ in 0..4 {
            ctl.add_descriptor(ControlledDescriptor::new("age"));
        }
        b.iter(|| ctl.descriptor().map(|d| d.enabled));
    });
}

criterion_group!(
    benches,
    bench_chain_append,
    bench_chain_lookup,
    bench_chain_delete_restamp,
    bench_active_state,
    bench_controller,
);
criterion_main!(benches);
