#![no_main]

use libfuzzer_sys::fuzz_target;
use snare_core::control::active::{ActiveState, Direction};

// Drive the activation flag through random toggle sequences and check it
// against a two-bool model.
//
// Each byte encodes one toggle:
//   bits [1:0] – direction selector (0=both, 1=onGet, 2=onSet, 3=skip)
//   bit  2     – the value to apply
//
// The model tracks the effective per-direction truth; after every toggle the
// tagged union must answer `covers` identically for all three directions.
fuzz_target!(|data: &[u8]| {
    let mut state = ActiveState::Uniform(true);
    let mut model_get = true;
    let mut model_set = true;

    for byte in data.iter().take(512) {
        let value = byte & 0x4 != 0;
        let direction = match byte & 0x3 {
            0 => Direction::Both,
            1 => Direction::OnGet,
            2 => Direction::OnSet,
            _ => continue,
        };

        // Model the documented precedence: a direction-specific toggle only
        // narrows when the flag is already structured; otherwise the whole
        // flag collapses to a scalar.
        match (state, direction) {
            (ActiveState::PerDirection { .. }, Direction::OnGet) => model_get = value,
            (ActiveState::PerDirection { .. }, Direction::OnSet) => model_set = value,
            _ => {
                model_get = value;
                model_set = value;
            }
        }

        state.apply(direction, value);

        assert_eq!(state.covers(Direction::OnGet), model_get);
        assert_eq!(state.covers(Direction::OnSet), model_set);
        assert_eq!(state.covers(Direction::Both), model_get && model_set);

        // Promote to the structured form occasionally so both variants stay
        // under test.
        if byte & 0x10 != 0 {
            state = ActiveState::PerDirection {
                on_get: model_get,
                on_set: model_set,
            };
        }
    }
});
