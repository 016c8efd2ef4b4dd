#![cfg(target_arch = "wasm32")]

use lights_out_core::{BoardConfig, LightGrid, ToggleOutcome, initialize};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn toggle_then_win_on_wasm() {
    let start = LightGrid::unlit((3, 3)).toggle((1, 1));
    assert_eq!(start.lit_count(), 5);
    assert!(!start.has_won());

    let (solved, outcome) = start.toggle_with_outcome((1, 1));

    assert_eq!(outcome, ToggleOutcome::Won);
    assert!(solved.has_won());
}

#[wasm_bindgen_test]
fn seeded_initialize_is_stable_on_wasm() {
    let config = BoardConfig::new((5, 5), 0.25);

    let grid = initialize(config, 0x5eed);

    assert_eq!(grid.size(), (5, 5));
    assert_eq!(grid, initialize(config, 0x5eed));
}
