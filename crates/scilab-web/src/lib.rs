//! `#[wasm_bindgen]` exports for the SciLab browser UI.
//!
//! Every export takes plain values and returns a JSON string. Failures come
//! back as `{"error": "..."}` rather than as JS exceptions.

pub mod runner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use runner::LabRunner;

thread_local! {
    static RUNNER: RefCell<Option<LabRunner>> = RefCell::new(None);
}

fn with_runner(f: impl FnOnce(&mut LabRunner) -> String) -> String {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => runner::error_json("lab not initialized; call lab_init() first"),
    })
}

/// Create the session. `config_json` may be empty for defaults.
#[wasm_bindgen]
pub fn lab_init(config_json: &str) -> String {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match LabRunner::from_config_json(config_json) {
        Ok(runner) => {
            let state = runner.snapshot();
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("scilab: initialized");
            state
        }
        Err(e) => {
            log::error!("scilab: bad config: {e}");
            runner::error_json(e)
        }
    }
}

#[wasm_bindgen]
pub fn lab_set_mode(mode: &str) -> String {
    with_runner(|r| r.set_mode(mode))
}

#[wasm_bindgen]
pub fn lab_drop_atom(symbol: &str, x: f32, y: f32) -> String {
    with_runner(|r| r.drop_atom(symbol, x, y))
}

#[wasm_bindgen]
pub fn lab_move_atom(id: u32, x: f32, y: f32) -> String {
    with_runner(|r| r.move_atom(id, x, y))
}

#[wasm_bindgen]
pub fn lab_remove_atom(id: u32) -> String {
    with_runner(|r| r.remove_atom(id))
}

#[wasm_bindgen]
pub fn lab_clear() -> String {
    with_runner(|r| r.clear())
}

#[wasm_bindgen]
pub fn lab_submit_answer() -> String {
    with_runner(|r| r.submit_answer())
}

#[wasm_bindgen]
pub fn lab_select_challenge(level: u32) -> String {
    with_runner(|r| r.select_challenge(level))
}

#[wasm_bindgen]
pub fn lab_snapshot() -> String {
    with_runner(|r| r.snapshot())
}

// ---- Catalog queries ----

#[wasm_bindgen]
pub fn lab_elements() -> String {
    runner::elements()
}

#[wasm_bindgen]
pub fn lab_grid() -> String {
    runner::grid()
}

#[wasm_bindgen]
pub fn lab_search(term: &str, category: &str) -> String {
    runner::search(term, category)
}

#[wasm_bindgen]
pub fn lab_compound(formula: &str) -> String {
    runner::compound(formula)
}

#[wasm_bindgen]
pub fn lab_validate(a: &str, b: &str) -> String {
    runner::validate(a, b)
}

#[wasm_bindgen]
pub fn lab_lewis(symbol: &str) -> String {
    runner::lewis(symbol)
}
