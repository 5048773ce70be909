//! MecaTRON-3000 core crate.
//!
//! A falling-words typing trainer for the browser. `start_game()` builds its
//! DOM surface inside the host page, spawns words on a fixed cadence and
//! scores keypresses; `stop_game()` tears the session down again. The
//! gameplay core (word model, matching, movement) is plain Rust and is
//! re-exported for host tests and future gameplay expansions.

use wasm_bindgen::prelude::*;

pub mod game;

pub use game::falling::{FALL_STEP_PX, FLOOR_PX, FallingWord, KeyHit, MAX_LEFT_PCT};
pub use game::model::{GameError, LEVEL_UP_SCORE, WordBank, WordModel};
pub use game::rng::Lcg;
pub use game::words::{LEVEL1_WORDS, LEVEL2_WORDS, LEVEL3_WORDS, WORD_LEVELS};
pub use game::{
    FALL_TICK_MS, SPAWN_INTERVAL_MS, WordChange, advance_words, press_key, score_completion,
    spawn_word,
};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Unified entrypoints
// -----------------------------------------------------------------------------

/// Starts a session in the current page. Calling it while a session is live
/// tears the old one down first.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start()
}

/// Ends the current session: timers cancelled, listener removed, word nodes
/// cleared. The score panel stays with the final score. A no-op without a
/// running session.
#[wasm_bindgen]
pub fn stop_game() -> Result<(), JsValue> {
    game::stop()
}
