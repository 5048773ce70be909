//! Game controller.
//!
//! Owns the word model, the DOM view and the live falling-word list; wires the
//! two interval timers (spawn and movement) and the keyboard listener; and
//! implements the per-keypress matching loop. The gameplay functions in this
//! module are pure over [`FallingWord`] + [`WordModel`] and report their work
//! as a [`WordChange`] list, which the wasm glue applies to the view.

pub mod falling;
pub mod model;
pub mod rng;
pub mod view;
pub mod words;

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{console, window};

use falling::{FallingWord, KeyHit, MAX_LEFT_PCT};
use model::{GameError, LEVEL_UP_SCORE, WordModel};
use rng::Lcg;
use view::GameView;

/// A new word enters the playfield every 3 s.
pub const SPAWN_INTERVAL_MS: i32 = 3_000;
/// All words drop one step every 300 ms.
pub const FALL_TICK_MS: i32 = 300;

// --- Pure gameplay core ------------------------------------------------------

/// What one keypress or movement tick did to the word list. Indices refer to
/// the word/node lists at the moment each change is applied, in emission
/// order, so the view stays aligned by replaying the list front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordChange {
    /// The typed/remaining split changed (match advance or mismatch reset).
    Retyped(usize),
    /// Word fully typed and removed from the list; score already updated.
    Completed(usize),
    /// Vertical position advanced.
    Moved(usize),
    /// Word crossed the floor and was removed; no score change.
    Expired(usize),
}

/// Scores one completed word: +1 point, and at the threshold a level up plus
/// a score reset. The threshold rule lives here, not in the model.
pub fn score_completion(model: &mut WordModel) {
    model.add_point();
    if model.score() == LEVEL_UP_SCORE {
        model.level_up();
        model.reset_score();
    }
}

/// Draws a word for the current level and places it at a random horizontal
/// offset in `[0, MAX_LEFT_PCT)`, at the top of the playfield.
pub fn spawn_word(model: &WordModel, rng: &mut Lcg) -> Result<FallingWord, GameError> {
    let text = model.create_word(rng)?;
    let left = rng.next_index(MAX_LEFT_PCT as usize) as u8;
    Ok(FallingWord::new(text, left))
}

/// Evaluates one pressed character against every on-screen word, each
/// independently: a match advances that word's typed prefix (a completed word
/// is removed and scored on the spot), a mismatch resets its partial progress.
/// No word is skipped because of another word's outcome.
pub fn press_key(words: &mut Vec<FallingWord>, model: &mut WordModel, key: char) -> Vec<WordChange> {
    let mut changes = Vec::new();
    let mut i = 0;
    while i < words.len() {
        match words[i].apply_key(key) {
            KeyHit::Advanced | KeyHit::Reset => {
                changes.push(WordChange::Retyped(i));
                i += 1;
            }
            KeyHit::Completed => {
                words.remove(i);
                score_completion(model);
                changes.push(WordChange::Completed(i));
            }
            KeyHit::Untouched => i += 1,
        }
    }
    changes
}

/// Drops every word one step and removes the ones that reached the floor.
pub fn advance_words(words: &mut Vec<FallingWord>) -> Vec<WordChange> {
    let mut changes = Vec::new();
    let mut i = 0;
    while i < words.len() {
        words[i].fall();
        if words[i].expired() {
            words.remove(i);
            changes.push(WordChange::Expired(i));
        } else {
            changes.push(WordChange::Moved(i));
            i += 1;
        }
    }
    changes
}

// --- Wasm glue ---------------------------------------------------------------

/// One running game: model, live words, view projection and the word RNG.
struct Game {
    model: WordModel,
    words: Vec<FallingWord>,
    view: GameView,
    rng: Lcg,
}

/// Timer ids and listener closures, retained so [`stop`] can release them.
struct Handles {
    spawn_id: i32,
    fall_id: i32,
    _spawn_cb: Closure<dyn FnMut()>,
    _fall_cb: Closure<dyn FnMut()>,
    key_cb: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

thread_local! {
    static GAME: RefCell<Option<Game>> = RefCell::new(None);
    static HANDLES: RefCell<Option<Handles>> = RefCell::new(None);
}

/// Builds the DOM surface, starts both interval timers and installs the
/// keyboard listener. A game already running is torn down first.
pub fn start() -> Result<(), JsValue> {
    stop()?;

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    console::log_1(&JsValue::from_str("mecatron: starting"));

    let view = GameView::mount(&doc)?;
    GAME.with(|g| {
        g.replace(Some(Game {
            model: WordModel::default(),
            words: Vec::new(),
            view,
            rng: Lcg::from_clock(),
        }))
    });

    let spawn_cb = Closure::wrap(Box::new(on_spawn_tick) as Box<dyn FnMut()>);
    let fall_cb = Closure::wrap(Box::new(on_fall_tick) as Box<dyn FnMut()>);
    let key_cb =
        Closure::wrap(Box::new(on_key) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

    let spawn_id = win.set_interval_with_callback_and_timeout_and_arguments_0(
        spawn_cb.as_ref().unchecked_ref(),
        SPAWN_INTERVAL_MS,
    )?;
    let fall_id = match win.set_interval_with_callback_and_timeout_and_arguments_0(
        fall_cb.as_ref().unchecked_ref(),
        FALL_TICK_MS,
    ) {
        Ok(id) => id,
        Err(err) => {
            win.clear_interval_with_handle(spawn_id);
            return Err(err);
        }
    };
    if let Err(err) =
        doc.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
    {
        win.clear_interval_with_handle(spawn_id);
        win.clear_interval_with_handle(fall_id);
        return Err(err);
    }

    HANDLES.with(|h| {
        h.replace(Some(Handles {
            spawn_id,
            fall_id,
            _spawn_cb: spawn_cb,
            _fall_cb: fall_cb,
            key_cb,
        }))
    });
    Ok(())
}

/// Cancels the timers, removes the keyboard listener and clears the word
/// nodes. The score panel is left showing the final score. Safe to call when
/// no game is running.
pub fn stop() -> Result<(), JsValue> {
    if let Some(handles) = HANDLES.with(|h| h.take()) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(handles.spawn_id);
            win.clear_interval_with_handle(handles.fall_id);
            if let Some(doc) = win.document() {
                doc.remove_event_listener_with_callback(
                    "keydown",
                    handles.key_cb.as_ref().unchecked_ref(),
                )?;
            }
        }
    }
    if let Some(mut game) = GAME.with(|g| g.take()) {
        game.view.clear_words();
    }
    Ok(())
}

fn on_spawn_tick() {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            match spawn_word(&game.model, &mut game.rng) {
                Ok(word) => {
                    if let Err(err) = game.view.spawn_word(&word) {
                        console::error_1(&err);
                        return;
                    }
                    game.words.push(word);
                }
                Err(err) => {
                    console::warn_1(&JsValue::from_str(&err.to_string()));
                }
            }
        }
    });
}

fn on_fall_tick() {
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            for change in advance_words(&mut game.words) {
                apply_change(game, change);
            }
        }
    });
}

/// The typed character for a `KeyboardEvent::key()` value, if the key is a
/// single character. Named keys ("Enter", "Shift") carry longer names; a
/// single character may still be more than one byte ("ñ").
fn key_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let pressed = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(pressed)
}

fn on_key(event: web_sys::KeyboardEvent) {
    let Some(pressed) = key_char(&event.key()) else {
        return;
    };
    GAME.with(|cell| {
        if let Some(game) = cell.borrow_mut().as_mut() {
            for change in press_key(&mut game.words, &mut game.model, pressed) {
                apply_change(game, change);
            }
        }
    });
}

/// Applies one recorded change to the view, keeping node and word lists
/// aligned. Changes must be applied in emission order.
fn apply_change(game: &mut Game, change: WordChange) {
    let result = match change {
        WordChange::Retyped(i) => game.view.sync_text(i, &game.words[i]),
        WordChange::Moved(i) => game.view.sync_top(i, &game.words[i]),
        WordChange::Expired(i) => {
            game.view.remove_word(i);
            Ok(())
        }
        WordChange::Completed(i) => {
            game.view.remove_word(i);
            game.view.render_score(game.model.score())
        }
    };
    if let Err(err) = result {
        console::error_1(&err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_completion_applies_the_threshold_rule() {
        let mut model = WordModel::default();
        for _ in 0..9 {
            score_completion(&mut model);
        }
        assert_eq!((model.score(), model.level()), (9, 0));
        score_completion(&mut model);
        assert_eq!((model.score(), model.level()), (0, 1));
    }

    #[test]
    fn press_key_advances_and_resets_words_independently() {
        // "fre" and "fui" share the first letter and diverge on the second.
        let mut words = vec![FallingWord::new("fre", 0), FallingWord::new("fui", 50)];
        let mut model = WordModel::default();

        let changes = press_key(&mut words, &mut model, 'f');
        assert_eq!(changes, vec![WordChange::Retyped(0), WordChange::Retyped(1)]);

        let changes = press_key(&mut words, &mut model, 'r');
        assert_eq!(changes, vec![WordChange::Retyped(0), WordChange::Retyped(1)]);
        assert_eq!(words[0].typed(), "fr");
        assert_eq!(words[1].typed(), "");
        assert_eq!(words[1].remaining(), "fui");
    }

    #[test]
    fn completion_removes_the_word_and_scores() {
        let mut words = vec![FallingWord::new("mi", 0)];
        let mut model = WordModel::default();
        press_key(&mut words, &mut model, 'm');
        let changes = press_key(&mut words, &mut model, 'i');
        assert_eq!(changes, vec![WordChange::Completed(0)]);
        assert!(words.is_empty());
        assert_eq!(model.score(), 1);
    }

    #[test]
    fn twin_words_complete_on_the_same_keypress() {
        let mut words = vec![FallingWord::new("mi", 0), FallingWord::new("mi", 30)];
        let mut model = WordModel::default();
        press_key(&mut words, &mut model, 'm');
        let changes = press_key(&mut words, &mut model, 'i');
        // Both removals land at index 0 as the list shifts underneath.
        assert_eq!(
            changes,
            vec![WordChange::Completed(0), WordChange::Completed(0)]
        );
        assert!(words.is_empty());
        assert_eq!(model.score(), 2);
    }

    #[test]
    fn untouched_words_emit_no_changes() {
        let mut words = vec![FallingWord::new("juan", 0)];
        let mut model = WordModel::default();
        let changes = press_key(&mut words, &mut model, 'x');
        assert!(changes.is_empty());
        assert_eq!(words[0].remaining(), "juan");
    }

    #[test]
    fn key_filter_accepts_single_chars_and_rejects_named_keys() {
        assert_eq!(key_char("f"), Some('f'));
        assert_eq!(key_char("ñ"), Some('ñ'));
        assert_eq!(key_char("Enter"), None);
        assert_eq!(key_char("Shift"), None);
        assert_eq!(key_char(""), None);
    }

    #[test]
    fn advance_words_moves_survivors_and_expires_floor_crossers() {
        let mut words = vec![FallingWord::new("ju", 0), FallingWord::new("fr", 10)];
        // Park the first word one step above the floor.
        for _ in 0..151 {
            words[0].fall();
        }
        let changes = advance_words(&mut words);
        assert_eq!(changes, vec![WordChange::Expired(0), WordChange::Moved(0)]);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "fr");
    }

    #[test]
    fn spawn_word_stays_inside_the_horizontal_band() {
        let mut rng = Lcg::new(3);
        let model = WordModel::default();
        for _ in 0..64 {
            let word = spawn_word(&model, &mut rng).unwrap();
            assert!(word.left_pct() < MAX_LEFT_PCT);
            assert_eq!(word.top_px(), 0);
        }
    }
}
