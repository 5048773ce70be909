// Browser-only tests for the DOM surface. Run with `wasm-pack test`.
#![cfg(target_arch = "wasm32")]

use mecatron::FallingWord;
use mecatron::game::view::GameView;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_builds_the_surface_and_stop_keeps_the_score_panel() {
    mecatron::start_game().unwrap();
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("mt-stage").is_some());
    assert!(doc.get_element_by_id("mt-score").is_some());
    let value = doc.get_element_by_id("mt-score-value").unwrap();
    assert_eq!(value.text_content(), Some("0".to_string()));

    mecatron::stop_game().unwrap();
    // The stage empties but the score panel survives teardown.
    let stage = doc.get_element_by_id("mt-stage").unwrap();
    assert_eq!(stage.child_element_count(), 0);
    assert!(doc.get_element_by_id("mt-score").is_some());
}

#[wasm_bindgen_test]
fn completing_a_word_updates_the_score_panel_in_place() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let mut view = GameView::mount(&doc).unwrap();
    let stage = doc.get_element_by_id("mt-stage").unwrap();
    let resident = stage.child_element_count();

    view.spawn_word(&FallingWord::new("mi", 20)).unwrap();
    assert_eq!(stage.child_element_count(), resident + 1);

    // The same view calls the controller issues for a completed word.
    view.remove_word(0);
    view.render_score(1).unwrap();

    assert_eq!(stage.child_element_count(), resident);
    let panel = doc.get_element_by_id("mt-score").unwrap();
    assert_eq!(panel.text_content(), Some("1".to_string()));
    // One value span however many times the score has rendered.
    assert_eq!(panel.child_element_count(), 1);
}

#[wasm_bindgen_test]
fn restart_reuses_the_existing_containers() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let body = doc.body().unwrap();

    mecatron::start_game().unwrap();
    let children = body.child_element_count();
    mecatron::start_game().unwrap();
    assert_eq!(body.child_element_count(), children);

    mecatron::stop_game().unwrap();
}
