//! DOM projection of the game state.
//!
//! The view owns no gameplay state. It mirrors [`FallingWord`] records into one
//! `<div>` per word (a `<span>` for the typed prefix plus a text node for the
//! remaining letters) and keeps its node list index-aligned with the
//! controller's word list: every spawn, sync and removal is applied to both in
//! the same order.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Node, Text};

use super::falling::FallingWord;

const STAGE_ID: &str = "mt-stage";
const SCORE_ID: &str = "mt-score";
const SCORE_VALUE_ID: &str = "mt-score-value";

const STAGE_STYLE: &str =
    "position:relative; width:100%; height:800px; overflow:hidden; background:#181818;";
const SCORE_STYLE: &str = "font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; \
     background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; \
     letter-spacing:0.5px;";
const TYPED_STYLE: &str = "color:#ffd166; font-weight:bold;";

fn word_style(word: &FallingWord) -> String {
    format!(
        "position:absolute; top:{}px; left:{}%; font-family:'Fira Code', monospace; \
         font-size:20px; color:#eee;",
        word.top_px(),
        word.left_pct()
    )
}

/// DOM handles for one falling word.
struct WordNode {
    root: HtmlElement,
    typed: Element,
    rest: Text,
}

/// Renderer over the hosting page: stage container, score panel, word nodes.
pub struct GameView {
    document: Document,
    stage: HtmlElement,
    score_panel: Element,
    nodes: Vec<WordNode>,
}

impl GameView {
    /// Finds or creates the stage container and the score panel. The panel is
    /// inserted before the stage and starts out showing "0".
    pub fn mount(document: &Document) -> Result<Self, JsValue> {
        let stage: HtmlElement = if let Some(el) = document.get_element_by_id(STAGE_ID) {
            el.dyn_into()?
        } else {
            let el: HtmlElement = document.create_element("div")?.dyn_into()?;
            el.set_id(STAGE_ID);
            el.set_attribute("style", STAGE_STYLE)?;
            document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&el)?;
            el
        };

        let score_panel = if let Some(el) = document.get_element_by_id(SCORE_ID) {
            el
        } else {
            let el = document.create_element("div")?;
            el.set_id(SCORE_ID);
            el.set_attribute("style", SCORE_STYLE)?;
            let body = document
                .body()
                .ok_or_else(|| JsValue::from_str("no body"))?;
            let anchor: &Node = stage.as_ref();
            body.insert_before(&el, Some(anchor))?;
            el
        };

        let view = Self {
            document: document.clone(),
            stage,
            score_panel,
            nodes: Vec::new(),
        };
        view.render_score(0)?;
        Ok(view)
    }

    /// Creates the two-region DOM entity for a newly spawned word.
    pub fn spawn_word(&mut self, word: &FallingWord) -> Result<(), JsValue> {
        let root: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        root.set_class_name("mt-word");
        root.set_attribute("style", &word_style(word))?;

        let typed = self.document.create_element("span")?;
        typed.set_attribute("style", TYPED_STYLE)?;
        root.append_child(&typed)?;

        let rest = self.document.create_text_node(word.remaining());
        root.append_child(&rest)?;

        self.stage.append_child(&root)?;
        self.nodes.push(WordNode { root, typed, rest });
        Ok(())
    }

    /// Projects the typed/remaining split of one word into its node.
    pub fn sync_text(&self, index: usize, word: &FallingWord) -> Result<(), JsValue> {
        if let Some(node) = self.nodes.get(index) {
            node.typed.set_text_content(Some(word.typed()));
            node.rest.set_data(word.remaining());
        }
        Ok(())
    }

    /// Projects the vertical position of one word into its node.
    pub fn sync_top(&self, index: usize, word: &FallingWord) -> Result<(), JsValue> {
        if let Some(node) = self.nodes.get(index) {
            node.root.set_attribute("style", &word_style(word))?;
        }
        Ok(())
    }

    /// Drops the node for a word that completed or expired.
    pub fn remove_word(&mut self, index: usize) {
        if index < self.nodes.len() {
            let node = self.nodes.remove(index);
            node.root.remove();
        }
    }

    /// Replaces the score value span wholesale rather than patching its text.
    pub fn render_score(&self, score: u32) -> Result<(), JsValue> {
        if let Some(old) = self.document.get_element_by_id(SCORE_VALUE_ID) {
            old.remove();
        }
        let span = self.document.create_element("span")?;
        span.set_id(SCORE_VALUE_ID);
        span.append_child(&self.document.create_text_node(&score.to_string()))?;
        self.score_panel.append_child(&span)?;
        Ok(())
    }

    /// Removes every word node from the stage (used on teardown).
    pub fn clear_words(&mut self) {
        for node in self.nodes.drain(..) {
            node.root.remove();
        }
    }
}
