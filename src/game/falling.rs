//! Falling-word records, independent of their DOM nodes.
//!
//! Each on-screen word is a plain record; the view projects it into elements.
//! Keeping the record pure lets the matching logic run under native tests.

/// Pixels a word drops per movement tick.
pub const FALL_STEP_PX: i32 = 5;
/// Vertical position at which a word leaves the playfield.
pub const FLOOR_PX: i32 = 760;
/// Exclusive upper bound for the random horizontal offset, in percent.
pub const MAX_LEFT_PCT: u8 = 85;

/// Outcome of applying one keypress to one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHit {
    /// Next expected char matched; more remain.
    Advanced,
    /// Next expected char matched and the word is now fully typed.
    Completed,
    /// Mismatch wiped a non-empty typed prefix.
    Reset,
    /// Mismatch on a word with no progress; nothing changed.
    Untouched,
}

/// One word on screen: full text, the typed/remaining split, and its position.
/// `typed() + remaining()` always reassembles the original text.
#[derive(Debug, Clone)]
pub struct FallingWord {
    text: &'static str,
    /// Byte offset of the typed/remaining boundary (always a char boundary).
    typed: usize,
    left_pct: u8,
    top_px: i32,
}

impl FallingWord {
    /// New word at the top of the playfield. The horizontal offset is fixed
    /// for the word's whole lifetime.
    pub fn new(text: &'static str, left_pct: u8) -> Self {
        Self {
            text,
            typed: 0,
            left_pct,
            top_px: 0,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn typed(&self) -> &str {
        &self.text[..self.typed]
    }

    pub fn remaining(&self) -> &str {
        &self.text[self.typed..]
    }

    pub fn left_pct(&self) -> u8 {
        self.left_pct
    }

    pub fn top_px(&self) -> i32 {
        self.top_px
    }

    fn next_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Applies one pressed character. A match moves that char from the
    /// remaining text onto the typed prefix; a mismatch returns the whole
    /// typed prefix to the front of the remaining text.
    pub fn apply_key(&mut self, key: char) -> KeyHit {
        match self.next_char() {
            Some(c) if c == key => {
                self.typed += c.len_utf8();
                if self.typed == self.text.len() {
                    KeyHit::Completed
                } else {
                    KeyHit::Advanced
                }
            }
            _ if self.typed == 0 => KeyHit::Untouched,
            _ => {
                self.typed = 0;
                KeyHit::Reset
            }
        }
    }

    /// One movement tick.
    pub fn fall(&mut self) {
        self.top_px += FALL_STEP_PX;
    }

    /// True once the word has reached the floor and must leave the screen.
    pub fn expired(&self) -> bool {
        self.top_px >= FLOOR_PX
    }
}
