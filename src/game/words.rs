//! Word datasets for the drill levels.
//!
//! Each level is an ordered list of lowercase words; levels get harder as the
//! player climbs. The lists double as the public dataset surface so hosts and
//! tests can inspect what the game will ask for.

/// Level 1: two-letter index-finger drills.
pub const LEVEL1_WORDS: &[&str] = &["ju", "fr", "fv", "jm", "fu", "jr", "jv", "fm"];

/// Level 2: short clusters adding top- and bottom-row reaches.
pub const LEVEL2_WORDS: &[&str] = &["fre", "jui", "fui", "vie", "mi", "mery", "huy"];

/// Level 3: whole words typed with both hands.
pub const LEVEL3_WORDS: &[&str] = &["juan", "remo", "foca", "dedo", "cate"];

/// Ordered level sequence backing the default word bank.
pub const WORD_LEVELS: &[&[&str]] = &[LEVEL1_WORDS, LEVEL2_WORDS, LEVEL3_WORDS];
