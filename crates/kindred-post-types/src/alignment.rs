/*
 * alignment.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// Content alignment of a block.
///
/// `Auto` follows the platform or locale direction (start for LTR, end for RTL).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    #[default]
    Auto,
    Start,
    End,
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// CSS `text-align` value, or `None` for `Auto`.
    pub fn css_value(self) -> Option<&'static str> {
        match self {
            Alignment::Auto => None,
            Alignment::Start => Some("start"),
            Alignment::End => Some("end"),
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
            Alignment::Justify => Some("justify"),
        }
    }
}
