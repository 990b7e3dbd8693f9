//! The fixed phase palette.
//!
//! Every phase gets a `color_index` in `0..PALETTE_SIZE`; the phase circle,
//! its steps and its branch connectors all share the entry at that index.

use std::sync::OnceLock;

use serde::Serialize;

use crate::color::Color;

/// Number of entries in the phase palette. Color indices cycle with this period.
pub const PALETTE_SIZE: usize = 4;

static PALETTE: OnceLock<[PhaseColors; PALETTE_SIZE]> = OnceLock::new();

/// Fill, stroke and label colors for one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseColors {
    fill: Color,
    stroke: Color,
    text: Color,
}

impl PhaseColors {
    fn from_css(fill: &str, stroke: &str, text: &str) -> Self {
        Self {
            fill: Color::new(fill).expect("palette fill is a valid CSS color"),
            stroke: Color::new(stroke).expect("palette stroke is a valid CSS color"),
            text: Color::new(text).expect("palette text is a valid CSS color"),
        }
    }

    /// Returns the palette entry for `color_index`, wrapping around the palette.
    ///
    /// # Examples
    ///
    /// ```
    /// # use waymark_core::palette::{PhaseColors, PALETTE_SIZE};
    /// assert_eq!(PhaseColors::for_index(1), PhaseColors::for_index(1 + PALETTE_SIZE));
    /// ```
    pub fn for_index(color_index: usize) -> Self {
        palette()[color_index % PALETTE_SIZE]
    }

    /// Circle fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Circle outline and branch connector color.
    pub fn stroke(&self) -> Color {
        self.stroke
    }

    /// Label color drawn on top of the fill.
    pub fn text(&self) -> Color {
        self.text
    }
}

/// Returns the whole palette in index order: blue, orange, emerald, violet.
pub fn palette() -> &'static [PhaseColors; PALETTE_SIZE] {
    PALETTE.get_or_init(|| {
        [
            PhaseColors::from_css("#3b82f6", "#2563eb", "#ffffff"),
            PhaseColors::from_css("#f97316", "#ea580c", "#ffffff"),
            PhaseColors::from_css("#10b981", "#059669", "#ffffff"),
            PhaseColors::from_css("#8b5cf6", "#7c3aed", "#ffffff"),
        ]
    })
}

/// Returns the color index for the phase at `phase_index` in layout order.
pub fn color_index(phase_index: usize) -> usize {
    phase_index % PALETTE_SIZE
}
