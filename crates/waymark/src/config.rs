//! Configuration types for Waymark roadmap layout.
//!
//! This module provides configuration structures that control the geometry
//! of a roadmap layout. All types implement [`serde::Deserialize`] for
//! loading from external sources such as a TOML file, and every key is
//! optional: anything left out keeps its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LayoutConfig`] - Spacing, sizes and text heuristics used by the layout engine.
//!
//! # Example
//!
//! ```
//! # use waymark::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().phase_gap(), 400.0);
//! assert!(config.layout().validate().is_ok());
//! ```

use serde::Deserialize;

/// Top-level application configuration.
///
/// Wraps the [`LayoutConfig`] as the `[layout]` table of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Geometry of a roadmap layout.
///
/// Lengths are in output units (SVG user space). The `root_char_width`,
/// `root_text_padding`, `phase_base_radius` and `phase_char_growth` keys
/// drive the text-size heuristics and are approximations of real text
/// metrics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Outer margin on all sides of the canvas.
    canvas_padding: f32,
    /// Left inset of the root box.
    root_x: f32,
    /// Minimum x before the first phase's left edge.
    phase_start_x: f32,
    /// Horizontal gap after each phase.
    phase_gap: f32,
    /// Minimum root box width.
    root_width: f32,
    /// Root box height.
    root_height: f32,
    /// Minimum phase radius.
    phase_radius: f32,
    step_width: f32,
    step_height: f32,
    /// Vertical gap between consecutive steps.
    step_gap: f32,
    /// Gap between the circle edge and the first step.
    branch_padding: f32,

    /// Root width per character of the title.
    root_char_width: f32,
    root_text_padding: f32,
    /// Radius before text growth is added.
    phase_base_radius: f32,
    /// Radius growth per character of title and duration.
    phase_char_growth: f32,
    /// Horizontal distance between the circle edge and its steps.
    step_offset: f32,
    /// Distance below a step's top edge where its branch connector lands.
    branch_anchor_offset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_padding: 50.0,
            root_x: 50.0,
            phase_start_x: 350.0,
            phase_gap: 400.0,
            root_width: 200.0,
            root_height: 80.0,
            phase_radius: 60.0,
            step_width: 350.0,
            step_height: 80.0,
            step_gap: 20.0,
            branch_padding: 60.0,
            root_char_width: 12.0,
            root_text_padding: 40.0,
            phase_base_radius: 30.0,
            phase_char_growth: 1.5,
            step_offset: 20.0,
            branch_anchor_offset: 20.0,
        }
    }
}

impl LayoutConfig {
    pub fn canvas_padding(&self) -> f32 {
        self.canvas_padding
    }

    pub fn root_x(&self) -> f32 {
        self.root_x
    }

    pub fn phase_start_x(&self) -> f32 {
        self.phase_start_x
    }

    pub fn phase_gap(&self) -> f32 {
        self.phase_gap
    }

    pub fn root_width(&self) -> f32 {
        self.root_width
    }

    pub fn root_height(&self) -> f32 {
        self.root_height
    }

    pub fn phase_radius(&self) -> f32 {
        self.phase_radius
    }

    pub fn step_width(&self) -> f32 {
        self.step_width
    }

    pub fn step_height(&self) -> f32 {
        self.step_height
    }

    pub fn step_gap(&self) -> f32 {
        self.step_gap
    }

    pub fn branch_padding(&self) -> f32 {
        self.branch_padding
    }

    pub fn root_char_width(&self) -> f32 {
        self.root_char_width
    }

    pub fn root_text_padding(&self) -> f32 {
        self.root_text_padding
    }

    pub fn phase_base_radius(&self) -> f32 {
        self.phase_base_radius
    }

    pub fn phase_char_growth(&self) -> f32 {
        self.phase_char_growth
    }

    pub fn step_offset(&self) -> f32 {
        self.step_offset
    }

    pub fn branch_anchor_offset(&self) -> f32 {
        self.branch_anchor_offset
    }

    /// Vertical distance between the tops of consecutive steps.
    pub fn step_pitch(&self) -> f32 {
        self.step_height + self.step_gap
    }

    /// Sets the outer canvas margin.
    pub fn with_canvas_padding(mut self, padding: f32) -> Self {
        self.canvas_padding = padding;
        self
    }

    /// Sets the left inset of the root box.
    pub fn with_root_x(mut self, x: f32) -> Self {
        self.root_x = x;
        self
    }

    /// Sets the minimum x of the first phase's left edge.
    pub fn with_phase_start_x(mut self, x: f32) -> Self {
        self.phase_start_x = x;
        self
    }

    /// Sets the horizontal gap after each phase.
    pub fn with_phase_gap(mut self, gap: f32) -> Self {
        self.phase_gap = gap;
        self
    }

    /// Sets the minimum root box size.
    pub fn with_root_size(mut self, width: f32, height: f32) -> Self {
        self.root_width = width;
        self.root_height = height;
        self
    }

    /// Sets the minimum phase radius.
    pub fn with_phase_radius(mut self, radius: f32) -> Self {
        self.phase_radius = radius;
        self
    }

    /// Sets the step box size.
    pub fn with_step_size(mut self, width: f32, height: f32) -> Self {
        self.step_width = width;
        self.step_height = height;
        self
    }

    /// Sets the vertical gap between consecutive steps.
    pub fn with_step_gap(mut self, gap: f32) -> Self {
        self.step_gap = gap;
        self
    }

    /// Sets the gap between a circle edge and its first step.
    pub fn with_branch_padding(mut self, padding: f32) -> Self {
        self.branch_padding = padding;
        self
    }

    fn entries(&self) -> [(&'static str, f32); 17] {
        [
            ("canvas_padding", self.canvas_padding),
            ("root_x", self.root_x),
            ("phase_start_x", self.phase_start_x),
            ("phase_gap", self.phase_gap),
            ("root_width", self.root_width),
            ("root_height", self.root_height),
            ("phase_radius", self.phase_radius),
            ("step_width", self.step_width),
            ("step_height", self.step_height),
            ("step_gap", self.step_gap),
            ("branch_padding", self.branch_padding),
            ("root_char_width", self.root_char_width),
            ("root_text_padding", self.root_text_padding),
            ("phase_base_radius", self.phase_base_radius),
            ("phase_char_growth", self.phase_char_growth),
            ("step_offset", self.step_offset),
            ("branch_anchor_offset", self.branch_anchor_offset),
        ]
    }

    /// Checks that every value is a finite, non-negative number.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending key.
    pub fn validate(&self) -> Result<(), String> {
        match self
            .entries()
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((key, value)) => Err(format!(
                "Invalid layout config: `{key}` must be a finite, non-negative number, got {value}"
            )),
            None => Ok(()),
        }
    }
}
