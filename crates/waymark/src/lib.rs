//! Waymark - a timeline layout engine for career roadmaps.
//!
//! A roadmap is a title, an ordered list of phases, and the steps inside each
//! phase. Waymark places the title box, draws the phases as circles along a
//! horizontal spine, hangs the steps of each phase alternately above and
//! below it, and routes every connector. The result is absolute coordinates
//! a renderer can draw without further measuring.

pub mod config;
pub mod layout;

mod error;

pub use waymark_core::{color, geometry, palette, roadmap};
pub use waymark_parser::InputFormat;

pub use error::WaymarkError;

use log::{debug, info, trace};

use config::{AppConfig, LayoutConfig};
use layout::{LayoutEngine, LayoutResult};
use roadmap::RoadmapSpec;

/// Lays out `spec` with `config` using the default text measure.
///
/// Pure and total: the same inputs always produce the same layout.
///
/// # Examples
///
/// ```
/// use waymark::{compute_layout, config::LayoutConfig, roadmap::RoadmapSpec};
///
/// let layout = compute_layout(&RoadmapSpec::new("Empty"), &LayoutConfig::default());
/// assert!(layout.groups().is_empty());
/// assert!(layout.connectors().is_empty());
/// ```
pub fn compute_layout(spec: &RoadmapSpec, config: &LayoutConfig) -> LayoutResult {
    LayoutEngine::new(config.clone()).compute(spec)
}

/// Builder for parsing roadmap documents and laying them out.
///
/// # Examples
///
/// ```rust
/// use waymark::{RoadmapBuilder, InputFormat, config::AppConfig};
///
/// let source = "# Data Engineer\n## SQL (1 month)\n### Joins\n- Window functions\n";
///
/// let builder = RoadmapBuilder::new(AppConfig::default());
/// let roadmap = builder.parse(source, InputFormat::Markdown)
///     .expect("Failed to parse");
///
/// let layout = builder.layout(&roadmap)
///     .expect("Failed to lay out");
/// assert_eq!(layout.nodes().len(), 1);
///
/// let json = builder.to_json(&layout, true)
///     .expect("Failed to serialize");
/// assert!(json.contains("\"canvasWidth\""));
/// ```
#[derive(Debug, Default)]
pub struct RoadmapBuilder {
    config: AppConfig,
}

impl RoadmapBuilder {
    /// Create a new roadmap builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a roadmap document.
    ///
    /// # Errors
    ///
    /// Returns [`WaymarkError::Parse`] carrying every diagnostic together
    /// with the source text.
    pub fn parse(&self, source: &str, format: InputFormat) -> Result<RoadmapSpec, WaymarkError> {
        info!(format:% = format; "Parsing roadmap");

        let roadmap = waymark_parser::parse(source, format)
            .map_err(|err| WaymarkError::new_parse_error(err, source))?;

        debug!(
            groups = roadmap.groups().len(),
            nodes = roadmap.nodes().len();
            "Roadmap parsed successfully"
        );
        trace!(roadmap:?; "Parsed roadmap");

        Ok(roadmap)
    }

    /// Compute the layout of a parsed roadmap.
    ///
    /// # Errors
    ///
    /// Returns [`WaymarkError::Config`] if the layout configuration holds a
    /// negative or non-finite value.
    pub fn layout(&self, roadmap: &RoadmapSpec) -> Result<LayoutResult, WaymarkError> {
        let config = self.config.layout();
        config.validate().map_err(WaymarkError::Config)?;

        info!(title = roadmap.title(); "Computing layout");
        let layout = compute_layout(roadmap, config);

        if !layout.dropped_steps().is_empty() {
            debug!(dropped:? = layout.dropped_steps(); "Steps without a phase were left out");
        }
        trace!(layout:?; "Computed layout");

        Ok(layout)
    }

    /// Serialize a layout to JSON, pretty-printed or compact.
    ///
    /// # Errors
    ///
    /// Returns [`WaymarkError::Serialize`] if serialization fails.
    pub fn to_json(&self, layout: &LayoutResult, pretty: bool) -> Result<String, WaymarkError> {
        let json = if pretty {
            serde_json::to_string_pretty(layout)?
        } else {
            serde_json::to_string(layout)?
        };
        Ok(json)
    }
}
