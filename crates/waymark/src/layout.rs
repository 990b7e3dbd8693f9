//! Timeline layout: the engine, its text measure, and the positioned output.

mod engine;
mod measure;
mod model;

pub use engine::LayoutEngine;
pub use measure::{CharCount, TextMeasure};
pub use model::{
    Connector, LayoutResult, PositionedBox, PositionedPhase, PositionedStep, StepType,
};
