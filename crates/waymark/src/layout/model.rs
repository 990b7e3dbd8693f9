//! Positioned output of the layout engine.
//!
//! Everything here is plain data in absolute canvas coordinates, ready for a
//! renderer. The types serialize to the camelCase JSON shape renderers
//! consume, e.g. a branch connector becomes
//! `{ "type": "branch-top", "id": "conn-g1-n1", "from": {..}, "to": {..}, "colorIndex": 0 }`.

use serde::Serialize;

use waymark_core::{
    geometry::{Bounds, Point, Size},
    palette::PhaseColors,
};

/// The root title box. `(cx, cy)` is the center of its right edge, where the
/// spine starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PositionedBox {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    cx: f32,
    cy: f32,
}

impl PositionedBox {
    pub(crate) fn new(top_left: Point, size: Size) -> Self {
        Self {
            x: top_left.x(),
            y: top_left.y(),
            width: size.width(),
            height: size.height(),
            cx: top_left.x() + size.width(),
            cy: top_left.y() + size.height() / 2.0,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Right-edge-center anchor of the box.
    pub fn anchor(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }
}

/// A phase circle on the spine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedPhase {
    id: String,
    title: String,
    duration: Option<String>,
    cx: f32,
    cy: f32,
    r: f32,
    color_index: usize,
}

impl PositionedPhase {
    pub(crate) fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration: Option<String>,
        center: Point,
        r: f32,
        color_index: usize,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration,
            cx: center.x(),
            cy: center.y(),
            r,
            color_index,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    pub fn radius(&self) -> f32 {
        self.r
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Palette entry shared by this phase, its steps and its branches.
    pub fn colors(&self) -> PhaseColors {
        PhaseColors::for_index(self.color_index)
    }

    /// Bounding box of the circle.
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_circle(self.center(), self.r)
    }

    /// Point on the circle where the spine leaves towards the next phase.
    pub(crate) fn right_edge(&self) -> Point {
        Point::new(self.cx + self.r, self.cy)
    }

    pub(crate) fn left_edge(&self) -> Point {
        Point::new(self.cx - self.r, self.cy)
    }
}

/// Which side of the spine a step hangs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepType {
    StepTop,
    StepBottom,
}

impl StepType {
    /// Steps of even-indexed phases go up, odd ones go down.
    pub fn for_phase(phase_index: usize) -> Self {
        if phase_index % 2 == 0 {
            Self::StepTop
        } else {
            Self::StepBottom
        }
    }

    pub fn is_top(self) -> bool {
        self == Self::StepTop
    }
}

/// A step box branching from its phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedStep {
    id: String,
    title: String,
    bullets: Vec<String>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(rename = "type")]
    step_type: StepType,
    color_index: usize,
}

impl PositionedStep {
    pub(crate) fn new(
        step: &waymark_core::roadmap::Step,
        top_left: Point,
        size: Size,
        step_type: StepType,
        color_index: usize,
    ) -> Self {
        Self {
            id: step.id().to_string(),
            title: step.title().to_string(),
            bullets: step.bullets().to_vec(),
            x: top_left.x(),
            y: top_left.y(),
            width: size.width(),
            height: size.height(),
            step_type,
            color_index,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn step_type(&self) -> StepType {
        self.step_type
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }
}

/// A line between two placed elements.
///
/// Spine connectors are straight horizontal segments. Branch connectors are
/// L-shaped: vertical from the circle, then horizontal into the step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Connector {
    Spine {
        id: String,
        from: Point,
        to: Point,
    },
    BranchTop {
        id: String,
        from: Point,
        to: Point,
        #[serde(rename = "colorIndex")]
        color_index: usize,
    },
    BranchBottom {
        id: String,
        from: Point,
        to: Point,
        #[serde(rename = "colorIndex")]
        color_index: usize,
    },
}

impl Connector {
    pub(crate) fn branch(
        id: String,
        from: Point,
        to: Point,
        step_type: StepType,
        color_index: usize,
    ) -> Self {
        match step_type {
            StepType::StepTop => Self::BranchTop {
                id,
                from,
                to,
                color_index,
            },
            StepType::StepBottom => Self::BranchBottom {
                id,
                from,
                to,
                color_index,
            },
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Spine { id, .. } | Self::BranchTop { id, .. } | Self::BranchBottom { id, .. } => {
                id
            }
        }
    }

    pub fn from(&self) -> Point {
        match self {
            Self::Spine { from, .. }
            | Self::BranchTop { from, .. }
            | Self::BranchBottom { from, .. } => *from,
        }
    }

    pub fn to(&self) -> Point {
        match self {
            Self::Spine { to, .. } | Self::BranchTop { to, .. } | Self::BranchBottom { to, .. } => {
                *to
            }
        }
    }

    /// Phase color index, `None` for spine connectors.
    pub fn color_index(&self) -> Option<usize> {
        match self {
            Self::Spine { .. } => None,
            Self::BranchTop { color_index, .. } | Self::BranchBottom { color_index, .. } => {
                Some(*color_index)
            }
        }
    }

    pub fn is_spine(&self) -> bool {
        matches!(self, Self::Spine { .. })
    }

    /// The polyline a renderer should draw.
    ///
    /// Spine connectors have two points. Branch connectors have three: the
    /// circle anchor, the elbow `(from.x, to.y)` and the step anchor.
    pub fn path_points(&self) -> Vec<Point> {
        let (from, to) = (self.from(), self.to());
        if self.is_spine() {
            vec![from, to]
        } else {
            vec![from, Point::new(from.x(), to.y()), to]
        }
    }
}

/// The complete layout of a roadmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub(crate) title: String,
    pub(crate) root: PositionedBox,
    pub(crate) groups: Vec<PositionedPhase>,
    pub(crate) nodes: Vec<PositionedStep>,
    pub(crate) connectors: Vec<Connector>,
    pub(crate) canvas_width: f32,
    pub(crate) canvas_height: f32,
    pub(crate) spine_y: f32,
    pub(crate) dropped_steps: Vec<String>,
}

impl LayoutResult {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root(&self) -> &PositionedBox {
        &self.root
    }

    /// Phases, left to right.
    pub fn groups(&self) -> &[PositionedPhase] {
        &self.groups
    }

    /// Steps, grouped by phase in layout order.
    pub fn nodes(&self) -> &[PositionedStep] {
        &self.nodes
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// The y coordinate of the horizontal spine.
    pub fn spine_y(&self) -> f32 {
        self.spine_y
    }

    /// Ids of steps whose group does not exist, in input order.
    pub fn dropped_steps(&self) -> &[String] {
        &self.dropped_steps
    }

    /// Smallest bounds containing the root, every phase circle and every step.
    pub fn content_bounds(&self) -> Bounds {
        merged_bounds(&self.root, &self.groups, &self.nodes)
    }
}

pub(crate) fn merged_bounds(
    root: &PositionedBox,
    groups: &[PositionedPhase],
    nodes: &[PositionedStep],
) -> Bounds {
    groups
        .iter()
        .map(PositionedPhase::bounds)
        .chain(nodes.iter().map(PositionedStep::bounds))
        .fold(root.bounds(), |acc, bounds| acc.merge(&bounds))
}
