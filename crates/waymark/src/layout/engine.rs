//! The timeline layout engine.
//!
//! Phases sit on a horizontal spine, left to right in ascending `order`.
//! Steps of even-indexed phases stack upwards from the circle, steps of
//! odd-indexed phases stack downwards. The engine works in three passes:
//!
//! 1. plan: sort phases, bucket steps by phase, size every circle;
//! 2. place: fold over the plans carrying the running right edge;
//! 3. size the canvas around everything that was placed.

use indexmap::IndexMap;
use log::{debug, info, trace};

use waymark_core::{
    geometry::{Point, Size},
    palette,
    roadmap::{Group, RoadmapSpec, Step},
};

use crate::{
    config::LayoutConfig,
    layout::{
        measure::{CharCount, TextMeasure},
        model::{
            Connector, LayoutResult, PositionedBox, PositionedPhase, PositionedStep, StepType,
            merged_bounds,
        },
    },
};

/// Headroom above the tallest upward stack and room after the last phase.
const CANVAS_MARGIN: f32 = 100.0;
/// The spine never sits higher than this.
const MIN_SPINE_Y: f32 = 400.0;
/// Minimum distance between the root anchor and the first phase.
const ROOT_CLEARANCE: f32 = 100.0;

/// A phase with everything needed to place it.
struct PhasePlan<'a> {
    group: &'a Group,
    steps: &'a [&'a Step],
    step_type: StepType,
    radius: f32,
}

impl PhasePlan<'_> {
    /// Vertical extent reserved for the step stack.
    fn extent(&self, config: &LayoutConfig) -> f32 {
        self.steps.len() as f32 * config.step_pitch()
    }

    /// Distance from the spine to the top of the highest element of this
    /// phase. Only upward stacks reach beyond the circle.
    fn reach_above(&self, config: &LayoutConfig) -> f32 {
        match (self.step_type, self.steps.len()) {
            (StepType::StepTop, count) if count > 0 => {
                self.radius + config.branch_padding() + (count - 1) as f32 * config.step_pitch()
            }
            _ => self.radius,
        }
    }
}

/// Accumulator of the placement fold.
struct Placement {
    right_edge: f32,
    groups: Vec<PositionedPhase>,
    nodes: Vec<PositionedStep>,
    connectors: Vec<Connector>,
}

/// Computes roadmap layouts for one configuration.
///
/// # Examples
///
/// ```
/// # use waymark::{config::LayoutConfig, layout::LayoutEngine};
/// # use waymark::roadmap::{Group, RoadmapSpec, Step};
/// let spec = RoadmapSpec::new("Backend")
///     .with_group(Group::new("g1", "Basics", 1.0))
///     .with_step(Step::new("n1", "g1", "HTTP"));
///
/// let layout = LayoutEngine::new(LayoutConfig::default()).compute(&spec);
/// assert_eq!(layout.nodes().len(), 1);
/// assert_eq!(layout.connectors().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LayoutEngine<M = CharCount> {
    config: LayoutConfig,
    measure: M,
}

impl LayoutEngine {
    /// Creates an engine using the character-count text heuristic.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            measure: CharCount,
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl<M: TextMeasure> LayoutEngine<M> {
    /// Replaces the text measure used for root width and phase radii.
    pub fn with_text_measure<N: TextMeasure>(self, measure: N) -> LayoutEngine<N> {
        LayoutEngine {
            config: self.config,
            measure,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `spec`.
    ///
    /// Never fails: steps whose group does not exist are left out and their
    /// ids reported in [`LayoutResult::dropped_steps`].
    pub fn compute(&self, spec: &RoadmapSpec) -> LayoutResult {
        let config = &self.config;

        let mut phases: Vec<&Group> = spec.groups().iter().collect();
        // `sort_by` is stable, so equal orders keep their input order.
        phases.sort_by(|a, b| a.order().total_cmp(&b.order()));

        let mut steps_by_group: IndexMap<&str, Vec<&Step>> = phases
            .iter()
            .map(|group| (group.id(), Vec::new()))
            .collect();
        let mut dropped_steps = Vec::new();
        for step in spec.nodes() {
            match steps_by_group.get_mut(step.group()) {
                Some(steps) => steps.push(step),
                None => {
                    debug!(step = step.id(), group = step.group(); "Dropping step with unknown group");
                    dropped_steps.push(step.id().to_string());
                }
            }
        }

        let plans: Vec<PhasePlan> = phases
            .iter()
            .copied()
            .enumerate()
            .map(|(index, group)| PhasePlan {
                group,
                steps: steps_by_group
                    .get(group.id())
                    .map_or(&[][..], Vec::as_slice),
                step_type: StepType::for_phase(index),
                radius: self.phase_radius(group),
            })
            .collect();

        let spine_y = self.spine_y(&plans);
        let root = self.place_root(spec.title(), spine_y);
        trace!(spine_y, root:?; "Root placed");

        let start = Placement {
            right_edge: config.phase_start_x().max(root.anchor().x() + ROOT_CLEARANCE),
            groups: Vec::with_capacity(plans.len()),
            nodes: Vec::new(),
            connectors: Vec::new(),
        };
        let placement = plans
            .iter()
            .enumerate()
            .fold(start, |placement, (index, plan)| {
                self.place_phase(placement, index, plan, &root, spine_y)
            });

        let max_bottom = plans
            .iter()
            .filter(|plan| !plan.step_type.is_top())
            .map(|plan| plan.extent(config))
            .fold(0.0, f32::max);

        let content = merged_bounds(&root, &placement.groups, &placement.nodes);

        let canvas_width = (placement.right_edge + CANVAS_MARGIN)
            .max(content.max_x() + config.canvas_padding());
        let canvas_height = (spine_y + max_bottom + config.canvas_padding() + CANVAS_MARGIN)
            .max(content.max_y() + config.canvas_padding());

        info!(
            groups = placement.groups.len(),
            nodes = placement.nodes.len(),
            dropped = dropped_steps.len(),
            canvas_width,
            canvas_height;
            "Layout computed"
        );

        LayoutResult {
            title: spec.title().to_string(),
            root,
            groups: placement.groups,
            nodes: placement.nodes,
            connectors: placement.connectors,
            canvas_width,
            canvas_height,
            spine_y,
            dropped_steps,
        }
    }

    /// Radius grows with the label so the text fits inside the circle.
    fn phase_radius(&self, group: &Group) -> f32 {
        let label = self.measure.measure(group.title())
            + group.duration().map_or(0.0, |d| self.measure.measure(d));
        let grown = self.config.phase_base_radius() + self.config.phase_char_growth() * label;
        self.config.phase_radius().max(grown)
    }

    /// Leaves room for the tallest upward stack, and never lets any element
    /// cross the top padding.
    fn spine_y(&self, plans: &[PhasePlan]) -> f32 {
        let config = &self.config;
        let max_top = plans
            .iter()
            .filter(|plan| plan.step_type.is_top())
            .map(|plan| plan.extent(config))
            .fold(0.0, f32::max);
        let from_extent = (max_top + config.canvas_padding() + CANVAS_MARGIN).max(MIN_SPINE_Y);

        let required = plans
            .iter()
            .map(|plan| plan.reach_above(config))
            .fold(config.root_height() / 2.0, f32::max)
            + config.canvas_padding();

        from_extent.max(required)
    }

    fn place_root(&self, title: &str, spine_y: f32) -> PositionedBox {
        let config = &self.config;
        let text_width =
            self.measure.measure(title) * config.root_char_width() + config.root_text_padding();
        let size = Size::new(config.root_width().max(text_width), config.root_height());
        PositionedBox::new(
            Point::new(config.root_x(), spine_y - size.height() / 2.0),
            size,
        )
    }

    fn place_phase(
        &self,
        mut placement: Placement,
        index: usize,
        plan: &PhasePlan,
        root: &PositionedBox,
        spine_y: f32,
    ) -> Placement {
        let config = &self.config;
        let color_index = palette::color_index(index);
        let radius = plan.radius;
        let group_id = plan.group.id();

        let phase = PositionedPhase::new(
            group_id,
            plan.group.title(),
            plan.group.duration().map(str::to_string),
            Point::new(placement.right_edge + radius, spine_y),
            radius,
            color_index,
        );

        let spine = match placement.groups.last() {
            Some(previous) => Connector::Spine {
                id: format!("conn-{}-{group_id}", previous.id()),
                from: previous.right_edge(),
                to: phase.left_edge(),
            },
            None => Connector::Spine {
                id: format!("conn-root-{group_id}"),
                from: root.anchor(),
                to: phase.left_edge(),
            },
        };
        placement.connectors.push(spine);

        let center = phase.center();
        let (direction, branch_origin) = match plan.step_type {
            StepType::StepTop => (-1.0, Point::new(center.x(), center.y() - radius)),
            StepType::StepBottom => (1.0, Point::new(center.x(), center.y() + radius)),
        };
        let step_x = center.x() + radius + config.step_offset();
        let step_size = Size::new(config.step_width(), config.step_height());
        let mut step_y = spine_y + direction * (radius + config.branch_padding());

        for step in plan.steps {
            let top_left = Point::new(step_x, step_y);
            placement.connectors.push(Connector::branch(
                format!("conn-{group_id}-{}", step.id()),
                branch_origin,
                top_left.add_point(Point::new(0.0, config.branch_anchor_offset())),
                plan.step_type,
                color_index,
            ));
            placement.nodes.push(PositionedStep::new(
                step,
                top_left,
                step_size,
                plan.step_type,
                color_index,
            ));
            step_y += direction * config.step_pitch();
        }

        debug!(
            group = group_id,
            cx = center.x(),
            r = radius,
            steps = plan.steps.len();
            "Phase placed"
        );

        placement.right_edge = center.x() + radius + config.phase_gap();
        placement.groups.push(phase);
        placement
    }
}
