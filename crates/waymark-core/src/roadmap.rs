//! The roadmap input model.
//!
//! A [`RoadmapSpec`] is the tree the layout engine consumes: a title, the
//! phases ([`Group`]) in any order, and the steps ([`Step`]) of every phase,
//! each tagged with the id of the group that owns it.
//!
//! All types implement [`serde::Deserialize`] with camelCase field names so
//! they can be read straight from the JSON documents produced by roadmap
//! generators. Missing optional fields fall back to empty values.
//!
//! # Example
//!
//! ```
//! # use waymark_core::roadmap::{Group, RoadmapSpec, Step};
//! let spec = RoadmapSpec::new("Backend Engineer")
//!     .with_group(Group::new("g1", "Foundations", 1.0).with_duration("3 months"))
//!     .with_step(Step::new("n1", "g1", "Learn HTTP").with_bullet("Status codes"));
//!
//! assert_eq!(spec.groups().len(), 1);
//! assert_eq!(spec.steps_of("g1").count(), 1);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// A complete roadmap: a title, its phases and their steps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    groups: Vec<Group>,

    #[serde(default, deserialize_with = "null_as_default")]
    nodes: Vec<Step>,
}

impl RoadmapSpec {
    /// Creates an empty roadmap with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            groups: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Appends a phase (builder style).
    pub fn with_group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Appends a step (builder style).
    pub fn with_step(mut self, step: Step) -> Self {
        self.nodes.push(step);
        self
    }

    /// Appends a phase.
    pub fn push_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    /// Appends a step.
    pub fn push_step(&mut self, step: Step) {
        self.nodes.push(step);
    }

    /// Sets the roadmap title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the roadmap title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the phases in input order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns all steps in input order.
    pub fn nodes(&self) -> &[Step] {
        &self.nodes
    }

    /// Returns a mutable reference to the most recently added step, if any.
    pub fn last_step_mut(&mut self) -> Option<&mut Step> {
        self.nodes.last_mut()
    }

    /// Iterates the steps owned by `group_id`, in input order.
    pub fn steps_of<'a>(&'a self, group_id: &'a str) -> impl Iterator<Item = &'a Step> + 'a {
        self.nodes.iter().filter(move |step| step.group == group_id)
    }
}

/// A phase of the roadmap, drawn as a circle on the spine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    title: String,

    #[serde(default)]
    duration: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    order: f64,
}

impl Group {
    /// Creates a phase without a duration.
    pub fn new(id: impl Into<String>, title: impl Into<String>, order: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration: None,
            order,
        }
    }

    /// Sets the duration annotation (builder style).
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the duration annotation exactly as given. An empty string is
    /// kept and contributes nothing to the phase label.
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    /// Returns the sort key. Phases are laid out in ascending order.
    pub fn order(&self) -> f64 {
        self.order
    }
}

/// A single action item belonging to a phase.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    id: String,

    /// Id of the owning [`Group`]. A `null` group deserializes to an empty
    /// string, which never matches a group id.
    #[serde(default, deserialize_with = "null_as_default")]
    group: String,

    #[serde(default, deserialize_with = "null_as_default")]
    title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    bullets: Vec<String>,
}

impl Step {
    /// Creates a step without bullets.
    pub fn new(id: impl Into<String>, group: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: group.into(),
            title: title.into(),
            bullets: Vec::new(),
        }
    }

    /// Appends a bullet line (builder style).
    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullets.push(bullet.into());
        self
    }

    /// Appends a bullet line.
    pub fn push_bullet(&mut self, bullet: impl Into<String>) {
        self.bullets.push(bullet.into());
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }
}

/// Deserializes `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let json = r#"{
            "title": "Data Scientist",
            "groups": [
                { "id": "g1", "title": "Math", "duration": "2 months", "order": 1 },
                { "id": "g2", "title": "Python", "order": 2 }
            ],
            "nodes": [
                { "id": "n1", "group": "g1", "title": "Linear algebra", "bullets": ["Vectors", "Matrices"] },
                { "id": "n2", "group": "g2", "title": "Pandas" }
            ]
        }"#;

        let spec: RoadmapSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.title(), "Data Scientist");
        assert_eq!(spec.groups().len(), 2);
        assert_eq!(spec.groups()[0].duration(), Some("2 months"));
        assert_eq!(spec.groups()[1].duration(), None);
        assert_eq!(spec.nodes()[0].bullets(), ["Vectors", "Matrices"]);
        assert!(spec.nodes()[1].bullets().is_empty());
    }

    #[test]
    fn test_deserialize_nulls_as_defaults() {
        let json = r#"{
            "title": null,
            "groups": [{ "id": "g1", "title": "Intro", "duration": null, "order": null }],
            "nodes": [{ "id": "n1", "group": null, "title": "Orphan", "bullets": null }]
        }"#;

        let spec: RoadmapSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.title(), "");
        assert_eq!(spec.groups()[0].order(), 0.0);
        assert_eq!(spec.groups()[0].duration(), None);
        assert_eq!(spec.nodes()[0].group(), "");
        assert!(spec.nodes()[0].bullets().is_empty());
    }

    #[test]
    fn test_missing_arrays_are_empty() {
        let spec: RoadmapSpec = serde_json::from_str(r#"{ "title": "Empty" }"#).unwrap();

        assert!(spec.groups().is_empty());
        assert!(spec.nodes().is_empty());
    }

    #[test]
    fn test_empty_duration_is_kept() {
        let group = Group::new("g1", "Intro", 0.0).with_duration("");
        assert_eq!(group.duration(), Some(""));
        assert_eq!(Group::new("g2", "Intro", 0.0).duration(), None);
    }

    #[test]
    fn test_steps_of_filters_by_group() {
        let spec = RoadmapSpec::new("R")
            .with_group(Group::new("a", "A", 0.0))
            .with_group(Group::new("b", "B", 1.0))
            .with_step(Step::new("1", "a", "one"))
            .with_step(Step::new("2", "b", "two"))
            .with_step(Step::new("3", "a", "three"));

        let ids: Vec<_> = spec.steps_of("a").map(Step::id).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
