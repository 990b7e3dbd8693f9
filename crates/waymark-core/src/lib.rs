//! Waymark Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Waymark crates:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Palette**: The fixed four-entry phase palette ([`palette`] module)
//! - **Roadmap**: The roadmap input model ([`roadmap`] module)

pub mod color;
pub mod geometry;
pub mod palette;
pub mod roadmap;
