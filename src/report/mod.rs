//! Report generation modules.
//!
//! Renders a dashboard snapshot as Markdown or JSON.

pub mod generator;

pub use generator::*;
