//! Core domain for the workflow generator
//!
//! This module defines the step registry, the step-list normalization
//! rules and the textual document transforms that every generated
//! workflow goes through.

pub mod config;
pub mod document;
pub mod editor;
pub mod header;
pub mod registry;
pub mod steps;

pub use config::GeneratorConfig;
pub use document::Document;
pub use editor::LineEditor;
pub use registry::{registered_steps, Language, MANDATORY_STEP};
pub use steps::{normalize_steps, parse_step_list};
