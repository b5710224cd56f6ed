//! Template storage
//!
//! Templates are opaque text blobs on disk: a shared `base.yml` header
//! plus one `<lang>/<step>.yml` per registered step. The store never
//! interprets their content; a missing step template is surfaced to
//! the caller as a non-fatal skip.

use crate::core::registry::Language;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File name of the shared header template
pub const BASE_TEMPLATE: &str = "base.yml";

#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a step template for a language
    pub fn step_path(&self, lang: Language, step: &str) -> PathBuf {
        self.root.join(lang.dir_name()).join(format!("{step}.yml"))
    }

    /// Load the shared base header template.
    ///
    /// A missing base is reported and treated as an empty header; env
    /// injection then synthesizes the env block from scratch.
    pub fn base(&self) -> String {
        let path = self.root.join(BASE_TEMPLATE);
        match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Base template not found at {}: {}", path.display(), err);
                String::new()
            }
        }
    }

    /// Load a step template; `None` when the file is missing or unreadable.
    pub fn step(&self, lang: Language, step: &str) -> Option<String> {
        std::fs::read_to_string(self.step_path(lang, step)).ok()
    }
}
