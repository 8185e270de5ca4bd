//! Workspace path confinement.
//!
//! Every destination handed to the clone operation is resolved against a
//! single workspace root. Inputs that could land outside the root (absolute
//! paths, `..` components) are rejected rather than normalized away.

use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::error::CloneError;

/// Confines destination paths to a single workspace root.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Create a workspace rooted at `root`. A relative root is anchored to
    /// the current working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&root))
                .unwrap_or(root)
        };
        Self { root }
    }

    /// The workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a workspace-relative destination to an absolute path.
    ///
    /// The result is always a descendant of the root: absolute inputs and
    /// any `..` component are rejected, `.` components are dropped.
    pub fn resolve(&self, relative: &str) -> Result<PathBuf, CloneError> {
        if relative.is_empty() {
            return Err(CloneError::InvalidDestination(
                "destination path cannot be empty".to_string(),
            ));
        }

        let candidate = Path::new(relative);
        if candidate.is_absolute() {
            return Err(CloneError::InvalidDestination(format!(
                "destination path must be relative to the workspace root: {relative}"
            )));
        }

        let mut resolved = self.root.clone();
        for component in candidate.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(CloneError::InvalidDestination(format!(
                        "destination path must not contain '..': {relative}"
                    )));
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(CloneError::InvalidDestination(format!(
                        "destination path must be relative to the workspace root: {relative}"
                    )));
                }
            }
        }

        debug!(destination = %resolved.display(), "Resolved workspace destination");
        Ok(resolved)
    }
}
