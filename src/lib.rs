//! Workspace-confined git clones with credential injection.
//!
//! This crate clones remote repositories into a sandboxed workspace:
//! destination paths are resolved against a single workspace root and can
//! never escape it, and stored credentials are injected into the repository
//! URL through structured authority rewriting.
//!
//! # Example
//!
//! ```rust,no_run
//! use repofetch::{CloneOperation, Config, GitCli, Workspace};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let operation = CloneOperation::new(
//!     config.github,
//!     Workspace::new(config.workspace.root),
//!     GitCli,
//! );
//!
//! let message = operation
//!     .run("https://github.com/acme/widgets.git", "widgets")
//!     .await;
//! println!("{message}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod git;
pub mod workspace;

// Re-export commonly used types
pub use config::{Config, GithubCredentials, WorkspaceConfig};
pub use error::CloneError;
pub use git::{
    render_outcome, CloneOperation, CloneReceipt, GitCli, SourceControlClient, UrlValidator,
};
pub use workspace::Workspace;
