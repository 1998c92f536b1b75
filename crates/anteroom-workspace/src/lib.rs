//! Anteroom Workspace - The active workspace directory set.
//!
//! A session owns one [`WorkspaceContext`]: the ordered set of
//! directories the agent may operate in. The admission controller is
//! the sole writer; any component may enumerate at any time.
//!
//! # Example
//!
//! ```rust,ignore
//! use anteroom_core::normalize;
//! use anteroom_workspace::WorkspaceContext;
//!
//! let workspace = WorkspaceContext::new(normalize("/home/user/project"));
//! workspace.add_directory(&normalize("/home/user/notes"))?;
//! for dir in workspace.directories() {
//!     println!("- {dir}");
//! }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod context;
pub mod error;

pub use context::WorkspaceContext;
pub use error::{WorkspaceError, WorkspaceResult};
