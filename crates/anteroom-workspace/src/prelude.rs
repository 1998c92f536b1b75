//! Prelude module - commonly used types for convenient import.
//!
//! Use `use anteroom_workspace::prelude::*;` to import all essential types.

// The directory set
pub use crate::WorkspaceContext;

// Errors
pub use crate::{WorkspaceError, WorkspaceResult};
