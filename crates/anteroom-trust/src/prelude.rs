//! Prelude module - commonly used types for convenient import.
//!
//! Use `use anteroom_trust::prelude::*;` to import all essential types.

// Verdicts
pub use crate::TrustVerdict;

// Stores
pub use crate::{MemoryTrustStore, TrustStore};
