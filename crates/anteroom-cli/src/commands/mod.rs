//! CLI command implementations.

pub(crate) mod directory;
