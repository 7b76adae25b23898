//! CLI command implementations.

pub(crate) mod detect;
pub(crate) mod download;
pub(crate) mod list;
