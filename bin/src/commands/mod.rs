//! CLI command implementations.

pub(crate) mod average;
pub(crate) mod fetch;
