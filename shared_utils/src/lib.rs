//! Small helpers shared by the loader crates.

pub mod env;
