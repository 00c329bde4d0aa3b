//! CLI library components for rowbind.

pub mod logging;
