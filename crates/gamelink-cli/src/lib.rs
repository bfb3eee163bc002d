//! CLI library components for gamelink.

pub mod logging;
pub mod pipeline;
pub mod schedule;
