//! Utility helpers shared across queue UI modules.

pub mod color;
pub mod logging;
