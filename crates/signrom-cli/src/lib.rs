//! CLI library components for the LED sign EPROM tool.

pub mod logging;
pub mod source;
