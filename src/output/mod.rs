//! Output formatting
//! Console, JSON, and plain-text report rendering of analysis results

pub mod formatter;
pub mod report;
