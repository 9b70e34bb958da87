//! Read-side rendering of change reports.
//!
//! Rendering is a pure projection over the batch outcome: it never mutates
//! the ledger and never influences classification.

pub mod report_render;

pub use report_render::{render_history_lines, render_report_block};
