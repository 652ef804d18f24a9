/*!
 * Report Module
 * Text and JSON rendering of simulation results
 */

pub mod render;

pub use render::{render, render_comparison_text, render_json, render_report_text, OutputFormat};
