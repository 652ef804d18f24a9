/*!
 * Workload Module
 * Reading workload descriptions from text
 */

pub mod loader;

pub use loader::{load_workload, parse_workload, Workload};
