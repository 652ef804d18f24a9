/*!
 * Process Module
 * Process records, batches, and workload validation
 */

pub mod types;
pub mod validation;

// Re-export for convenience
pub use types::{Batch, BatchSnapshot, ProcessRecord};
pub use validation::validate_batch;
