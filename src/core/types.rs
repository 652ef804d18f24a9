/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time, in discrete integer units
pub type Ticks = u64;

/// Priority level (higher is more urgent)
pub type Priority = i32;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
