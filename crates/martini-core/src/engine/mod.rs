//! # Engine Module
//!
//! Run configuration and the pair enumeration that drives coefficient generation.
//!
//! - **Configuration** ([`config`]) - Input paths, pair style and cutoffs, with a validating builder
//! - **Error Handling** ([`error`]) - The error type every workflow stage propagates
//! - **Progress Monitoring** ([`progress`]) - Callback-based stage and pair progress events
//! - **Pair Generation** ([`pairs`]) - Unordered type pair enumeration and database resolution

pub mod config;
pub mod error;
pub mod pairs;
pub mod progress;
