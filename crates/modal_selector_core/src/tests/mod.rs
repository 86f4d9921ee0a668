//! Scenario tests for the selector state machine
//!
//! Tests are organized by topic:
//! - `selection` - Mount, open/close, select and initial-value resync
//! - `measurement` - Measure-then-settle sizing across renders

mod measurement;
