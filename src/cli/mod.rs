//! Command-line entry support: the run pipeline lives in `orchestration`

pub mod orchestration;

pub use orchestration::{run_workflow, RunOutcome};
