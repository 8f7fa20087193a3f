pub mod config;
pub mod prober;
pub mod outcome;
pub mod error;

pub use self::config::Config;
pub use self::prober::run_probe;
pub use self::outcome::{ProbeOutcome, ProbeReport, ProbeVerdict};
pub use self::error::ProbeError;
