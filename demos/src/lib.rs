mod config;
mod version;
mod workload;

pub use config::{load, AppConfig};
pub use version::version;
pub use workload::{run, Phase, PhaseReport, Report};
