pub mod batch;
pub mod config;
pub mod paths;
pub mod plan;

pub use batch::{list_sources, process_file, process_folder, ProcessOptions};
pub use config::AppConfig;
pub use paths::{build_output_paths, OutputPaths};
pub use plan::RunPlan;
