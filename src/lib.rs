//! Ultralytics YOLO dataset YAML generator
//!
//! This library reads an ordered class-name list and writes the `data.yaml`
//! file that points a YOLO trainer at the train/val/test image directories.

pub mod config;
pub mod emitter;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{EmitOptions, DEFAULT_OUTPUT_PATH};
pub use emitter::emit;
pub use error::{EmitError, Result};
pub use io::{load_dataset_yaml, render_dataset_yaml, write_dataset_yaml, LoadedDataset};
pub use types::{ClassNames, DatasetConfig, OutputMode, SplitPaths};
pub use utils::read_class_names;
