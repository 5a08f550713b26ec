use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::OutputMode;

/// Output file used when the caller does not name one.
pub const DEFAULT_OUTPUT_PATH: &str = "data.yaml";

/// Named inputs for a single `emit` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Rooted (dataset root plus index-keyed names) or counted (`nc` plus listed names)
    pub mode: OutputMode,

    /// Path to the training images
    pub train_path: String,

    /// Path to the validation images
    pub val_path: String,

    /// Path to the test images; the `test` key is omitted when absent or empty
    #[serde(default)]
    pub test_path: Option<String>,

    /// Text file with one class name per line
    pub class_names_file: PathBuf,

    /// Where to write the YAML file
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

impl EmitOptions {
    pub fn rooted(
        dataset_root: impl Into<String>,
        train_path: impl Into<String>,
        val_path: impl Into<String>,
        class_names_file: impl Into<PathBuf>,
    ) -> Self {
        Self::new(
            OutputMode::Rooted {
                dataset_root: dataset_root.into(),
            },
            train_path.into(),
            val_path.into(),
            class_names_file.into(),
        )
    }

    pub fn counted(
        num_classes: usize,
        train_path: impl Into<String>,
        val_path: impl Into<String>,
        class_names_file: impl Into<PathBuf>,
    ) -> Self {
        Self::new(
            OutputMode::Counted { num_classes },
            train_path.into(),
            val_path.into(),
            class_names_file.into(),
        )
    }

    fn new(mode: OutputMode, train_path: String, val_path: String, class_names_file: PathBuf) -> Self {
        Self {
            mode,
            train_path,
            val_path,
            test_path: None,
            class_names_file,
            output_path: default_output_path(),
        }
    }

    pub fn with_test_path(mut self, test_path: impl Into<String>) -> Self {
        self.test_path = Some(test_path.into());
        self
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// The test split path, treating an empty string as absent.
    pub fn test_split(&self) -> Option<&str> {
        self.test_path.as_deref().filter(|path| !path.is_empty())
    }
}
