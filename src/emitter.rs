use log::{debug, info};
use std::path::PathBuf;

use crate::config::EmitOptions;
use crate::error::Result;
use crate::io::write_dataset_yaml;
use crate::types::DatasetConfig;
use crate::utils::read_class_names;

/// Generate the dataset YAML described by `options` and return the written path.
///
/// A missing class names file or a class count mismatch is reported before
/// any directory or file is created.
pub fn emit(options: &EmitOptions) -> Result<PathBuf> {
    let class_names = read_class_names(&options.class_names_file)?;
    let config = DatasetConfig::build(options, class_names)?;

    let splits = config.splits();
    debug!(
        "Dataset splits: train={}, val={}, test={}",
        splits.train,
        splits.val,
        splits.test.as_deref().unwrap_or("<none>")
    );
    debug!("Classes: [{}]", config.class_names().join(", "));

    write_dataset_yaml(&config, &options.output_path)?;
    info!("Dataset YAML written to {}", options.output_path.display());

    Ok(options.output_path.clone())
}
