use log::debug;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::{EmitError, Result};
use crate::types::ClassNames;

/// Read the class names file, failing with `MissingInput` when it does not exist
pub fn read_class_names(path: &Path) -> Result<ClassNames> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(EmitError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let names = ClassNames::from_reader(BufReader::new(file))?;
    debug!("Read {} class names from {}", names.len(), path.display());
    Ok(names)
}

/// Create the parent directory of `path` if it has one.
/// Existing directories and their contents are left untouched.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir)?;
            debug!("Output directory ready: {}", dir.display());
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Render a string as a single-line YAML scalar, quoting it only when a plain
/// scalar would be read back as something else.
pub fn yaml_scalar(value: &str) -> Result<String> {
    let rendered = serde_yaml::to_string(value)?;
    Ok(rendered.trim_end_matches('\n').to_string())
}
