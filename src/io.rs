use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::{DatasetConfig, SplitPaths};
use crate::utils::{ensure_parent_dir, yaml_scalar};

/// First line of a rooted dataset YAML.
pub const DATASET_COMMENT: &str = "# Train/val/test sets as 1) dir: path/to/imgs, 2) file: path/to/imgs.txt, or 3) list: [path/to/imgs1, path/to/imgs2, ..]";

// Field order here is the key order in the written file
#[derive(Serialize)]
struct RootedBody<'a> {
    path: &'a str,
    train: &'a str,
    val: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    test: Option<&'a str>,
}

#[derive(Serialize)]
struct CountedBody<'a> {
    train: &'a str,
    val: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    test: Option<&'a str>,
    nc: usize,
    names: &'a [String],
}

/// Render the dataset config as YAML text.
///
/// Rooted configs get the leading comment line and a literal `names:` block
/// with one `  <id>: <name>` line per class after the serialized body.
/// Counted configs are serialized as-is, with `names` as a plain list.
pub fn render_dataset_yaml(config: &DatasetConfig) -> Result<String> {
    match config {
        DatasetConfig::Rooted {
            path,
            splits,
            names,
        } => {
            let body = serde_yaml::to_string(&RootedBody {
                path,
                train: &splits.train,
                val: &splits.val,
                test: splits.test.as_deref(),
            })?;

            let mut yaml = String::with_capacity(body.len() + 32 * (names.len() + 4));
            yaml.push_str(DATASET_COMMENT);
            yaml.push('\n');
            yaml.push_str(&body);
            // A bare `names:` would read back as null
            if names.is_empty() {
                yaml.push_str("\n# Classes\nnames: {}\n");
                return Ok(yaml);
            }
            yaml.push_str("\n# Classes\nnames:\n");
            for (id, name) in names {
                yaml.push_str(&format!("  {}: {}\n", id, yaml_scalar(name)?));
            }
            Ok(yaml)
        }
        DatasetConfig::Counted { splits, nc, names } => Ok(serde_yaml::to_string(&CountedBody {
            train: &splits.train,
            val: &splits.val,
            test: splits.test.as_deref(),
            nc: *nc,
            names,
        })?),
    }
}

/// Write the dataset YAML to `output_path`, creating its parent directory and
/// overwriting any existing file.
pub fn write_dataset_yaml(config: &DatasetConfig, output_path: &Path) -> Result<()> {
    let yaml_content = render_dataset_yaml(config)?;

    ensure_parent_dir(output_path)?;
    let mut dataset_yaml = BufWriter::new(File::create(output_path)?);
    dataset_yaml.write_all(yaml_content.as_bytes())?;
    dataset_yaml.flush()?;
    Ok(())
}

// `names` is either a plain list or an id-keyed mapping
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetNames {
    Sequence(Vec<String>),
    Mapping(BTreeMap<usize, String>),
}

impl DatasetNames {
    fn into_ordered(self) -> Vec<String> {
        match self {
            DatasetNames::Sequence(names) => names,
            DatasetNames::Mapping(mapping) => mapping.into_values().collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    path: Option<String>,
    train: String,
    val: String,
    test: Option<String>,
    nc: Option<usize>,
    names: DatasetNames,
}

/// A dataset YAML read back from disk, with `names` normalized to id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDataset {
    pub path: Option<String>,
    pub splits: SplitPaths,
    pub nc: Option<usize>,
    pub names: Vec<String>,
}

/// Read a dataset YAML in either layout.
pub fn load_dataset_yaml(path: &Path) -> Result<LoadedDataset> {
    let content = fs::read_to_string(path)?;
    let raw: RawDataset = serde_yaml::from_str(&content)?;

    Ok(LoadedDataset {
        path: raw.path,
        splits: SplitPaths {
            train: raw.train,
            val: raw.val,
            test: raw.test,
        },
        nc: raw.nc,
        names: raw.names.into_ordered(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splits(test: Option<&str>) -> SplitPaths {
        SplitPaths {
            train: "train/images".to_string(),
            val: "valid/images".to_string(),
            test: test.map(str::to_string),
        }
    }

    #[test]
    fn test_render_rooted_layout() {
        let config = DatasetConfig::Rooted {
            path: "../datasets/brain-tumor".to_string(),
            splits: splits(None),
            names: [(0, "negative".to_string()), (1, "positive".to_string())]
                .into_iter()
                .collect(),
        };

        let yaml = render_dataset_yaml(&config).unwrap();
        let expected = format!(
            "{}\npath: ../datasets/brain-tumor\ntrain: train/images\nval: valid/images\n\n# Classes\nnames:\n  0: negative\n  1: positive\n",
            DATASET_COMMENT
        );
        assert_eq!(yaml, expected);
    }

    #[test]
    fn test_render_rooted_without_classes() {
        let config = DatasetConfig::Rooted {
            path: "root".to_string(),
            splits: splits(None),
            names: BTreeMap::new(),
        };

        let yaml = render_dataset_yaml(&config).unwrap();
        assert!(yaml.ends_with("\n# Classes\nnames: {}\n"));

        let parsed: RawDataset = serde_yaml::from_str(&yaml).unwrap();
        assert!(parsed.names.into_ordered().is_empty());
    }

    #[test]
    fn test_render_counted_key_order() {
        let config = DatasetConfig::Counted {
            splits: splits(Some("test/images")),
            nc: 2,
            names: vec!["cat".to_string(), "dog".to_string()],
        };

        let yaml = render_dataset_yaml(&config).unwrap();
        let keys: Vec<&str> = yaml
            .lines()
            .filter(|line| !line.starts_with('-') && !line.starts_with(' '))
            .filter_map(|line| line.split(':').next())
            .collect();
        assert_eq!(keys, vec!["train", "val", "test", "nc", "names"]);
        assert!(!yaml.contains("path:"));
    }
}
