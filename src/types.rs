use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;

use crate::config::EmitOptions;
use crate::error::{EmitError, Result};

// Ordered class names; the position of a name is its class id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassNames(Vec<String>);

impl ClassNames {
    /// Read one class name per line, trimming whitespace and skipping blank lines.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut names = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                names.push(trimmed.to_string());
            }
        }
        Ok(Self(names))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// Map class ids `0..len` to their names in ascending id order.
    pub fn index_map(&self) -> BTreeMap<usize, String> {
        self.0.iter().cloned().enumerate().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|name| name.as_ref().trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }
}

/// Which of the two dataset YAML layouts to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputMode {
    /// Writes `path` and an index-keyed `names` block.
    Rooted { dataset_root: String },
    /// Writes `nc` and `names` as a plain list; the class file must hold exactly
    /// `num_classes` names.
    Counted { num_classes: usize },
}

// Image directories for the train/val/test splits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPaths {
    pub train: String,
    pub val: String,
    pub test: Option<String>,
}

/// In-memory dataset description, built once per emit and dropped after writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetConfig {
    Rooted {
        path: String,
        splits: SplitPaths,
        names: BTreeMap<usize, String>,
    },
    Counted {
        splits: SplitPaths,
        nc: usize,
        names: Vec<String>,
    },
}

impl DatasetConfig {
    /// Build the config for `options.mode`, checking the class count in counted mode.
    pub fn build(options: &EmitOptions, class_names: ClassNames) -> Result<Self> {
        let splits = SplitPaths {
            train: options.train_path.clone(),
            val: options.val_path.clone(),
            test: options.test_split().map(str::to_string),
        };

        match &options.mode {
            OutputMode::Rooted { dataset_root } => Ok(DatasetConfig::Rooted {
                path: dataset_root.clone(),
                splits,
                names: class_names.index_map(),
            }),
            OutputMode::Counted { num_classes } => {
                if class_names.len() != *num_classes {
                    return Err(EmitError::ClassCountMismatch {
                        expected: *num_classes,
                        found: class_names.len(),
                        path: options.class_names_file.clone(),
                    });
                }
                Ok(DatasetConfig::Counted {
                    splits,
                    nc: *num_classes,
                    names: class_names.into_vec(),
                })
            }
        }
    }

    pub fn splits(&self) -> &SplitPaths {
        match self {
            DatasetConfig::Rooted { splits, .. } | DatasetConfig::Counted { splits, .. } => splits,
        }
    }

    /// Class names in id order, regardless of layout.
    pub fn class_names(&self) -> Vec<&str> {
        match self {
            DatasetConfig::Rooted { names, .. } => names.values().map(String::as_str).collect(),
            DatasetConfig::Counted { names, .. } => names.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_skips_blank_lines() {
        let input = "cat\n\ndog\n  \nbird\n";
        let names = ClassNames::from_reader(input.as_bytes()).unwrap();
        assert_eq!(names.clone().into_vec(), ["cat", "dog", "bird"]);

        let map = names.index_map();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(map[&1], "dog");
    }

    #[test]
    fn test_from_reader_trims_and_handles_crlf() {
        let input = "\r\n  person \r\n\tcar\r\n";
        let names = ClassNames::from_reader(input.as_bytes()).unwrap();
        assert_eq!(names.clone().into_vec(), ["person", "car"]);
    }

    #[test]
    fn test_build_rooted_and_counted() {
        let names: ClassNames = ["glioma", "meningioma"].into_iter().collect();

        let rooted = EmitOptions::rooted("root", "train", "val", "classes.txt").with_test_path("test");
        let config = DatasetConfig::build(&rooted, names.clone()).unwrap();
        assert!(matches!(config, DatasetConfig::Rooted { ref path, .. } if path == "root"));
        assert_eq!(config.splits().test.as_deref(), Some("test"));
        assert_eq!(config.class_names(), vec!["glioma", "meningioma"]);

        let counted = EmitOptions::counted(2, "train", "val", "classes.txt");
        let config = DatasetConfig::build(&counted, names.clone()).unwrap();
        assert!(matches!(config, DatasetConfig::Counted { nc: 2, .. }));
        assert_eq!(config.splits().test, None);

        let counted = EmitOptions::counted(5, "train", "val", "classes.txt");
        match DatasetConfig::build(&counted, names) {
            Err(EmitError::ClassCountMismatch {
                expected, found, ..
            }) => assert_eq!((expected, found), (5, 2)),
            other => panic!("expected ClassCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_filters_blank_names() {
        let names: ClassNames = vec!["", " a ", "b", "   "].into_iter().collect();
        assert_eq!(names.len(), 2);
        assert_eq!(names.clone().into_vec(), ["a", "b"]);
    }
}
