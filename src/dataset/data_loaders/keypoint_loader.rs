use crate::config::{LoaderConfig, RaggedPolicy};
use crate::dataset::class_map::{class_id, UNKNOWN_CLASS_ID};
use crate::dataset::common_structs::{KeypointAnnotationFile, KeypointSet};
use crate::error::LoaderError;
use serde::de::Error as _;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Loads the keypoint annotation file at `path` with the default configuration,
/// which rejects ragged coordinates.
pub fn load_keypoints<P: AsRef<Path>>(path: P) -> Result<KeypointSet, LoaderError> {
    KeypointLoader::default().load(path)
}

/// Reads keypoint annotation files into a [`KeypointSet`]
#[derive(Debug, Clone, Default)]
pub struct KeypointLoader {
    config: LoaderConfig,
}

impl KeypointLoader {
    pub fn new(config: LoaderConfig) -> KeypointLoader {
        KeypointLoader { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<KeypointSet, LoaderError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let file = File::open(path).map_err(|source| LoaderError::FileAccess {
            origin: origin.clone(),
            source,
        })?;
        self.load_from_reader(BufReader::new(file), &origin)
    }

    /// `origin` names the input in errors and log events
    pub fn load_from_reader<R: Read>(
        &self,
        reader: R,
        origin: &str,
    ) -> Result<KeypointSet, LoaderError> {
        debug!(origin, "loading keypoints");
        let file: KeypointAnnotationFile =
            serde_json::from_reader(reader).map_err(|e| LoaderError::from_json(origin, e))?;
        self.convert(file, origin)
    }

    pub fn load_from_str(&self, json: &str, origin: &str) -> Result<KeypointSet, LoaderError> {
        debug!(origin, "loading keypoints");
        let file: KeypointAnnotationFile =
            serde_json::from_str(json).map_err(|e| LoaderError::from_json(origin, e))?;
        self.convert(file, origin)
    }

    fn convert(
        &self,
        file: KeypointAnnotationFile,
        origin: &str,
    ) -> Result<KeypointSet, LoaderError> {
        let records = file.keypoints;
        let expected = records.first().map(|r| r.coordinates.len());
        let mut coordinates = Vec::with_capacity(records.len());
        let mut labels = Vec::with_capacity(records.len());
        let mut ragged = false;
        for (index, record) in records.into_iter().enumerate() {
            if let Some(expected) = expected {
                let found = record.coordinates.len();
                if found != expected {
                    if self.config.ragged == RaggedPolicy::Reject {
                        return Err(LoaderError::RaggedCoordinates {
                            origin: origin.to_owned(),
                            index,
                            expected,
                            found,
                        });
                    }
                    ragged = true;
                }
            }
            // f64 -> f32 rounds to nearest, out of range values become infinite
            coordinates.push(record.coordinates.iter().map(|c| *c as f32).collect());
            let label = match &record.class {
                Value::String(name) => class_id(name),
                Value::Array(_) | Value::Object(_) => {
                    return Err(LoaderError::Schema {
                        origin: origin.to_owned(),
                        source: serde_json::Error::custom(format!(
                            "record {} has a class that is not a scalar: {}",
                            index, record.class
                        )),
                    });
                }
                _ => UNKNOWN_CLASS_ID,
            };
            labels.push(label);
        }
        if ragged {
            warn!(origin, "accepted keypoints with ragged coordinates");
        }
        let set = KeypointSet {
            coordinates,
            labels,
        };
        debug!(
            origin,
            records = set.len(),
            dimensionality = ?set.dimensionality(),
            unknown_classes = set.labels.iter().filter(|l| **l == UNKNOWN_CLASS_ID).count(),
            "loaded keypoints"
        );
        Ok(set)
    }
}
