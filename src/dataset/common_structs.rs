use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
/// Structs shared by the keypoint loader and its callers

/// The annotation file as written by the labelling tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeypointAnnotationFile {
    pub keypoints: Vec<KeypointRecord>,
}

/// A single labelled keypoint.
///
/// `class` must be present but may hold any JSON value: a string is looked up
/// in the class table, `null`, numbers and booleans count as unknown classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeypointRecord {
    pub coordinates: Vec<f64>,
    pub class: serde_json::Value,
}

impl KeypointRecord {
    pub fn class_label(&self) -> Option<&str> {
        self.class.as_str()
    }
}

/// Keypoint coordinates and their class ids, aligned by index.
///
/// `coordinates[i]` and `labels[i]` both come from the i-th record of the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeypointSet {
    pub coordinates: Vec<Vec<f32>>,
    pub labels: Vec<u32>,
}

impl KeypointSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of coordinates per keypoint, `None` if the set is empty or ragged
    pub fn dimensionality(&self) -> Option<usize> {
        let first = self.coordinates.first()?.len();
        if self.coordinates.iter().map(|row| row.len()).all_equal() {
            Some(first)
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[f32], u32)> + '_ {
        self.coordinates
            .iter()
            .map(|row| row.as_slice())
            .zip(self.labels.iter().copied())
    }

    /// Flattens the N x K coordinate matrix row by row.
    /// Returns `None` when rows have different lengths.
    pub fn to_row_major(&self) -> Option<Vec<f32>> {
        if self.is_empty() {
            return Some(vec![]);
        }
        let dims = self.dimensionality()?;
        let mut out = Vec::with_capacity(self.len() * dims);
        for row in &self.coordinates {
            out.extend_from_slice(row);
        }
        Some(out)
    }

    /// How many keypoints carry each class id
    pub fn label_histogram(&self) -> BTreeMap<u32, usize> {
        let mut histogram = BTreeMap::new();
        for label in &self.labels {
            *histogram.entry(*label).or_insert(0) += 1;
        }
        histogram
    }

    pub fn into_parts(self) -> (Vec<Vec<f32>>, Vec<u32>) {
        (self.coordinates, self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> KeypointSet {
        KeypointSet {
            coordinates: vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
            labels: vec![1, 0, 1],
        }
    }

    #[test]
    fn dimensionality_of_regular_set() {
        assert_eq!(sample().dimensionality(), Some(2));
        assert_eq!(KeypointSet::default().dimensionality(), None);
    }

    #[test]
    fn ragged_set_has_no_matrix_form() {
        let ragged = KeypointSet {
            coordinates: vec![vec![1.0, 2.0], vec![3.0]],
            labels: vec![2, 3],
        };
        assert_eq!(ragged.dimensionality(), None);
        assert_eq!(ragged.to_row_major(), None);
    }

    #[test]
    fn row_major_keeps_record_order() {
        assert_eq!(
            sample().to_row_major().unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
        assert_eq!(KeypointSet::default().to_row_major(), Some(vec![]));
    }

    #[test]
    fn iter_pairs_rows_with_labels() {
        let set = sample();
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1], (&[3.0f32, 4.0][..], 0));
    }

    #[test]
    fn histogram_counts_each_label() {
        let histogram = sample().label_histogram();
        assert_eq!(histogram.get(&1), Some(&2));
        assert_eq!(histogram.get(&0), Some(&1));
        assert_eq!(histogram.get(&3), None);
    }

    #[test]
    fn record_ignores_extra_fields() {
        let record: KeypointRecord = serde_json::from_str(
            r#"{"coordinates": [1, 2.5], "class": "DJ", "visible": true}"#,
        )
        .unwrap();
        assert_eq!(record.coordinates, vec![1.0, 2.5]);
        assert_eq!(record.class_label(), Some("DJ"));
    }

    #[test]
    fn record_requires_class_key() {
        let err = serde_json::from_str::<KeypointRecord>(r#"{"coordinates": [1.0]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `class`"));

        let record: KeypointRecord =
            serde_json::from_str(r#"{"coordinates": [1.0], "class": null}"#).unwrap();
        assert_eq!(record.class_label(), None);
    }
}
