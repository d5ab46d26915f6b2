//! Loads keypoint annotation files into index-aligned coordinate and class id sequences.
//!
//! ```no_run
//! use keypoint_loader::load_keypoints;
//!
//! let set = load_keypoints("annotations/C0105_cropped_keypoints.json")?;
//! for (coordinates, class_id) in set.iter().take(2) {
//!     println!("{:?} {}", coordinates, class_id);
//! }
//! # Ok::<(), keypoint_loader::LoaderError>(())
//! ```
pub mod config;
pub mod dataset;
pub mod error;

pub use config::{LoaderConfig, RaggedPolicy};
pub use dataset::class_map::{class_id, class_name, UNKNOWN_CLASS_ID};
pub use dataset::common_structs::KeypointSet;
pub use dataset::data_loaders::keypoint_loader::{load_keypoints, KeypointLoader};
pub use error::{ErrorKind, LoaderError};
