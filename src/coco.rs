//! COCO format data structures for tracking datasets
//!
//! The document is plain COCO extended with a `videos` collection and
//! per-image/per-annotation tracking fields.

use serde::{Deserialize, Serialize};

use crate::types::{MotLabel, MOT_LABELS};

/// COCO category information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub supercategory: String,
    pub id: u32,
    pub name: String,
}

impl From<&MotLabel> for Category {
    fn from(label: &MotLabel) -> Self {
        Self {
            supercategory: label.supercategory.as_str().to_string(),
            id: label.id,
            name: label.name.to_string(),
        }
    }
}

/// COCO image information, one per video frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub file_name: String,
    pub id: i64,
    /// Frame number inside the video, starting from 1
    pub frame_id: u32,
    /// `-1` on the first frame of a video
    pub prev_image_id: i64,
    /// `-1` on the last frame of a video
    pub next_image_id: i64,
    pub video_id: u32,
    pub height: u32,
    pub width: u32,
}

/// COCO annotation information with a dataset-wide track id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: u64,
    pub category_id: i64,
    pub image_id: i64,
    pub track_id: u64,
    pub bbox: [f64; 4],
    pub conf: f64,
    pub iscrowd: u32,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: u32,
    pub file_name: String,
}

/// Complete tracking dataset for one split
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoFile {
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
    pub videos: Vec<Video>,
    pub categories: Vec<Category>,
}

impl CocoFile {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Default::default()
        }
    }
}

/// Categories for the full MOT label set, ordered by id
pub fn mot_categories() -> Vec<Category> {
    MOT_LABELS.iter().map(Category::from).collect()
}
