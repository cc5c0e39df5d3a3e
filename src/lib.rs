//! MOT to COCO format converter
//!
//! This library converts MOT benchmark ground truth (`seqinfo.ini` plus
//! `gt/gt.txt` per sequence) into one COCO-style tracking annotation file per
//! data split.

pub mod coco;
pub mod config;
pub mod conversion;
pub mod error;
pub mod ground_truth;
pub mod seqinfo;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::Args;
pub use conversion::{convert, MotToCoco, TrackIdRemapper};
pub use error::{Error, Result};
pub use seqinfo::SequenceConfig;
pub use types::{GroundTruthRow, MotLabel, MOT_LABELS};

// COCO-specific exports
pub use coco::{mot_categories, Annotation, Category, CocoFile, Image, Video};
