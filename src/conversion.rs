//! MOT to COCO conversion engine
//!
//! Walks `<input>/<split>/<sequence>` and writes one
//! `<output>/<split>/annotations.json` per split.

use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::coco::{mot_categories, Annotation, Category, CocoFile, Image, Video};
use crate::error::{Error, Result};
use crate::ground_truth::read_ground_truth;
use crate::seqinfo::SequenceConfig;
use crate::types::{
    GroundTruthRow, ANNOTATIONS_FILE, GROUND_TRUTH_FILE, SEQINFO_FILE, TEST_SPLIT,
};
use crate::utils::{create_output_directory, create_progress_bar, sorted_entry_names, write_json};

/// Assigns dense track ids from the raw identity column.
///
/// The dense id advances every time the raw identity differs from the one on
/// the previous row. Rows are expected grouped by identity; an identity that
/// shows up again after another one gets a fresh dense id.
#[derive(Debug, Clone, Default)]
pub struct TrackIdRemapper {
    current: u64,
    last: Option<i64>,
}

impl TrackIdRemapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, raw_identity: i64) -> u64 {
        if self.last != Some(raw_identity) {
            self.current += 1;
            self.last = Some(raw_identity);
        }
        self.current
    }
}

/// Counters shared by all sequences of one split
#[derive(Debug, Clone)]
pub struct SplitCounters {
    pub image_count: i64,
    pub annotation_count: u64,
    pub video_count: u32,
    pub tracks: TrackIdRemapper,
}

impl Default for SplitCounters {
    fn default() -> Self {
        Self {
            image_count: 0,
            annotation_count: 0,
            video_count: 1,
            tracks: TrackIdRemapper::new(),
        }
    }
}

/// Build one image record per frame of a sequence.
///
/// `image_offset` is the number of images already emitted for the split; the
/// first frame gets id `image_offset + 1`.
pub fn extract_image_info(
    config: &SequenceConfig,
    seq: &str,
    video_id: u32,
    image_offset: i64,
) -> Vec<Image> {
    let seq_length = config.seq_length;
    (1..=seq_length)
        .map(|frame_id| {
            let id = image_offset + i64::from(frame_id);
            Image {
                file_name: format!(
                    "{}/{}/{:06}{}",
                    seq, config.image_dir, frame_id, config.image_extension
                ),
                id,
                frame_id,
                prev_image_id: if frame_id > 1 { id - 1 } else { -1 },
                next_image_id: if frame_id < seq_length { id + 1 } else { -1 },
                video_id,
                height: config.image_height,
                width: config.image_width,
            }
        })
        .collect()
}

/// Build one annotation per ground-truth row, advancing the split counters.
///
/// The image id is `image_offset + frame` with the raw frame number and no
/// further adjustment. Frame numbers in MOT files start at 1, so for
/// in-range frames this is the id [`extract_image_info`] gave that frame.
pub fn extract_annotations(
    rows: &[GroundTruthRow],
    counters: &mut SplitCounters,
    image_offset: i64,
) -> Vec<Annotation> {
    rows.iter()
        .map(|row| {
            counters.annotation_count += 1;
            let track_id = counters.tracks.next_id(row.identity);
            Annotation {
                id: counters.annotation_count,
                category_id: row.class_id,
                image_id: image_offset + row.frame,
                track_id,
                bbox: row.bbox(),
                conf: row.confidence,
                iscrowd: u32::from(row.is_crowd()),
                area: row.area(),
            }
        })
        .collect()
}

/// Converter from a MOT directory tree to COCO tracking files
#[derive(Debug, Clone)]
pub struct MotToCoco {
    input_path: PathBuf,
    output_path: PathBuf,
    show_progress: bool,
}

impl MotToCoco {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            show_progress: false,
        }
    }

    /// Draw a progress bar over the sequences of every split
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Convert every split found under the input directory
    pub fn convert(&self) -> Result<()> {
        let categories = mot_categories();

        for split in sorted_entry_names(&self.input_path)? {
            if !self.input_path.join(&split).is_dir() {
                debug!("Skipping non-directory entry {}", split);
                continue;
            }
            let split_output = create_output_directory(&self.output_path.join(&split))?;
            let coco_file = self.convert_split(&split, &categories)?;

            let output_file = split_output.join(ANNOTATIONS_FILE);
            write_json(&output_file, &coco_file)?;
            info!("Wrote {}", output_file.display());
        }

        Ok(())
    }

    /// Build the COCO document of one split without writing it
    pub fn convert_split(&self, split: &str, categories: &[Category]) -> Result<CocoFile> {
        let split_dir = self.input_path.join(split);
        let sequences = sorted_entry_names(&split_dir)?;
        let mut counters = SplitCounters::default();
        let mut out = CocoFile::with_categories(categories.to_vec());

        let pb = if self.show_progress {
            create_progress_bar(sequences.len() as u64, split)
        } else {
            ProgressBar::hidden()
        };

        for seq in &sequences {
            let seq_dir = split_dir.join(seq);
            let config_path = seq_dir.join(SEQINFO_FILE);
            if config_path.is_file() {
                self.convert_sequence(split, seq, &seq_dir, &mut counters, &mut out)?;
            } else {
                debug!("No {} in {}, skipping", SEQINFO_FILE, seq_dir.display());
            }
            info!(
                "loaded {} for {} images and {} samples",
                split,
                out.images.len(),
                out.annotations.len()
            );
            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(out)
    }

    fn convert_sequence(
        &self,
        split: &str,
        seq: &str,
        seq_dir: &Path,
        counters: &mut SplitCounters,
        out: &mut CocoFile,
    ) -> Result<()> {
        let config = SequenceConfig::read(seq_dir.join(SEQINFO_FILE))?;
        let image_offset = counters.image_count;

        out.videos.push(Video {
            id: counters.video_count,
            file_name: seq.to_string(),
        });
        out.images.extend(extract_image_info(
            &config,
            seq,
            counters.video_count,
            image_offset,
        ));

        let gt_path = seq_dir.join(GROUND_TRUTH_FILE);
        if split != TEST_SPLIT {
            let rows = read_ground_truth(&gt_path).map_err(|e| with_sequence(e, split, seq))?;
            out.annotations
                .extend(extract_annotations(&rows, counters, image_offset));
        } else if gt_path.exists() {
            warn!(
                "Ignoring ground truth of {} in the {} split",
                seq, TEST_SPLIT
            );
        }

        counters.image_count += i64::from(config.seq_length);
        counters.video_count += 1;
        Ok(())
    }
}

// Prefix data errors with the split and sequence they come from.
fn with_sequence(error: Error, split: &str, seq: &str) -> Error {
    match error {
        Error::DataRead {
            path,
            line,
            message,
        } => Error::DataRead {
            path,
            line,
            message: format!("{}/{}: {}", split, seq, message),
        },
        other => other,
    }
}

/// Convert the MOT tree under `input_path` into COCO files under `output_path`
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> Result<()> {
    MotToCoco::new(input_path.as_ref(), output_path.as_ref()).convert()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seq_length: u32) -> SequenceConfig {
        SequenceConfig {
            name: "MOT20-01".to_string(),
            image_dir: "img1".to_string(),
            frame_rate: 25,
            seq_length,
            image_width: 1920,
            image_height: 1080,
            image_extension: ".jpg".to_string(),
        }
    }

    fn row(frame: i64, identity: i64, class_id: i64) -> GroundTruthRow {
        GroundTruthRow {
            frame,
            identity,
            bbox_left: 10.0,
            bbox_top: 20.0,
            bbox_width: 3.5,
            bbox_height: 4.0,
            confidence: 1.0,
            class_id,
            visibility: 0.5,
        }
    }

    #[test]
    fn test_track_id_remapping_is_positional() {
        let mut tracks = TrackIdRemapper::new();
        let dense: Vec<_> = [5, 5, 5, 3, 3, 5]
            .iter()
            .map(|&raw| tracks.next_id(raw))
            .collect();
        assert_eq!(dense, [1, 1, 1, 2, 2, 3]);
        assert_eq!(tracks.next_id(5), 3);
    }

    #[test]
    fn test_track_id_remapping_accepts_negative_identity() {
        let mut tracks = TrackIdRemapper::new();
        assert_eq!(tracks.next_id(-1), 1);
        assert_eq!(tracks.next_id(-1), 1);
        assert_eq!(tracks.next_id(0), 2);
    }

    #[test]
    fn test_extract_image_info() {
        let images = extract_image_info(&config(3), "MOT20-01", 2, 10);
        assert_eq!(images.len(), 3);
        assert_eq!(images[0].file_name, "MOT20-01/img1/000001.jpg");
        assert_eq!(images[2].file_name, "MOT20-01/img1/000003.jpg");

        let ids: Vec<_> = images.iter().map(|i| i.id).collect();
        assert_eq!(ids, [11, 12, 13]);
        let frames: Vec<_> = images.iter().map(|i| i.frame_id).collect();
        assert_eq!(frames, [1, 2, 3]);

        assert_eq!(images[0].prev_image_id, -1);
        assert_eq!(images[0].next_image_id, 12);
        assert_eq!(images[1].prev_image_id, 11);
        assert_eq!(images[1].next_image_id, 13);
        assert_eq!(images[2].prev_image_id, 12);
        assert_eq!(images[2].next_image_id, -1);
        assert!(images.iter().all(|i| i.video_id == 2));
        assert!(images.iter().all(|i| i.width == 1920 && i.height == 1080));
    }

    #[test]
    fn test_extract_image_info_single_frame() {
        let images = extract_image_info(&config(1), "seq", 1, 0);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].prev_image_id, -1);
        assert_eq!(images[0].next_image_id, -1);
    }

    #[test]
    fn test_extract_annotations() {
        let mut counters = SplitCounters::default();
        let rows = [row(1, 4, 1), row(2, 4, 1), row(1, 9, 13)];
        let annotations = extract_annotations(&rows, &mut counters, 0);

        assert_eq!(annotations.len(), 3);
        let ids: Vec<_> = annotations.iter().map(|a| a.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        let tracks: Vec<_> = annotations.iter().map(|a| a.track_id).collect();
        assert_eq!(tracks, [1, 1, 2]);
        assert_eq!(annotations[0].bbox, [20.0, 10.0, 3.5, 4.0]);
        assert_eq!(annotations[0].area, 14.0);
        assert_eq!(annotations[0].iscrowd, 0);
        assert_eq!(annotations[2].iscrowd, 1);
        assert_eq!(annotations[2].category_id, 13);
        assert_eq!(counters.annotation_count, 3);
    }

    #[test]
    fn test_annotation_image_id_uses_raw_frame_offset() {
        // Images of a sequence starting at offset 5 get ids 6, 7, ...; the
        // annotation of frame 1 points at 5 + 1 = 6, matching the first image.
        let mut counters = SplitCounters::default();
        let annotations = extract_annotations(&[row(1, 1, 1), row(3, 1, 1)], &mut counters, 5);
        assert_eq!(annotations[0].image_id, 6);
        assert_eq!(annotations[1].image_id, 8);
    }

    #[test]
    fn test_counters_carry_across_sequences() {
        let mut counters = SplitCounters::default();
        extract_annotations(&[row(1, 7, 1), row(2, 7, 1)], &mut counters, 0);
        let second = extract_annotations(&[row(1, 7, 1)], &mut counters, 2);

        // Same raw identity as the last row of the previous sequence keeps its id
        assert_eq!(second[0].track_id, 1);
        assert_eq!(second[0].id, 3);
    }
}
