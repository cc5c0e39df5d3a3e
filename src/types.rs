/// Name of the per-sequence configuration file
pub const SEQINFO_FILE: &str = "seqinfo.ini";

/// Ground-truth file, relative to the sequence directory
pub const GROUND_TRUTH_FILE: &str = "gt/gt.txt";

/// Name of the JSON document written for every split
pub const ANNOTATIONS_FILE: &str = "annotations.json";

/// Splits with this name never carry annotations
pub const TEST_SPLIT: &str = "test";

// Column layout of a MOT ground-truth row
pub const FRAME_NUMBER: usize = 0;
pub const IDENTITY_NUMBER: usize = 1;
pub const BBOX_LEFT: usize = 2;
pub const BBOX_TOP: usize = 3;
pub const BBOX_WIDTH: usize = 4;
pub const BBOX_HEIGHT: usize = 5;
pub const CONFIDENCE_SCORE: usize = 6;
pub const CLASS_ID: usize = 7;
pub const VISIBILITY: usize = 8;
pub const GROUND_TRUTH_COLUMNS: usize = 9;

/// Columns that hold integers
pub const INTEGER_COLUMNS: [usize; 3] = [FRAME_NUMBER, IDENTITY_NUMBER, CLASS_ID];

/// Supercategory grouping of the MOT labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Supercategory {
    Person,
    Vehicle,
    Occluder,
    Crowd,
}

impl Supercategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Supercategory::Person => "person",
            Supercategory::Vehicle => "vehicle",
            Supercategory::Occluder => "occluder",
            Supercategory::Crowd => "crowd",
        }
    }
}

/// One entry of the MOT label taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotLabel {
    pub id: u32,
    pub name: &'static str,
    pub supercategory: Supercategory,
}

const fn label(id: u32, name: &'static str, supercategory: Supercategory) -> MotLabel {
    MotLabel {
        id,
        name,
        supercategory,
    }
}

/// The fixed MOT label set, ordered by id
pub const MOT_LABELS: [MotLabel; 13] = [
    label(1, "pedestrian", Supercategory::Person),
    label(2, "person_on_vehicle", Supercategory::Person),
    label(3, "car", Supercategory::Vehicle),
    label(4, "bicycle", Supercategory::Vehicle),
    label(5, "motorbike", Supercategory::Vehicle),
    label(6, "non_motorized_vehicle", Supercategory::Vehicle),
    label(7, "static_person", Supercategory::Person),
    label(8, "distractor", Supercategory::Person),
    label(9, "occluder", Supercategory::Occluder),
    label(10, "occluder_on_ground", Supercategory::Occluder),
    label(11, "occluder_full", Supercategory::Occluder),
    label(12, "reflection", Supercategory::Person),
    label(13, "crowd", Supercategory::Crowd),
];

/// Class id of the `crowd` label
pub const CROWD_CLASS_ID: i64 = 13;

/// A single parsed ground-truth row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundTruthRow {
    pub frame: i64,
    pub identity: i64,
    pub bbox_left: f64,
    pub bbox_top: f64,
    pub bbox_width: f64,
    pub bbox_height: f64,
    pub confidence: f64,
    pub class_id: i64,
    pub visibility: f64,
}

impl GroundTruthRow {
    /// Build a row from the nine numeric columns in file order
    pub fn from_columns(columns: &[f64; GROUND_TRUTH_COLUMNS]) -> Self {
        Self {
            frame: columns[FRAME_NUMBER] as i64,
            identity: columns[IDENTITY_NUMBER] as i64,
            bbox_left: columns[BBOX_LEFT],
            bbox_top: columns[BBOX_TOP],
            bbox_width: columns[BBOX_WIDTH],
            bbox_height: columns[BBOX_HEIGHT],
            confidence: columns[CONFIDENCE_SCORE],
            class_id: columns[CLASS_ID] as i64,
            visibility: columns[VISIBILITY],
        }
    }

    /// Bounding box as `[top, left, width, height]`
    pub fn bbox(&self) -> [f64; 4] {
        [
            self.bbox_top,
            self.bbox_left,
            self.bbox_width,
            self.bbox_height,
        ]
    }

    pub fn area(&self) -> f64 {
        self.bbox_width * self.bbox_height
    }

    pub fn is_crowd(&self) -> bool {
        self.class_id == CROWD_CLASS_ID
    }
}
