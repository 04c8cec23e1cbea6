use crate::{CourseCell, DecodeError, DecodedCourse};
use serde::{Deserialize, Serialize};

/// The decoded counterpart of a `RawSchedule`, keyed by the same id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecodedSchedule {
    pub schedule_id: String,

    pub courses: Vec<DecodedCourse>,

    #[serde(default)]
    pub failures: Vec<CellFailure>,
}

/// A course cell that could not be decoded. `index` is the cell's position
/// in the raw schedule's course cell list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellFailure {
    pub index: usize,

    pub cell: CourseCell,

    pub error: DecodeError,
}
