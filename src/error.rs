use serde::{Deserialize, Serialize};

/// Failures that reject a whole schedule, or the stage around it.
#[derive(Serialize, Deserialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Schedule has no time cells.")]
    EmptyTimeCells,
    #[error("Schedule has no course cells.")]
    EmptyCourseCells,
    #[error("No time cell label yields a start time.")]
    NoScheduleStartTime,
    #[error("{0}")]
    SerializationError(String),
    #[error("{0}")]
    ConfigError(String),
    #[error("{0}")]
    TransportError(String),
    #[error("{0}")]
    IoError(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(format!("I/O failure ({}).", err))
    }
}

/// Failures confined to a single course cell.
#[derive(Serialize, Deserialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DecodeError {
    #[error("Left offset {left} falls outside every day column.")]
    UnknownDay { left: u32 },
    #[error("Top offset {top} lies above the first grid row.")]
    AboveGridOrigin { top: u32 },
    #[error("Cell height {ch} does not exceed the cell border.")]
    EmptyCellHeight { ch: u32 },
    #[error("Course runs past midnight.")]
    PastMidnight,
    #[error("No course name left after stripping known segments.")]
    MissingName,
}
