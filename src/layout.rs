use crate::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pixel and lexical conventions of the timetable page.
///
/// The defaults describe the reference page. A TOML file may override any
/// subset of fields:
///
/// ```toml
/// first_cell_top = 240
/// day_offsets = [90, 245, 400, 555, 710, 865]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Layout {
    /// Top edge of the first grid row, which starts at the schedule start time.
    pub first_cell_top: u32,

    /// Height of one hour row.
    pub hour_cell_height: u32,

    /// Border drawn around a course cell, included in its height.
    pub course_cell_border: u32,

    /// Gap between the end of a cell's last lesson and the next full hour.
    pub break_minutes: u32,

    /// Left edge of each day column, Monday through Saturday.
    pub day_offsets: [u32; 6],

    pub day_column_width: u32,

    /// Rendering jitter accepted around a day column's edges.
    pub day_band_tolerance: u32,

    /// Width of a cell held every week.
    pub every_week_width: u32,

    /// Width of a cell held on odd or even weeks only.
    pub half_week_width: u32,

    pub width_tolerance: u32,

    /// Prefix of the segment carrying occurrence notes.
    pub notes_marker: String,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            first_cell_top: 237,
            hour_cell_height: 45,
            course_cell_border: 2,
            break_minutes: 15,
            day_offsets: [88, 243, 398, 553, 708, 863],
            day_column_width: 155,
            day_band_tolerance: 3,
            every_week_width: 154,
            half_week_width: 77,
            width_tolerance: 2,
            notes_marker: String::from("Wystąpienia:"),
        }
    }
}

impl Layout {
    pub fn from_toml_str(content: &str) -> Result<Layout, Error> {
        let layout: Layout = toml::from_str(content)
            .map_err(|err| Error::ConfigError(format!("Could not parse layout ({}).", err)))?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Layout, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigError(format!(
                "Layout file {} does not exist.",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Layout::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.hour_cell_height == 0 {
            return Err(Error::ConfigError(String::from(
                "hour_cell_height must be positive.",
            )));
        }
        if i64::from(self.break_minutes) >= crate::MINUTES_PER_HOUR {
            return Err(Error::ConfigError(String::from(
                "break_minutes must be shorter than an hour.",
            )));
        }
        if self.day_column_width == 0 || self.every_week_width == 0 {
            return Err(Error::ConfigError(String::from(
                "day_column_width and every_week_width must be positive.",
            )));
        }
        if self.notes_marker.trim().is_empty() {
            return Err(Error::ConfigError(String::from(
                "notes_marker must not be blank.",
            )));
        }
        if self.day_offsets.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::ConfigError(String::from(
                "day_offsets must be strictly increasing.",
            )));
        }
        if self
            .day_offsets
            .windows(2)
            .any(|pair| pair[1] - pair[0] < self.day_column_width)
        {
            return Err(Error::ConfigError(String::from(
                "day_offsets must be at least day_column_width apart.",
            )));
        }
        Ok(())
    }
}
