use crate::{CourseCell, TimeCell};
use serde::{Deserialize, Serialize};

/// A scraped timetable page as handed over by the scraping stage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawSchedule {
    pub schedule_id: String,

    #[serde(default)]
    pub time_cells: Vec<TimeCell>,

    #[serde(default)]
    pub course_cells: Vec<CourseCell>,
}
