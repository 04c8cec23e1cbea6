use crate::{CourseType, DayOfWeek, WeekType};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecodedCourse {
    pub starts_at: NaiveTime,

    pub ends_at: NaiveTime,

    pub name: String,

    pub course_type: CourseType,

    #[serde(default)]
    pub teachers: BTreeSet<String>,

    #[serde(default)]
    pub classrooms: BTreeSet<String>,

    pub day_of_week: DayOfWeek,

    pub week_type: WeekType,

    pub additional_info: Option<String>,
}
