use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseType {
    Lecture,
    Lab,
    Practical,
    Project,
    Other,
}

/// Short codes opening a course cell's label.
pub const COURSE_TYPE_CODES: [(&str, CourseType); 5] = [
    ("wyk", CourseType::Lecture),
    ("lab", CourseType::Lab),
    ("ćw", CourseType::Practical),
    ("cw", CourseType::Practical),
    ("proj", CourseType::Project),
];

impl CourseType {
    /// Looks a short code up, ignoring case and a trailing `.` or `:`.
    pub fn from_code(code: &str) -> Option<CourseType> {
        let code = code.trim_end_matches(|c| c == '.' || c == ':').to_lowercase();
        COURSE_TYPE_CODES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, course_type)| *course_type)
    }
}
