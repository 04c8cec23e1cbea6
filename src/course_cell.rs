use crate::Link;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One absolutely-positioned rectangle of the timetable grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CourseCell {
    pub top: u32,

    pub left: u32,

    /// Cell height in pixels.
    pub ch: u32,

    /// Cell width in pixels.
    pub cw: u32,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub links: BTreeSet<Link>,
}

impl CourseCell {
    pub fn new(top: u32, left: u32, ch: u32, cw: u32, text: impl Into<String>) -> CourseCell {
        CourseCell {
            top,
            left,
            ch,
            cw,
            text: text.into(),
            links: BTreeSet::new(),
        }
    }

    pub fn with_link(mut self, link: Link) -> CourseCell {
        self.links.insert(link);
        self
    }
}
