use serde::{Deserialize, Serialize};

/// Column header of the grid, labelled `HH:MM-HH:MM`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeCell {
    pub text: String,
}

impl TimeCell {
    pub fn new(text: impl Into<String>) -> TimeCell {
        TimeCell { text: text.into() }
    }
}
