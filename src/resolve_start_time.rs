use crate::{Decoder, Error, TimeCell};
use chrono::NaiveTime;
use log::debug;

impl Decoder {
    /// Earliest start time among the time row labels. Every vertical offset
    /// in the grid is measured against it.
    pub fn resolve_start_time(&self, time_cells: &[TimeCell]) -> Result<NaiveTime, Error> {
        let mut earliest: Option<NaiveTime> = None;

        for cell in time_cells {
            let time = match label_start(&cell.text) {
                Some(time) => time,
                None => {
                    debug!(label = cell.text.as_str(); "Skipping unparseable time cell");
                    continue;
                }
            };

            earliest = match earliest {
                Some(current) if current <= time => Some(current),
                _ => Some(time),
            };
        }

        earliest.ok_or(Error::NoScheduleStartTime)
    }
}

// "08:00-08:45" -> 08:00
fn label_start(label: &str) -> Option<NaiveTime> {
    let first = label.split('-').next()?.trim();
    NaiveTime::parse_from_str(first, "%H:%M").ok()
}
