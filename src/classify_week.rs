use crate::{Decoder, WeekType};
use log::warn;

impl Decoder {
    /// Week parity of a cell, from its width and its position inside the
    /// day column. Half-width cells on the left half of the column are held
    /// on odd weeks, on the right half on even weeks.
    ///
    /// Widths matching neither the full nor the half column fall back to
    /// `EveryWeek`. That fallback hides malformed scrapes and is logged.
    pub fn classify_week(&self, left: u32, cw: u32) -> WeekType {
        let layout = &self.layout;

        if cw == layout.every_week_width {
            return WeekType::EveryWeek;
        }

        if cw.abs_diff(layout.half_week_width) <= layout.width_tolerance {
            if let Some((_, column_left)) = self.day_band(left) {
                return if left.saturating_sub(column_left) < layout.half_week_width {
                    WeekType::OddWeeks
                } else {
                    WeekType::EvenWeeks
                };
            }
        }

        warn!(left = left, cw = cw; "Unrecognized cell width, assuming every week");
        WeekType::EveryWeek
    }
}
