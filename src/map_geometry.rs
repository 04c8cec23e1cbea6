use crate::{CourseCell, DayOfWeek, DecodeError, Decoder, MINUTES_PER_HOUR};
use chrono::{Duration, NaiveTime};

impl Decoder {
    /// Places a course cell on the week: its day column and its start and
    /// end time.
    pub fn map_geometry(
        &self,
        cell: &CourseCell,
        start_time: NaiveTime,
    ) -> Result<(DayOfWeek, NaiveTime, NaiveTime), DecodeError> {
        let layout = &self.layout;

        let (day, _) = self
            .day_band(cell.left)
            .ok_or(DecodeError::UnknownDay { left: cell.left })?;

        if cell.top < layout.first_cell_top {
            return Err(DecodeError::AboveGridOrigin { top: cell.top });
        }
        let row = (cell.top - layout.first_cell_top) / layout.hour_cell_height;
        let starts_at = add_minutes(start_time, i64::from(row) * MINUTES_PER_HOUR)?;

        // The drawn border may push a cell a few pixels past its last row.
        if cell.ch <= layout.course_cell_border {
            return Err(DecodeError::EmptyCellHeight { ch: cell.ch });
        }
        let inner = cell.ch - layout.course_cell_border;
        let slots = inner.div_ceil(layout.hour_cell_height);
        let duration = i64::from(slots) * MINUTES_PER_HOUR - i64::from(layout.break_minutes);
        let ends_at = add_minutes(starts_at, duration)?;

        Ok((day, starts_at, ends_at))
    }

    /// Day column containing `left`, with the column's left edge.
    pub(crate) fn day_band(&self, left: u32) -> Option<(DayOfWeek, u32)> {
        let layout = &self.layout;
        let tolerance = layout.day_band_tolerance;

        DayOfWeek::ALL
            .iter()
            .zip(layout.day_offsets.iter())
            .find(|(_, offset)| {
                let offset = **offset;
                let from = offset.saturating_sub(tolerance);
                let to = offset
                    .saturating_add(layout.day_column_width)
                    .saturating_sub(tolerance);
                from <= left && left < to
            })
            .map(|(day, offset)| (*day, *offset))
    }
}

fn add_minutes(time: NaiveTime, minutes: i64) -> Result<NaiveTime, DecodeError> {
    match time.overflowing_add_signed(Duration::minutes(minutes)) {
        (result, 0) => Ok(result),
        _ => Err(DecodeError::PastMidnight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layout;
    use proptest::prelude::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn first_row_single_slot() {
        let decoder = Decoder::default();
        let cell = CourseCell::new(237, 88, 45, 154, "");
        assert_eq!(
            decoder.map_geometry(&cell, hm(8, 0)),
            Ok((DayOfWeek::Monday, hm(8, 0), hm(8, 45)))
        );
    }

    #[test]
    fn later_row_double_slot() {
        let decoder = Decoder::default();
        // third row, two slots tall including border
        let cell = CourseCell::new(237 + 2 * 45, 398, 92, 154, "");
        assert_eq!(
            decoder.map_geometry(&cell, hm(8, 0)),
            Ok((DayOfWeek::Wednesday, hm(10, 0), hm(11, 45)))
        );
    }

    #[test]
    fn border_does_not_add_a_slot() {
        let decoder = Decoder::default();
        let cell = CourseCell::new(237, 88, 47, 154, "");
        let (_, _, ends_at) = decoder.map_geometry(&cell, hm(8, 0)).unwrap();
        assert_eq!(ends_at, hm(8, 45));
    }

    #[test]
    fn every_day_column_resolves() {
        let decoder = Decoder::default();
        for (day, offset) in DayOfWeek::ALL.iter().zip(decoder.layout().day_offsets) {
            // left edge, jittered edge and right (even week) half
            for left in [offset, offset - 2, offset + 77] {
                let cell = CourseCell::new(237, left, 45, 77, "");
                let (mapped, _, _) = decoder.map_geometry(&cell, hm(8, 0)).unwrap();
                assert_eq!(mapped, *day, "left = {}", left);
            }
        }
    }

    #[test]
    fn left_outside_columns_is_unknown_day() {
        let decoder = Decoder::default();
        for left in [0, 80, 1100] {
            let cell = CourseCell::new(237, left, 45, 154, "");
            assert_eq!(
                decoder.map_geometry(&cell, hm(8, 0)),
                Err(DecodeError::UnknownDay { left })
            );
        }
    }

    #[test]
    fn top_above_grid_is_rejected() {
        let decoder = Decoder::default();
        let cell = CourseCell::new(200, 88, 45, 154, "");
        assert_eq!(
            decoder.map_geometry(&cell, hm(8, 0)),
            Err(DecodeError::AboveGridOrigin { top: 200 })
        );
    }

    #[test]
    fn flat_cell_is_rejected() {
        let decoder = Decoder::default();
        let cell = CourseCell::new(237, 88, 2, 154, "");
        assert_eq!(
            decoder.map_geometry(&cell, hm(8, 0)),
            Err(DecodeError::EmptyCellHeight { ch: 2 })
        );
    }

    #[test]
    fn course_past_midnight_is_rejected() {
        let decoder = Decoder::default();
        let cell = CourseCell::new(237 + 3 * 45, 88, 45, 154, "");
        assert_eq!(
            decoder.map_geometry(&cell, hm(22, 0)),
            Err(DecodeError::PastMidnight)
        );
    }

    #[test]
    fn tallest_wire_height_is_past_midnight() {
        let decoder = Decoder::default();
        let cell = CourseCell::new(237, 88, u32::MAX, 154, "wyk Fizyka");
        assert_eq!(
            decoder.map_geometry(&cell, hm(8, 0)),
            Err(DecodeError::PastMidnight)
        );
    }

    #[test]
    fn last_column_at_the_pixel_limit_resolves() {
        let layout = Layout {
            day_offsets: [0, 200, 400, 600, 800, u32::MAX - 100],
            ..Layout::default()
        };
        let decoder = Decoder::new(Some(layout)).unwrap();
        assert_eq!(
            decoder.day_band(u32::MAX - 50),
            Some((DayOfWeek::Saturday, u32::MAX - 100))
        );
        // the column end saturates at the pixel limit
        assert_eq!(decoder.day_band(u32::MAX), None);
    }

    proptest! {
        #[test]
        fn any_height_ends_after_start_or_fails(
            ch in 3u32..=u32::MAX,
            row in 0u32..12,
            start_minute in 0u32..(8 * 60),
        ) {
            let decoder = Decoder::default();
            let layout = decoder.layout();
            let start = NaiveTime::from_hms_opt(start_minute / 60, start_minute % 60, 0).unwrap();
            let cell = CourseCell::new(
                layout.first_cell_top + row * layout.hour_cell_height,
                layout.day_offsets[0],
                ch,
                layout.every_week_width,
                "",
            );

            match decoder.map_geometry(&cell, start) {
                Ok((_, starts_at, ends_at)) => prop_assert!(ends_at > starts_at),
                Err(err) => prop_assert_eq!(err, DecodeError::PastMidnight),
            }
        }

        #[test]
        fn start_is_whole_rows_and_end_follows_start(
            row in 0u32..12,
            jitter in 0u32..45,
            ch in 3u32..(4 * 45),
            column in 0usize..6,
            start_minute in 0u32..(8 * 60),
        ) {
            let decoder = Decoder::default();
            let layout = decoder.layout();
            let start = NaiveTime::from_hms_opt(start_minute / 60, start_minute % 60, 0).unwrap();
            let cell = CourseCell::new(
                layout.first_cell_top + row * layout.hour_cell_height + jitter,
                layout.day_offsets[column],
                ch,
                layout.every_week_width,
                "",
            );

            let (day, starts_at, ends_at) = decoder.map_geometry(&cell, start).unwrap();
            prop_assert_eq!(day.column(), column);
            prop_assert_eq!((starts_at - start).num_minutes(), i64::from(row) * 60);
            prop_assert_eq!((starts_at - start).num_seconds() % 60, 0);
            prop_assert!(ends_at > starts_at);
        }
    }
}
