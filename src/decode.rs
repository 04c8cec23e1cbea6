use crate::{
    CellFailure, CourseCell, DecodeError, DecodedCourse, DecodedSchedule, Decoder, Error,
    RawSchedule,
};
use chrono::NaiveTime;
use log::{debug, warn};

impl Decoder {
    /// Decodes a whole scraped schedule.
    ///
    /// Missing time or course cells, or a time row without a single readable
    /// label, reject the schedule. Cells that cannot be decoded on their own
    /// are reported in `failures` next to the courses that could.
    pub fn decode(&self, raw: &RawSchedule) -> Result<DecodedSchedule, Error> {
        debug!(schedule_id = raw.schedule_id.as_str(); "Validating raw schedule");

        if raw.time_cells.is_empty() {
            return Err(Error::EmptyTimeCells);
        }
        if raw.course_cells.is_empty() {
            return Err(Error::EmptyCourseCells);
        }
        let start_time = self.resolve_start_time(&raw.time_cells)?;

        debug!(
            schedule_id = raw.schedule_id.as_str(),
            start_time = start_time.to_string(),
            cells = raw.course_cells.len();
            "Decoding course cells"
        );

        let mut courses = Vec::with_capacity(raw.course_cells.len());
        let mut failures = Vec::new();
        for (index, result) in self
            .decode_cells(&raw.course_cells, start_time)
            .into_iter()
            .enumerate()
        {
            match result {
                Ok(course) => courses.push(course),
                Err(error) => {
                    warn!(
                        schedule_id = raw.schedule_id.as_str(),
                        index = index,
                        error = error.to_string();
                        "Could not decode course cell"
                    );
                    failures.push(CellFailure {
                        index,
                        cell: raw.course_cells[index].clone(),
                        error,
                    });
                }
            }
        }

        Ok(DecodedSchedule {
            schedule_id: raw.schedule_id.clone(),
            courses,
            failures,
        })
    }

    /// Decodes a wire-encoded `RawSchedule`.
    pub fn decode_message(&self, message: &str) -> Result<DecodedSchedule, Error> {
        let raw: RawSchedule = match serde_json::from_str(message) {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::SerializationError(format!(
                    "Could not deserialize raw schedule ({}).",
                    err
                )))
            }
        };

        self.decode(&raw)
    }

    /// One result per cell, in input order.
    pub fn decode_cells(
        &self,
        cells: &[CourseCell],
        start_time: NaiveTime,
    ) -> Vec<Result<DecodedCourse, DecodeError>> {
        cells
            .iter()
            .map(|cell| self.decode_cell(cell, start_time))
            .collect()
    }

    pub fn decode_cell(
        &self,
        cell: &CourseCell,
        start_time: NaiveTime,
    ) -> Result<DecodedCourse, DecodeError> {
        let (day_of_week, starts_at, ends_at) = self.map_geometry(cell, start_time)?;
        let week_type = self.classify_week(cell.left, cell.cw);
        let content = self.parse_content(&cell.text, &cell.links)?;

        Ok(DecodedCourse {
            starts_at,
            ends_at,
            name: content.name,
            course_type: content.course_type,
            teachers: content.teachers,
            classrooms: content.classrooms,
            day_of_week,
            week_type,
            additional_info: content.additional_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CourseType, DayOfWeek, TimeCell, WeekType};

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn schedule(course_cells: Vec<CourseCell>) -> RawSchedule {
        RawSchedule {
            schedule_id: String::from("11K1"),
            time_cells: vec![TimeCell::new("08:00-08:45"), TimeCell::new("09:00-09:45")],
            course_cells,
        }
    }

    #[test]
    fn cell_combines_every_stage() {
        let decoder = Decoder::default();
        let course = decoder
            .decode_cell(
                &CourseCell::new(282, 243 + 77, 92, 77, "lab Bazy danych\nWystąpienia: od 3 tyg."),
                hm(8, 0),
            )
            .unwrap();
        assert_eq!(course.day_of_week, DayOfWeek::Tuesday);
        assert_eq!(course.starts_at, hm(9, 0));
        assert_eq!(course.ends_at, hm(10, 45));
        assert_eq!(course.week_type, WeekType::EvenWeeks);
        assert_eq!(course.course_type, CourseType::Lab);
        assert_eq!(course.name, "Bazy danych");
        assert_eq!(course.additional_info.as_deref(), Some("od 3 tyg."));
    }

    #[test]
    fn geometry_failure_wins_over_content() {
        let decoder = Decoder::default();
        assert_eq!(
            decoder.decode_cell(&CourseCell::new(237, 10, 45, 154, ""), hm(8, 0)),
            Err(DecodeError::UnknownDay { left: 10 })
        );
    }

    #[test]
    fn empty_time_cells_reject_the_schedule() {
        let decoder = Decoder::default();
        let mut raw = schedule(vec![CourseCell::new(237, 88, 45, 154, "wyk Fizyka")]);
        raw.time_cells.clear();
        assert_eq!(decoder.decode(&raw), Err(Error::EmptyTimeCells));
    }

    #[test]
    fn unreadable_time_row_rejects_the_schedule() {
        let decoder = Decoder::default();
        let mut raw = schedule(vec![CourseCell::new(237, 88, 45, 154, "wyk Fizyka")]);
        raw.time_cells = vec![TimeCell::new("rano")];
        assert_eq!(decoder.decode(&raw), Err(Error::NoScheduleStartTime));
    }

    #[test]
    fn failures_keep_their_input_index() {
        let decoder = Decoder::default();
        let bad = CourseCell::new(237, 88, 45, 154, "wyk");
        let decoded = decoder
            .decode(&schedule(vec![
                CourseCell::new(237, 88, 45, 154, "wyk Fizyka"),
                bad.clone(),
                CourseCell::new(100, 88, 45, 154, "wyk Chemia"),
                CourseCell::new(327, 553, 45, 154, "wyk Chemia"),
            ]))
            .unwrap();

        assert_eq!(decoded.schedule_id, "11K1");
        assert_eq!(decoded.courses.len(), 2);
        assert_eq!(decoded.failures.len(), 2);
        assert_eq!(decoded.failures[0].index, 1);
        assert_eq!(decoded.failures[0].cell, bad);
        assert_eq!(decoded.failures[0].error, DecodeError::MissingName);
        assert_eq!(decoded.failures[1].index, 2);
        assert_eq!(
            decoded.failures[1].error,
            DecodeError::AboveGridOrigin { top: 100 }
        );
    }

    #[test]
    fn malformed_message_is_a_serialization_error() {
        let decoder = Decoder::default();
        let err = decoder.decode_message("{\"scheduleId\": 7}").unwrap_err();
        assert!(matches!(err, Error::SerializationError(_)));
    }
}
