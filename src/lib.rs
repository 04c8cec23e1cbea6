mod classify_week;
mod decode;
mod map_geometry;
mod parse_content;
mod resolve_start_time;
mod stage;
pub use parse_content::CourseContent;
pub use stage::{ChannelSink, JsonLinesSink, ScheduleSink, StageReport};
mod course_cell;
pub use course_cell::CourseCell;
mod course_type;
pub use course_type::{CourseType, COURSE_TYPE_CODES};
mod day_of_week;
pub use day_of_week::DayOfWeek;
mod decoded_course;
pub use decoded_course::DecodedCourse;
mod decoded_schedule;
pub use decoded_schedule::{CellFailure, DecodedSchedule};
mod error;
pub use error::{DecodeError, Error};
mod layout;
pub use layout::Layout;
mod link;
pub use link::Link;
mod link_type;
pub use link_type::LinkType;
mod raw_schedule;
pub use raw_schedule::RawSchedule;
mod time_cell;
pub use time_cell::TimeCell;
mod week_type;
pub use week_type::WeekType;

const MINUTES_PER_HOUR: i64 = 60;

/// Turns scraped timetable grids into decoded schedules.
///
/// A decoder holds nothing but its layout, so one instance can serve any
/// number of schedules, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    layout: Layout,
}

impl Decoder {
    pub fn new(layout: Option<Layout>) -> Result<Decoder, Error> {
        let layout = match layout {
            Some(l) => l,
            None => Layout::default(),
        };
        layout.validate()?;

        Ok(Decoder { layout })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
