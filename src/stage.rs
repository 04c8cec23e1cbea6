use crate::{DecodedSchedule, Decoder, Error};
use log::{error, info};
use std::io::Write;
use tokio::sync::mpsc;

/// Downstream consumer of decoded schedules.
pub trait ScheduleSink {
    fn emit(&mut self, schedule: DecodedSchedule) -> Result<(), Error>;
}

/// Hands decoded schedules to another task.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<DecodedSchedule>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<DecodedSchedule>) -> ChannelSink {
        ChannelSink { tx }
    }
}

impl ScheduleSink for ChannelSink {
    fn emit(&mut self, schedule: DecodedSchedule) -> Result<(), Error> {
        self.tx.send(schedule).map_err(|err| {
            Error::TransportError(format!(
                "Could not hand over schedule {} (receiver dropped).",
                err.0.schedule_id
            ))
        })
    }
}

/// Writes each decoded schedule as one line of JSON.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> JsonLinesSink<W> {
        JsonLinesSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ScheduleSink for JsonLinesSink<W> {
    fn emit(&mut self, schedule: DecodedSchedule) -> Result<(), Error> {
        serde_json::to_writer(&mut self.writer, &schedule).map_err(|err| {
            Error::SerializationError(format!(
                "Could not serialize schedule {} ({}).",
                schedule.schedule_id, err
            ))
        })?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageReport {
    /// Schedules handed to the sink.
    pub decoded: usize,

    /// Messages dropped as unreadable or structurally invalid.
    pub rejected: usize,
}

impl Decoder {
    /// Decodes raw schedule messages until every sender is gone.
    ///
    /// A message that cannot be read or decoded is logged and skipped; the
    /// stage only stops early when the sink fails.
    pub async fn run_stage<S: ScheduleSink>(
        &self,
        mut rx: mpsc::Receiver<String>,
        sink: &mut S,
    ) -> Result<StageReport, Error> {
        let mut report = StageReport::default();

        while let Some(message) = rx.recv().await {
            let schedule = match self.decode_message(&message) {
                Ok(schedule) => schedule,
                Err(err) => {
                    error!(error = err.to_string(); "Rejected raw schedule");
                    report.rejected += 1;
                    continue;
                }
            };

            info!(
                schedule_id = schedule.schedule_id.as_str(),
                courses = schedule.courses.len(),
                failures = schedule.failures.len();
                "Decoded schedule"
            );
            sink.emit(schedule)?;
            report.decoded += 1;
        }

        Ok(report)
    }
}
