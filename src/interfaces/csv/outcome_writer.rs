use crate::application::engine::SubmissionOutcome;
use crate::domain::field::Control;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One reported submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeRecord {
    pub attempt: u32,
    pub accepted: bool,
    pub first_error: Option<Control>,
}

impl OutcomeRecord {
    pub fn new(attempt: u32, outcome: SubmissionOutcome) -> Self {
        Self {
            attempt,
            accepted: outcome.is_accepted(),
            first_error: outcome.first_error(),
        }
    }
}

/// Writes submission outcomes as CSV rows: `attempt,accepted,first_error`.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcomes(&mut self, outcomes: &[OutcomeRecord]) -> Result<()> {
        // Serializing an empty slice writes nothing, not even the header.
        if outcomes.is_empty() {
            self.writer
                .write_record(["attempt", "accepted", "first_error"])?;
        }
        for outcome in outcomes {
            self.writer.serialize(outcome)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes submission outcomes as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut sink: W, outcomes: &[OutcomeRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, outcomes)?;
    writeln!(sink)?;
    Ok(())
}
