use crate::domain::event::{EventRecord, FormEvent};
use crate::error::{FormError, Result};
use std::io::Read;

/// Reads form events from a CSV event script.
///
/// The script has an `event,target,value` header and rows may omit trailing
/// columns. Only the header is trimmed here: a `value` reaches its field
/// exactly as written, quoted whitespace included.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts events.
    ///
    /// A bad row yields an `Err` item and the stream carries on with the next one.
    pub fn events(self) -> impl Iterator<Item = Result<FormEvent>> {
        self.reader.into_deserialize::<EventRecord>().map(|result| {
            result
                .map_err(FormError::from)
                .and_then(FormEvent::try_from)
        })
    }
}
