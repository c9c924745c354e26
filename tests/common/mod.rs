#![allow(dead_code)]

use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: &str = "event,target,value";

/// Input rows that make every non-card field valid.
pub const CONTACT_ROWS: [&str; 7] = [
    "input,full_name,Grace Hopper",
    "input,email,grace@navy.mil",
    "input,phone,202-555-0147",
    "input,address,1 Harbor Way",
    "input,city,Arlington",
    "input,zip,22201",
    "change,country,US",
];

pub const CARD_ROWS: [&str; 4] = [
    "input,card_name,G Hopper",
    "input,card_number,4111111111111111",
    "input,card_expiry,09/31",
    "input,card_cvv,737",
];

/// Writes an event script with the header followed by `rows`.
pub fn event_script(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}
