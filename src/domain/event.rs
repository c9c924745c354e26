use super::field::FieldId;
use super::form::PaymentMethod;
use crate::error::FormError;
use serde::Deserialize;
use std::str::FromStr;

/// A discrete user interaction with the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Text typed into a field, or a new selection on a select control.
    Input { field: FieldId, value: String },
    /// The payment method radio group changed.
    PaymentMethod(PaymentMethod),
    /// The terms checkbox was toggled.
    Terms(bool),
    /// The place-order control was clicked.
    Submit,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventKind {
    Input,
    Change,
    Payment,
    Terms,
    Submit,
}

impl FromStr for EventKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(EventKind::Input),
            "change" => Ok(EventKind::Change),
            "payment" => Ok(EventKind::Payment),
            "terms" => Ok(EventKind::Terms),
            "submit" => Ok(EventKind::Submit),
            _ => Err(FormError::InvalidEvent(format!("unknown event kind '{s}'"))),
        }
    }
}

/// One row of an event script: `event,target,value`.
///
/// Columns arrive untrimmed. `event` and `target` are trimmed on conversion,
/// text values are handed to the field exactly as written.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct EventRecord {
    pub event: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl TryFrom<EventRecord> for FormEvent {
    type Error = FormError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        match record.event.trim().parse::<EventKind>()? {
            EventKind::Input | EventKind::Change => {
                let target = record
                    .target
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .ok_or_else(|| FormError::InvalidEvent("input without a target".into()))?;
                Ok(FormEvent::Input {
                    field: target.parse()?,
                    value: record.value.unwrap_or_default(),
                })
            }
            EventKind::Payment => {
                let method = record.value.ok_or_else(|| {
                    FormError::InvalidEvent("payment without a method".into())
                })?;
                Ok(FormEvent::PaymentMethod(method.trim().parse()?))
            }
            EventKind::Terms => match record.value.as_deref().map(str::trim) {
                Some("true") => Ok(FormEvent::Terms(true)),
                Some("false") => Ok(FormEvent::Terms(false)),
                other => Err(FormError::InvalidEvent(format!(
                    "terms expects true or false, got {other:?}"
                ))),
            },
            EventKind::Submit => Ok(FormEvent::Submit),
        }
    }
}
