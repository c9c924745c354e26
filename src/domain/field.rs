use crate::error::FormError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifies a text or select input of the checkout form.
///
/// Variants are declared in document order, so the derived `Ord` matches the
/// order in which the inputs appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Address,
    City,
    Zip,
    Country,
    CardName,
    CardNumber,
    CardExpiry,
    CardCvv,
}

impl FieldId {
    /// Every field, in document order.
    pub const ALL: [FieldId; 11] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::City,
        FieldId::Zip,
        FieldId::Country,
        FieldId::CardName,
        FieldId::CardNumber,
        FieldId::CardExpiry,
        FieldId::CardCvv,
    ];

    pub const CARD_FIELDS: [FieldId; 4] = [
        FieldId::CardName,
        FieldId::CardNumber,
        FieldId::CardExpiry,
        FieldId::CardCvv,
    ];

    /// Returns true for the credit-card sub-fields.
    pub fn is_card_field(self) -> bool {
        Self::CARD_FIELDS.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::FullName => "full_name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Address => "address",
            FieldId::City => "city",
            FieldId::Zip => "zip",
            FieldId::Country => "country",
            FieldId::CardName => "card_name",
            FieldId::CardNumber => "card_number",
            FieldId::CardExpiry => "card_expiry",
            FieldId::CardCvv => "card_cvv",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// A control that can carry a validity marker: any field, plus the terms checkbox.
///
/// Ordered by document position; the terms checkbox comes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
    Field(FieldId),
    Terms,
}

impl Control {
    pub fn as_str(self) -> &'static str {
        match self {
            Control::Field(id) => id.as_str(),
            Control::Terms => "terms",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FieldId> for Control {
    fn from(id: FieldId) -> Self {
        Control::Field(id)
    }
}

impl Serialize for Control {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// The visible validity marker of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    /// Not evaluated yet, or reset. Rendered as neither valid nor invalid.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

/// A single form input and its current marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub value: String,
    pub validity: Validity,
}

impl Field {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            validity: Validity::Neutral,
        }
    }
}
