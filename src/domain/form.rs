use super::field::{Control, Field, FieldId, Validity};
use crate::error::FormError;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PaymentMethod {
    #[default]
    Credit,
    Other,
}

impl FromStr for PaymentMethod {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(PaymentMethod::Credit),
            "other" => Ok(PaymentMethod::Other),
            _ => Err(FormError::InvalidEvent(format!(
                "unknown payment method '{s}'"
            ))),
        }
    }
}

/// The state of the checkout form for one session.
///
/// Fields are keyed by id; since `FieldId` orders by document position,
/// iterating the map walks the form top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<FieldId, Field>,
    pub payment_method: PaymentMethod,
    pub terms_accepted: bool,
    terms_marker: Validity,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(PaymentMethod::default())
    }
}

impl FormState {
    /// Creates the state of a freshly loaded form: empty, nothing evaluated.
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            fields: FieldId::ALL.into_iter().map(|id| (id, Field::new(id))).collect(),
            payment_method,
            terms_accepted: false,
            terms_marker: Validity::Neutral,
        }
    }

    pub fn field(&self, id: FieldId) -> &Field {
        // Every id is inserted in `new`, and entries are never removed.
        &self.fields[&id]
    }

    pub fn value(&self, id: FieldId) -> &str {
        &self.field(id).value
    }

    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) {
        self.field_mut(id).value = value.into();
    }

    pub fn marker(&self, control: Control) -> Validity {
        match control {
            Control::Field(id) => self.field(id).validity,
            Control::Terms => self.terms_marker,
        }
    }

    pub fn set_marker(&mut self, control: Control, marker: Validity) {
        match control {
            Control::Field(id) => self.field_mut(id).validity = marker,
            Control::Terms => self.terms_marker = marker,
        }
    }

    /// Whether `id` is validated and counted by the submission gate.
    pub fn is_applicable(&self, id: FieldId) -> bool {
        !id.is_card_field() || self.payment_method == PaymentMethod::Credit
    }

    /// The fields the submission gate checks, in document order.
    pub fn applicable_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        FieldId::ALL
            .into_iter()
            .filter(|id| self.is_applicable(*id))
    }

    /// The first applicable control in document order whose marker is invalid.
    pub fn first_invalid(&self) -> Option<Control> {
        self.fields
            .values()
            .filter(|field| self.is_applicable(field.id) && field.validity == Validity::Invalid)
            .map(|field| Control::Field(field.id))
            .next()
            .or((self.terms_marker == Validity::Invalid).then_some(Control::Terms))
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        self.fields.entry(id).or_insert_with(|| Field::new(id))
    }
}
