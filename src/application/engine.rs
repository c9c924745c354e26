use crate::domain::event::FormEvent;
use crate::domain::field::{Control, FieldId, Validity};
use crate::domain::form::{FormState, PaymentMethod};
use crate::domain::ports::FormObserverBox;
use crate::domain::rules;

/// The result of one pass through the submission gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    /// Rejected; `first_error` is the first invalid control in document order.
    Rejected { first_error: Control },
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted)
    }

    pub fn first_error(&self) -> Option<Control> {
        match self {
            SubmissionOutcome::Accepted => None,
            SubmissionOutcome::Rejected { first_error } => Some(*first_error),
        }
    }
}

/// The checkout validation engine.
///
/// `CheckoutEngine` owns the `FormState` of one session and the observers
/// rendering it. Every handler runs to completion before the next event is
/// dispatched, so the state needs no synchronization.
pub struct CheckoutEngine {
    form: FormState,
    observers: Vec<FormObserverBox>,
    attempts: u32,
}

impl Default for CheckoutEngine {
    fn default() -> Self {
        Self::new(PaymentMethod::default())
    }
}

impl CheckoutEngine {
    /// Creates an engine for a freshly loaded form.
    ///
    /// # Arguments
    ///
    /// * `payment_method` - The payment method selected when the page loads.
    pub fn new(payment_method: PaymentMethod) -> Self {
        Self {
            form: FormState::new(payment_method),
            observers: Vec::new(),
            attempts: 0,
        }
    }

    pub fn subscribe(&mut self, observer: FormObserverBox) {
        self.observers.push(observer);
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Number of submission attempts so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the place-order control is enabled.
    pub fn submit_enabled(&self) -> bool {
        self.form.terms_accepted
    }

    /// Dispatches a single event. Returns the gate outcome for `Submit`.
    pub fn handle(&mut self, event: FormEvent) -> Option<SubmissionOutcome> {
        tracing::debug!(?event, "dispatching form event");
        match event {
            FormEvent::Input { field, value } => {
                self.input(field, value);
                None
            }
            FormEvent::PaymentMethod(method) => {
                self.select_payment_method(method);
                None
            }
            FormEvent::Terms(checked) => {
                self.set_terms(checked);
                None
            }
            FormEvent::Submit => Some(self.attempt_submission()),
        }
    }

    /// Stores a new value for `field` and validates it when applicable.
    ///
    /// Returns the field's validity, or `None` for a card field while another
    /// payment method is selected.
    pub fn input(&mut self, field: FieldId, value: impl Into<String>) -> Option<bool> {
        self.form.set_value(field, value);
        if self.form.is_applicable(field) {
            Some(self.validate(field))
        } else {
            None
        }
    }

    /// Runs the validator of `field` against its current value and updates its marker.
    pub fn validate(&mut self, field: FieldId) -> bool {
        let valid = rules::rule_for(field)(self.form.value(field));
        self.mark(field.into(), Validity::from(valid));
        valid
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.form.payment_method = method;
        tracing::debug!(?method, "payment method selected");
        if method == PaymentMethod::Other {
            for field in FieldId::CARD_FIELDS {
                self.mark(field.into(), Validity::Neutral);
            }
        }
    }

    pub fn set_terms(&mut self, checked: bool) {
        self.form.terms_accepted = checked;
        if checked {
            self.mark(Control::Terms, Validity::Neutral);
        }
    }

    /// Runs the submission gate.
    ///
    /// Every applicable validator is re-run, then terms acceptance is checked.
    /// Observers see either `submission_accepted` or a `focus_requested` on the
    /// first invalid control.
    pub fn attempt_submission(&mut self) -> SubmissionOutcome {
        self.attempts += 1;

        let applicable: Vec<FieldId> = self.form.applicable_fields().collect();
        let mut all_valid = true;
        for field in applicable {
            // No short-circuit: every marker gets refreshed.
            all_valid &= self.validate(field);
        }

        if !self.form.terms_accepted {
            self.mark(Control::Terms, Validity::Invalid);
        }

        // Markers now hold the current truth for every applicable control.
        let outcome = match self.form.first_invalid() {
            None => SubmissionOutcome::Accepted,
            Some(first_error) => SubmissionOutcome::Rejected { first_error },
        };
        debug_assert_eq!(
            outcome.is_accepted(),
            all_valid && self.form.terms_accepted
        );

        match outcome {
            SubmissionOutcome::Accepted => {
                tracing::info!(attempt = self.attempts, "submission accepted");
                for observer in &mut self.observers {
                    observer.submission_accepted();
                }
            }
            SubmissionOutcome::Rejected { first_error } => {
                tracing::info!(attempt = self.attempts, %first_error, "submission rejected");
                for observer in &mut self.observers {
                    observer.focus_requested(first_error);
                }
            }
        }
        outcome
    }

    fn mark(&mut self, control: Control, marker: Validity) {
        self.form.set_marker(control, marker);
        for observer in &mut self.observers {
            observer.marker_changed(control, marker);
        }
    }
}
