use crate::domain::field::{Control, Validity};
use crate::domain::ports::FormObserver;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Marker(Control, Validity),
    Focus(Control),
    Accepted,
}

/// An in-memory observer that records every notification it receives.
///
/// Clones share the same log, so a test can keep one handle and hand the
/// other to the engine.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    /// The last marker recorded for `control`, if any.
    pub fn marker(&self, control: Control) -> Option<Validity> {
        self.log.borrow().iter().rev().find_map(|n| match n {
            Notification::Marker(c, marker) if *c == control => Some(*marker),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl FormObserver for RecordingObserver {
    fn marker_changed(&mut self, control: Control, marker: Validity) {
        self.log.borrow_mut().push(Notification::Marker(control, marker));
    }

    fn focus_requested(&mut self, control: Control) {
        self.log.borrow_mut().push(Notification::Focus(control));
    }

    fn submission_accepted(&mut self) {
        self.log.borrow_mut().push(Notification::Accepted);
    }
}

/// Renders notifications as log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl FormObserver for TracingObserver {
    fn marker_changed(&mut self, control: Control, marker: Validity) {
        tracing::debug!(%control, ?marker, "marker updated");
    }

    fn focus_requested(&mut self, control: Control) {
        tracing::info!(%control, "scroll to first error");
    }

    fn submission_accepted(&mut self) {
        tracing::info!("order placed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::FieldId;

    #[test]
    fn test_recording_observer_shares_log_between_clones() {
        let recorder = RecordingObserver::new();
        let mut handle = recorder.clone();

        handle.marker_changed(FieldId::Zip.into(), Validity::Invalid);
        handle.marker_changed(FieldId::Zip.into(), Validity::Valid);
        handle.submission_accepted();

        assert_eq!(recorder.notifications().len(), 3);
        assert_eq!(recorder.marker(FieldId::Zip.into()), Some(Validity::Valid));
        assert_eq!(recorder.marker(Control::Terms), None);

        recorder.clear();
        assert!(handle.notifications().is_empty());
    }

    #[test]
    fn test_tracing_observer_is_a_form_observer() {
        let mut observer: Box<dyn FormObserver> = Box::new(TracingObserver);
        observer.marker_changed(Control::Terms, Validity::Invalid);
        observer.focus_requested(Control::Terms);
        observer.submission_accepted();
    }
}
