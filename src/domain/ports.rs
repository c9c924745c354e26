use super::field::{Control, Validity};

/// Receives the presentation side effects of the engine.
///
/// Every method has a no-op default so an observer only implements what it renders.
pub trait FormObserver {
    /// A validator ran on `control` (or its marker was reset).
    fn marker_changed(&mut self, _control: Control, _marker: Validity) {}

    /// A submission attempt was rejected; `control` is the first error on the page.
    fn focus_requested(&mut self, _control: Control) {}

    /// A submission attempt passed the gate.
    fn submission_accepted(&mut self) {}
}

pub type FormObserverBox = Box<dyn FormObserver>;
