//! Application layer orchestrating the checkout form.
//!
//! This module defines the `CheckoutEngine`, the single entry point that
//! dispatches form events and runs the submission gate.

pub mod engine;
