//! Domain layer: the form model, its validation rules and the observer port.

pub mod event;
pub mod field;
pub mod form;
pub mod ports;
pub mod post;
pub mod rules;
