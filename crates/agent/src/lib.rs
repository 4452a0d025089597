//! Response composition for the campus assistant
//!
//! The `ResponseComposer` drives one message through the understanding
//! pipeline and the per-intent handlers. Stores and the translator are
//! injected; datasets are optional and their absence degrades to
//! "unavailable" replies.

pub mod composer;

pub use composer::{ComposedResponse, ResponseComposer, ResponseFormat};
