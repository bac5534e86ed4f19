//! Log powerlifting meet results and score them with DOTS and IPF GL points.
//!
//! The scorers in [`scoring`] are pure functions over (total, bodyweight,
//! sex). Everything else is the application around them: an in-memory
//! [`entry::RecordStore`], display helpers in [`output`], the interactive
//! [`session`] form and YAML [`config`].

pub mod config;
pub mod entry;
pub mod output;
pub mod scoring;
pub mod session;

pub use scoring::{dots, gl, SexCategory};
