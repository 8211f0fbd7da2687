//! Core interview logic
//!
//! Pure or session-scoped business logic, independent of the HTTP surface:
//! input normalization, prompt assembly, turn dispatch, and summary
//! generation.

pub mod dispatch;
pub mod problem;
pub mod prompt;
pub mod summary;
