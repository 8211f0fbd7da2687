//! Tests for relay services
//!
//! Upstream HTTP dependencies are faked with wiremock servers so the real
//! clients exercise their full request/response paths.

pub mod problem_api;
