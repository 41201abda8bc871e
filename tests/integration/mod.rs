//! Integration tests for courseware-rs
//!
//! These tests drive the HTTP routes and the auth pipeline against
//! in-memory storage.

pub mod config_tests;
pub mod course_route_tests;
pub mod helper_route_tests;
