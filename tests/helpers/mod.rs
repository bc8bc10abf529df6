//! Test helpers module
//!
//! This module provides utilities and helpers for testing the landing page
//! runtime. It includes the mock locale server, translation fixtures and
//! test context setup.

#![allow(dead_code)]

pub mod locale_mock;
pub mod test_context;
pub mod test_data;

pub use locale_mock::*;
pub use test_context::*;
pub use test_data::*;
