//! Test Module
//!
//! Cross-component test suite for Glimpse.
//!
//! ## Test Categories
//! - `brain_tests`: tagging, intent rules and the text analyzer on realistic prompts
//! - `integration_tests`: full prompt + image → sentence workflows

pub mod brain_tests;
