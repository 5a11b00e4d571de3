//! Integration tests for freshguard
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod http_tests;
