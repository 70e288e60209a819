//! Shared test helpers for `talentdesk-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that
//! scheduling tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod stores;
