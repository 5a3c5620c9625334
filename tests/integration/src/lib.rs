//! Shared helpers for reinhardt-flash integration tests

pub mod flash_helpers;
