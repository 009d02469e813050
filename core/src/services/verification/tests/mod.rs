//! Tests for the phone verification service

#[cfg(test)]
mod concurrency_tests;
