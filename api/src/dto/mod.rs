//! Request and response bodies for the callable endpoints

pub mod callable;

pub use callable::*;
