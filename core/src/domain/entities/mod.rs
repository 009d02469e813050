//! Domain entities.

pub mod profile;

pub use profile::UserProfile;
