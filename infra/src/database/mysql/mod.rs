//! MySQL repository implementations

mod profile_repository_impl;

pub use profile_repository_impl::MySqlProfileRepository;
