//! Database tests
//!
//! Tests marked `#[ignore]` need a MySQL instance at `DATABASE_URL`:
//! `cargo test -p pv_infra -- --ignored`
