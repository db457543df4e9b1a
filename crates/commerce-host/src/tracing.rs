//! # Observability
//!
//! [`setup_tracing`] installs the process-wide subscriber. Call it once, from the binary.
//!
//! Record actors log their lifecycle and every create with a `record_type` field, so a
//! seeding run at `RUST_LOG=info` reads as a sequence of `Created` lines:
//!
//! ```text
//! INFO Seeding region data...
//! INFO Created record_type="Region" id=reg_1 size=1
//! INFO Finished seeding regions.
//! ```
//!
//! `RUST_LOG=debug` adds the full create payloads and every list/get lookup.

/// Compact formatter, no module targets, filter taken from `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // record_type already says where a line came from
        .compact()
        .init();
}
