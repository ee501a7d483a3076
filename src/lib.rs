#![doc(test(attr(deny(warnings))))]

//! Wallet Core offers a minimal personal-account ledger: an account holds a
//! balance and an append-only sequence of movements, enforcing positive
//! amounts, a per-day deposit count limit, and a daily withdrawal cap.

pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Wallet Core tracing initialized.");
    });
}
