//! # courier-client
//!
//! The view-state coordinator of the courier messaging interface.
//!
//! All mutable interface state lives in one [`AppState`] behind
//! `Arc<Mutex<..>>`. The rendering surface reads snapshots through the
//! query commands, submits intents through the mutation commands in
//! [`commands`], and follows changes through the broadcast channel in
//! [`events`]. One intent is in flight at a time; a store mutation is
//! synchronous and atomic from the caller's perspective. The only
//! background activity is the 1 Hz call ticker owned by [`AppState`].

pub mod call;
pub mod commands;
pub mod events;
pub mod profile;
pub mod settings;
pub mod state;

mod ticker;

use std::sync::{Arc, Mutex};

use tracing_subscriber::{fmt, EnvFilter};

pub use state::{AppState, SharedState};

/// Initialise logging, honouring `RUST_LOG` when set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("courier_client=debug,courier_store=debug,courier_directory=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Build a freshly seeded application state ready to hand to a renderer.
pub fn new_session() -> SharedState {
    tracing::info!(app = courier_shared::constants::APP_NAME, "starting session");
    Arc::new(Mutex::new(AppState::seeded()))
}
