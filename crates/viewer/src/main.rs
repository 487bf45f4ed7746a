//! Postboard Viewer - employee posts from a remote JSON API.
//!
//! Fetches users, their posts, and per-post comments from a
//! JSONPlaceholder-style API, renders them into an owned element tree, and
//! writes the serialized page to stdout.
//!
//! # Architecture
//!
//! - `reqwest` client over the remote read-only API
//! - Owned element tree instead of a browser document
//! - Explicit binding registry for the comment toggles
//!
//! The initial run populates the selection control, renders the configured
//! default user's posts, and exits. Fetch failures are logged and rendered
//! as absent content, never as process failures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use postboard_viewer::api::PlaceholderClient;
use postboard_viewer::app::App;
use postboard_viewer::config::ViewerConfig;
use postboard_viewer::error::Result;

/// Initialize the tracing subscriber with an env filter.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = ViewerConfig::from_env()?;
    let client = PlaceholderClient::new(&config)?;

    let mut app = App::new(client, config.default_user);
    let outcome = app.run_initial().await;
    tracing::info!(
        user_id = %outcome.user_id,
        posts = outcome.posts.as_ref().map_or(0, Vec::len),
        "initial render complete"
    );

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", app.document())?;
    Ok(())
}
