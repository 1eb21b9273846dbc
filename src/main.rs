//! Reading Levels · lookup service
//!
//! - Axum HTTP + WebSocket API
//! - Static SPA fallback ($STATIC_DIR/index.html)
//!
//! Important env variables:
//!   PORT                : u16 (default 3000)
//!   LEVELS_CONFIG_PATH  : path to TOML config (UI defaults + optional question bank)
//!   UI_PREFERENCE_DIR   : one UI mode preference file per client (default ./data/ui-mode)
//!   STATIC_DIR          : frontend directory (default ./static)
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::info;

use reading_levels::config::static_dir_from_env;
use reading_levels::{build_router, telemetry, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Shared state: grading table, question bank, sessions, UI mode controller.
  let state = Arc::new(AppState::new());

  let static_dir = static_dir_from_env();
  let app = build_router(state, &static_dir);

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "reading_levels", %addr, %static_dir, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
