//! Test utilities for shakedown-core
//!
//! A mock Lighterpack server that serves CSV exports, for integration tests
//! of the import path without touching the network.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use tokio::sync::oneshot;

/// List id the mock server knows about
pub const MOCK_LIST_ID: &str = "mock42";

/// List id answered with a bare 300, which the HTTP client will not follow
pub const MOCK_REDIRECT_LIST_ID: &str = "moved";

/// Export served for [`MOCK_LIST_ID`]
pub const MOCK_EXPORT: &str = "\
Item Name,Category,desc,qty,weight,unit,url,price,worn,consumable
Big Agnes Copper Spur tent,Big Three,Big Agnes,1,48,oz,,,,
Osprey Exos backpack,Big Three,Osprey,1,2.5,lb,,,,
Jetboil stove,Kitchen,,1,13.1,oz,,,,
Headlamp,Electronics,,1,3,oz,,,,
";

/// Mock Lighterpack server for testing and development
pub struct MockLighterpackServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockLighterpackServer {
    /// Start the mock server on an available port
    pub async fn start() -> Self {
        let app = Router::new().route("/csv/:id", get(handle_export));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Base URL to hand to `LighterpackClient::with_base_url`
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockLighterpackServer {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn handle_export(Path(id): Path<String>) -> Response {
    match id.as_str() {
        MOCK_LIST_ID => MOCK_EXPORT.into_response(),
        MOCK_REDIRECT_LIST_ID => StatusCode::MULTIPLE_CHOICES.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
