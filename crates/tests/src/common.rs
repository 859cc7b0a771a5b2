use axum::Router;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Serve a mock authentication service on an ephemeral local port and
/// return its base URL. The server task lives until the test process
/// exits — cheap enough for a test suite.
pub async fn spawn_auth_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock auth service");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock auth service crashed");
    });

    format!("http://{addr}")
}

/// Shared slot for capturing the request body a mock handler received.
pub type CapturedBody = Arc<Mutex<Option<Value>>>;

pub fn captured_body() -> CapturedBody {
    Arc::new(Mutex::new(None))
}
