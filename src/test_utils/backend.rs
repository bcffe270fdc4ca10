//! A fake transactions backend served on a random local port.

use axum::{
    Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::get,
};
use tokio::net::TcpListener;

use crate::transaction::TRANSACTIONS_PATH;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind fake backend");
    let address = listener
        .local_addr()
        .expect("Could not get fake backend address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Fake backend stopped unexpectedly");
    });

    format!("http://{address}")
}

/// Serve `body` with `status` at the transactions path and return the base URL.
pub(crate) async fn spawn_backend(status: StatusCode, body: String) -> String {
    let router = Router::new().route(
        &format!("/{TRANSACTIONS_PATH}"),
        get(move || {
            let body = body.clone();
            async move { (status, [("content-type", "application/json")], body) }
        }),
    );

    serve(router).await
}

/// Like [spawn_backend], but respond with 401 unless the request carries
/// `token` as a bearer token.
pub(crate) async fn spawn_backend_expecting_token(token: &str, body: String) -> String {
    let want_header = format!("Bearer {token}");
    let router = Router::new().route(
        &format!("/{TRANSACTIONS_PATH}"),
        get(move |headers: HeaderMap| {
            let body = body.clone();
            let authorised = headers
                .get(AUTHORIZATION)
                .is_some_and(|value| value.as_bytes() == want_header.as_bytes());
            async move {
                if authorised {
                    (StatusCode::OK, body)
                } else {
                    (StatusCode::UNAUTHORIZED, String::new())
                }
            }
        }),
    );

    serve(router).await
}
