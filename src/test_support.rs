//! One-shot HTTP responders backed by local TCP listeners, standing in
//! for the public echo services during tests.

// Standard library
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// 3rd party crates
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves `body` to every connection. Returns the service URL.
pub async fn spawn_echo(body: &str) -> String {
    spawn_echo_bytes(body.as_bytes().to_vec()).await
}

/// Serves `body`, counting accepted connections in `hits`.
pub async fn spawn_echo_counted(body: &str, hits: Arc<AtomicUsize>) -> String {
    serve(body.as_bytes().to_vec(), hits).await
}

/// Serves a raw byte body, which need not be valid UTF-8.
pub async fn spawn_echo_bytes(body: Vec<u8>) -> String {
    serve(body, Arc::new(AtomicUsize::new(0))).await
}

/// Binds a listener that never accepts, so requests stall until the
/// client's timeout fires. The listener must stay alive for the
/// duration of the test; dropping it turns the stall into a refusal.
pub async fn bind_unresponsive() -> (String, TcpListener) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    (format!("http://{addr}"), listener)
}

async fn serve(body: Vec<u8>, hits: Arc<AtomicUsize>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let mut response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(&body);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            hits.fetch_add(1, Ordering::SeqCst);
            let response = response.clone();
            tokio::spawn(async move {
                // Drain the request head before answering.
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{addr}")
}
