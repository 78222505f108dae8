//! Canned HTTP responses for exercising the client without a real service.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::net::TcpListener;
use warp::Filter;
use warp::http::{Response, StatusCode};

pub struct TestServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl TestServer {
    /// Number of requests that reached `/musics` so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn counting(hits: Arc<AtomicUsize>) -> impl Filter<Extract = (), Error = warp::Rejection> + Clone {
    warp::get()
        .and(warp::path("musics"))
        .and(warp::path::end())
        .map(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
        .untuple_one()
}

fn spawn_server<F, R>(routes: F, hits: Arc<AtomicUsize>) -> TestServer
where
    F: Filter<Extract = (R,), Error = warp::Rejection> + Clone + Send + Sync + 'static,
    R: warp::Reply,
{
    let (addr, server): (SocketAddr, _) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    TestServer {
        url: format!("http://{addr}/musics"),
        hits,
    }
}

/// Answers every `GET /musics` with the same status, content type and body.
pub fn serve(status: u16, content_type: &'static str, body: &str) -> TestServer {
    let hits = Arc::new(AtomicUsize::new(0));
    let status = StatusCode::from_u16(status).unwrap();
    let body = body.to_string();

    let routes = counting(hits.clone()).map(move || {
        Response::builder()
            .status(status)
            .header("content-type", content_type)
            .body(body.clone())
    });

    spawn_server(routes, hits)
}

/// Accepts `GET /musics` and never answers it.
pub fn serve_stalled() -> TestServer {
    let hits = Arc::new(AtomicUsize::new(0));
    let routes = counting(hits.clone()).then(|| futures::future::pending::<&'static str>());

    spawn_server(routes, hits)
}

/// An endpoint on a port nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/musics")
}
