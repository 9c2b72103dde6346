//! demos/mock_health.rs
//! Run: cargo run --example mock_health -- [port]
//!
//! Serves `GET /health` for the `health-view` binary to poll.

use hyper::{
    service::{make_service_fn, service_fn},
    Body, Method, Request, Response, Server, StatusCode,
};
use rand::Rng;
use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::time::sleep;

#[derive(Clone)]
struct MockState {
    req_counter:  Arc<AtomicU64>,
    healthy_flag: Arc<AtomicBool>,
    jitter_ms:    u64,
    fail_pct:     f64,
}

// ——————————————————————————————————————————
// Request handler
async fn handle(
    req: Request<Body>,
    state: MockState,
) -> Result<Response<Body>, Infallible> {
    if req.method() != Method::GET || req.uri().path() != "/health" {
        return Ok(Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Body::from("Not Found"))
            .unwrap());
    }

    let n = state.req_counter.fetch_add(1, Ordering::SeqCst) + 1;

    // Spread out response times so overlapping refreshes can race
    if state.jitter_ms > 0 {
        let delay = rand::thread_rng().gen_range(0..=state.jitter_ms);
        sleep(Duration::from_millis(delay)).await;
    }

    if state.fail_pct > 0.0
        && rand::thread_rng().gen_bool(state.fail_pct / 100.0)
    {
        return Ok(Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from("Injected failure"))
            .unwrap());
    }

    if !state.healthy_flag.load(Ordering::SeqCst) {
        return Ok(Response::builder()
            .status(StatusCode::SERVICE_UNAVAILABLE)
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"status":"unavailable"}"#))
            .unwrap());
    }

    let body = format!(r#"{{"status":"ok","checks":{}}}"#, n);

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap())
}

// ——————————————————————————————————————————
// Main
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port: u16 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "4000".into())
        .parse()?;

    let jitter_ms =
        std::env::var("JITTER_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(0);
    let fail_pct =
        std::env::var("FAIL_PCT").ok().and_then(|v| v.parse().ok()).unwrap_or(0.0);

    let state = MockState {
        req_counter: Arc::new(AtomicU64::new(0)),
        healthy_flag: Arc::new(AtomicBool::new(true)),
        jitter_ms,
        fail_pct,
    };

    // Toggle health every 30 s so both views can be seen
    {
        let st = state.clone();
        tokio::spawn(async move {
            loop {
                sleep(Duration::from_secs(30)).await;
                let cur = st.healthy_flag.load(Ordering::SeqCst);
                st.healthy_flag.store(!cur, Ordering::SeqCst);
                println!(
                    "Health flipped → {}",
                    if !cur { "healthy" } else { "unhealthy" }
                );
            }
        });
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let make_svc = make_service_fn(move |_conn| {
        let st = state.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                handle(req, st.clone())
            }))
        }
    });

    println!(
        "Mock health endpoint on http://{}/health  [jitter={}ms fail={} %]",
        addr, jitter_ms, fail_pct
    );

    Server::bind(&addr).serve(make_svc).await?;
    Ok(())
}
