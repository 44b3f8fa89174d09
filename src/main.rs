use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing::{info, warn};

use mergington_activities::store::ActivityStore;
use mergington_activities::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    // One directory for the process lifetime; a restart reseeds it.
    let store = ActivityStore::seeded();
    let app = web::app(store);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!(%addr, error = %e, "bind failed, trying next port");
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    info!(addr = %bound_addr, "activities server started");

    axum::serve(listener, app).await.unwrap();
}
