//! Local stand-in for a GBFS provider.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};

pub const INFO_442: &str = r#"{"last_updated":1700000000,"data":{"stations":[
    {"station_id":"442","name":"X","address":"Y","lat":59.91,"lon":10.75}]}}"#;

pub fn status_442(bikes: u32, docks: u32) -> String {
    format!(
        r#"{{"last_updated":1700000010,"data":{{"stations":[
        {{"station_id":"442","num_bikes_available":{bikes},"num_docks_available":{docks}}}]}}}}"#
    )
}

#[derive(Default)]
struct StubInner {
    information: String,
    status: String,
    fail_with: Option<u16>,
    client_ids: Vec<String>,
    requests: usize,
}

/// A GBFS feed served from memory on a random local port.
#[derive(Clone, Default)]
pub struct StubFeed {
    inner: Arc<Mutex<StubInner>>,
}

impl StubFeed {
    pub fn new(information: &str, status: &str) -> Self {
        let stub = Self::default();
        stub.set_information(information);
        stub.set_status(status);
        stub
    }

    pub fn set_information(&self, body: &str) {
        self.inner.lock().unwrap().information = body.to_string();
    }

    pub fn set_status(&self, body: &str) {
        self.inner.lock().unwrap().status = body.to_string();
    }

    /// Answer every request with this status code until cleared.
    pub fn fail_with(&self, status: Option<u16>) {
        self.inner.lock().unwrap().fail_with = status;
    }

    pub fn client_ids(&self) -> Vec<String> {
        self.inner.lock().unwrap().client_ids.clone()
    }

    pub fn requests(&self) -> usize {
        self.inner.lock().unwrap().requests
    }

    fn respond(&self, headers: &HeaderMap, body: impl Fn(&StubInner) -> String) -> Response {
        let mut inner = self.inner.lock().unwrap();
        inner.requests += 1;
        if let Some(id) = headers
            .get("client-identifier")
            .and_then(|v| v.to_str().ok())
        {
            inner.client_ids.push(id.to_string());
        }

        if let Some(code) = inner.fail_with {
            let status = StatusCode::from_u16(code).unwrap();
            return (status, "upstream error").into_response();
        }

        (
            [(header::CONTENT_TYPE, "application/json")],
            body(&*inner),
        )
            .into_response()
    }

    /// Start serving; returns the base URL.
    pub async fn serve(&self) -> String {
        let router = Router::new()
            .route("/station_information.json", get(information))
            .route("/station_status.json", get(status))
            .with_state(self.clone());
        format!("http://{}", spawn(router).await)
    }
}

async fn information(State(stub): State<StubFeed>, headers: HeaderMap) -> Response {
    stub.respond(&headers, |s| s.information.clone())
}

async fn status(State(stub): State<StubFeed>, headers: HeaderMap) -> Response {
    stub.respond(&headers, |s| s.status.clone())
}

/// Serve a router on an ephemeral local port.
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}
