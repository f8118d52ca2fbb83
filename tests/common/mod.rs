use anyhow::{anyhow, Result};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use std::time::Instant;

use axum::Router;
use docker_app::config::AppConfig;
use docker_app::routes;
use docker_app::state::AppState;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::util::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    router: Router,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new(environment: Option<&str>) -> Self {
        let state = AppState::new(test_config(environment), Instant::now());
        Self {
            router: routes::create_router(state),
        }
    }

    pub async fn get(&self, path: &str) -> Result<hyper::Response<Body>> {
        self.request(Method::GET, path).await
    }

    pub async fn request(&self, method: Method, path: &str) -> Result<hyper::Response<Body>> {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())?;
        Ok(self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible response"))
    }

    /// Issues a GET and returns the JSON body, failing on any non-200 status.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self.get(path).await?;
        if response.status() != StatusCode::OK {
            return Err(anyhow!("GET {path} returned {}", response.status()));
        }
        let body = body_to_vec(response.into_body()).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

pub fn test_config(environment: Option<&str>) -> AppConfig {
    AppConfig {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        environment: environment.map(str::to_string),
    }
}

#[allow(dead_code)]
pub async fn body_to_vec(body: Body) -> Result<Vec<u8>> {
    let collected = body
        .collect()
        .await
        .map_err(|err| anyhow!("failed to read response body: {err}"))?;
    Ok(collected.to_bytes().to_vec())
}
