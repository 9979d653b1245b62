use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use photographer_portfolio::{
    repositories::catalog::JsonCatalogRepo,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment, LogFormat},
    AppState,
};
use reqwest::Client;
use serde_json::{json, Value};
use std::{net::TcpListener, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct TestApp {
    pub state: Arc<AppState>,
    pub address: String,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = test_config();

        let repo = JsonCatalogRepo::load(&config.data_path)
            .await
            .expect("Failed to load fixture catalog");

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = Arc::new(AppState::new(&config, repo));

        let state_clone = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::from(state_clone.clone()))
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(config.worker_count)
        .run();

        tokio::spawn(server);

        // Redirects are asserted on directly, never followed.
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to build HTTP client");

        while client.get(format!("{}/api/v1/health", address)).send().await.is_err() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            state,
            address,
            client,
            config,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

fn fixture(path: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), path)
}

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Photographer Portfolio Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        data_path: fixture("photographers.json"),
        asset_root: fixture("assets"),
        cors_allowed_origins: vec!["*".to_string()],
        session_ttl_secs: 60,
        purge_interval_secs: 60,
        log_format: LogFormat::Pretty,
    }
}

#[async_trait]
pub trait PortfolioTestHelpers: Send + Sync {
    async fn get_json(&self, path: &str) -> (reqwest::StatusCode, Value);
    async fn post_json(&self, path: &str, body: &Value) -> (reqwest::StatusCode, Value);
    async fn open_lightbox(&self, photographer_id: u64, index: usize, sort: Option<&str>) -> Value;
    async fn lightbox_action(&self, session_id: &str, action: &str) -> (reqwest::StatusCode, Value);
}

#[async_trait]
impl PortfolioTestHelpers for TestApp {
    async fn get_json(&self, path: &str) -> (reqwest::StatusCode, Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");
        let status = response.status();
        (status, response.json().await.unwrap_or(Value::Null))
    }

    async fn post_json(&self, path: &str, body: &Value) -> (reqwest::StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");
        let status = response.status();
        (status, response.json().await.unwrap_or(Value::Null))
    }

    async fn open_lightbox(&self, photographer_id: u64, index: usize, sort: Option<&str>) -> Value {
        let (status, body) = self
            .post_json(
                &format!("/api/v1/photographers/{}/lightbox", photographer_id),
                &json!({ "index": index, "sort": sort }),
            )
            .await;
        assert_eq!(status, reqwest::StatusCode::CREATED, "open failed: {body}");
        body
    }

    async fn lightbox_action(&self, session_id: &str, action: &str) -> (reqwest::StatusCode, Value) {
        self.post_json(&format!("/api/v1/lightbox/{}/{}", session_id, action), &json!({}))
            .await
    }
}
