use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use std::{
    path::{Path, PathBuf},
    time::Instant,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::logging::{log_event, LogLevel};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Debug)]
struct ServerConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_non_empty_string(&lookup, "PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = parse_non_empty_string(&lookup, "DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_non_empty_string(&lookup, "LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Clone)]
struct HostState {
    config: ServerConfig,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    log_event(
        config.log_level,
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}

// Unknown paths fall back to `index.html`.
fn router(config: ServerConfig) -> Router {
    let static_service = static_bundle(&config.dist_dir);
    let state = HostState { config };

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), log_request))
        .with_state(state)
}

fn static_bundle(dist_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")))
}

async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        "ok",
    )
}

async fn log_request(State(state): State<HostState>, request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    log_event(
        state.config.log_level,
        LogLevel::Debug,
        "request_served",
        json!({
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
            "duration_ms": started.elapsed().as_millis() as u64,
        }),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;

    fn temp_dist_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-dist-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dist dir");
        fs::write(dir.join("index.html"), "<div id=\"app\"></div>").expect("write index.html");
        fs::write(dir.join("styles.css"), "body { margin: 0; }").expect("write styles.css");
        dir
    }

    async fn spawn_host(dist_dir: PathBuf) -> String {
        let config = ServerConfig {
            port: 0,
            dist_dir,
            log_level: LogLevel::Info,
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let address = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, router(config)).await.expect("serve");
        });

        format!("http://{address}")
    }

    #[test]
    fn server_config_reads_port_dist_dir_and_log_level() {
        let env: HashMap<&str, &str> =
            HashMap::from([("PORT", "9090"), ("DIST_DIR", " public "), ("LOG_LEVEL", "Debug")]);
        let config = ServerConfig::from_lookup(|name| env.get(name).map(|value| value.to_string()));
        assert_eq!(config.port, 9090);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);

        let defaults = ServerConfig::from_lookup(|name| (name == "PORT").then(|| "http".to_string()));
        assert_eq!(defaults.port, 8080);
        assert_eq!(defaults.dist_dir, PathBuf::from("dist"));
        assert_eq!(defaults.log_level, LogLevel::Info);
    }

    #[tokio::test]
    async fn serves_bundle_files_and_falls_back_to_index() {
        let base = spawn_host(temp_dist_dir("fallback")).await;
        let client = reqwest::Client::new();

        let stylesheet = client
            .get(format!("{base}/styles.css"))
            .send()
            .await
            .expect("stylesheet request");
        assert_eq!(stylesheet.status(), reqwest::StatusCode::OK);
        assert_eq!(stylesheet.text().await.expect("body"), "body { margin: 0; }");

        let deep_link = client
            .get(format!("{base}/projects/lite-kv"))
            .send()
            .await
            .expect("fallback request");
        assert_eq!(deep_link.status(), reqwest::StatusCode::OK);
        assert!(deep_link.text().await.expect("body").contains("id=\"app\""));
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let base = spawn_host(temp_dist_dir("healthz")).await;

        let response = reqwest::get(format!("{base}/healthz")).await.expect("healthz request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.text().await.expect("body"), "ok");
    }
}
