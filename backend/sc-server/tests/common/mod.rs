#![allow(dead_code)]

//! Test infrastructure for sc-server API tests

use sc_auth::{Claims, JwtValidator};
use sc_config::ValidationConfig;
use sc_media::{ImageHost, ImageIngestion, ImagePayload, MediaError, UploadedImage};
use sc_server::{AppState, build_router};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test-secret-key-at-least-32-bytes!";
pub const FAILING_FILE_NAME: &str = "fail.png";
pub const BOUNDARY: &str = "sc-test-boundary";
const BODY_LIMIT: usize = 1024 * 1024;

/// In-memory image host: hands out sequential URLs and records destroys.
/// Uploads of a file named [`FAILING_FILE_NAME`] fail.
#[derive(Default)]
pub struct StubImageHost {
    next_id: AtomicUsize,
    pub uploaded: Mutex<Vec<String>>,
    pub destroyed: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageHost for StubImageHost {
    async fn upload(&self, image: ImagePayload, folder: &str) -> sc_media::Result<UploadedImage> {
        if image.file_name.as_deref() == Some(FAILING_FILE_NAME) {
            return Err(MediaError::upload("stub host rejected the image"));
        }

        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let public_id = format!("{}/img-{}", folder, n);
        self.uploaded.lock().unwrap().push(public_id.clone());

        Ok(UploadedImage {
            url: format!("https://images.test/{}.png", public_id),
            public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> sc_media::Result<()> {
        self.destroyed.lock().unwrap().push(public_id.to_string());
        Ok(())
    }
}

pub struct TestApp {
    pub state: AppState,
    pub host: Arc<StubImageHost>,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = sc_db::connect_in_memory()
            .await
            .expect("Failed to create test database");
        let host = Arc::new(StubImageHost::default());

        let state = AppState {
            pool,
            jwt_validator: Arc::new(JwtValidator::with_hs256(JWT_SECRET.as_bytes())),
            ingestion: ImageIngestion::new(host.clone(), sc_media::DEFAULT_FOLDER),
            validation: ValidationConfig::default(),
        };

        Self { state, host }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone(), BODY_LIMIT)
    }

    /// Send a request through a fresh router and decode the JSON reply.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&body).into()))
        };

        (status, json)
    }

    pub async fn project_count(&self) -> i64 {
        sc_db::ProjectRepository::new(self.state.pool.clone())
            .count()
            .await
            .unwrap()
    }

    pub fn uploads(&self) -> Vec<String> {
        self.host.uploaded.lock().unwrap().clone()
    }

    pub fn destroys(&self) -> Vec<String> {
        self.host.destroyed.lock().unwrap().clone()
    }
}

/// Mint a token the test app accepts
pub fn token_for(sub: &str, role: Option<&str>) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        role: role.map(String::from),
        name: Some(format!("{} name", sub)),
        email: Some(format!("{}@example.com", sub)),
        exp: now + 3600,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// POST /api/projects/upload with a JSON body
pub fn upload_request(token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/projects/upload")
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn upload_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": "A project",
        "googleFormLink": "https://forms.example.com/f",
        "contributors": "[]",
        "images": ["urlA", "urlB"],
    })
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete_request(id: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("DELETE")
        .uri(format!("/api/projects/{}", id));

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }

    builder.body(Body::empty()).unwrap()
}

/// Build a multipart/form-data body from text fields and `images` file parts
/// File contents are given as text; the stub host never inspects them.
pub fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    for (file_name, contents) in files {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"images\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                BOUNDARY, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(contents.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// POST /api/projects with a multipart body
pub fn submit_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/projects")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Create a project through flow A and return its id
pub async fn create_via_upload(app: &TestApp, token: &str, title: &str) -> String {
    let (status, json) = app.send(upload_request(Some(token), upload_body(title))).await;
    assert_eq!(status, StatusCode::CREATED, "unexpected reply: {}", json);
    json["project"]["id"].as_str().unwrap().to_string()
}
