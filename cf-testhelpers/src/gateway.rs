use async_trait::async_trait;
use cf_application::api::{ApiError, Gateway};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// 预置响应
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Json(Value),
    Error {
        status_code: u16,
        error_code: String,
        description: String,
    },
}

impl FakeResponse {
    pub fn error(
        status_code: u16,
        error_code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::Error {
            status_code,
            error_code: error_code.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// 网关替身：按 `METHOD path` 返回预置响应并记录请求；未预置的路径返回 404
#[derive(Default)]
pub struct FakeGateway {
    responses: Mutex<HashMap<String, FakeResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(self, path: &str, response: FakeResponse) -> Self {
        self.stub("GET", path, response)
    }

    pub fn on_post(self, path: &str, response: FakeResponse) -> Self {
        self.stub("POST", path, response)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn stub(self, method: &str, path: &str, response: FakeResponse) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(format!("{method} {path}"), response);
        self
    }

    fn respond(&self, request: RecordedRequest) -> Result<Value, ApiError> {
        let key = format!("{} {}", request.method, request.path);
        self.requests.lock().unwrap().push(request);

        match self.responses.lock().unwrap().get(&key).cloned() {
            Some(FakeResponse::Json(value)) => Ok(value),
            Some(FakeResponse::Error {
                status_code,
                error_code,
                description,
            }) => Err(ApiError::http(status_code, error_code, description)),
            None => Err(ApiError::http(404, "", format!("no stub for {key}"))),
        }
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.respond(RecordedRequest {
            method: "GET",
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body: None,
        })
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.respond(RecordedRequest {
            method: "POST",
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body),
        })
    }
}
