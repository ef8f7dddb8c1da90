use async_trait::async_trait;
use cf_application::api::{ApiError, Gateway, decode_error_body};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

/// 基于 reqwest 的 Cloud Controller 网关
///
/// 每次命令调用构造一个实例，请求头 `X-Vcap-Request-Id` 携带该次调用的关联 ID。
pub struct HttpGateway {
    client: Client,
    endpoint: String,
    access_token: Option<String>,
    request_id: String,
}

impl HttpGateway {
    pub fn new(
        endpoint: impl Into<String>,
        access_token: Option<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            access_token,
            request_id: request_id.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header("X-Vcap-Request-Id", &self.request_id)
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.access_token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, authorization(token)),
            None => request,
        }
    }

    async fn send(&self, method: &str, path: &str, request: RequestBuilder) -> Result<Value, ApiError> {
        debug!(method, path, request_id = %self.request_id, "sending request");
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;
        debug!(method, path, status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(decode_error_body(status.as_u16(), &body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

// 配置文件中的令牌通常已带 "bearer " 前缀
fn authorization(token: &str) -> String {
    if token.to_ascii_lowercase().starts_with("bearer ") {
        token.to_string()
    } else {
        format!("bearer {token}")
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        let request = self.client.get(self.url(path)).query(query);
        self.send("GET", path, request).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        let request = self.client.post(self.url(path)).json(&body);
        self.send("POST", path, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_adds_missing_scheme() {
        assert_eq!(authorization("bearer abc"), "bearer abc");
        assert_eq!(authorization("Bearer abc"), "Bearer abc");
        assert_eq!(authorization("abc"), "bearer abc");
    }

    #[test]
    fn url_joins_endpoint_and_path() {
        let gateway = HttpGateway::new("https://api.example.com/", None, "req-1");
        assert_eq!(
            gateway.url("/v2/service_bindings"),
            "https://api.example.com/v2/service_bindings"
        );
    }
}
