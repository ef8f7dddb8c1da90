use crate::api::ApiError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// 传输网关（Gateway）
///
/// 仓储与后端之间的窄接口：按路径发起请求并返回 JSON。
/// - 非 2xx 响应需转换为 [`ApiError::Http`]（可借助 [`decode_error_body`]）；
/// - 网络层错误转换为 [`ApiError::Transport`]。
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError>;

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}

#[async_trait]
impl<T> Gateway for Arc<T>
where
    T: Gateway + ?Sized,
{
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        (**self).get(path, query).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        (**self).post(path, body).await
    }
}

// Cloud Controller 错误体：{"code": 90003, "description": "...", "error_code": "CF-..."}
#[derive(Deserialize)]
struct CloudControllerErrorBody {
    code: Option<Value>,
    description: Option<String>,
}

/// 将非 2xx 响应体解析为结构化错误；无法解析时以原文作为描述
pub fn decode_error_body(status_code: u16, body: &str) -> ApiError {
    match serde_json::from_str::<CloudControllerErrorBody>(body) {
        Ok(parsed) => {
            let error_code = match parsed.code {
                Some(Value::Number(n)) => n.to_string(),
                Some(Value::String(s)) => s,
                _ => String::new(),
            };
            ApiError::http(
                status_code,
                error_code,
                parsed.description.unwrap_or_else(|| body.to_string()),
            )
        }
        Err(_) => ApiError::http(status_code, "", body.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_code() {
        let err = decode_error_body(
            400,
            r#"{"code":90003,"description":"The app space binding to service is taken: my-app my-service","error_code":"CF-ServiceBindingAppServiceTaken"}"#,
        );
        assert_eq!(err.error_code(), Some("90003"));
        match err {
            ApiError::Http {
                status_code,
                description,
                ..
            } => {
                assert_eq!(status_code, 400);
                assert!(description.starts_with("The app space binding"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_body_keeps_raw_text() {
        let err = decode_error_body(502, "<html>Bad Gateway</html>\n");
        assert_eq!(err.error_code(), None);
        assert!(err.to_string().contains("<html>Bad Gateway</html>"));
    }
}
