#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// 后端返回的结构化错误，`error_code` 为分类码（如 "90003"）
    #[error(
        "Server error, status code: {status_code}, error code: {error_code}, message: {description}"
    )]
    Http {
        status_code: u16,
        error_code: String,
        description: String,
    },

    #[error("{kind} {name} not found")]
    ModelNotFound { kind: &'static str, name: String },

    #[error("transport error: {reason}")]
    Transport { reason: String },

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn http(
        status_code: u16,
        error_code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::Http {
            status_code,
            error_code: error_code.into(),
            description: description.into(),
        }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// 后端分类码；非结构化错误返回 `None`
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Http { error_code, .. } if !error_code.is_empty() => Some(error_code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ModelNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_only_for_structured_errors() {
        let err = ApiError::http(400, "90003", "The app space binding to service is taken");
        assert_eq!(err.error_code(), Some("90003"));
        assert!(err.to_string().contains("The app space binding to service is taken"));

        assert_eq!(ApiError::http(502, "", "bad gateway").error_code(), None);
        assert_eq!(ApiError::transport("connection reset").error_code(), None);
    }
}
