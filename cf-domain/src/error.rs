//! 领域层统一错误定义
//!
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid guid: {0:?}")]
    InvalidGuid(String),
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
