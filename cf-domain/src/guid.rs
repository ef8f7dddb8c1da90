//! 资源标识符（Guid）
//!
//! 由后端分配、创建后不可变的不透明标识。客户端不解析其格式，仅做相等比较与透传。
//!
use crate::error::{DomainError, DomainResult};
use cf_macros::guid;

#[guid]
pub struct Guid(String);

impl Guid {
    /// 校验并构造：拒绝空串与包含空白字符的标识
    pub fn parse(value: &str) -> DomainResult<Self> {
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidGuid(value.to_string()));
        }
        Ok(Self::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_and_whitespace() {
        assert!(Guid::parse("my-app-guid").is_ok());
        assert!(matches!(Guid::parse(""), Err(DomainError::InvalidGuid(_))));
        assert!(matches!(
            Guid::parse("a b"),
            Err(DomainError::InvalidGuid(_))
        ));
    }

    #[test]
    fn serializes_as_plain_string() {
        let guid = Guid::from("my-service-guid");
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, "\"my-service-guid\"");
        let back: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, guid);
    }
}
