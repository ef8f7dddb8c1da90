//! 会话（Session）
//!
//! 命令执行时只读的配置提供者：当前 API 端点、访问令牌及其有效期、
//! 用户名以及已选定（targeted）的 org/space。
//!
use crate::guid::Guid;
use crate::models::{OrganizationFields, SpaceFields};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Builder, Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    #[builder(into)]
    api_endpoint: Option<String>,
    #[builder(into)]
    access_token: Option<String>,
    /// 令牌过期时间；为空表示不过期（由服务端决定）
    token_expires_at: Option<DateTime<Utc>>,
    #[builder(into)]
    username: Option<String>,
    organization: Option<OrganizationFields>,
    space: Option<SpaceFields>,
}

impl Session {
    pub fn api_endpoint(&self) -> Option<&str> {
        self.api_endpoint.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn token_expires_at(&self) -> Option<&DateTime<Utc>> {
        self.token_expires_at.as_ref()
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn organization(&self) -> Option<&OrganizationFields> {
        self.organization.as_ref()
    }

    pub fn space(&self) -> Option<&SpaceFields> {
        self.space.as_ref()
    }

    pub fn organization_name(&self) -> &str {
        self.organization.as_ref().map(|o| o.name.as_str()).unwrap_or_default()
    }

    pub fn space_name(&self) -> &str {
        self.space.as_ref().map(|s| s.name.as_str()).unwrap_or_default()
    }

    pub fn space_guid(&self) -> Option<&Guid> {
        self.space.as_ref().map(|s| &s.guid)
    }

    /// 认证是否有效：令牌非空且（若有过期时间）尚未过期
    pub fn is_logged_in_at(&self, now: DateTime<Utc>) -> bool {
        let has_token = self
            .access_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        let not_expired = self.token_expires_at.is_none_or(|exp| exp > now);
        has_token && not_expired
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in_at(Utc::now())
    }

    pub fn has_organization(&self) -> bool {
        self.organization.as_ref().is_some_and(|o| !o.guid.is_empty())
    }

    pub fn has_space(&self) -> bool {
        self.space
            .as_ref()
            .is_some_and(|s| Guid::parse(s.guid.as_str()).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn targeted() -> Session {
        Session::builder()
            .api_endpoint("https://api.example.com")
            .access_token("bearer token")
            .username("my-user")
            .organization(OrganizationFields {
                guid: Guid::from("my-org-guid"),
                name: "my-org".into(),
            })
            .space(SpaceFields {
                guid: Guid::from("my-space-guid"),
                name: "my-space".into(),
            })
            .build()
    }

    #[test]
    fn default_session_is_logged_out() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert!(!session.has_space());
        assert_eq!(session.organization_name(), "");
        assert_eq!(session.username(), "");
    }

    #[test]
    fn targeted_session_exposes_context() {
        let session = targeted();
        assert!(session.is_logged_in());
        assert!(session.has_organization());
        assert!(session.has_space());
        assert_eq!(session.organization_name(), "my-org");
        assert_eq!(session.space_name(), "my-space");
        assert_eq!(session.username(), "my-user");
        assert_eq!(session.space_guid().map(Guid::as_str), Some("my-space-guid"));
    }

    #[test]
    fn malformed_space_guid_is_not_targeted() {
        let session = Session::builder()
            .space(SpaceFields {
                guid: Guid::from("my space guid"),
                name: "my-space".into(),
            })
            .build();
        assert!(!session.has_space());
    }

    #[test]
    fn expired_token_is_not_logged_in() {
        let now = Utc::now();
        let session = Session::builder()
            .access_token("bearer token")
            .token_expires_at(now - Duration::minutes(1))
            .build();
        assert!(!session.is_logged_in_at(now));

        let session = Session::builder()
            .access_token("bearer token")
            .token_expires_at(now + Duration::minutes(1))
            .build();
        assert!(session.is_logged_in_at(now));

        let blank = Session::builder().access_token("  ").build();
        assert!(!blank.is_logged_in_at(now));
    }

    #[test]
    fn tolerates_partial_config_json() {
        let session: Session =
            serde_json::from_str(r#"{"username":"my-user","access_token":"t"}"#).unwrap();
        assert_eq!(session.username(), "my-user");
        assert!(session.is_logged_in());
        assert!(session.space().is_none());
    }
}
