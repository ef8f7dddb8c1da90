use cf_domain::guid::Guid;
use cf_domain::models::{OrganizationFields, SpaceFields};
use cf_domain::session::Session;
use chrono::{Duration, Utc};

/// 已登录并已选定 my-org / my-space 的会话，用户名 my-user
pub fn session_with_defaults() -> Session {
    Session::builder()
        .api_endpoint("https://api.example.com")
        .access_token("bearer my-access-token")
        .token_expires_at(Utc::now() + Duration::hours(1))
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

/// 已选定 org/space 但没有访问令牌
pub fn session_without_login() -> Session {
    Session::builder()
        .api_endpoint("https://api.example.com")
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
