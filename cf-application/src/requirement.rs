//! 前置条件（Requirement）
//!
//! 命令以数据形式声明前置条件，由执行器按声明顺序统一求值：
//! - `Login`：会话需持有有效凭证；
//! - `TargetedSpace`：会话需已选定 org 与 space；
//! - `NamedResource`：按名称在当前 space 内解析资源，成功后写入 [`ResolvedResources`]。
//!
use crate::api::ApiError;
use crate::error::CommandError;
use cf_domain::models::{Application, ServiceInstance};
use cf_domain::resource::Resource;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Application,
    ServiceInstance,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Application => Application::KIND,
            Self::ServiceInstance => ServiceInstance::KIND,
        }
    }
}

impl fmt::Display for ResourceKind {
    // 句首大写："App"、"Service instance"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Login,
    TargetedSpace,
    NamedResource { kind: ResourceKind, name: String },
}

impl Requirement {
    pub fn application(name: impl Into<String>) -> Self {
        Self::NamedResource {
            kind: ResourceKind::Application,
            name: name.into(),
        }
    }

    pub fn service_instance(name: impl Into<String>) -> Self {
        Self::NamedResource {
            kind: ResourceKind::ServiceInstance,
            name: name.into(),
        }
    }
}

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum RequirementError {
    #[error("Not logged in. Use 'cf login' to log in.")]
    NotAuthenticated,

    #[error("No org and space targeted, use 'cf target -o ORG -s SPACE' to target an org and space")]
    NoTargetedSpace,

    #[error("{kind} {name} not found")]
    ResourceNotFound { kind: ResourceKind, name: String },

    #[error(transparent)]
    Api(ApiError),
}

/// 单个前置条件解析出的资源
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedResource {
    Application(Application),
    ServiceInstance(ServiceInstance),
}

impl ResolvedResource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Application(_) => ResourceKind::Application,
            Self::ServiceInstance(_) => ResourceKind::ServiceInstance,
        }
    }
}

/// 已解析资源缓存
///
/// 每次命令调用独立一份：前置条件阶段逐条写入，动作阶段只读。
#[derive(Debug, Clone, Default)]
pub struct ResolvedResources {
    entries: Vec<ResolvedResource>,
}

impl ResolvedResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resource: ResolvedResource) {
        self.entries.push(resource);
    }

    pub fn application(&self) -> Result<&Application, CommandError> {
        self.entries
            .iter()
            .find_map(|r| match r {
                ResolvedResource::Application(app) => Some(app),
                _ => None,
            })
            .ok_or(CommandError::Unresolved {
                kind: ResourceKind::Application,
            })
    }

    pub fn service_instance(&self) -> Result<&ServiceInstance, CommandError> {
        self.entries
            .iter()
            .find_map(|r| match r {
                ResolvedResource::ServiceInstance(instance) => Some(instance),
                _ => None,
            })
            .ok_or(CommandError::Unresolved {
                kind: ResourceKind::ServiceInstance,
            })
    }
}
