//! 前置条件解析器（Requirement Resolver）
//!
//! 执行器通过 [`RequirementResolver::resolve`] 统一求值每条 [`Requirement`]；
//! 生产实现 [`ApiRequirementResolver`] 读取会话并经由仓储在当前 space 内按名称查找资源。
//!
use crate::api::{ApiError, ApplicationRepository, ServiceRepository};
use crate::requirement::{Requirement, RequirementError, ResolvedResource, ResourceKind};
use async_trait::async_trait;
use cf_domain::guid::Guid;
use cf_domain::models::{Application, ServiceInstance};
use cf_domain::session::Session;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait RequirementResolver: Send + Sync {
    async fn login(&self) -> Result<(), RequirementError>;

    async fn targeted_space(&self) -> Result<(), RequirementError>;

    async fn application(&self, name: &str) -> Result<Application, RequirementError>;

    async fn service_instance(&self, name: &str) -> Result<ServiceInstance, RequirementError>;

    /// 按种类分派一条前置条件；具名资源解析成功时返回该资源
    async fn resolve(
        &self,
        requirement: &Requirement,
    ) -> Result<Option<ResolvedResource>, RequirementError> {
        match requirement {
            Requirement::Login => self.login().await.map(|_| None),
            Requirement::TargetedSpace => self.targeted_space().await.map(|_| None),
            Requirement::NamedResource {
                kind: ResourceKind::Application,
                name,
            } => self
                .application(name)
                .await
                .map(|app| Some(ResolvedResource::Application(app))),
            Requirement::NamedResource {
                kind: ResourceKind::ServiceInstance,
                name,
            } => self
                .service_instance(name)
                .await
                .map(|instance| Some(ResolvedResource::ServiceInstance(instance))),
        }
    }
}

#[async_trait]
impl<T> RequirementResolver for Arc<T>
where
    T: RequirementResolver + ?Sized,
{
    async fn login(&self) -> Result<(), RequirementError> {
        (**self).login().await
    }

    async fn targeted_space(&self) -> Result<(), RequirementError> {
        (**self).targeted_space().await
    }

    async fn application(&self, name: &str) -> Result<Application, RequirementError> {
        (**self).application(name).await
    }

    async fn service_instance(&self, name: &str) -> Result<ServiceInstance, RequirementError> {
        (**self).service_instance(name).await
    }

    async fn resolve(
        &self,
        requirement: &Requirement,
    ) -> Result<Option<ResolvedResource>, RequirementError> {
        (**self).resolve(requirement).await
    }
}

pub struct ApiRequirementResolver<A, S> {
    session: Arc<Session>,
    apps: A,
    services: S,
}

impl<A, S> ApiRequirementResolver<A, S>
where
    A: ApplicationRepository,
    S: ServiceRepository,
{
    pub fn new(session: Arc<Session>, apps: A, services: S) -> Self {
        Self {
            session,
            apps,
            services,
        }
    }

    // 会话中的 space guid 可能来自手工编辑的配置文件，使用前校验
    fn space_guid(&self) -> Result<Guid, RequirementError> {
        let raw = self
            .session
            .space_guid()
            .ok_or(RequirementError::NoTargetedSpace)?;
        Guid::parse(raw.as_str()).map_err(|err| {
            debug!(error = %err, "targeted space has an unusable guid");
            RequirementError::NoTargetedSpace
        })
    }
}

fn not_found_or_api(kind: ResourceKind, name: &str, err: ApiError) -> RequirementError {
    if err.is_not_found() {
        RequirementError::ResourceNotFound {
            kind,
            name: name.to_string(),
        }
    } else {
        RequirementError::Api(err)
    }
}

#[async_trait]
impl<A, S> RequirementResolver for ApiRequirementResolver<A, S>
where
    A: ApplicationRepository,
    S: ServiceRepository,
{
    async fn login(&self) -> Result<(), RequirementError> {
        if self.session.is_logged_in() {
            Ok(())
        } else {
            Err(RequirementError::NotAuthenticated)
        }
    }

    async fn targeted_space(&self) -> Result<(), RequirementError> {
        if self.session.has_organization() && self.session.has_space() {
            Ok(())
        } else {
            Err(RequirementError::NoTargetedSpace)
        }
    }

    async fn application(&self, name: &str) -> Result<Application, RequirementError> {
        let space_guid = self.space_guid()?;
        debug!(app = name, space = %space_guid, "resolving app");
        self.apps
            .find_by_name(&space_guid, name)
            .await
            .map_err(|err| not_found_or_api(ResourceKind::Application, name, err))
    }

    async fn service_instance(&self, name: &str) -> Result<ServiceInstance, RequirementError> {
        let space_guid = self.space_guid()?;
        debug!(service_instance = name, space = %space_guid, "resolving service instance");
        self.services
            .find_instance_by_name(&space_guid, name)
            .await
            .map_err(|err| not_found_or_api(ResourceKind::ServiceInstance, name, err))
    }
}
