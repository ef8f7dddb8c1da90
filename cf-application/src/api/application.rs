use crate::api::{ApiError, Gateway, PaginatedResources};
use async_trait::async_trait;
use cf_domain::guid::Guid;
use cf_domain::models::Application;
use cf_domain::resource::Resource;
use serde::Deserialize;
use std::sync::Arc;

/// 应用仓储：在指定 space 内按名称精确查找
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn find_by_name(&self, space_guid: &Guid, name: &str) -> Result<Application, ApiError>;
}

#[async_trait]
impl<T> ApplicationRepository for Arc<T>
where
    T: ApplicationRepository + ?Sized,
{
    async fn find_by_name(&self, space_guid: &Guid, name: &str) -> Result<Application, ApiError> {
        (**self).find_by_name(space_guid, name).await
    }
}

#[derive(Deserialize)]
struct ApplicationEntity {
    name: String,
}

pub struct CloudControllerApplicationRepository<G> {
    gateway: G,
}

impl<G> CloudControllerApplicationRepository<G>
where
    G: Gateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> ApplicationRepository for CloudControllerApplicationRepository<G>
where
    G: Gateway,
{
    async fn find_by_name(&self, space_guid: &Guid, name: &str) -> Result<Application, ApiError> {
        let path = format!("/v2/spaces/{space_guid}/apps");
        let query = [("q", format!("name:{name}")), ("inline-relations-depth", "1".into())];
        let response = self.gateway.get(&path, &query).await?;
        let page: PaginatedResources<ApplicationEntity> = serde_json::from_value(response)?;

        // 服务端过滤之外再做一次精确匹配
        page.resources
            .into_iter()
            .find(|r| r.entity.name == name)
            .map(|r| Application {
                guid: r.metadata.guid,
                name: r.entity.name,
            })
            .ok_or_else(|| ApiError::ModelNotFound {
                kind: Application::KIND,
                name: name.to_string(),
            })
    }
}
