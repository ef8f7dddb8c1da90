use crate::api::{ApiError, Gateway, PaginatedResources, ResourceEnvelope};
use async_trait::async_trait;
use cf_domain::guid::Guid;
use cf_domain::models::{ServiceInstance, ServiceOfferingFields, ServicePlanFields};
use cf_domain::resource::Resource;
use serde::Deserialize;
use std::sync::Arc;

/// 服务仓储：在指定 space 内按名称精确查找服务实例（含用户自定义服务）
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn find_instance_by_name(
        &self,
        space_guid: &Guid,
        name: &str,
    ) -> Result<ServiceInstance, ApiError>;
}

#[async_trait]
impl<T> ServiceRepository for Arc<T>
where
    T: ServiceRepository + ?Sized,
{
    async fn find_instance_by_name(
        &self,
        space_guid: &Guid,
        name: &str,
    ) -> Result<ServiceInstance, ApiError> {
        (**self).find_instance_by_name(space_guid, name).await
    }
}

#[derive(Deserialize)]
struct ServiceInstanceEntity {
    name: String,
    #[serde(default)]
    service_plan: Option<ResourceEnvelope<ServicePlanEntity>>,
}

#[derive(Deserialize)]
struct ServicePlanEntity {
    name: String,
    #[serde(default)]
    service: Option<ResourceEnvelope<ServiceOfferingEntity>>,
}

#[derive(Deserialize)]
struct ServiceOfferingEntity {
    label: String,
}

impl ResourceEnvelope<ServiceInstanceEntity> {
    fn into_model(self) -> ServiceInstance {
        let (service_plan, service_offering) = match self.entity.service_plan {
            Some(plan) => {
                let offering = plan.entity.service.map(|s| ServiceOfferingFields {
                    guid: s.metadata.guid,
                    label: s.entity.label,
                });
                let plan = ServicePlanFields {
                    guid: plan.metadata.guid,
                    name: plan.entity.name,
                };
                (Some(plan), offering)
            }
            None => (None, None),
        };

        ServiceInstance {
            guid: self.metadata.guid,
            name: self.entity.name,
            service_plan,
            service_offering,
            application_names: Vec::new(),
        }
    }
}

pub struct CloudControllerServiceRepository<G> {
    gateway: G,
}

impl<G> CloudControllerServiceRepository<G>
where
    G: Gateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> ServiceRepository for CloudControllerServiceRepository<G>
where
    G: Gateway,
{
    async fn find_instance_by_name(
        &self,
        space_guid: &Guid,
        name: &str,
    ) -> Result<ServiceInstance, ApiError> {
        let path = format!("/v2/spaces/{space_guid}/service_instances");
        let query = [
            ("return_user_provided_service_instances", "true".to_string()),
            ("q", format!("name:{name}")),
            ("inline-relations-depth", "2".into()),
        ];
        let response = self.gateway.get(&path, &query).await?;
        let page: PaginatedResources<ServiceInstanceEntity> = serde_json::from_value(response)?;

        page.resources
            .into_iter()
            .find(|r| r.entity.name == name)
            .map(ResourceEnvelope::into_model)
            .ok_or_else(|| ApiError::ModelNotFound {
                kind: ServiceInstance::KIND,
                name: name.to_string(),
            })
    }
}
