use crate::api::{ApiError, Gateway};
use async_trait::async_trait;
use cf_domain::guid::Guid;
use cf_domain::models::{ServiceInstance, ServiceOfferingFields, ServicePlanFields};
use serde::Deserialize;
use std::sync::Arc;

/// 空间摘要仓储：列出 space 内的服务实例及其已绑定的应用
#[async_trait]
pub trait ServiceSummaryRepository: Send + Sync {
    async fn get_summaries_in_space(
        &self,
        space_guid: &Guid,
    ) -> Result<Vec<ServiceInstance>, ApiError>;
}

#[async_trait]
impl<T> ServiceSummaryRepository for Arc<T>
where
    T: ServiceSummaryRepository + ?Sized,
{
    async fn get_summaries_in_space(
        &self,
        space_guid: &Guid,
    ) -> Result<Vec<ServiceInstance>, ApiError> {
        (**self).get_summaries_in_space(space_guid).await
    }
}

#[derive(Deserialize)]
struct SpaceSummary {
    #[serde(default)]
    apps: Vec<AppSummary>,
    #[serde(default)]
    services: Vec<ServiceSummary>,
}

#[derive(Deserialize)]
struct AppSummary {
    name: String,
    #[serde(default)]
    service_names: Vec<String>,
}

#[derive(Deserialize)]
struct ServiceSummary {
    guid: Guid,
    name: String,
    #[serde(default)]
    service_plan: Option<ServicePlanSummary>,
}

#[derive(Deserialize)]
struct ServicePlanSummary {
    guid: Guid,
    name: String,
    service: Option<ServiceOfferingSummary>,
}

#[derive(Deserialize)]
struct ServiceOfferingSummary {
    guid: Guid,
    label: String,
}

impl SpaceSummary {
    // 绑定关系由应用侧的 service_names 反推
    fn into_instances(self) -> Vec<ServiceInstance> {
        let apps = self.apps;
        self.services
            .into_iter()
            .map(|svc| {
                let application_names = apps
                    .iter()
                    .filter(|app| app.service_names.iter().any(|n| *n == svc.name))
                    .map(|app| app.name.clone())
                    .collect();
                let (service_plan, service_offering) = match svc.service_plan {
                    Some(plan) => (
                        Some(ServicePlanFields {
                            guid: plan.guid,
                            name: plan.name,
                        }),
                        plan.service.map(|s| ServiceOfferingFields {
                            guid: s.guid,
                            label: s.label,
                        }),
                    ),
                    None => (None, None),
                };
                ServiceInstance {
                    guid: svc.guid,
                    name: svc.name,
                    service_plan,
                    service_offering,
                    application_names,
                }
            })
            .collect()
    }
}

pub struct CloudControllerServiceSummaryRepository<G> {
    gateway: G,
}

impl<G> CloudControllerServiceSummaryRepository<G>
where
    G: Gateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> ServiceSummaryRepository for CloudControllerServiceSummaryRepository<G>
where
    G: Gateway,
{
    async fn get_summaries_in_space(
        &self,
        space_guid: &Guid,
    ) -> Result<Vec<ServiceInstance>, ApiError> {
        let path = format!("/v2/spaces/{space_guid}/summary");
        let response = self.gateway.get(&path, &[]).await?;
        let summary: SpaceSummary = serde_json::from_value(response)?;
        Ok(summary.into_instances())
    }
}
