use crate::api::{ApiError, Gateway, ResourceEnvelope};
use async_trait::async_trait;
use cf_domain::guid::Guid;
use serde_json::{Value, json};
use std::sync::Arc;

/// 后端分类码：服务实例已绑定到该应用
pub const SERVICE_INSTANCE_ALREADY_BOUND: &str = "90003";

/// 服务绑定仓储
///
/// 仅负责发起一次创建请求，不做重试；瞬时网络错误由传输层处理。
#[async_trait]
pub trait ServiceBindingRepository: Send + Sync {
    /// 创建绑定，返回新绑定的 guid
    async fn create(&self, service_instance_guid: &Guid, app_guid: &Guid)
    -> Result<Guid, ApiError>;
}

#[async_trait]
impl<T> ServiceBindingRepository for Arc<T>
where
    T: ServiceBindingRepository + ?Sized,
{
    async fn create(
        &self,
        service_instance_guid: &Guid,
        app_guid: &Guid,
    ) -> Result<Guid, ApiError> {
        (**self).create(service_instance_guid, app_guid).await
    }
}

/// 创建绑定的结果分类
///
/// `AlreadyExists` 是幂等成功态，不能当作失败处理。
#[derive(Debug)]
pub enum BindingOutcome {
    Created(Guid),
    AlreadyExists,
    Failed(ApiError),
}

impl BindingOutcome {
    /// 按分类码精确匹配；其余错误原样保留
    pub fn classify(result: Result<Guid, ApiError>) -> Self {
        match result {
            Ok(guid) => Self::Created(guid),
            Err(err) if err.error_code() == Some(SERVICE_INSTANCE_ALREADY_BOUND) => {
                Self::AlreadyExists
            }
            Err(err) => Self::Failed(err),
        }
    }
}

pub struct CloudControllerServiceBindingRepository<G> {
    gateway: G,
}

impl<G> CloudControllerServiceBindingRepository<G>
where
    G: Gateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> ServiceBindingRepository for CloudControllerServiceBindingRepository<G>
where
    G: Gateway,
{
    async fn create(
        &self,
        service_instance_guid: &Guid,
        app_guid: &Guid,
    ) -> Result<Guid, ApiError> {
        let body = json!({
            "app_guid": app_guid,
            "service_instance_guid": service_instance_guid,
            "async": true,
        });
        let response = self.gateway.post("/v2/service_bindings", body).await?;
        let created: ResourceEnvelope<Value> = serde_json::from_value(response)?;
        Ok(created.metadata.guid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_exact_code_only() {
        let created = BindingOutcome::classify(Ok(Guid::from("binding-guid")));
        assert!(matches!(created, BindingOutcome::Created(ref g) if g.as_str() == "binding-guid"));

        let exists = BindingOutcome::classify(Err(ApiError::http(400, "90003", "taken")));
        assert!(matches!(exists, BindingOutcome::AlreadyExists));

        // 前缀/数值范围相近的分类码不算已绑定
        for code in ["900030", "9000", "90004", " 90003"] {
            let outcome = BindingOutcome::classify(Err(ApiError::http(400, code, "nope")));
            assert!(matches!(outcome, BindingOutcome::Failed(_)), "code {code:?}");
        }

        let transport = BindingOutcome::classify(Err(ApiError::transport("reset")));
        assert!(matches!(transport, BindingOutcome::Failed(ApiError::Transport { .. })));
    }
}
