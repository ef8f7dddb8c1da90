use async_trait::async_trait;
use cf_application::api::{
    ApiError, SERVICE_INSTANCE_ALREADY_BOUND, ServiceBindingRepository, ServiceSummaryRepository,
};
use cf_domain::guid::Guid;
use cf_domain::models::ServiceInstance;
use std::collections::HashSet;
use std::sync::Mutex;

/// 服务绑定仓储替身
///
/// - `create_error_code` 非空时每次创建都返回带该分类码的错误；
/// - 否则记住已创建的 (服务实例, 应用) 组合，重复创建返回“已绑定”分类码，
///   模拟后端的稳定状态。
#[derive(Default)]
pub struct FakeServiceBindingRepo {
    pub create_error_code: Option<String>,
    pub create_error_description: Option<String>,
    calls: Mutex<Vec<(Guid, Guid)>>,
    bound: Mutex<HashSet<(Guid, Guid)>>,
}

impl FakeServiceBindingRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_code(code: impl Into<String>) -> Self {
        Self {
            create_error_code: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn with_existing_binding(self, service_instance_guid: &str, app_guid: &str) -> Self {
        self.bound
            .lock()
            .unwrap()
            .insert((Guid::from(service_instance_guid), Guid::from(app_guid)));
        self
    }

    pub fn create_calls(&self) -> Vec<(Guid, Guid)> {
        self.calls.lock().unwrap().clone()
    }

    /// 最近一次创建请求的服务实例 guid
    pub fn create_service_instance_guid(&self) -> Option<Guid> {
        self.calls.lock().unwrap().last().map(|(s, _)| s.clone())
    }

    /// 最近一次创建请求的应用 guid
    pub fn create_application_guid(&self) -> Option<Guid> {
        self.calls.lock().unwrap().last().map(|(_, a)| a.clone())
    }
}

#[async_trait]
impl ServiceBindingRepository for FakeServiceBindingRepo {
    async fn create(
        &self,
        service_instance_guid: &Guid,
        app_guid: &Guid,
    ) -> Result<Guid, ApiError> {
        let pair = (service_instance_guid.clone(), app_guid.clone());
        self.calls.lock().unwrap().push(pair.clone());

        if let Some(code) = &self.create_error_code {
            let description = self
                .create_error_description
                .clone()
                .unwrap_or_else(|| format!("fake error with code {code}"));
            return Err(ApiError::http(400, code.clone(), description));
        }

        if !self.bound.lock().unwrap().insert(pair) {
            return Err(ApiError::http(
                400,
                SERVICE_INSTANCE_ALREADY_BOUND,
                "The app space binding to service is taken",
            ));
        }

        Ok(Guid::new(ulid::Ulid::new().to_string()))
    }
}

/// 空间摘要仓储替身：返回预置的服务实例列表，或预置的错误描述
#[derive(Default)]
pub struct FakeServiceSummaryRepo {
    pub instances: Vec<ServiceInstance>,
    pub error: Option<String>,
    requested_spaces: Mutex<Vec<Guid>>,
}

impl FakeServiceSummaryRepo {
    pub fn with_instances(instances: Vec<ServiceInstance>) -> Self {
        Self {
            instances,
            ..Default::default()
        }
    }

    pub fn requested_spaces(&self) -> Vec<Guid> {
        self.requested_spaces.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServiceSummaryRepository for FakeServiceSummaryRepo {
    async fn get_summaries_in_space(
        &self,
        space_guid: &Guid,
    ) -> Result<Vec<ServiceInstance>, ApiError> {
        self.requested_spaces.lock().unwrap().push(space_guid.clone());
        match &self.error {
            Some(description) => Err(ApiError::http(500, "10001", description.clone())),
            None => Ok(self.instances.clone()),
        }
    }
}
