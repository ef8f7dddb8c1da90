use async_trait::async_trait;
use cf_application::requirement::{Requirement, RequirementError, ResourceKind};
use cf_application::requirement_resolver::RequirementResolver;
use cf_domain::models::{Application, ServiceInstance};
use std::sync::Mutex;

/// 前置条件解析替身
///
/// - `login_success`/`targeted_space_success` 控制对应条件是否满足；
/// - `application`/`service_instance` 为 `None` 时按名称解析失败（ResourceNotFound），
///   否则无论请求的名称为何都返回该资源；
/// - 记录每次被求值的前置条件，便于断言求值顺序与短路行为。
#[derive(Default)]
pub struct FakeRequirementResolver {
    pub login_success: bool,
    pub targeted_space_success: bool,
    pub application: Option<Application>,
    pub service_instance: Option<ServiceInstance>,
    evaluated: Mutex<Vec<Requirement>>,
}

impl FakeRequirementResolver {
    pub fn logged_in() -> Self {
        Self {
            login_success: true,
            targeted_space_success: true,
            ..Default::default()
        }
    }

    pub fn with_application(mut self, application: Application) -> Self {
        self.application = Some(application);
        self
    }

    pub fn with_service_instance(mut self, service_instance: ServiceInstance) -> Self {
        self.service_instance = Some(service_instance);
        self
    }

    pub fn evaluated(&self) -> Vec<Requirement> {
        self.evaluated.lock().unwrap().clone()
    }

    /// 最近一次请求解析的应用名
    pub fn application_name(&self) -> Option<String> {
        self.requested_name(ResourceKind::Application)
    }

    /// 最近一次请求解析的服务实例名
    pub fn service_instance_name(&self) -> Option<String> {
        self.requested_name(ResourceKind::ServiceInstance)
    }

    fn requested_name(&self, wanted: ResourceKind) -> Option<String> {
        self.evaluated
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|r| match r {
                Requirement::NamedResource { kind, name } if *kind == wanted => Some(name.clone()),
                _ => None,
            })
    }

    fn record(&self, requirement: Requirement) {
        self.evaluated.lock().unwrap().push(requirement);
    }
}

#[async_trait]
impl RequirementResolver for FakeRequirementResolver {
    async fn login(&self) -> Result<(), RequirementError> {
        self.record(Requirement::Login);
        if self.login_success {
            Ok(())
        } else {
            Err(RequirementError::NotAuthenticated)
        }
    }

    async fn targeted_space(&self) -> Result<(), RequirementError> {
        self.record(Requirement::TargetedSpace);
        if self.targeted_space_success {
            Ok(())
        } else {
            Err(RequirementError::NoTargetedSpace)
        }
    }

    async fn application(&self, name: &str) -> Result<Application, RequirementError> {
        self.record(Requirement::application(name));
        self.application
            .clone()
            .ok_or_else(|| RequirementError::ResourceNotFound {
                kind: ResourceKind::Application,
                name: name.to_string(),
            })
    }

    async fn service_instance(&self, name: &str) -> Result<ServiceInstance, RequirementError> {
        self.record(Requirement::service_instance(name));
        self.service_instance
            .clone()
            .ok_or_else(|| RequirementError::ResourceNotFound {
                kind: ResourceKind::ServiceInstance,
                name: name.to_string(),
            })
    }
}
