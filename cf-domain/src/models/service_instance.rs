use crate::models::{ServiceOfferingFields, ServicePlanFields};
use cf_macros::resource;

/// 服务实例
///
/// - `service_plan` 与 `service_offering` 均为空表示用户自定义服务（user-provided）
/// - `application_names` 仅在空间摘要中填充，表示已绑定的应用
#[resource(kind = "service instance")]
pub struct ServiceInstance {
    pub service_plan: Option<ServicePlanFields>,
    pub service_offering: Option<ServiceOfferingFields>,
    pub application_names: Vec<String>,
}

impl ServiceInstance {
    pub fn is_user_provided(&self) -> bool {
        self.service_plan.is_none() && self.service_offering.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::Guid;
    use crate::resource::Resource;

    #[test]
    fn user_provided_means_no_plan_and_no_offering() {
        let mut instance = ServiceInstance {
            name: "my-service".into(),
            guid: Guid::from("my-service-guid"),
            ..Default::default()
        };
        assert_eq!(ServiceInstance::KIND, "service instance");
        assert_eq!(instance.name(), "my-service");
        assert!(instance.is_user_provided());

        instance.service_offering = Some(ServiceOfferingFields {
            guid: Guid::from("offering-guid"),
            label: "mysql".into(),
        });
        assert!(!instance.is_user_provided());

        instance.service_offering = None;
        instance.service_plan = Some(ServicePlanFields {
            guid: Guid::from("plan-guid"),
            name: "small".into(),
        });
        assert!(!instance.is_user_provided());
    }
}
