//! 资源模型
//!
//! 客户端持有的只读投影，按命令调用即时解析。
//!
mod application;
mod fields;
mod service_instance;

pub use application::Application;
pub use fields::{OrganizationFields, ServiceOfferingFields, ServicePlanFields, SpaceFields};
pub use service_instance::ServiceInstance;
