//! 远端仓储（api）
//!
//! 以 trait 定义命令依赖的后端能力，并提供基于 [`Gateway`] 的 Cloud Controller v2 实现。
//! 传输细节（HTTP 客户端、重试、超时）不在本层处理，由 `Gateway` 的实现方负责。
//!
mod application;
mod error;
mod gateway;
mod resources;
mod service;
mod service_binding;
mod service_summary;

pub use application::{ApplicationRepository, CloudControllerApplicationRepository};
pub use error::ApiError;
pub use gateway::{Gateway, decode_error_body};
pub use resources::{PaginatedResources, ResourceEnvelope, ResourceMetadata};
pub use service::{CloudControllerServiceRepository, ServiceRepository};
pub use service_binding::{
    BindingOutcome, CloudControllerServiceBindingRepository, SERVICE_INSTANCE_ALREADY_BOUND,
    ServiceBindingRepository,
};
pub use service_summary::{CloudControllerServiceSummaryRepository, ServiceSummaryRepository};
