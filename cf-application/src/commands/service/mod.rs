//! 服务相关命令
mod bind_service;
mod services;

pub use bind_service::BindService;
pub use services::ListServices;
