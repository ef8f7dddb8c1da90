//! 平台资源领域层（cf-domain）
//!
//! 定义命令执行过程中使用的只读资源投影与会话信息：
//! - 资源抽象（`resource`）与标识符（`guid`）
//! - 具体资源模型（`models`）：应用、服务实例及其关联字段
//! - 会话（`session`）：当前 org/space/user 与认证有效性
//!
//! 资源由平台后端创建与持有，客户端仅在每次命令调用时按需解析，不跨命令持久化。
//!
pub mod error;
pub mod guid;
pub mod models;
pub mod resource;
pub mod session;

// 允许在本 crate 内部通过 ::cf_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 内同样可解析。
extern crate self as cf_domain;
