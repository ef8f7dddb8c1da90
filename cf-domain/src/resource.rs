//! 资源（Resource）基础抽象
//!
//! 平台上具名、由后端标识的实体。`name` 仅在其作用域（如 space）内唯一，
//! `guid` 全局稳定。
//!
use crate::guid::Guid;

pub trait Resource: Send + Sync {
    /// 资源种类的展示名（用于提示信息，如 "app"、"service instance"）
    const KIND: &'static str;

    fn name(&self) -> &str;

    fn guid(&self) -> &Guid;
}
