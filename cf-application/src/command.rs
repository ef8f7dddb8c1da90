use crate::{
    context::CommandContext, error::CommandError, requirement::Requirement,
    requirement::ResolvedResources,
};
use async_trait::async_trait;

/// 命令元信息：名称、别名、简介与一行用法
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    pub name: &'static str,
    pub short_name: Option<&'static str>,
    pub description: &'static str,
    pub usage: &'static str,
}

/// CLI 命令（Command）
///
/// 一条命令分两阶段执行：
/// - `requirements`：校验参数个数并返回有序的前置条件列表，参数不合法时返回
///   [`CommandError::Usage`]，此时不会解析任何前置条件；
/// - `run`：前置条件全部满足后执行，从 [`ResolvedResources`] 读取已解析的资源。
///
/// 命令自身不输出前置条件失败信息，由执行器统一报告。
#[async_trait]
pub trait Command: Send + Sync {
    fn metadata(&self) -> CommandMetadata;

    fn requirements(&self, ctx: &CommandContext) -> Result<Vec<Requirement>, CommandError>;

    async fn run(&self, ctx: &CommandContext, resolved: &ResolvedResources)
    -> Result<(), CommandError>;
}
