//! 命令执行器（Command Runner）
//!
//! 单次调用的线性流程：
//! 1. 取得命令声明的前置条件；参数不合法时以用法错误结束；
//! 2. 按声明顺序逐一解析，首个失败即中止，不再解析后续条件、不执行动作；
//! 3. 执行动作，动作返回的错误统一以 `FAILED` 报告并返回非零退出状态。
//!
use crate::command::Command;
use crate::context::CommandContext;
use crate::error::CommandError;
use crate::registry::CommandRegistry;
use crate::requirement::{Requirement, RequirementError, ResolvedResources};
use crate::requirement_resolver::RequirementResolver;
use crate::ui::Ui;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Instrument, debug, info_span, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// 一次执行的结果：是否通过前置条件，以及最终退出状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub passed_requirements: bool,
    pub status: ExitStatus,
}

impl RunReport {
    fn failed_before_action() -> Self {
        Self {
            passed_requirements: false,
            status: ExitStatus::Failure,
        }
    }
}

pub struct CommandRunner<R> {
    ui: Arc<dyn Ui>,
    resolver: R,
}

impl<R> CommandRunner<R>
where
    R: RequirementResolver,
{
    pub fn new(ui: Arc<dyn Ui>, resolver: R) -> Self {
        Self { ui, resolver }
    }

    /// 按声明顺序求值前置条件，首个失败即返回
    pub async fn evaluate(
        &self,
        requirements: &[Requirement],
    ) -> Result<ResolvedResources, RequirementError> {
        let mut resolved = ResolvedResources::new();
        for requirement in requirements {
            debug!(?requirement, "evaluating requirement");
            if let Some(resource) = self.resolver.resolve(requirement).await? {
                resolved.push(resource);
            }
        }
        Ok(resolved)
    }

    pub async fn run(&self, command: &dyn Command, ctx: &CommandContext) -> RunReport {
        let metadata = command.metadata();
        let span = info_span!(
            "command",
            command = metadata.name,
            correlation_id = ctx.correlation_id()
        );

        async {
            let requirements = match command.requirements(ctx) {
                Ok(requirements) => requirements,
                Err(CommandError::Usage { .. }) => {
                    debug!(args = ?ctx.args(), "incorrect usage");
                    self.ui.fail_with_usage(&metadata);
                    return RunReport::failed_before_action();
                }
                Err(err) => {
                    self.ui.failed(&err.to_string());
                    return RunReport::failed_before_action();
                }
            };

            let resolved = match self.evaluate(&requirements).await {
                Ok(resolved) => resolved,
                Err(err) => {
                    warn!(error = %err, "requirement not satisfied");
                    self.ui.failed(&err.to_string());
                    return RunReport::failed_before_action();
                }
            };

            let status = match command.run(ctx, &resolved).await {
                Ok(()) => ExitStatus::Success,
                Err(err) => {
                    warn!(error = %err, "command failed");
                    self.ui.failed(&err.to_string());
                    ExitStatus::Failure
                }
            };

            RunReport {
                passed_requirements: true,
                status,
            }
        }
        .instrument(span)
        .await
    }

    /// 按 `ctx` 中的命令名从注册表查找并执行
    pub async fn run_named(&self, registry: &CommandRegistry, ctx: &CommandContext) -> RunReport {
        match registry.find(ctx.name()) {
            Some(command) => self.run(command.as_ref(), ctx).await,
            None => {
                let err = CommandError::CommandNotFound(ctx.name().to_string());
                self.ui.failed(&err.to_string());
                RunReport::failed_before_action()
            }
        }
    }
}
