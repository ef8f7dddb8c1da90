use crate::requirements::FakeRequirementResolver;
use crate::ui::FakeUi;
use cf_application::command::Command;
use cf_application::context::CommandContext;
use cf_application::runner::{CommandRunner, RunReport};
use std::sync::Arc;

/// 以替身 UI 与前置条件解析器执行命令，返回执行报告
pub async fn run_command(
    command: &dyn Command,
    args: &[&str],
    resolver: Arc<FakeRequirementResolver>,
    ui: Arc<FakeUi>,
) -> RunReport {
    let ctx = CommandContext::new(command.metadata().name, args.iter().copied());
    let runner = CommandRunner::new(ui, resolver);
    runner.run(command, &ctx).await
}
