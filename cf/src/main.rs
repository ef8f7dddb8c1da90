//! `cf` 命令行入口
//!
//! 读取会话配置，装配网关、仓储与命令，交由执行器运行单条命令。
//! 日志写入 stderr，stdout 只承载用户可见输出。
//!
mod config_store;
mod http_gateway;

use anyhow::Context;
use cf_application::api::{
    CloudControllerApplicationRepository, CloudControllerServiceBindingRepository,
    CloudControllerServiceRepository, CloudControllerServiceSummaryRepository,
};
use cf_application::commands::service::{BindService, ListServices};
use cf_application::context::CommandContext;
use cf_application::requirement_resolver::ApiRequirementResolver;
use cf_application::ui::{TerminalUi, Ui};
use cf_application::{CommandRegistry, CommandRunner};
use cf_domain::session::Session;
use clap::Parser;
use http_gateway::HttpGateway;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cf", version, about = "Cloud platform command line client")]
struct Cli {
    /// 会话配置文件路径
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 命令名或别名
    command: Option<String>,

    /// 命令参数
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_registry(
    ui: Arc<dyn Ui>,
    session: Arc<Session>,
    gateway: Arc<HttpGateway>,
) -> anyhow::Result<CommandRegistry> {
    let registry = CommandRegistry::new();
    registry.register(Arc::new(BindService::new(
        ui.clone(),
        session.clone(),
        Arc::new(CloudControllerServiceBindingRepository::new(gateway.clone())),
    )))?;
    registry.register(Arc::new(ListServices::new(
        ui,
        session,
        Arc::new(CloudControllerServiceSummaryRepository::new(gateway)),
    )))?;
    Ok(registry)
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let path = config_store::config_path(cli.config.as_deref(), |key| std::env::var(key).ok())?;
    let session = Arc::new(
        config_store::load(&path)
            .with_context(|| format!("loading session from {}", path.display()))?,
    );

    let ui: Arc<dyn Ui> = Arc::new(TerminalUi::stdout());

    let listing = cli.command.is_none();
    let ctx = CommandContext::new(cli.command.unwrap_or_default(), cli.args);
    let gateway = Arc::new(HttpGateway::new(
        session.api_endpoint().unwrap_or_default(),
        session.access_token().map(str::to_string),
        ctx.correlation_id(),
    ));
    let registry = build_registry(ui.clone(), session.clone(), gateway.clone())?;

    if listing {
        print_usage(ui.as_ref(), &registry);
        return Ok(ExitCode::SUCCESS);
    }

    let resolver = ApiRequirementResolver::new(
        session,
        CloudControllerApplicationRepository::new(gateway.clone()),
        CloudControllerServiceRepository::new(gateway),
    );

    let report = CommandRunner::new(ui, resolver)
        .run_named(&registry, &ctx)
        .await;
    Ok(report.status.into())
}

fn print_usage(ui: &dyn Ui, registry: &CommandRegistry) {
    ui.say("Usage: cf [--config PATH] [-v] COMMAND [ARGS...]");
    ui.say("");
    ui.say("Commands:");
    for command in registry.registered_commands() {
        ui.say(&format!("   {command}"));
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = ?err, "cf failed");
            eprintln!("FAILED\n{err:#}");
            ExitCode::FAILURE
        }
    }
}
