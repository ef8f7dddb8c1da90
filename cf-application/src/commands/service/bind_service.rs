use crate::api::{BindingOutcome, ServiceBindingRepository};
use crate::command::{Command, CommandMetadata};
use crate::context::CommandContext;
use crate::error::CommandError;
use crate::requirement::{Requirement, ResolvedResources};
use crate::ui::{Ui, entity_name};
use async_trait::async_trait;
use cf_domain::session::Session;
use std::sync::Arc;
use tracing::info;

/// `cf bind-service APP SERVICE_INSTANCE`
///
/// 前置条件依次为：已登录、应用存在、服务实例存在。
/// 后端报告“已绑定”时仍输出 `OK` 并以成功退出，仅附加一行提示。
pub struct BindService {
    ui: Arc<dyn Ui>,
    session: Arc<Session>,
    binding_repo: Arc<dyn ServiceBindingRepository>,
}

impl BindService {
    pub fn new(
        ui: Arc<dyn Ui>,
        session: Arc<Session>,
        binding_repo: Arc<dyn ServiceBindingRepository>,
    ) -> Self {
        Self {
            ui,
            session,
            binding_repo,
        }
    }
}

#[async_trait]
impl Command for BindService {
    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "bind-service",
            short_name: Some("bs"),
            description: "Bind a service instance to an app",
            usage: "cf bind-service APP SERVICE_INSTANCE",
        }
    }

    fn requirements(&self, ctx: &CommandContext) -> Result<Vec<Requirement>, CommandError> {
        let [app_name, instance_name] = ctx.args() else {
            return Err(CommandError::Usage {
                command: "bind-service",
            });
        };

        Ok(vec![
            Requirement::Login,
            Requirement::application(app_name.as_str()),
            Requirement::service_instance(instance_name.as_str()),
        ])
    }

    async fn run(
        &self,
        _ctx: &CommandContext,
        resolved: &ResolvedResources,
    ) -> Result<(), CommandError> {
        let app = resolved.application()?;
        let instance = resolved.service_instance()?;

        self.ui.say(&format!(
            "Binding service {} to app {} in org {} / space {} as {}...",
            entity_name(&instance.name),
            entity_name(&app.name),
            entity_name(self.session.organization_name()),
            entity_name(self.session.space_name()),
            entity_name(self.session.username()),
        ));

        let result = self.binding_repo.create(&instance.guid, &app.guid).await;
        match BindingOutcome::classify(result) {
            BindingOutcome::Created(binding_guid) => {
                info!(%binding_guid, app = %app.guid, service_instance = %instance.guid, "service binding created");
                self.ui.ok();
                self.ui
                    .say("TIP: Use 'cf push' to ensure your env variable changes take effect");
                Ok(())
            }
            BindingOutcome::AlreadyExists => {
                info!(app = %app.guid, service_instance = %instance.guid, "service binding already exists");
                self.ui.ok();
                self.ui.warn(&format!(
                    "App {} is already bound to {}.",
                    entity_name(&app.name),
                    entity_name(&instance.name)
                ));
                Ok(())
            }
            BindingOutcome::Failed(err) => Err(CommandError::BindingFailed {
                message: err.to_string(),
            }),
        }
    }
}
