use crate::api::ServiceSummaryRepository;
use crate::command::{Command, CommandMetadata};
use crate::context::CommandContext;
use crate::error::CommandError;
use crate::requirement::{Requirement, RequirementError, ResolvedResources};
use crate::ui::{Ui, entity_name};
use async_trait::async_trait;
use cf_domain::session::Session;
use std::sync::Arc;

/// `cf services`：列出当前 space 内的服务实例
pub struct ListServices {
    ui: Arc<dyn Ui>,
    session: Arc<Session>,
    summary_repo: Arc<dyn ServiceSummaryRepository>,
}

impl ListServices {
    pub fn new(
        ui: Arc<dyn Ui>,
        session: Arc<Session>,
        summary_repo: Arc<dyn ServiceSummaryRepository>,
    ) -> Self {
        Self {
            ui,
            session,
            summary_repo,
        }
    }
}

#[async_trait]
impl Command for ListServices {
    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "services",
            short_name: Some("s"),
            description: "List all service instances in the target space",
            usage: "cf services",
        }
    }

    fn requirements(&self, ctx: &CommandContext) -> Result<Vec<Requirement>, CommandError> {
        if !ctx.args().is_empty() {
            return Err(CommandError::Usage { command: "services" });
        }
        Ok(vec![Requirement::Login, Requirement::TargetedSpace])
    }

    async fn run(
        &self,
        _ctx: &CommandContext,
        _resolved: &ResolvedResources,
    ) -> Result<(), CommandError> {
        self.ui.say(&format!(
            "Getting services in org {} / space {} as {}...",
            entity_name(self.session.organization_name()),
            entity_name(self.session.space_name()),
            entity_name(self.session.username()),
        ));

        let space_guid = self
            .session
            .space_guid()
            .ok_or(RequirementError::NoTargetedSpace)?;
        let instances = self.summary_repo.get_summaries_in_space(space_guid).await?;

        self.ui.ok();
        self.ui.say("");

        if instances.is_empty() {
            self.ui.say("No services found");
            return Ok(());
        }

        let mut rows = vec![vec![
            "name".to_string(),
            "service".to_string(),
            "plan".to_string(),
            "bound apps".to_string(),
        ]];
        for instance in instances {
            let (service, plan) = if instance.is_user_provided() {
                ("user-provided".to_string(), String::new())
            } else {
                (
                    instance
                        .service_offering
                        .as_ref()
                        .map(|o| o.label.clone())
                        .unwrap_or_default(),
                    instance
                        .service_plan
                        .as_ref()
                        .map(|p| p.name.clone())
                        .unwrap_or_default(),
                )
            };
            rows.push(vec![
                instance.name,
                service,
                plan,
                instance.application_names.join(", "),
            ]);
        }
        self.ui.display_table(&rows);
        Ok(())
    }
}
