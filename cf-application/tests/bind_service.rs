use cf_application::api::SERVICE_INSTANCE_ALREADY_BOUND;
use cf_application::commands::service::BindService;
use cf_application::requirement::Requirement;
use cf_application::runner::ExitStatus;
use cf_domain::guid::Guid;
use cf_domain::models::{Application, ServiceInstance};
use cf_testhelpers::{
    FakeRequirementResolver, FakeServiceBindingRepo, FakeUi, assert_slice_contains,
    assert_slice_does_not_contain, run_command, session_with_defaults,
};
use std::sync::Arc;

fn my_app() -> Application {
    Application {
        name: "my-app".into(),
        guid: Guid::from("my-app-guid"),
        ..Default::default()
    }
}

fn my_service() -> ServiceInstance {
    ServiceInstance {
        name: "my-service".into(),
        guid: Guid::from("my-service-guid"),
        ..Default::default()
    }
}

fn resolver_with_both() -> Arc<FakeRequirementResolver> {
    Arc::new(
        FakeRequirementResolver::logged_in()
            .with_application(my_app())
            .with_service_instance(my_service()),
    )
}

fn bind_service(ui: &Arc<FakeUi>, repo: &Arc<FakeServiceBindingRepo>) -> BindService {
    BindService::new(
        ui.clone(),
        Arc::new(session_with_defaults()),
        repo.clone(),
    )
}

#[tokio::test]
async fn fails_requirements_when_not_logged_in() {
    let ui = Arc::new(FakeUi::new());
    let repo = Arc::new(FakeServiceBindingRepo::new());
    let resolver = Arc::new(
        FakeRequirementResolver::default()
            .with_application(my_app())
            .with_service_instance(my_service()),
    );

    let report = run_command(
        &bind_service(&ui, &repo),
        &["my-app", "my-service"],
        resolver.clone(),
        ui.clone(),
    )
    .await;

    assert!(!report.passed_requirements);
    assert_eq!(report.status, ExitStatus::Failure);
    assert_eq!(resolver.evaluated(), vec![Requirement::Login]);
    assert!(repo.create_calls().is_empty());
    assert_slice_contains(&ui.outputs(), &[&["FAILED"], &["Not logged in"]]);
    assert_slice_does_not_contain(&ui.outputs(), &["Binding service"]);
}

#[tokio::test]
async fn binds_the_resolved_app_and_service_instance() {
    let ui = Arc::new(FakeUi::new());
    let repo = Arc::new(FakeServiceBindingRepo::new());
    let resolver = resolver_with_both();

    let report = run_command(
        &bind_service(&ui, &repo),
        &["my-app", "my-service"],
        resolver.clone(),
        ui.clone(),
    )
    .await;

    assert!(report.passed_requirements);
    assert_eq!(report.status, ExitStatus::Success);
    assert_eq!(resolver.application_name().as_deref(), Some("my-app"));
    assert_eq!(resolver.service_instance_name().as_deref(), Some("my-service"));
    assert_eq!(
        resolver.evaluated(),
        vec![
            Requirement::Login,
            Requirement::application("my-app"),
            Requirement::service_instance("my-service"),
        ]
    );

    assert_slice_contains(
        &ui.outputs(),
        &[
            &[
                "Binding service",
                "my-service",
                "my-app",
                "my-org",
                "my-space",
                "my-user",
            ],
            &["OK"],
            &["TIP"],
        ],
    );
    assert_eq!(
        repo.create_service_instance_guid(),
        Some(Guid::from("my-service-guid"))
    );
    assert_eq!(repo.create_application_guid(), Some(Guid::from("my-app-guid")));
}

#[tokio::test]
async fn already_bound_reports_success_with_a_warning() {
    let ui = Arc::new(FakeUi::new());
    let repo = Arc::new(FakeServiceBindingRepo::with_error_code(
        SERVICE_INSTANCE_ALREADY_BOUND,
    ));

    let report = run_command(
        &bind_service(&ui, &repo),
        &["my-app", "my-service"],
        resolver_with_both(),
        ui.clone(),
    )
    .await;

    assert!(report.passed_requirements);
    assert_eq!(report.status, ExitStatus::Success);
    assert_eq!(ui.failure_message(), None);
    assert_slice_contains(
        &ui.outputs(),
        &[
            &["Binding service"],
            &["OK"],
            &["my-app", "is already bound", "my-service"],
        ],
    );
    assert_slice_does_not_contain(&ui.outputs(), &["FAILED"]);
    assert_slice_does_not_contain(&ui.outputs(), &["TIP"]);
}

#[tokio::test]
async fn other_backend_errors_are_hard_failures() {
    let ui = Arc::new(FakeUi::new());
    let mut repo = FakeServiceBindingRepo::with_error_code("10003");
    repo.create_error_description =
        Some("You are not authorized to perform the requested action".into());
    let repo = Arc::new(repo);

    let report = run_command(
        &bind_service(&ui, &repo),
        &["my-app", "my-service"],
        resolver_with_both(),
        ui.clone(),
    )
    .await;

    assert!(report.passed_requirements);
    assert_eq!(report.status, ExitStatus::Failure);
    assert!(
        ui.failure_message()
            .is_some_and(|m| m.contains("You are not authorized to perform the requested action"))
    );
    assert_slice_contains(
        &ui.outputs(),
        &[&["Binding service"], &["FAILED"], &["not authorized"]],
    );
    assert_slice_does_not_contain(&ui.outputs(), &["OK"]);
    assert_slice_does_not_contain(&ui.outputs(), &["already bound"]);
}

#[tokio::test]
async fn wrong_argument_count_fails_with_usage() {
    for args in [&[][..], &["my-app"][..], &["my-app", "my-service", "extra"][..]] {
        let ui = Arc::new(FakeUi::new());
        let repo = Arc::new(FakeServiceBindingRepo::new());
        let resolver = resolver_with_both();

        let report = run_command(&bind_service(&ui, &repo), args, resolver.clone(), ui.clone()).await;

        assert!(!report.passed_requirements);
        assert_eq!(report.status, ExitStatus::Failure);
        assert!(ui.failed_with_usage());
        assert!(resolver.evaluated().is_empty());
        assert!(repo.create_calls().is_empty());
        assert_slice_contains(
            &ui.outputs(),
            &[&["Incorrect Usage"], &["cf bind-service APP SERVICE_INSTANCE"]],
        );
    }
}

#[tokio::test]
async fn binding_twice_succeeds_both_times() {
    let ui = Arc::new(FakeUi::new());
    let repo = Arc::new(FakeServiceBindingRepo::new());
    let command = bind_service(&ui, &repo);

    let first = run_command(&command, &["my-app", "my-service"], resolver_with_both(), ui.clone()).await;
    let second = run_command(&command, &["my-app", "my-service"], resolver_with_both(), ui.clone()).await;

    assert_eq!(first.status, ExitStatus::Success);
    assert_eq!(second.status, ExitStatus::Success);
    assert_eq!(repo.create_calls().len(), 2);
    assert_slice_contains(
        &ui.outputs(),
        &[
            &["OK"],
            &["TIP"],
            &["Binding service"],
            &["OK"],
            &["already bound"],
        ],
    );
    assert_eq!(ui.failure_message(), None);
}

#[tokio::test]
async fn already_bound_pair_stays_already_bound_on_every_run() {
    let ui = Arc::new(FakeUi::new());
    let repo = Arc::new(
        FakeServiceBindingRepo::new().with_existing_binding("my-service-guid", "my-app-guid"),
    );
    let command = bind_service(&ui, &repo);

    let first = run_command(&command, &["my-app", "my-service"], resolver_with_both(), ui.clone()).await;
    let second = run_command(&command, &["my-app", "my-service"], resolver_with_both(), ui.clone()).await;

    assert_eq!(first.status, ExitStatus::Success);
    assert_eq!(second.status, ExitStatus::Success);
    assert_eq!(repo.create_calls().len(), 2);

    let outputs = ui.outputs();
    let already_bound = outputs
        .iter()
        .filter(|line| line.contains("is already bound"))
        .count();
    assert_eq!(already_bound, 2);
    assert_slice_does_not_contain(&outputs, &["TIP"]);
    assert_slice_does_not_contain(&outputs, &["FAILED"]);
    assert_eq!(ui.failure_message(), None);
}

#[tokio::test]
async fn first_unresolved_name_wins() {
    let ui = Arc::new(FakeUi::new());
    let repo = Arc::new(FakeServiceBindingRepo::new());
    let resolver = Arc::new(FakeRequirementResolver::logged_in());

    let report = run_command(
        &bind_service(&ui, &repo),
        &["missing-app", "missing-service"],
        resolver.clone(),
        ui.clone(),
    )
    .await;

    assert!(!report.passed_requirements);
    assert_eq!(
        resolver.evaluated(),
        vec![Requirement::Login, Requirement::application("missing-app")]
    );
    assert_eq!(resolver.service_instance_name(), None);
    assert_eq!(
        ui.failure_message().as_deref(),
        Some("App missing-app not found")
    );
    assert_slice_does_not_contain(&ui.outputs(), &["missing-service"]);
    assert!(repo.create_calls().is_empty());
}

#[tokio::test]
async fn missing_service_instance_stops_before_binding() {
    let ui = Arc::new(FakeUi::new());
    let repo = Arc::new(FakeServiceBindingRepo::new());
    let resolver = Arc::new(FakeRequirementResolver::logged_in().with_application(my_app()));

    let report = run_command(
        &bind_service(&ui, &repo),
        &["my-app", "my-service"],
        resolver,
        ui.clone(),
    )
    .await;

    assert!(!report.passed_requirements);
    assert_eq!(
        ui.failure_message().as_deref(),
        Some("Service instance my-service not found")
    );
    assert_slice_does_not_contain(&ui.outputs(), &["Binding service"]);
    assert!(repo.create_calls().is_empty());
}
