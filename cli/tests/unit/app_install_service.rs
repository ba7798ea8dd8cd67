//! Tests for the `app_install` application service.
//!
//! Every test drives `reconcile_app()` against `FakePlatform` and checks both
//! the returned outcome and the remote calls that were (not) made.

#![allow(clippy::expect_used)]

use dpkctl::application::services::app_install::reconcile_app;
use dpkctl::domain::{ReconcileError, ReconcileOutcome, ReconcileStep};

use crate::mocks::{
    BrokenSource, Call, FailAt, FakePlatform, NoopReporter, RecordingReporter, app, manifest,
};

// ── Install path ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn fresh_project_gets_exactly_one_app_at_published_version() {
    let platform = FakePlatform::new().with_project("p1", "demo");
    let m = manifest("model-configurator", "Model Configurator");

    let outcome = reconcile_app(&platform, &NoopReporter, "p1", &m)
        .await
        .expect("install succeeds");

    let ReconcileOutcome::Installed { app, dpk } = outcome else {
        panic!("expected Installed, got {outcome:?}");
    };
    assert_eq!(app.name, "Model Configurator");
    assert_eq!(app.dpk_version, dpk.version);

    let apps = platform.apps_named("p1", "Model Configurator");
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].dpk_version, "1.0.1");
}

#[tokio::test]
async fn calls_happen_in_order() {
    let platform = FakePlatform::new().with_project("p1", "demo");
    reconcile_app(&platform, &NoopReporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect("install succeeds");

    assert_eq!(
        platform.calls(),
        vec![
            Call::ResolveProject("p1".to_string()),
            Call::Publish("pkg".to_string()),
            Call::FindApp("Pkg".to_string()),
            Call::InstallApp {
                name: "Pkg".to_string(),
                version: "1.0.1".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn app_name_defaults_to_package_name_without_display_name() {
    let platform = FakePlatform::new().with_project("p1", "demo");
    let m = dpk_common::PackageManifest::from_json(r#"{"name":"route-slot"}"#).expect("manifest");

    let outcome = reconcile_app(&platform, &NoopReporter, "p1", &m)
        .await
        .expect("install succeeds");

    assert_eq!(outcome.app().name, "route-slot");
}

// ── Update path ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn existing_app_is_updated_not_duplicated() {
    let platform = FakePlatform::new()
        .with_project("p1", "demo")
        .with_app(app("a1", "p1", "Pkg", "0.9.0"));

    let outcome = reconcile_app(&platform, &NoopReporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect("update succeeds");

    let ReconcileOutcome::Updated {
        app,
        previous_version,
        dpk,
    } = outcome
    else {
        panic!("expected Updated, got {outcome:?}");
    };
    assert_eq!(app.id, "a1");
    assert_eq!(previous_version, "0.9.0");
    assert_eq!(app.dpk_version, dpk.version);

    let apps = platform.apps_named("p1", "Pkg");
    assert_eq!(apps.len(), 1, "no duplicate app");
    assert_eq!(apps[0].dpk_version, "1.0.1");
    assert_eq!(platform.install_count(), 0);
}

#[tokio::test]
async fn app_with_same_name_in_other_project_is_ignored() {
    let platform = FakePlatform::new()
        .with_project("p1", "demo")
        .with_project("p2", "other")
        .with_app(app("a1", "p2", "Pkg", "0.9.0"));

    let outcome = reconcile_app(&platform, &NoopReporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect("install succeeds");

    assert_eq!(outcome.action(), "installed");
    assert_eq!(platform.apps_named("p2", "Pkg")[0].dpk_version, "0.9.0");
}

#[tokio::test]
async fn second_run_only_advances_version() {
    let platform = FakePlatform::new().with_project("p1", "demo");
    let m = manifest("pkg", "Pkg");

    let first = reconcile_app(&platform, &NoopReporter, "p1", &m)
        .await
        .expect("first run");
    let second = reconcile_app(&platform, &NoopReporter, "p1", &m)
        .await
        .expect("second run");

    assert_eq!(first.action(), "installed");
    assert_eq!(second.action(), "updated");
    assert_eq!(first.app().id, second.app().id);

    let apps = platform.apps_named("p1", "Pkg");
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].dpk_version, "1.0.2");
    assert_eq!(platform.publish_count(), 2, "publish is never skipped");
    assert_eq!(platform.install_count(), 1);
    assert_eq!(platform.update_count(), 1);
}

// ── Failure paths ────────────────────────────────────────────────────────────

#[tokio::test]
async fn unknown_project_makes_no_publish_or_app_call() {
    let platform = FakePlatform::new().with_project("p1", "demo");

    let err = reconcile_app(&platform, &NoopReporter, "missing", &manifest("pkg", "Pkg"))
        .await
        .expect_err("project must not resolve");

    assert!(matches!(err, ReconcileError::ProjectNotFound(ref id) if id == "missing"));
    assert_eq!(
        platform.calls(),
        vec![Call::ResolveProject("missing".to_string())]
    );
}

#[tokio::test]
async fn unknown_project_is_reported_before_manifest_is_read() {
    let platform = FakePlatform::new().with_project("p1", "demo");
    let source = BrokenSource::default();

    let err = reconcile_app(&platform, &NoopReporter, "missing", &source)
        .await
        .expect_err("project must not resolve");

    assert!(matches!(err, ReconcileError::ProjectNotFound(_)));
    assert_eq!(source.reads(), 0);
}

#[tokio::test]
async fn unreadable_manifest_stops_before_publish() {
    let platform = FakePlatform::new().with_project("p1", "demo");
    let source = BrokenSource::default();

    let err = reconcile_app(&platform, &NoopReporter, "p1", &source)
        .await
        .expect_err("manifest unreadable");

    assert!(matches!(err, ReconcileError::Manifest(_)));
    assert_eq!(err.step(), Some(ReconcileStep::LoadManifest));
    assert_eq!(err.code(), "INVALID_MANIFEST");
    assert!(err.to_string().contains("dataloop.json"));
    assert_eq!(source.reads(), 1);
    assert_eq!(platform.calls(), vec![Call::ResolveProject("p1".to_string())]);
}

#[tokio::test]
async fn broken_project_lookup_is_not_reported_as_missing() {
    let platform = FakePlatform::new()
        .with_project("p1", "demo")
        .failing_at(FailAt::Resolve);

    let err = reconcile_app(&platform, &NoopReporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect_err("resolve fails");

    assert_eq!(err.step(), Some(ReconcileStep::ResolveProject));
    assert!(matches!(err, ReconcileError::Failed { .. }));
    assert_eq!(platform.publish_count(), 0);
}

#[tokio::test]
async fn blank_project_id_makes_no_call() {
    let platform = FakePlatform::new().with_project("p1", "demo");

    let err = reconcile_app(&platform, &NoopReporter, "  ", &manifest("pkg", "Pkg"))
        .await
        .expect_err("blank id rejected");

    assert!(matches!(err, ReconcileError::InvalidProjectId));
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn publish_failure_stops_before_lookup() {
    let platform = FakePlatform::new()
        .with_project("p1", "demo")
        .failing_at(FailAt::Publish);

    let err = reconcile_app(&platform, &NoopReporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect_err("publish fails");

    assert_eq!(err.step(), Some(ReconcileStep::Publish));
    assert!(
        !platform
            .calls()
            .iter()
            .any(|c| matches!(c, Call::FindApp(_)))
    );
}

#[tokio::test]
async fn failed_lookup_never_falls_through_to_install() {
    let platform = FakePlatform::new()
        .with_project("p1", "demo")
        .failing_at(FailAt::Lookup);

    let err = reconcile_app(&platform, &NoopReporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect_err("lookup fails");

    assert_eq!(err.step(), Some(ReconcileStep::Lookup));
    assert_eq!(platform.install_count(), 0);
    assert_eq!(platform.update_count(), 0);
}

#[tokio::test]
async fn duplicate_apps_fail_the_lookup() {
    let platform = FakePlatform::new()
        .with_project("p1", "demo")
        .with_app(app("a1", "p1", "Pkg", "1.0.0"))
        .with_app(app("a2", "p1", "Pkg", "1.0.0"));

    let err = reconcile_app(&platform, &NoopReporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect_err("ambiguous lookup");

    assert_eq!(err.step(), Some(ReconcileStep::Lookup));
    assert_eq!(platform.install_count() + platform.update_count(), 0);
}

#[tokio::test]
async fn update_failure_propagates() {
    let platform = FakePlatform::new()
        .with_project("p1", "demo")
        .with_app(app("a1", "p1", "Pkg", "1.0.0"))
        .failing_at(FailAt::Update);

    let err = reconcile_app(&platform, &NoopReporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect_err("update fails");

    assert_eq!(err.step(), Some(ReconcileStep::Update));
    assert_eq!(platform.install_count(), 0);
}

#[tokio::test]
async fn install_failure_propagates() {
    let platform = FakePlatform::new()
        .with_project("p1", "demo")
        .failing_at(FailAt::Install);

    let err = reconcile_app(&platform, &NoopReporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect_err("install fails");

    assert_eq!(err.step(), Some(ReconcileStep::Install));
    assert!(platform.apps_named("p1", "Pkg").is_empty());
}

// ── Reporting ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn reporter_sees_each_step() {
    let platform = FakePlatform::new().with_project("p1", "demo");
    let reporter = RecordingReporter::default();

    reconcile_app(&platform, &reporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect("install succeeds");

    let events = reporter.events();
    assert!(events.contains(&"ok: project found: demo".to_string()));
    assert!(events.contains(&"ok: package published: Pkg v1.0.1".to_string()));
    assert!(events.contains(&"ok: app installed: Pkg".to_string()));
}

#[tokio::test]
async fn update_to_same_version_warns() {
    // The fake's first publish yields 1.0.1.
    let platform = FakePlatform::new()
        .with_project("p1", "demo")
        .with_app(app("a1", "p1", "Pkg", "1.0.1"));
    let reporter = RecordingReporter::default();

    reconcile_app(&platform, &reporter, "p1", &manifest("pkg", "Pkg"))
        .await
        .expect("update succeeds");

    assert!(reporter.events().iter().any(|e| e.starts_with("warn:")));
}
