//! End-to-end scenarios driven through the library on a manual clock

use appforge::App;
use appforge::clock::ManualClock;
use appforge::config::{Config, RestartPolicy};
use appforge::form::Category;
use appforge::notification::Severity;
use appforge::progress::{ProgressPhase, StartOutcome};
use appforge::random::ScriptedRandom;
use proptest::prelude::*;

fn app_with(config: Config, rng: ScriptedRandom) -> (App, ManualClock) {
    let clock = ManualClock::new();
    let app = App::with_sources(config, Box::new(clock.clone()), Box::new(rng));
    (app, clock)
}

fn default_app() -> (App, ManualClock) {
    app_with(Config::default(), ScriptedRandom::new())
}

fn messages(app: &App) -> Vec<String> {
    app.notifications
        .items()
        .iter()
        .map(|n| n.message.clone())
        .collect()
}

#[test]
fn scenario_saved_toast_expires_after_three_seconds() {
    let (mut app, clock) = default_app();

    app.show_notification("Saved", Severity::Success);
    assert_eq!(app.notifications.len(), 1);
    assert_eq!(app.notifications.items()[0].severity, Severity::Success);

    clock.advance_ms(3000);
    app.run_due_tasks();
    assert!(app.notifications.is_empty());
}

#[test]
fn scenario_loading_completes_and_hides() {
    let rng = ScriptedRandom::with_floats([0.15, 0.15, 0.15, 0.15, 0.15, 0.15, 0.15]);
    let (mut app, clock) = app_with(Config::default(), rng);

    app.show_loading("Loading");
    clock.advance_ms(700);
    app.run_due_tasks();
    assert_eq!(app.progress.progress(), 1.0);
    assert_eq!(app.progress.phase(), ProgressPhase::Completing);
    assert_eq!(app.progress.percent(), 100);

    clock.advance_ms(500);
    app.run_due_tasks();
    assert!(!app.progress.is_active());
}

#[test]
fn scenario_validate_then_build() {
    let (mut app, clock) = default_app();

    app.validate_and_continue();
    assert_eq!(messages(&app), vec!["Please enter an app name!"]);

    app.form.set_name("My Blog");
    app.validate_and_continue();
    assert_eq!(
        app.notifications.latest().map(|n| n.severity),
        Some(Severity::Warning)
    );

    app.form.select_category(Some(Category::Web));
    app.validate_and_continue();
    assert_eq!(
        app.notifications.latest().map(|n| n.message.as_str()),
        Some("Form validated successfully!")
    );

    clock.advance_ms(1000);
    app.run_due_tasks();
    assert!(app.progress.is_active());
    assert_eq!(app.progress.message(), "Creating your app...");

    // Minimum increments, generously long
    clock.advance_ms(10_000);
    app.run_due_tasks();
    assert!(!app.progress.is_active());
    assert!(app.notifications.is_empty());
}

#[test]
fn scenario_restart_versus_ignore() {
    let (mut app, _) = default_app();
    app.show_loading("one");
    assert_eq!(app.show_loading("two"), StartOutcome::Restarted);
    assert_eq!(app.pending_tasks(), 1);

    let mut config = Config::default();
    config.progress.restart_policy = RestartPolicy::Ignore;
    let (mut app, _) = app_with(config, ScriptedRandom::new());
    app.show_loading("one");
    assert_eq!(app.show_loading("two"), StartOutcome::Ignored);
    assert_eq!(app.progress.message(), "one");
}

#[test]
fn scenario_shutdown_is_clean() {
    let (mut app, clock) = default_app();
    app.schedule_startup();
    app.generate_app();
    app.show_loading("Loading");

    app.shutdown();
    clock.advance_ms(120_000);
    assert_eq!(app.run_due_tasks(), 0);
    assert!(app.notifications.is_empty());
}

proptest! {
    #[test]
    fn prop_progress_reaches_exactly_one(increments in prop::collection::vec(0.02f64..=0.15, 0..20)) {
        let (mut app, clock) = app_with(Config::default(), ScriptedRandom::with_floats(increments));
        app.show_loading("x");

        let mut last = 0.0;
        for _ in 0..100 {
            clock.advance_ms(100);
            app.run_due_tasks();
            let progress = app.progress.progress();
            prop_assert!(progress <= 1.0);
            prop_assert!(progress >= last);
            last = progress;
        }
        prop_assert_eq!(last, 1.0);
        prop_assert!(!app.progress.is_active());
    }

    #[test]
    fn prop_toasts_gone_by_their_expiry(gaps in prop::collection::vec(0u64..2000, 1..10)) {
        let (mut app, clock) = default_app();
        let mut ids = Vec::new();
        for gap in &gaps {
            clock.advance_ms(*gap);
            app.run_due_tasks();
            ids.push(app.show_notification("toast", Severity::Info));
        }

        clock.advance_ms(3000);
        app.run_due_tasks();
        for id in ids {
            prop_assert!(app.notifications.get(id).is_none());
        }
    }
}
