//! Tests for app actions and scheduled task handling

use super::*;
use crate::config::{Config, RestartPolicy};
use crate::form::Category;
use crate::progress::ProgressPhase;
use crate::random::ScriptedRandom;
use crate::test_utils::test_helpers::{test_app, test_app_with};

fn scripted(floats: &[f64]) -> ScriptedRandom {
    ScriptedRandom::with_floats(floats.iter().copied())
}

fn latest(app: &App) -> (String, Severity) {
    let n = app.notifications.latest().unwrap();
    (n.message.clone(), n.severity)
}

// Notifications

#[test]
fn test_notification_expires_after_default_duration() {
    let (mut app, clock) = test_app();

    app.show_notification("Saved", Severity::Success);
    assert_eq!(app.notifications.len(), 1);
    assert_eq!(latest(&app), ("Saved".to_string(), Severity::Success));

    clock.advance_ms(2999);
    app.run_due_tasks();
    assert_eq!(app.notifications.len(), 1);

    clock.advance_ms(1);
    assert_eq!(app.run_due_tasks(), 1);
    assert!(app.notifications.is_empty());
    assert_eq!(app.pending_tasks(), 0);
}

#[test]
fn test_notification_duration_from_config() {
    let mut config = Config::default();
    config.notifications.duration_ms = 500;
    let (mut app, clock) = test_app_with(config, ScriptedRandom::new());

    app.show_notification("Quick", Severity::Info);
    clock.advance_ms(500);
    app.run_due_tasks();

    assert!(app.notifications.is_empty());
}

#[test]
fn test_manual_dismiss_cancels_expiry() {
    let (mut app, clock) = test_app();
    let id = app.show_notification("Bye", Severity::Info);
    assert_eq!(app.pending_tasks(), 1);

    assert!(app.dismiss_notification(id));
    assert_eq!(app.pending_tasks(), 0);

    clock.advance_ms(5000);
    assert_eq!(app.run_due_tasks(), 0);
}

#[test]
fn test_dismiss_unknown_is_noop() {
    let (mut app, _) = test_app();
    let id = app.show_notification("Stay", Severity::Info);
    app.dismiss_notification(id);
    app.show_notification("Other", Severity::Info);

    assert!(!app.dismiss_notification(id));
    assert_eq!(app.notifications.len(), 1);
}

#[test]
fn test_each_notification_expires_on_its_own_schedule() {
    let (mut app, clock) = test_app();
    app.show_notification("first", Severity::Info);
    clock.advance_ms(1000);
    app.show_notification("second", Severity::Info);

    clock.advance_ms(2000);
    app.run_due_tasks();
    assert_eq!(app.notifications.messages(), vec!["second"]);

    clock.advance_ms(1000);
    app.run_due_tasks();
    assert!(app.notifications.is_empty());
}

#[test]
fn test_bound_evicts_oldest_and_its_timer() {
    let (mut app, _) = test_app();
    for i in 0..6 {
        app.show_notification(&format!("n{i}"), Severity::Info);
    }

    assert_eq!(app.notifications.len(), 5);
    assert_eq!(app.notifications.messages()[0], "n1");
    assert_eq!(app.pending_tasks(), 5);
}

// Progress simulator

#[test]
fn test_loading_runs_to_completion_then_hides() {
    let (mut app, clock) = test_app_with(Config::default(), scripted(&[0.15, 0.15, 0.15]));
    app.show_loading("Loading");
    assert!(app.progress.is_active());
    assert_eq!(app.progress.progress(), 0.0);

    clock.advance_ms(100);
    app.run_due_tasks();
    assert!((app.progress.progress() - 0.15).abs() < 1e-9);

    // Remaining draws fall back to the 0.02 minimum
    clock.advance_ms(10_000);
    app.run_due_tasks();
    assert_eq!(app.progress.progress(), 1.0);
    assert!(!app.progress.is_active());
    assert_eq!(app.pending_tasks(), 0);
}

#[test]
fn test_completion_hold_keeps_overlay_for_half_a_second() {
    let mut config = Config::default();
    config.progress.max_increment = 0.6;
    let (mut app, clock) = test_app_with(config, scripted(&[0.6, 0.6]));
    app.show_loading("Loading");

    clock.advance_ms(200);
    app.run_due_tasks();
    assert_eq!(app.progress.progress(), 1.0);
    assert_eq!(app.progress.phase(), ProgressPhase::Completing);

    clock.advance_ms(499);
    app.run_due_tasks();
    assert!(app.progress.is_active());

    clock.advance_ms(1);
    app.run_due_tasks();
    assert!(!app.progress.is_active());
}

#[test]
fn test_restart_leaves_single_tick_task() {
    let (mut app, clock) = test_app_with(Config::default(), scripted(&[0.1]));
    app.show_loading("first");
    clock.advance_ms(100);
    app.run_due_tasks();

    assert_eq!(app.show_loading("second"), StartOutcome::Restarted);
    assert_eq!(app.progress.progress(), 0.0);
    assert_eq!(app.progress.message(), "second");
    assert_eq!(app.pending_tasks(), 1);
}

#[test]
fn test_ignore_policy_leaves_progress_untouched() {
    let mut config = Config::default();
    config.progress.restart_policy = RestartPolicy::Ignore;
    let (mut app, clock) = test_app_with(config, scripted(&[0.1]));
    app.show_loading("first");
    clock.advance_ms(100);
    app.run_due_tasks();

    assert_eq!(app.show_loading("second"), StartOutcome::Ignored);
    assert!((app.progress.progress() - 0.1).abs() < 1e-9);
    assert_eq!(app.progress.message(), "first");
    assert_eq!(app.pending_tasks(), 1);
}

#[test]
fn test_cancel_stops_ticks() {
    let (mut app, clock) = test_app_with(Config::default(), scripted(&[0.1]));
    app.show_loading("Loading");
    clock.advance_ms(100);
    app.run_due_tasks();

    assert!(app.cancel_loading());
    assert!(!app.progress.is_active());
    assert_eq!(
        latest(&app),
        ("Operation cancelled".to_string(), Severity::Warning)
    );

    let before = app.progress.progress();
    clock.advance_ms(1000);
    app.run_due_tasks();
    assert_eq!(app.progress.progress(), before);
}

#[test]
fn test_cancel_when_idle_is_noop() {
    let (mut app, _) = test_app();
    assert!(!app.cancel_loading());
    assert!(app.notifications.is_empty());
}

#[test]
fn test_cancel_during_completion_hold_closes_silently() {
    let mut config = Config::default();
    config.progress.max_increment = 1.0;
    let (mut app, clock) = test_app_with(config, scripted(&[1.0]));
    app.show_loading("Loading");
    clock.advance_ms(100);
    app.run_due_tasks();
    assert_eq!(app.progress.phase(), ProgressPhase::Completing);

    assert!(app.cancel_loading());
    assert!(!app.progress.is_active());
    assert!(app.notifications.is_empty());
    assert_eq!(app.pending_tasks(), 0);
}

// Form

#[test]
fn test_validate_empty_name_is_error() {
    let (mut app, _) = test_app();
    app.form.select_category(Some(Category::Web));

    app.validate_and_continue();
    assert_eq!(
        latest(&app),
        ("Please enter an app name!".to_string(), Severity::Error)
    );
}

#[test]
fn test_validate_missing_category_is_warning() {
    let (mut app, _) = test_app();
    app.form.set_name("Todo");

    app.validate_and_continue();
    assert_eq!(
        latest(&app),
        ("Please select a category!".to_string(), Severity::Warning)
    );
}

#[test]
fn test_valid_form_starts_loading_after_one_second() {
    let (mut app, clock) = test_app();
    app.form.set_name("Todo");
    app.form.select_category(Some(Category::Mobile));

    app.validate_and_continue();
    assert_eq!(
        latest(&app),
        ("Form validated successfully!".to_string(), Severity::Success)
    );
    assert!(!app.progress.is_active());

    clock.advance_ms(999);
    app.run_due_tasks();
    assert!(!app.progress.is_active());

    clock.advance_ms(1);
    app.run_due_tasks();
    assert!(app.progress.is_active());
    assert_eq!(app.progress.message(), "Creating your app...");
    assert_eq!(app.progress.progress(), 0.0);
}

#[test]
fn test_clear_form() {
    let (mut app, _) = test_app();
    app.form.set_name("Todo");
    app.form.select_category(Some(Category::Desktop));

    app.clear_form();
    assert_eq!(app.form.name(), "");
    assert_eq!(app.form.category, None);
    assert_eq!(latest(&app), ("Form cleared!".to_string(), Severity::Info));
}

// Supplemented actions

#[test]
fn test_generate_app_posts_steps_two_seconds_apart() {
    let (mut app, clock) = test_app();
    app.generate_app();
    assert_eq!(
        app.notifications.messages(),
        vec!["Starting app generation process..."]
    );

    clock.advance_ms(2000);
    app.run_due_tasks();
    assert_eq!(latest(&app).0, "Creating repository...");

    clock.advance_ms(2000);
    app.run_due_tasks();
    assert_eq!(latest(&app).0, "Setting up deployment...");

    clock.advance_ms(4000);
    app.run_due_tasks();
    assert_eq!(
        app.notifications.messages(),
        vec!["Finalizing build...", "App generated successfully!"]
    );
    assert_eq!(latest(&app).1, Severity::Success);
}

#[test]
fn test_catch_up_times_follow_ups_from_due_instant() {
    let (mut app, clock) = test_app();
    app.generate_app();

    // One big jump handles every step and every expiry in order
    clock.advance_ms(8000);
    app.run_due_tasks();
    assert_eq!(
        app.notifications.messages(),
        vec!["Finalizing build...", "App generated successfully!"]
    );
}

#[test]
fn test_toggle_dark_mode_from_header() {
    let (mut app, _) = test_app();
    app.toggle_dark_mode();

    assert!(app.dark_mode);
    assert_eq!(latest(&app), ("Theme toggled!".to_string(), Severity::Info));
}

#[test]
fn test_select_tab() {
    let (mut app, _) = test_app();
    app.select_tab(AppTab::Advanced);
    assert_eq!(app.selected_tab, AppTab::Advanced);
    assert!(app.notifications.is_empty());
}

#[test]
fn test_activate_template() {
    let (mut app, _) = test_app();
    app.activate_template(4);

    assert_eq!(app.sidebar.selected(), 4);
    assert_eq!(
        latest(&app),
        ("Selected CRM System template".to_string(), Severity::Info)
    );
}

#[test]
fn test_activate_template_out_of_range() {
    let (mut app, _) = test_app();
    app.activate_template(99);
    assert!(app.notifications.is_empty());
}

#[test]
fn test_settings_items() {
    let (mut app, _) = test_app();

    app.activate_setting(SettingsItem::DarkMode);
    assert!(app.dark_mode);
    assert_eq!(latest(&app), ("Theme updated!".to_string(), Severity::Success));

    app.activate_setting(SettingsItem::TestNotifications);
    assert_eq!(
        latest(&app),
        ("Test notification sent!".to_string(), Severity::Success)
    );

    app.form.set_name("Chat");
    app.activate_setting(SettingsItem::ClearAllData);
    assert_eq!(app.form.name(), "");
    assert_eq!(
        latest(&app),
        ("All data cleared!".to_string(), Severity::Warning)
    );

    app.activate_setting(SettingsItem::About);
    assert_eq!(latest(&app).0, "AppForge - Built with ❤️ for developers");
    assert_eq!(app.settings.selected(), SettingsItem::About);
}

#[test]
fn test_action_buttons() {
    let (mut app, _) = test_app();

    app.activate_action(ActionButton::SaveConfiguration);
    assert_eq!(
        latest(&app),
        ("Configuration saved!".to_string(), Severity::Success)
    );

    app.activate_action(ActionButton::LoadConfiguration);
    assert_eq!(
        latest(&app),
        ("Configuration loaded!".to_string(), Severity::Info)
    );

    app.activate_action(ActionButton::PreviewApp);
    assert_eq!(latest(&app).0, "Launching preview...");
    assert_eq!(app.selected_action, ActionButton::PreviewApp);

    app.activate_action(ActionButton::ValidateAndContinue);
    assert_eq!(latest(&app).0, "Please enter an app name!");
}

#[test]
fn test_stats_card_click_message() {
    let (mut app, _) = test_app();
    app.show_stats_details();
    assert_eq!(latest(&app).0, "Analytics feature coming soon!");
}

// Startup and shutdown

#[test]
fn test_startup_welcome_after_one_second() {
    let (mut app, clock) = test_app();
    app.schedule_startup();

    clock.advance_ms(999);
    app.run_due_tasks();
    assert!(app.notifications.is_empty());

    clock.advance_ms(1);
    app.run_due_tasks();
    assert_eq!(
        latest(&app).0,
        "Welcome to AppForge! Click any element to explore features."
    );
}

#[test]
fn test_stats_refresh_every_thirty_seconds() {
    let mut rng = ScriptedRandom::new();
    for value in [5, 9, 3, 2, 1] {
        rng.push_int(value);
    }
    let (mut app, clock) = test_app_with(Config::default(), rng);
    app.schedule_startup();

    clock.advance_ms(30_000);
    app.run_due_tasks();
    assert_eq!(app.stats.apps_generated_today, 1252);
    assert_eq!(app.stats.growth_percentage, 15);

    clock.advance_ms(30_000);
    app.run_due_tasks();
    assert_eq!(app.stats.apps_generated_today, 1254);
    assert_eq!(app.stats.growth_percentage, 15);
}

#[test]
fn test_shutdown_cancels_everything() {
    let (mut app, clock) = test_app();
    app.schedule_startup();
    app.generate_app();
    app.show_loading("Loading");
    assert!(app.pending_tasks() > 0);

    app.shutdown();
    assert_eq!(app.pending_tasks(), 0);
    assert!(!app.progress.is_active());

    clock.advance_ms(60_000);
    assert_eq!(app.run_due_tasks(), 0);
}
