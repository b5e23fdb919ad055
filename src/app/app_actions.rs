//! User-facing actions and the handlers for scheduled tasks

use std::time::{Duration, Instant};

use super::app_state::{App, AppTask};
use crate::footer::FooterItem;
use crate::header::HeaderItem;
use crate::home::QuickStartCard;
use crate::navigation::{ActionButton, AppTab};
use crate::notification::{NotificationId, Severity};
use crate::progress::{ProgressPhase, StartOutcome, TickOutcome};
use crate::settings::SettingsItem;
use crate::sidebar::SidebarState;
use crate::stats::STATS_REFRESH_INTERVAL;

const WELCOME_DELAY: Duration = Duration::from_secs(1);
const WELCOME_MESSAGE: &str = "Welcome to AppForge! Click any element to explore features.";

const VALIDATED_LOADING_DELAY: Duration = Duration::from_secs(1);
const VALIDATED_LOADING_MESSAGE: &str = "Creating your app...";

const GENERATION_STEP_INTERVAL: Duration = Duration::from_secs(2);
const GENERATION_STEPS: [(&str, Severity); 4] = [
    ("Creating repository...", Severity::Info),
    ("Setting up deployment...", Severity::Info),
    ("Finalizing build...", Severity::Info),
    ("App generated successfully!", Severity::Success),
];

const ABOUT_MESSAGE: &str = "AppForge - Built with ❤️ for developers";

impl App {
    /// Queue the startup welcome toast and the stats ticker
    pub fn schedule_startup(&mut self) {
        let now = self.clock.now();
        self.scheduler.schedule_once(
            now,
            WELCOME_DELAY,
            AppTask::Notify {
                message: WELCOME_MESSAGE.to_string(),
                severity: Severity::Info,
            },
        );
        self.scheduler
            .schedule_repeating(now, STATS_REFRESH_INTERVAL, AppTask::RefreshStats);
    }

    /// Post a toast that expires after the configured duration
    pub fn show_notification(&mut self, message: &str, severity: Severity) -> NotificationId {
        let now = self.clock.now();
        self.notify_at(now, message, severity)
    }

    fn notify_at(&mut self, now: Instant, message: &str, severity: Severity) -> NotificationId {
        let id = self.notifications.push(message, severity, now);
        let handle = self.scheduler.schedule_once(
            now,
            self.config.notifications.duration(),
            AppTask::ExpireNotification(id),
        );
        self.notifications.set_expiry(id, handle);
        self.dirty = true;
        id
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        let removed = self.notifications.dismiss(id);
        if removed {
            self.dirty = true;
        }
        removed
    }

    pub fn dismiss_latest_notification(&mut self) -> Option<NotificationId> {
        let id = self.notifications.dismiss_latest();
        if id.is_some() {
            self.dirty = true;
        }
        id
    }

    /// Start the loading overlay with `message`
    pub fn show_loading(&mut self, message: &str) -> StartOutcome {
        let now = self.clock.now();
        self.start_loading_at(now, message)
    }

    fn start_loading_at(&mut self, now: Instant, message: &str) -> StartOutcome {
        let outcome = self
            .progress
            .start(message, self.config.progress.restart_policy);
        if outcome != StartOutcome::Ignored {
            let tick = self.scheduler.schedule_repeating(
                now,
                self.config.progress.tick(),
                AppTask::ProgressTick,
            );
            self.progress.attach_tick(tick);
            self.dirty = true;
        }
        outcome
    }

    /// Abort the loading overlay. Returns false when nothing was loading.
    ///
    /// During the completion hold the work already finished, so the overlay
    /// just closes early without a warning.
    pub fn cancel_loading(&mut self) -> bool {
        let phase = self.progress.phase();
        if !self.progress.cancel() {
            return false;
        }
        self.dirty = true;
        if phase == ProgressPhase::Active {
            self.show_notification("Operation cancelled", Severity::Warning);
        }
        true
    }

    pub fn validate_and_continue(&mut self) {
        match self.form.validate() {
            Err(error) => {
                self.show_notification(&error.to_string(), error.severity());
            }
            Ok(form) => {
                log::debug!("Form valid: {} ({:?})", form.name, form.category);
                self.show_notification("Form validated successfully!", Severity::Success);
                let now = self.clock.now();
                self.scheduler.schedule_once(
                    now,
                    VALIDATED_LOADING_DELAY,
                    AppTask::StartLoading(VALIDATED_LOADING_MESSAGE.to_string()),
                );
            }
        }
    }

    pub fn clear_form(&mut self) {
        self.form.clear();
        self.show_notification("Form cleared!", Severity::Info);
    }

    /// Post the generation steps two seconds apart
    pub fn generate_app(&mut self) {
        self.show_notification("Starting app generation process...", Severity::Info);

        let now = self.clock.now();
        for (step, (message, severity)) in (1u32..).zip(GENERATION_STEPS) {
            self.scheduler.schedule_once(
                now,
                GENERATION_STEP_INTERVAL * step,
                AppTask::Notify {
                    message: message.to_string(),
                    severity,
                },
            );
        }
    }

    pub fn select_tab(&mut self, tab: AppTab) {
        if self.selected_tab != tab {
            self.selected_tab = tab;
            self.dirty = true;
        }
    }

    /// Header toggle
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.show_notification("Theme toggled!", Severity::Info);
    }

    pub fn clear_all_data(&mut self) {
        self.form.clear();
        self.show_notification("All data cleared!", Severity::Warning);
    }

    pub fn activate_template(&mut self, index: usize) {
        let Some(template) = SidebarState::template_at(index) else {
            return;
        };
        self.sidebar.select(index);
        self.show_notification(&format!("Selected {template} template"), Severity::Info);
    }

    pub fn activate_setting(&mut self, item: SettingsItem) {
        self.settings.select(item);
        match item {
            SettingsItem::DarkMode => {
                self.dark_mode = !self.dark_mode;
                self.show_notification("Theme updated!", Severity::Success);
            }
            SettingsItem::TestNotifications => {
                self.show_notification("Test notification sent!", Severity::Success);
            }
            SettingsItem::ClearAllData => self.clear_all_data(),
            SettingsItem::About => {
                self.show_notification(ABOUT_MESSAGE, Severity::Info);
            }
        }
    }

    pub fn activate_action(&mut self, action: ActionButton) {
        self.selected_action = action;
        match action {
            ActionButton::ValidateAndContinue => self.validate_and_continue(),
            ActionButton::ClearForm => self.clear_form(),
            ActionButton::SaveConfiguration => {
                self.show_notification("Configuration saved!", Severity::Success);
            }
            ActionButton::LoadConfiguration => {
                self.show_notification("Configuration loaded!", Severity::Info);
            }
            ActionButton::PreviewApp => {
                self.show_notification("Launching preview...", Severity::Info);
            }
            ActionButton::GenerateApp => self.generate_app(),
        }
    }

    pub fn activate_header_item(&mut self, item: HeaderItem) {
        match item {
            HeaderItem::Logo => {
                self.show_notification("Welcome to AppForge!", Severity::Info);
            }
            HeaderItem::Title => {
                self.show_notification("Click any element to explore features!", Severity::Info);
            }
            HeaderItem::ProBadge => {
                self.show_notification("Pro features unlocked!", Severity::Success);
            }
            HeaderItem::ThemeToggle => self.toggle_dark_mode(),
            HeaderItem::Profile => {
                self.show_notification("Profile feature coming soon!", Severity::Info);
            }
            link => {
                let message = format!("{} feature coming soon!", link.label(self.dark_mode));
                self.show_notification(&message, Severity::Info);
            }
        }
    }

    /// Launch badge above the welcome text
    pub fn launch(&mut self) {
        self.show_notification("Ready for launch! 🚀", Severity::Success);
    }

    pub fn activate_quick_start(&mut self, card: QuickStartCard) {
        let message = match card {
            QuickStartCard::GettingStarted => "Tutorial starting soon!",
            QuickStartCard::Features => "Exploring features...",
            QuickStartCard::Community => "Joining community...",
        };
        self.show_notification(message, Severity::Info);
    }

    pub fn activate_footer_item(&mut self, item: FooterItem) {
        match item {
            FooterItem::Social(link) => {
                self.show_notification(&format!("Opening {}...", link.label()), Severity::Info);
            }
            FooterItem::Link(name) => {
                self.show_notification(&format!("{name} feature coming soon!"), Severity::Info);
            }
            FooterItem::Copyright => {
                self.show_notification("Thank you for using AppForge! 💙", Severity::Success);
            }
        }
    }

    pub fn show_stats_details(&mut self) {
        self.show_notification("Analytics feature coming soon!", Severity::Info);
    }

    /// Run every task due at the current clock reading, in due order.
    ///
    /// Returns how many tasks fired.
    pub fn run_due_tasks(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(now) {
            self.handle_task(task.at, task.payload);
            fired += 1;
        }
        fired
    }

    /// `at` is the instant the task was due; follow-ups are timed from it.
    fn handle_task(&mut self, at: Instant, task: AppTask) {
        match task {
            AppTask::ExpireNotification(id) => {
                self.dismiss_notification(id);
            }
            AppTask::ProgressTick => {
                let increment = self.rng.float_in(
                    self.config.progress.min_increment,
                    self.config.progress.max_increment,
                );
                if self.progress.tick(increment) == TickOutcome::Completed {
                    let hold = self.scheduler.schedule_once(
                        at,
                        self.config.progress.completion_hold(),
                        AppTask::ProgressFinish,
                    );
                    self.progress.attach_hold(hold);
                }
                self.dirty = true;
            }
            AppTask::ProgressFinish => {
                if self.progress.finish() {
                    self.dirty = true;
                }
            }
            AppTask::StartLoading(message) => {
                self.start_loading_at(at, &message);
            }
            AppTask::Notify { message, severity } => {
                self.notify_at(at, &message, severity);
            }
            AppTask::RefreshStats => {
                self.stats.refresh(self.rng.as_mut());
                log::debug!("Stats refreshed: {:?}", self.stats);
                self.dirty = true;
            }
        }
    }

    /// Cancel every pending task
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
        self.progress.cancel();
        self.notifications.clear();
    }
}

#[cfg(test)]
#[path = "app_actions_tests.rs"]
mod app_actions_tests;
