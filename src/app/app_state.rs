use std::time::Instant;

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::form::FormState;
use crate::layout::{LayoutMode, LayoutRegions};
use crate::navigation::{ActionButton, AppTab, Focus, MobileTab, focus_ring};
use crate::notification::{NotificationId, NotificationQueue, Severity};
use crate::progress::ProgressState;
use crate::random::{RandomSource, StdRandom};
use crate::scheduler::Scheduler;
use crate::settings::SettingsState;
use crate::sidebar::SidebarState;
use crate::stats::StatsState;

/// Deferred work, carrying only what the handler needs
#[derive(Debug, Clone, PartialEq)]
pub enum AppTask {
    ExpireNotification(NotificationId),
    ProgressTick,
    ProgressFinish,
    StartLoading(String),
    Notify { message: String, severity: Severity },
    RefreshStats,
}

pub struct App {
    pub notifications: NotificationQueue,
    pub progress: ProgressState,
    pub form: FormState,
    pub stats: StatsState,
    pub sidebar: SidebarState,
    pub settings: SettingsState,
    pub selected_tab: AppTab,
    pub mobile_tab: MobileTab,
    pub selected_action: ActionButton,
    pub dark_mode: bool,
    pub focus: Focus,
    pub layout_mode: LayoutMode,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    pub frame_count: u64,
    pub(super) scheduler: Scheduler<AppTask>,
    pub(super) clock: Box<dyn Clock>,
    pub(super) rng: Box<dyn RandomSource>,
    pub(super) config: Config,
    pub(super) dirty: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_sources(
            config.clone(),
            Box::new(SystemClock),
            Box::new(StdRandom::from_seed(config.progress.seed)),
        )
    }

    /// Build with an explicit time and random source
    pub fn with_sources(
        config: Config,
        clock: Box<dyn Clock>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            notifications: NotificationQueue::new(config.notifications.max_visible),
            progress: ProgressState::new(),
            form: FormState::new(),
            stats: StatsState::default(),
            sidebar: SidebarState::new(),
            settings: SettingsState::new(),
            selected_tab: AppTab::default(),
            mobile_tab: MobileTab::default(),
            selected_action: ActionButton::default(),
            dark_mode: config.appearance.dark_mode,
            focus: Focus::default(),
            layout_mode: LayoutMode::default(),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            frame_count: 0,
            scheduler: Scheduler::new(),
            clock,
            rng,
            config,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Scheduled tasks that have not fired or been cancelled
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Redraw needed. Always true while the overlay animates.
    pub fn should_render(&self) -> bool {
        self.dirty || self.progress.is_active()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Switch layout mode, pulling focus back onto something visible
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.layout_mode != mode {
            log::debug!("Layout mode {:?} -> {:?}", self.layout_mode, mode);
            self.layout_mode = mode;
            self.dirty = true;
        }
        self.ensure_focus_visible();
    }

    pub fn select_mobile_tab(&mut self, tab: MobileTab) {
        self.mobile_tab = tab;
        self.dirty = true;
        self.ensure_focus_visible();
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_previous(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let ring = focus_ring(self.layout_mode, self.mobile_tab);
        let len = ring.len();
        let next = match ring.iter().position(|f| *f == self.focus) {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.focus = ring[next];
        self.dirty = true;
    }

    fn ensure_focus_visible(&mut self) {
        let ring = focus_ring(self.layout_mode, self.mobile_tab);
        if !ring.contains(&self.focus) {
            self.focus = ring[0];
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
