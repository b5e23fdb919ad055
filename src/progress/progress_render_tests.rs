//! Tests for progress_render

use super::*;
use crate::config::RestartPolicy;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_string(state: &ProgressState, width: u16, height: u16) -> (String, Option<Rect>) {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut area = None;
    terminal
        .draw(|f| area = render_overlay(f, state, theme::LIGHT, 0))
        .unwrap();
    (terminal.backend().to_string(), area)
}

#[test]
fn test_idle_renders_nothing() {
    let state = ProgressState::new();
    let (_, area) = render_to_string(&state, 80, 24);
    assert!(area.is_none());
}

#[test]
fn test_active_overlay_shows_title_message_and_percent() {
    let mut state = ProgressState::new();
    state.start("Creating your app...", RestartPolicy::Restart);
    state.tick(0.6);

    let (output, area) = render_to_string(&state, 80, 24);

    let area = area.unwrap();
    assert_eq!(area.width, 46);
    assert!(output.contains(OVERLAY_TITLE));
    assert!(output.contains("Creating your app..."));
    assert!(output.contains("60%"));
}

#[test]
fn test_overlay_is_centered() {
    let mut state = ProgressState::new();
    state.start("x", RestartPolicy::Restart);

    let (_, area) = render_to_string(&state, 80, 25);

    let area = area.unwrap();
    assert_eq!(area.x, 17);
    assert_eq!(area.y, 8);
}

#[test]
fn test_completing_overlay_shows_full_percent() {
    let mut state = ProgressState::new();
    state.start("x", RestartPolicy::Restart);
    state.tick(1.0);

    let (output, area) = render_to_string(&state, 80, 24);

    assert!(area.is_some());
    assert!(output.contains("100%"));
}

#[test]
fn test_tiny_terminal_skips_overlay() {
    let mut state = ProgressState::new();
    state.start("x", RestartPolicy::Restart);

    let (_, area) = render_to_string(&state, 10, 4);

    assert!(area.is_none());
}
