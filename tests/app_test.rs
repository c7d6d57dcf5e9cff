// Playback state and rendering of the terminal UI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use sortty::algorithms::Algorithm;
use sortty::config::Config;
use sortty::ui::panes::bars::{bar_layout, BarRole};
use sortty::ui::App;
use std::time::{Duration, Instant};

fn app_with(algorithm: Algorithm, values: &[i64]) -> App {
    App::new(Config {
        algorithm,
        values: Some(values.to_vec()),
        seed: Some(1),
        ..Config::default()
    })
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen_text(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_frame_zero_is_the_input() {
    let app = app_with(Algorithm::Bubble, &[3, 1, 2]);

    assert_eq!(app.total_frames(), 4);
    let view = app.current_frame();
    assert_eq!(view.values, &[3, 1, 2]);
    assert_eq!(view.primary, None);
    assert!(app.current_step().is_none());
}

#[test]
fn test_stepping_through_history() {
    let mut app = app_with(Algorithm::Selection, &[5, 3, 4]);

    press(&mut app, KeyCode::Right);
    assert!(!app.is_playing);
    let view = app.current_frame();
    assert_eq!(view.values, &[3, 5, 4]);
    assert_eq!((view.primary, view.secondary), (Some(0), Some(1)));

    press(&mut app, KeyCode::Enter);
    assert!(app.is_at_end());
    assert_eq!(app.current_frame().values, &[3, 4, 5]);
    assert!(!app.step_forward());

    press(&mut app, KeyCode::Left);
    assert_eq!(app.position, 2);

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.position, 0);
    assert!(!app.step_backward());
}

#[test]
fn test_tick_respects_interval() {
    let mut app = app_with(Algorithm::Insertion, &[3, 1, 2]);
    assert!(app.is_playing);

    let start = app.last_play_time;
    app.tick(start + Duration::from_millis(100));
    assert_eq!(app.position, 0);

    let mut now = start;
    for expected in 1..=2 {
        now += app.config.interval;
        app.tick(now);
        assert_eq!(app.position, expected);
    }

    now += app.config.interval;
    app.tick(now);
    assert!(!app.is_playing);
    assert_eq!(app.status_message, "Playback complete");
}

#[test]
fn test_paused_app_does_not_advance() {
    let mut app = app_with(Algorithm::Bubble, &[2, 1]);
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.is_playing);
    app.tick(Instant::now() + Duration::from_secs(10));
    assert_eq!(app.position, 0);
}

#[test]
fn test_invalid_input_is_reported_not_played() {
    let app = app_with(Algorithm::Bucket, &[4, 1, 3]);

    assert!(app.history.is_err());
    assert!(!app.is_playing);
    assert_eq!(app.total_frames(), 1);
    assert!(app.status_message.contains("bucket_sort"));
    assert_eq!(app.current_frame().values, &[4, 1, 3]);

    let text = screen_text(&app, 100, 12);
    assert!(text.contains("at least 5 required"));
}

#[test]
fn test_restart_generates_new_input_for_selected_algorithm() {
    let mut app = app_with(Algorithm::Bucket, &[4, 1, 3]);
    press(&mut app, KeyCode::Char('r'));

    assert_eq!(app.algorithm, Algorithm::Bucket);
    assert_eq!(app.input.len(), app.config.array_size);
    assert!(app.history.is_ok());
    assert_eq!(app.total_frames(), 2);
    assert_eq!(app.position, 0);
    assert!(app.is_playing);
}

#[test]
fn test_restart_after_explicit_values_uses_size_and_range() {
    let config = Config::from_args(["--values", "3,1,2", "--min", "10", "--max", "20", "--seed", "3"])
        .unwrap();
    let mut app = App::new(config);
    assert_eq!(app.input, vec![3, 1, 2]);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.input.len(), app.config.array_size);
    assert!(app.input.iter().all(|v| (10..=20).contains(v)));
}

#[test]
fn test_oversized_values_are_reported() {
    let app = app_with(Algorithm::Counting, &[0, i64::MAX]);
    assert!(app.history.is_err());
    assert!(app.status_message.contains("exceeds the limit"));
}

#[test]
fn test_run_without_steps_does_not_play() {
    let app = app_with(Algorithm::Radix, &[0, 0, 0]);
    assert!(app.history.as_ref().unwrap().is_empty());
    assert!(!app.is_playing);
    assert_eq!(app.total_frames(), 1);
    assert!(app.status_message.contains("no steps"));
}

#[test]
fn test_switching_algorithm_keeps_input() {
    let mut app = app_with(Algorithm::Bubble, &[3, 1, 2]);
    press(&mut app, KeyCode::Right);

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.algorithm, Algorithm::Selection);
    assert_eq!(app.input, vec![3, 1, 2]);
    assert_eq!(app.position, 0);

    press(&mut app, KeyCode::Char('A'));
    assert_eq!(app.algorithm, Algorithm::Bubble);
}

#[test]
fn test_quit_key() {
    let mut app = app_with(Algorithm::Heap, &[1, 2]);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_render_shows_title_and_legend() {
    let mut app = app_with(Algorithm::Selection, &[5, 3, 4]);
    press(&mut app, KeyCode::Right);

    let text = screen_text(&app, 100, 16);
    assert!(text.contains("Sorting Visualization for: selection_sort"));
    assert!(text.contains("Minimum Index"));
    assert!(text.contains("Step 1/3"));
}

#[test]
fn test_render_marks_quick_sort_sub_arrays() {
    let mut app = app_with(Algorithm::Quick, &[3, 1, 2]);
    // Second step is the pivot group [1]
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.current_frame().values, &[1]);

    let text = screen_text(&app, 100, 16);
    assert!(text.contains("(sub-array: 1 of 3)"));
}

#[test]
fn test_bar_roles_and_layout() {
    let mut app = app_with(Algorithm::Selection, &[5, 3, 4]);
    press(&mut app, KeyCode::Right);
    let view = app.current_frame();
    assert_eq!(BarRole::of(0, &view), BarRole::Primary);
    assert_eq!(BarRole::of(1, &view), BarRole::Secondary);
    assert_eq!(BarRole::of(2, &view), BarRole::Plain);

    assert_eq!(bar_layout(30, 3), (9, 1));
    assert_eq!(bar_layout(5, 10), (1, 0));
    assert_eq!(bar_layout(10, 0), (1, 0));
    // Counts beyond u16 neither wrap nor overflow
    assert_eq!(bar_layout(100, 70_000), (1, 0));
    assert_eq!(bar_layout(u16::MAX, 40_000).0, 1);
}
