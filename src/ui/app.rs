//! Main TUI application state and logic

use crate::algorithms::{Algorithm, SortError};
use crate::config::Config;
use crate::snapshot::{Step, StepHistory};
use crate::ui::theme::ThemeKind;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// What the bar pane shows for the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView<'a> {
    pub values: &'a [i64],
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
}

/// The main application state
///
/// Position 0 is the unsorted input; position `k` shows step `k - 1` of the
/// history.
pub struct App {
    pub config: Config,

    /// Algorithm currently being animated
    pub algorithm: Algorithm,

    /// Unsorted input of the current run
    pub input: Vec<i64>,

    /// Materialized steps, or the error that prevented producing them
    pub history: Result<StepHistory, SortError>,

    /// Current playback position
    pub position: usize,

    pub theme: ThemeKind,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    rng: StdRng,
}

impl App {
    /// Create the app and sort the configured initial input
    pub fn new(config: Config) -> Self {
        let mut rng = config.rng();
        let input = config.initial_array(&mut rng);
        let mut app = App {
            algorithm: config.algorithm,
            theme: config.theme,
            input: Vec::new(),
            history: Ok(StepHistory::new(config.snapshot_limit)),
            position: 0,
            should_quit: false,
            status_message: String::new(),
            is_playing: true,
            last_play_time: Instant::now(),
            rng,
            config,
        };
        app.load(input);
        app
    }

    /// Sort a copy of `input` with the current algorithm and rewind
    pub fn load(&mut self, input: Vec<i64>) {
        let mut working = input.clone();
        self.input = input;
        self.history = self
            .algorithm
            .sort(&mut working)
            .and_then(|steps| StepHistory::collect(steps, self.config.snapshot_limit));
        self.position = 0;
        self.last_play_time = Instant::now();

        match &self.history {
            Ok(history) if history.is_empty() => {
                self.is_playing = false;
                self.status_message = format!("{}: nothing to do, no steps", self.algorithm.name());
            }
            Ok(history) => {
                self.status_message =
                    format!("{}: {} steps", self.algorithm.name(), history.len());
            }
            Err(e) => {
                self.is_playing = false;
                self.status_message = e.to_string();
            }
        }
    }

    /// New random input, fresh step sequence, playback from the start
    pub fn restart(&mut self) {
        let input = self.config.generate_array(&mut self.rng);
        self.is_playing = true;
        self.load(input);
    }

    /// Switch algorithm and re-sort the same input
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.is_playing = true;
        let input = std::mem::take(&mut self.input);
        self.load(input);
    }

    /// Number of frames including the initial input
    pub fn total_frames(&self) -> usize {
        1 + self.history.as_ref().map_or(0, StepHistory::len)
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.total_frames()
    }

    /// The step behind the current position, if any
    pub fn current_step(&self) -> Option<&Step> {
        let history = self.history.as_ref().ok()?;
        self.position.checked_sub(1).and_then(|i| history.get(i))
    }

    pub fn current_frame(&self) -> FrameView<'_> {
        match self.current_step() {
            Some(step) => FrameView {
                values: &step.snapshot,
                primary: step.primary,
                secondary: step.secondary,
            },
            None => FrameView {
                values: &self.input,
                primary: None,
                secondary: None,
            },
        }
    }

    /// Advance one frame; false when already at the end
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.position += 1;
        true
    }

    /// Go back one frame; false when already at the start
    pub fn step_backward(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        true
    }

    pub fn jump_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.total_frames() - 1;
    }

    /// Advance playback if the frame interval has elapsed at `now`
    pub fn tick(&mut self, now: Instant) {
        if !self.is_playing || now.duration_since(self.last_play_time) < self.config.interval {
            return;
        }
        if self.step_forward() {
            self.status_message = "Playing...".to_string();
        } else {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
        self.last_play_time = now;
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn draw(&self, frame: &mut Frame) {
        let theme = self.theme.theme();
        let size = frame.area();

        // Bars on top, legend line, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        let view = self.current_frame();
        let full_len = self.input.len();
        let scale_max = self.input.iter().copied().max().unwrap_or(0).max(0) as u64;
        let error = self.history.as_ref().err();

        super::panes::render_bars_pane(
            frame,
            chunks[0],
            super::panes::BarsRenderData {
                algorithm: self.algorithm,
                view,
                full_len,
                scale_max,
                error,
            },
            theme,
        );

        super::panes::render_legend(frame, chunks[1], self.algorithm, theme);

        super::panes::render_status_bar(
            frame,
            chunks[2],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_frame: self.position,
                total_frames: self.total_frames(),
                is_error: error.is_some(),
                is_playing: self.is_playing,
            },
            theme,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                if self.history.is_err() {
                    return;
                }
                if !self.is_playing && self.is_at_end() {
                    self.jump_to_start();
                }
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    self.last_play_time = Instant::now();
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.status_message = if self.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = if self.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the start".to_string()
                };
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('a') => self.select_algorithm(self.algorithm.next()),
            KeyCode::Char('A') => self.select_algorithm(self.algorithm.prev()),
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.theme = self.theme.toggle();
            }
            _ => {}
        }
    }
}
