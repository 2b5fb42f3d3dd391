//! Main TUI application state and logic

use crate::algorithms::problems::AlgorithmRun;
use crate::config::Config;
use crate::playback::Playback;
use crate::ui::panes::{self, TraceScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::warn;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    State,
    Trace,
}

impl FocusedPane {
    /// Move focus to the other scrollable pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::State => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::State,
        }
    }
}

/// The main application state
pub struct App {
    /// The run being played. Its snapshots live in `playback`.
    pub run: AlgorithmRun,

    /// Cursor over the run's trace
    pub playback: Playback,

    pub config: Config,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub state_scroll: usize,
    pub trace_scroll: TraceScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app positioned at the first step of `run`
    pub fn new(mut run: AlgorithmRun, config: Config) -> Self {
        let playback = Playback::new(std::mem::take(&mut run.snapshots));
        App {
            run,
            playback,
            config,
            focused_pane: FocusedPane::Trace,
            state_scroll: 0,
            trace_scroll: TraceScrollState {
                offset: 0,
                follow: true,
            },
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= self.config.autoplay_interval {
                self.autoplay_tick();
                self.last_play_time = Instant::now();
            }

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

    /// Header naming the problem and approach being played
    pub fn title(&self) -> String {
        match self.run.approach {
            Some(approach) => format!("{} ({})", self.run.problem.title(), approach),
            None => self.run.problem.title().to_string(),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Step (top) | State (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(columns[0]);

        let title = self.title();
        let (cursor, current) = self.playback.position();

        panes::render_step_pane(frame, left_rows[0], &title, current);

        panes::render_state_pane(
            frame,
            left_rows[1],
            current,
            self.focused_pane == FocusedPane::State,
            &mut self.state_scroll,
        );

        panes::render_trace_pane(
            frame,
            columns[1],
            self.playback.snapshots(),
            cursor,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        // Render status bar
        panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            cursor,
            self.playback.len(),
            self.is_playing,
            self.run.problem.approaches().len() > 1,
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.playback.next() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.after_move();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_sub(1);
                }
                FocusedPane::Trace => {
                    self.trace_scroll.follow = false;
                    self.trace_scroll.offset = self.trace_scroll.offset.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::State => {
                    self.state_scroll = self.state_scroll.saturating_add(1);
                }
                FocusedPane::Trace => {
                    self.trace_scroll.follow = false;
                    self.trace_scroll.offset = self.trace_scroll.offset.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_autoplay();
                }
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                self.is_playing = false;
                self.switch_approach();
            }
            KeyCode::Enter => {
                // Jump to end of execution
                self.is_playing = false;
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.after_move();
            }
            KeyCode::Backspace => {
                // Jump to start of execution
                self.is_playing = false;
                self.playback.rewind();
                self.status_message = "Jumped to start".to_string();
                self.after_move();
            }
            _ => {}
        }
    }

    fn toggle_autoplay(&mut self) {
        self.is_playing = !self.is_playing;
        if self.is_playing {
            // Playing from the end starts over
            if self.playback.is_at_end() {
                self.playback.rewind();
                self.after_move();
            }
            self.last_play_time = Instant::now()
                .checked_sub(self.config.autoplay_interval)
                .unwrap_or(Instant::now());
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    /// Advance one step while playing; stops at the end of the trace
    pub(crate) fn autoplay_tick(&mut self) {
        if self.playback.next() {
            self.status_message = "Playing...".to_string();
            self.after_move();
        } else {
            self.is_playing = false;
            self.status_message = "Playback complete".to_string();
        }
    }

    /// Re-run the same input with the problem's next approach
    fn switch_approach(&mut self) {
        let Some(next) = self.run.next_approach() else {
            self.status_message = format!("{} has a single approach", self.run.problem.title());
            return;
        };

        match self.run.rerun_with(next) {
            Ok(run) => {
                self.load(run);
                self.status_message = format!("Switched to {}", next);
            }
            Err(e) => {
                warn!("could not switch to {}: {}", next, e);
                self.status_message = format!("Cannot switch approach: {}", e);
            }
        }
    }

    /// Replace the current run; playback starts again from the first step
    pub fn load(&mut self, mut run: AlgorithmRun) {
        self.playback.load(std::mem::take(&mut run.snapshots));
        self.run = run;
        self.state_scroll = 0;
        self.trace_scroll = TraceScrollState {
            offset: 0,
            follow: true,
        };
    }

    /// Step forward in execution
    fn step_forward(&mut self) {
        if self.playback.next() {
            self.status_message = "Stepped forward".to_string();
            self.after_move();
        } else {
            self.status_message = "Cannot step forward: already at the last step".to_string();
        }
    }

    /// Step backward in execution
    fn step_backward(&mut self) {
        if self.playback.prev() {
            self.status_message = "Stepped backward".to_string();
            self.after_move();
        } else {
            self.status_message = "Cannot step backward: already at the first step".to_string();
        }
    }

    fn after_move(&mut self) {
        self.state_scroll = 0;
        self.trace_scroll.follow = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::problems::{run, Approach, Problem, RunRequest};

    fn app(problem: Problem) -> App {
        let run = run(RunRequest::sample(problem)).expect("sample runs");
        App::new(run, Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::from(code));
    }

    #[test]
    fn test_arrows_move_cursor() {
        let mut app = app(Problem::SumList);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.playback.cursor(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.cursor(), 1);
    }

    #[test]
    fn test_left_at_start_is_noop() {
        let mut app = app(Problem::SumList);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.cursor(), 0);
        assert!(app.status_message.starts_with("Cannot step backward"));
    }

    #[test]
    fn test_enter_and_backspace_jump() {
        let mut app = app(Problem::ReverseList);
        press(&mut app, KeyCode::Enter);
        assert!(app.playback.is_at_end());
        press(&mut app, KeyCode::Backspace);
        assert!(app.playback.is_at_start());
    }

    #[test]
    fn test_switch_approach_reruns_and_rewinds() {
        let mut app = app(Problem::ReverseList);
        let result = app.run.result.clone();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(app.run.approach, Some(Approach::Recursive));
        assert_eq!(app.run.result, result);
        assert_eq!(app.playback.cursor(), 0);
        assert!(!app.playback.is_empty());
    }

    #[test]
    fn test_switch_on_single_approach_problem() {
        let mut app = app(Problem::MaxPathSum);
        let before = app.playback.len();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.playback.len(), before);
        assert!(app.status_message.ends_with("single approach"));
    }

    #[test]
    fn test_autoplay_stops_at_end() {
        let mut app = app(Problem::Anagrams);
        app.is_playing = true;
        for _ in 0..app.playback.len() {
            app.autoplay_tick();
        }
        assert!(!app.is_playing);
        assert!(app.playback.is_at_end());
        assert_eq!(app.status_message, "Playback complete");
    }
}
