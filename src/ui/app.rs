//! Main TUI application state and logic

use crate::playback::player::Player;
use crate::playback::sequence;
use crate::views::report::{render_report, report_filename};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::fs;
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Bars,
    Pseudocode,
    Stats,
    Explain,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: array -> pseudocode -> stats -> explanation)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Bars => FocusedPane::Pseudocode,
            FocusedPane::Pseudocode => FocusedPane::Stats,
            FocusedPane::Stats => FocusedPane::Explain,
            FocusedPane::Explain => FocusedPane::Bars,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Bars => FocusedPane::Explain,
            FocusedPane::Pseudocode => FocusedPane::Bars,
            FocusedPane::Stats => FocusedPane::Pseudocode,
            FocusedPane::Explain => FocusedPane::Stats,
        }
    }
}

/// The main application state
pub struct App {
    /// The playback controller
    pub player: Player,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub explain_scroll: usize,
    pub stats_scroll: usize,

    /// Whether the explanation pane shows the state tree instead
    pub show_tree: bool,

    /// Whether the detailed explanation is expanded
    pub show_detail: bool,

    /// Pending custom-sequence input; `Some` while editing
    pub sequence_input: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around the given playback controller
    pub fn new(player: Player) -> Self {
        App {
            player,
            focused_pane: FocusedPane::Bars,
            explain_scroll: 0,
            stats_scroll: 0,
            show_tree: false,
            show_detail: false,
            sequence_input: None,
            should_quit: false,
            status_message: String::from("Ready!"),
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

            // Advance autoplay; the ticker catches up if the loop lagged
            let advanced = self.player.tick(Instant::now());
            if advanced > 0 {
                self.status_message = if self.player.is_finished() {
                    "Playback complete".to_string()
                } else {
                    "Playing...".to_string()
                };
            }

            // Use poll with timeout so autoplay keeps moving between keys
            if event::poll(Duration::from_millis(16))? {
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
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Array (top) | Explanation (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Pseudocode (top) | Statistics (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let step = self.player.current_step();
        let highlight = self.player.highlight();
        let sorted = self.player.sorted_positions();

        super::panes::render_bars_pane(
            frame,
            left_rows[0],
            super::panes::BarsRenderData {
                values: self.player.array(),
                highlight: highlight.as_ref(),
                sorted: &sorted,
            },
            self.focused_pane == FocusedPane::Bars,
        );

        super::panes::render_explain_pane(
            frame,
            left_rows[1],
            super::panes::ExplainRenderData {
                algorithm: self.player.algorithm(),
                cursor: self.player.cursor(),
                step: step.as_ref(),
                show_tree: self.show_tree,
                show_detail: self.show_detail,
            },
            self.focused_pane == FocusedPane::Explain,
            &mut self.explain_scroll,
        );

        super::panes::render_pseudocode_pane(
            frame,
            right_rows[0],
            self.player.algorithm(),
            step.as_ref(),
            self.focused_pane == FocusedPane::Pseudocode,
        );

        super::panes::render_stats_pane(
            frame,
            right_rows[1],
            super::panes::StatsRenderData {
                algorithm: self.player.algorithm(),
                cursor: self.player.cursor(),
                trace_len: self.player.trace_len(),
                array_len: self.player.array().len(),
                stats: self.player.stats(),
            },
            self.focused_pane == FocusedPane::Stats,
            &mut self.stats_scroll,
        );

        // Render status bar
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.player.cursor(),
            self.player.trace_len(),
            self.player.phase(),
            self.sequence_input.as_deref(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.sequence_input.is_some() {
            self.handle_sequence_input(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.player.pause();
                let n = c as usize - '0' as usize;
                let before = self.player.cursor();
                for _ in 0..n {
                    self.player.step_forward();
                }
                let stepped = self.player.cursor() - before;
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.player.pause();
                self.player.step_backward();
                self.status_message = "Stepped backward".to_string();
            }
            KeyCode::Right => {
                self.player.pause();
                self.player.step_forward();
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Explain => {
                    self.explain_scroll = self.explain_scroll.saturating_sub(1);
                }
                FocusedPane::Stats => {
                    self.stats_scroll = self.stats_scroll.saturating_sub(1);
                }
                FocusedPane::Bars | FocusedPane::Pseudocode => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Explain => {
                    self.explain_scroll = self.explain_scroll.saturating_add(1);
                }
                FocusedPane::Stats => {
                    self.stats_scroll = self.stats_scroll.saturating_add(1);
                }
                FocusedPane::Bars | FocusedPane::Pseudocode => {}
            },
            KeyCode::Char(' ') => {
                // Toggle autoplay (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.player.is_running() {
                        self.player.pause();
                        self.status_message = "Paused".to_string();
                    } else {
                        self.player.play();
                        self.status_message = "Playing...".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to the end of the trace
                self.player.pause();
                while self.player.cursor() < self.player.trace_len() {
                    self.player.step_forward();
                }
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                // Jump back to the unsorted array
                self.player.reset();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('a') => {
                let next = self.player.algorithm().next();
                self.player.set_algorithm(next);
                self.status_message = format!("Algorithm: {}", next.name());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let len = self.player.array().len() + 5;
                self.player.set_array_size(len);
                self.status_message = format!("Array size: {}", self.player.array().len());
            }
            KeyCode::Char('-') => {
                let len = self.player.array().len().saturating_sub(5);
                self.player.set_array_size(len);
                self.status_message = format!("Array size: {}", self.player.array().len());
            }
            KeyCode::Char('[') => {
                self.player.set_speed(self.player.speed_ms() + 20);
                self.status_message = format!("Speed: {} ms per step", self.player.speed_ms());
            }
            KeyCode::Char(']') => {
                self.player.set_speed(self.player.speed_ms().saturating_sub(20));
                self.status_message = format!("Speed: {} ms per step", self.player.speed_ms());
            }
            KeyCode::Char('r') => {
                self.player.regenerate();
                self.status_message = "New random sequence".to_string();
            }
            KeyCode::Char('c') => {
                self.sequence_input = Some(String::new());
                self.status_message = "Enter comma-separated numbers".to_string();
            }
            KeyCode::Char('v') => {
                self.show_tree = !self.show_tree;
                self.status_message = if self.show_tree {
                    "State tree view".to_string()
                } else {
                    "Explanation view".to_string()
                };
            }
            KeyCode::Char('d') => {
                self.show_detail = !self.show_detail;
            }
            KeyCode::Char('e') => {
                self.export_report();
            }
            _ => {}
        }
    }

    /// Handle keys while the custom-sequence prompt is open
    fn handle_sequence_input(&mut self, key: KeyEvent) {
        let Some(buffer) = self.sequence_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, ',' | '-' | ' ') => {
                buffer.push(c);
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let values = sequence::parse_sequence(buffer);
                if values.is_empty() {
                    self.status_message = "No numbers in sequence".to_string();
                } else {
                    self.status_message =
                        format!("Custom sequence loaded ({} values)", values.len());
                    self.player.set_custom_sequence(values);
                }
                self.sequence_input = None;
            }
            KeyCode::Esc => {
                self.sequence_input = None;
                self.status_message = "Sequence input cancelled".to_string();
            }
            _ => {}
        }
    }

    /// Write the analysis report next to the current working directory
    fn export_report(&mut self) {
        let filename = report_filename(self.player.algorithm());
        let report = render_report(
            self.player.algorithm(),
            self.player.cursor(),
            self.player.current_step().as_ref(),
        );
        match fs::write(&filename, report) {
            Ok(()) => self.status_message = format!("Report saved to {filename}"),
            Err(err) => self.status_message = format!("Could not write report: {err}"),
        }
    }
}
