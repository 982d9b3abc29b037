//! TUI application model (Elm architecture).

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::{debug, info};

use dutydraw_core::dataset::Dataset;
use dutydraw_core::sequencer::{IgnoredReason, TriggerLabel};
use dutydraw_core::session::DrawSession;
use dutydraw_orchestration::board::ResultsBoard;
use dutydraw_orchestration::controller::{DrawController, TriggerOutcome};

use crate::board::{render_board, render_notice};
use crate::footer::render_footer;
use crate::header::{render_header, HeaderInfo};
use crate::keymap::{map_key, KeyAction};
use crate::logs::render_logs;
use crate::messages::TuiMessage;
use crate::periods::render_periods;
use crate::scroll::ScrollState;

/// Frame interval; short enough for the spin to look continuous.
const TICK_RATE: Duration = Duration::from_millis(40);

/// Retained activity log entries.
const MAX_LOGS: usize = 500;

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Roster loading progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// Loading failed; the board shows this message instead of results.
    Failed(String),
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    pub status: LoadStatus,
    /// Roster source shown in the header.
    pub source: String,
    controller: Option<DrawController<ResultsBoard>>,
    /// Cursor row in the period list.
    pub highlighted: usize,
    /// Board viewport.
    pub scroll: ScrollState,
    /// Activity log.
    pub logs: Vec<String>,
    pub show_logs: bool,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    seed: Option<u64>,
}

impl TuiApp {
    /// Create a new TUI app waiting for a roster on `rx`.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>, source: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            status: LoadStatus::Loading,
            source: source.into(),
            controller: None,
            highlighted: 0,
            scroll: ScrollState::new(),
            logs: Vec::new(),
            show_logs: true,
            rx,
            terminal_width: 80,
            terminal_height: 24,
            seed: None,
        }
    }

    /// Use a fixed seed for filler shuffles.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn controller(&self) -> Option<&DrawController<ResultsBoard>> {
        self.controller.as_ref()
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Loaded(dataset) => self.on_loaded(dataset),
            TuiMessage::LoadFailed(err) => {
                self.push_log(format!("[ERROR] {err}"));
                self.status = LoadStatus::Failed(err);
            }
            TuiMessage::Log(msg) => self.push_log(msg),
            TuiMessage::Tick => self.tick(Instant::now()),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
        }
    }

    fn on_loaded(&mut self, dataset: Arc<Dataset>) {
        let universe = dataset.universe().to_vec();
        let board = match self.seed {
            Some(seed) => ResultsBoard::with_seed(universe, seed),
            None => ResultsBoard::new(universe),
        };
        let students = dataset.len();
        let periods = dataset.periods().len();
        self.controller = Some(DrawController::new(DrawSession::new(dataset), board));
        self.status = LoadStatus::Ready;
        self.highlighted = 0;
        self.scroll.reset();
        info!(students, periods, "roster ready");
        if periods == 0 {
            self.push_log("[WARN] roster has no periods".to_string());
        } else {
            self.push_log(format!("Loaded {students} students, {periods} periods"));
        }
    }

    fn push_log(&mut self, msg: String) {
        self.logs.push(msg);
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
        }
    }

    /// Fire reveal timers due at `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(controller) = self.controller.as_mut() {
            let fired = controller.presenter_mut().advance(now);
            if fired > 0 {
                debug!(fired, "reveal timers fired");
            }
        }
    }

    fn period_count(&self) -> usize {
        self.controller
            .as_ref()
            .map_or(0, |c| c.session().registry().len())
    }

    fn board_len(&self) -> usize {
        self.controller
            .as_ref()
            .map_or(0, |c| c.presenter().len())
    }

    /// Rows available to the board at the current terminal size.
    fn board_height(&self) -> usize {
        let area = Rect::new(0, 0, self.terminal_width, self.terminal_height);
        let (_, _, board, _, _) = Self::compute_layout(area, self.show_logs);
        board.height.saturating_sub(2) as usize
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        let total = self.board_len();
        let height = self.board_height();
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::PrevPeriod => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }
            KeyAction::NextPeriod => {
                let last = self.period_count().saturating_sub(1);
                self.highlighted = (self.highlighted + 1).min(last);
            }
            KeyAction::SelectPeriod => self.select_highlighted(),
            KeyAction::Trigger => self.trigger(),
            KeyAction::ScrollUp => self.scroll.scroll_up(total, height),
            KeyAction::ScrollDown => self.scroll.scroll_down(total, height),
            KeyAction::PageUp => self.scroll.page_up(PAGE_SIZE, total, height),
            KeyAction::PageDown => self.scroll.page_down(PAGE_SIZE, total, height),
            KeyAction::Home => self.scroll.home(),
            KeyAction::End => self.scroll.end(),
            KeyAction::ToggleLogs => {
                self.show_logs = !self.show_logs;
            }
            KeyAction::None => {}
        }
    }

    fn select_highlighted(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        match controller.select_index(self.highlighted) {
            Ok(()) => {
                let period = controller
                    .session()
                    .selected_period()
                    .unwrap_or_default()
                    .to_string();
                self.scroll.reset();
                self.push_log(format!("Period {period} selected"));
            }
            Err(err) => self.push_log(format!("[WARN] {err}")),
        }
    }

    fn trigger(&mut self) {
        let Some(controller) = self.controller.as_mut() else {
            self.push_log("[WARN] roster is not loaded".to_string());
            return;
        };
        match controller.trigger() {
            TriggerOutcome::Revealed(request) => {
                let done = controller.session().label() == TriggerLabel::Complete;
                self.scroll.end();
                self.push_log(format!("Drawing {}", request.label));
                if done {
                    self.push_log("All done!".to_string());
                }
            }
            TriggerOutcome::Ignored(IgnoredReason::NoPeriod) => {
                self.push_log("[WARN] select a period first".to_string());
            }
            TriggerOutcome::Ignored(_) => {}
        }
    }

    /// Compute the layout.
    ///
    /// Returns (header, periods, board, logs, footer) rects. `logs` is empty
    /// when the log panel is hidden.
    #[must_use]
    pub fn compute_layout(area: Rect, show_logs: bool) -> (Rect, Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
            .split(outer[1]);

        let (board, logs) = if show_logs {
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(7)])
                .split(main[1]);
            (right[0], right[1])
        } else {
            (main[1], Rect::default())
        };

        (outer[0], main[0], board, logs, outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        self.render_at(frame, Instant::now());
    }

    /// Render the view as of `now`.
    pub fn render_at(&self, frame: &mut ratatui::Frame, now: Instant) {
        let (header_area, periods_area, board_area, logs_area, footer_area) =
            Self::compute_layout(frame.area(), self.show_logs);

        let session = self.controller.as_ref().map(DrawController::session);
        let info = HeaderInfo {
            source: &self.source,
            period: session.and_then(|s| s.selected_period()),
            cursor: session.map_or(0, |s| s.cursor()),
            total: session.map_or(0, |s| s.dataset().len()),
            label: session.map_or(TriggerLabel::Default, |s| s.label()),
        };
        render_header(frame, header_area, &info);

        let periods = session.map_or(&[][..], |s| s.registry().periods());
        let selected = session.and_then(|s| s.selected_index());
        render_periods(frame, periods_area, periods, self.highlighted, selected);

        match (&self.status, self.controller.as_ref()) {
            (LoadStatus::Failed(err), _) => {
                render_notice(frame, board_area, &format!("Could not load roster: {err}"), true);
            }
            (LoadStatus::Ready, Some(controller)) => {
                let units = controller.presenter().units();
                let height = board_area.height.saturating_sub(2) as usize;
                let start = self.scroll.first_visible(units.len(), height);
                render_board(frame, board_area, units, start, now);
            }
            _ => render_notice(frame, board_area, "Loading roster…", false),
        }

        if self.show_logs {
            render_logs(frame, logs_area, &self.logs);
        }

        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update,
    /// tick, render), and tears down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            self.handle_message(TuiMessage::Tick);
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(TICK_RATE)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_message(TuiMessage::KeyPress(map_key(key_event)));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            // Loader results and other background messages
            self.update();
        }
    }
}
