//! CLI reveal presenter.
//!
//! In animated mode every reveal gets its own spinner line, driven by its own
//! thread: the slot walks the shuffled filler with the same easing as the TUI
//! and lands on the final value after the reveal delay. `present` returns as
//! soon as the spinner is started; `wait` joins the ones still running.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use console::style;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use dutydraw_core::filler::build_filler;
use dutydraw_orchestration::animation::spin_frame;
use dutydraw_orchestration::interfaces::{RevealPresenter, RevealRequest};
use dutydraw_orchestration::timeline::REVEAL_DELAY;

use crate::output::{format_reveal, format_value};

/// Spinner repaint interval.
const FRAME_INTERVAL: Duration = Duration::from_millis(40);

/// How reveals are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStyle {
    /// Spinner per reveal.
    Animated,
    /// One line per reveal, immediately.
    Plain,
    /// Only the value.
    Quiet,
    /// Nothing until the caller writes the collected reveals.
    Json,
}

/// CLI reveal presenter.
pub struct CliRevealPresenter {
    style: RevealStyle,
    universe: Vec<String>,
    rng: StdRng,
    multi: MultiProgress,
    spinners: Vec<JoinHandle<()>>,
    revealed: Vec<RevealRequest>,
}

impl CliRevealPresenter {
    #[must_use]
    pub fn new(style: RevealStyle, universe: Vec<String>) -> Self {
        Self::with_rng(style, universe, StdRng::from_entropy())
    }

    /// Presenter whose spinner filler is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(style: RevealStyle, universe: Vec<String>, seed: u64) -> Self {
        Self::with_rng(style, universe, StdRng::seed_from_u64(seed))
    }

    fn with_rng(style: RevealStyle, universe: Vec<String>, rng: StdRng) -> Self {
        Self {
            style,
            universe,
            rng,
            multi: MultiProgress::new(),
            spinners: Vec::new(),
            revealed: Vec::new(),
        }
    }

    #[must_use]
    pub fn style(&self) -> RevealStyle {
        self.style
    }

    /// Reveals presented since the last clear.
    #[must_use]
    pub fn revealed(&self) -> &[RevealRequest] {
        &self.revealed
    }

    /// Block until every running spinner has landed.
    pub fn wait(&mut self) {
        for handle in self.spinners.drain(..) {
            if handle.join().is_err() {
                warn!("reveal spinner thread panicked");
            }
        }
    }

    fn next_filler(&mut self) -> Vec<String> {
        build_filler(&self.universe, &mut self.rng)
    }

    fn spawn_spinner(&mut self, request: &RevealRequest) {
        let filler = self.next_filler();
        let bar = self.multi.add(ProgressBar::new_spinner());
        bar.set_style(
            ProgressStyle::with_template("{prefix:.bold} → {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_prefix(request.label.clone());

        let value = format_value(request.value.as_deref()).to_string();
        let handle = thread::spawn(move || {
            let start = Instant::now();
            loop {
                let elapsed = start.elapsed();
                if elapsed >= REVEAL_DELAY {
                    break;
                }
                if let Some(i) = spin_frame(elapsed, filler.len()) {
                    bar.set_message(filler[i].clone());
                }
                thread::sleep(FRAME_INTERVAL);
            }
            bar.finish_with_message(style(value).green().bold().to_string());
        });
        self.spinners.push(handle);
    }
}

impl RevealPresenter for CliRevealPresenter {
    fn present(&mut self, request: &RevealRequest) {
        match self.style {
            RevealStyle::Animated => self.spawn_spinner(request),
            RevealStyle::Plain => println!("{}", format_reveal(request)),
            RevealStyle::Quiet => println!("{}", format_value(request.value.as_deref())),
            RevealStyle::Json => {}
        }
        self.revealed.push(request.clone());
    }

    fn clear(&mut self) {
        self.wait();
        self.revealed.clear();
    }
}

impl Drop for CliRevealPresenter {
    fn drop(&mut self) {
        self.wait();
    }
}
