//! Application entry point and dispatch.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use dutydraw_cli::output::{format_period_list, write_json, DrawReport};
use dutydraw_cli::presenter::{CliRevealPresenter, RevealStyle};
use dutydraw_cli::ui::{is_interactive, print_header, print_success, print_warning};
use dutydraw_core::assign::{assign_duties, AssignmentPlan, AssignmentTable};
use dutydraw_core::cancel::CancellationToken;
use dutydraw_core::dataset::Dataset;
use dutydraw_core::registry::PeriodRegistry;
use dutydraw_core::sequencer::TriggerLabel;
use dutydraw_core::session::DrawSession;
use dutydraw_orchestration::controller::{DrawController, TriggerOutcome};
use dutydraw_orchestration::interfaces::RevealRequest;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        write_completion(shell, &mut io::stdout());
        return Ok(());
    }

    // Handle TUI mode; it loads the roster itself
    if config.tui {
        return run_tui(config);
    }

    let dataset = Arc::new(Dataset::load(&config.data)?);

    if config.is_assign() {
        return run_assign(config, &dataset);
    }

    if config.list_periods {
        return run_list(config, &dataset);
    }

    // CLI mode
    run_cli(config, dataset)
}

/// Reveal style for the flags and the attached terminal.
pub fn reveal_style(config: &AppConfig, interactive: bool) -> RevealStyle {
    if config.json {
        RevealStyle::Json
    } else if config.quiet {
        RevealStyle::Quiet
    } else if config.no_animation || !interactive {
        RevealStyle::Plain
    } else {
        RevealStyle::Animated
    }
}

fn write_completion(shell: clap_complete::Shell, out: &mut dyn Write) {
    let mut cmd = <AppConfig as clap::CommandFactory>::command();
    dutydraw_cli::completion::generate_completion(&mut cmd, shell, out);
}

/// Header line of a verbose draw.
fn draw_banner(config: &AppConfig, period: &str) -> String {
    format!("{} | {} | {period}", full_version(), config.data.display())
}

fn run_list(config: &AppConfig, dataset: &Dataset) -> Result<()> {
    let mut out = io::stdout().lock();
    if config.json {
        serde_json::to_writer_pretty(&mut out, dataset.periods())?;
        writeln!(out)?;
    } else {
        let registry = PeriodRegistry::from_columns(dataset.columns());
        write!(out, "{}", format_period_list(&registry))?;
    }
    Ok(())
}

fn run_cli(config: &AppConfig, dataset: Arc<Dataset>) -> Result<()> {
    let Some(period) = config.period.as_deref() else {
        let available = dataset.periods().join(", ");
        return Err(AppError::Config(format!(
            "no period selected; pass --period (available: {available})"
        ))
        .into());
    };

    let style = reveal_style(config, is_interactive());
    let universe = dataset.universe().to_vec();
    let presenter = match config.seed {
        Some(seed) => CliRevealPresenter::with_seed(style, universe, seed),
        None => CliRevealPresenter::new(style, universe),
    };
    let mut controller = DrawController::new(DrawSession::new(Arc::clone(&dataset)), presenter);
    controller.select_period(period)?;

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;

    let chatty = matches!(style, RevealStyle::Animated | RevealStyle::Plain);
    if chatty && config.verbose {
        print_header(&draw_banner(config, period));
    }
    if dataset.is_empty() && !config.json {
        print_warning("roster has no students");
    }

    let revealed = if style == RevealStyle::Animated {
        draw_one_by_one(&mut controller, &cancel, config.count)?
    } else {
        controller.run_to_end(&cancel, config.count)?
    };

    let complete = controller.session().label() == TriggerLabel::Complete;
    info!(period, revealed = revealed.len(), complete, "draw finished");

    if config.json {
        let report = DrawReport {
            period,
            total: dataset.len(),
            complete,
            revealed: &revealed,
        };
        write_json(&mut io::stdout().lock(), &report)?;
    } else if chatty {
        if complete {
            print_success(TriggerLabel::Complete.text());
        } else if !dataset.is_empty() {
            print_success(&format!(
                "{} of {} revealed, {} left",
                controller.session().cursor(),
                dataset.len(),
                controller.session().remaining()
            ));
        }
    }
    Ok(())
}

/// Trigger one reveal at a time, letting each spinner land before the next.
fn draw_one_by_one(
    controller: &mut DrawController<CliRevealPresenter>,
    cancel: &CancellationToken,
    limit: Option<usize>,
) -> Result<Vec<RevealRequest>> {
    let mut revealed = Vec::new();
    while limit.map_or(true, |max| revealed.len() < max) {
        cancel.check_cancelled()?;
        match controller.trigger() {
            TriggerOutcome::Revealed(request) => {
                controller.presenter_mut().wait();
                revealed.push(request);
            }
            TriggerOutcome::Ignored(_) => break,
        }
    }
    Ok(revealed)
}

fn run_assign(config: &AppConfig, dataset: &Dataset) -> Result<()> {
    let mut table = AssignmentTable::from_dataset(dataset);
    let mut plan = AssignmentPlan::for_dataset(dataset, config.assign.clone());
    if !config.departments.is_empty() {
        plan.departments.clone_from(&config.departments);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = assign_duties(&mut table, &plan, &mut rng)?;

    let output = config.output_path();
    table.write_to_path(&output)?;
    info!(assigned = report.assigned, forced = report.forced_repeats.len(), "duties assigned");

    if !config.quiet {
        for repeat in &report.forced_repeats {
            print_warning(&format!(
                "{}: {} repeats {}",
                repeat.period, repeat.student, repeat.department
            ));
        }
        print_success(&format!(
            "assigned {} cell(s) for {} -> {}",
            report.assigned,
            config.assign.join(", "),
            output.display()
        ));
    }
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded::<dutydraw_tui::TuiMessage>();

    let mut app = dutydraw_tui::TuiApp::new(rx, config.data.display().to_string());
    if let Some(seed) = config.seed {
        app = app.with_seed(seed);
    }

    // Load in the background so the first frame is not blocked on I/O
    let _loader = dutydraw_tui::spawn_loader(config.data.clone(), tx);

    // Run TUI event loop on the main thread
    app.run().map_err(AppError::Tui)?;
    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("failed to install Ctrl+C handler")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("dutydraw").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn style_follows_flags() {
        assert_eq!(reveal_style(&config(&["--json"]), true), RevealStyle::Json);
        assert_eq!(reveal_style(&config(&["-q"]), true), RevealStyle::Quiet);
        assert_eq!(
            reveal_style(&config(&["--no-animation"]), true),
            RevealStyle::Plain
        );
        assert_eq!(reveal_style(&config(&[]), true), RevealStyle::Animated);
    }

    #[test]
    fn non_terminal_output_is_plain() {
        assert_eq!(reveal_style(&config(&[]), false), RevealStyle::Plain);
    }

    #[test]
    fn completion_covers_draw_and_assign_flags() {
        let mut buf = Vec::new();
        write_completion(clap_complete::Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        for flag in ["--data", "--period", "--list-periods", "--assign", "--seed", "--tui"] {
            assert!(script.contains(flag), "missing {flag}");
        }
    }

    #[test]
    fn verbose_banner_names_version_roster_and_period() {
        let banner = draw_banner(&config(&["--data", "class.csv"]), "7-8월");
        assert_eq!(
            banner,
            format!("dutydraw {} | class.csv | 7-8월", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn missing_period_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        std::fs::write(&path, "id,name,P1\n1,Alice,X\n").unwrap();

        let path_arg = path.to_str().unwrap();
        let err = run(&config(&["--data", path_arg])).unwrap_err();
        assert_eq!(crate::errors::exit_code(&err), 4);
        assert!(err.to_string().contains("P1"));
    }

    #[test]
    fn assign_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("result.csv");
        let output = dir.path().join("final.csv");
        std::fs::write(&input, "id,name,P1\n1,Alice,X\n2,Bob,Y\n").unwrap();

        let args = [
            "--data",
            input.to_str().unwrap(),
            "--assign",
            "P2",
            "--output",
            output.to_str().unwrap(),
            "--seed",
            "3",
            "-q",
        ];
        run(&config(&args)).unwrap();

        let written = Dataset::load(&output).unwrap();
        assert_eq!(written.periods(), ["P1", "P2"]);
        // Each student gets the department they have not held yet.
        assert_eq!(written.record(0).unwrap().get("P2"), Some("Y"));
        assert_eq!(written.record(1).unwrap().get("P2"), Some("X"));
    }
}
