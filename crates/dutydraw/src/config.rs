//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use dutydraw_core::constants::DEFAULT_DATA_PATH;

/// DutyDraw: reveal each student's duty for a period, one at a time.
#[derive(Parser, Debug)]
#[command(name = "dutydraw", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Roster CSV: id, name, then one column per period.
    #[arg(long, default_value = DEFAULT_DATA_PATH, env = "DUTYDRAW_DATA")]
    pub data: PathBuf,

    /// Period to draw.
    #[arg(short, long)]
    pub period: Option<String>,

    /// Reveal at most this many students.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// List the periods in the roster and exit.
    #[arg(long)]
    pub list_periods: bool,

    /// Print the reveals as JSON.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print each reveal at once instead of spinning.
    #[arg(long)]
    pub no_animation: bool,

    /// Launch interactive TUI.
    #[arg(long, conflicts_with_all = ["json", "list_periods", "assign"])]
    pub tui: bool,

    /// Assign departments for these periods (comma-separated) and write the result.
    #[arg(long, value_delimiter = ',')]
    pub assign: Vec<String>,

    /// Departments to assign from (comma-separated). Defaults to every value in the roster.
    #[arg(long, value_delimiter = ',', requires = "assign")]
    pub departments: Vec<String>,

    /// Where `--assign` writes its result [default: data/final_result.csv].
    #[arg(short, long, requires = "assign")]
    pub output: Option<PathBuf>,

    /// Seed for shuffles and tie-breaks.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether this run assigns duties rather than drawing.
    #[must_use]
    pub fn is_assign(&self) -> bool {
        !self.assign.is_empty()
    }

    /// Destination of `--assign`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("dutydraw").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.data, PathBuf::from(DEFAULT_DATA_PATH));
        assert!(config.period.is_none());
        assert!(config.count.is_none());
        assert!(!config.tui);
        assert!(!config.is_assign());
        assert_eq!(config.output_path(), PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn period_and_count() {
        let config = parse(&["--period", "P1", "-n", "3", "--no-animation"]);
        assert_eq!(config.period.as_deref(), Some("P1"));
        assert_eq!(config.count, Some(3));
        assert!(config.no_animation);
    }

    #[test]
    fn assign_lists_split_on_commas() {
        let config = parse(&["--assign", "P3,P4", "--departments", "Lab,Desk", "-o", "out.csv"]);
        assert_eq!(config.assign, ["P3", "P4"]);
        assert_eq!(config.departments, ["Lab", "Desk"]);
        assert_eq!(config.output_path(), PathBuf::from("out.csv"));
        assert!(config.is_assign());
    }

    #[test]
    fn departments_require_assign() {
        let result = AppConfig::try_parse_from(["dutydraw", "--departments", "Lab"]);
        assert!(result.is_err());
    }

    #[test]
    fn json_conflicts_with_quiet() {
        let result = AppConfig::try_parse_from(["dutydraw", "--json", "--quiet"]);
        assert!(result.is_err());
    }

    #[test]
    fn tui_conflicts_with_json() {
        let result = AppConfig::try_parse_from(["dutydraw", "--tui", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn completion_shell() {
        let config = parse(&["--completion", "bash"]);
        assert_eq!(config.completion, Some(clap_complete::Shell::Bash));
    }

    #[test]
    fn command_is_well_formed() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
