//! Error handling and exit codes.

use thiserror::Error;

use dutydraw_core::constants::exit_codes;
use dutydraw_core::error::{DrawError, LoadError};

/// Errors raised by the binary itself.
#[derive(Debug, Error)]
pub enum AppError {
    /// The flags do not describe something runnable.
    #[error("{0}")]
    Config(String),

    /// The terminal UI failed.
    #[error("TUI error: {0}")]
    Tui(#[from] std::io::Error),
}

/// Exit code for a draw or assignment error.
pub fn handle_error(err: &DrawError) -> i32 {
    match err {
        DrawError::Load(_) => exit_codes::ERROR_LOAD,
        DrawError::UnknownPeriod(_) | DrawError::Assign(_) => exit_codes::ERROR_CONFIG,
        DrawError::Write { .. } => exit_codes::ERROR_GENERIC,
        DrawError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(draw) = err.downcast_ref::<DrawError>() {
        return handle_error(draw);
    }
    if err.downcast_ref::<LoadError>().is_some() {
        return exit_codes::ERROR_LOAD;
    }
    match err.downcast_ref::<AppError>() {
        Some(AppError::Config(_)) => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&DrawError::Cancelled), 130);
        assert_eq!(handle_error(&DrawError::Load(LoadError::Empty)), 2);
        assert_eq!(handle_error(&DrawError::UnknownPeriod("P9".into())), 4);
        assert_eq!(handle_error(&DrawError::Assign("bad".into())), 4);
    }

    #[test]
    fn anyhow_errors_are_downcast() {
        let err = anyhow::Error::new(LoadError::Empty);
        assert_eq!(exit_code(&err), 2);

        let err = anyhow::Error::new(DrawError::UnknownPeriod("P9".into()));
        assert_eq!(exit_code(&err), 4);

        let err = anyhow::Error::new(AppError::Config("no period".into()));
        assert_eq!(exit_code(&err), 4);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn context_does_not_hide_the_cause() {
        let err = anyhow::Error::new(DrawError::Cancelled).context("drawing P1");
        assert_eq!(exit_code(&err), 130);
    }
}
