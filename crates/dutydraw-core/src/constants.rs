//! Constants for roster layout and process exit codes.

/// Default location of the roster resource, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/final_result.csv";

/// Field delimiter of the roster resource.
pub const DELIMITER: u8 = b',';

/// Number of leading identity columns (sequence number, display name).
/// Every column after these is a period.
pub const IDENTITY_COLUMNS: usize = 2;

/// UTF-8 byte-order mark. Written by the assigner, stripped by the loader.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The roster could not be loaded.
    pub const ERROR_LOAD: i32 = 2;
    /// Invalid configuration (unknown period, bad assignment plan).
    pub const ERROR_CONFIG: i32 = 4;
    /// Draw cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
