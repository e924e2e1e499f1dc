/// Error code registry for utilkit
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Invocation errors
/// - 3000-3999: Scheduling errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;

    // Invocation errors (2000-2999)
    pub const INVOKE_UNKNOWN_METHOD: u16 = 2001;

    // Scheduling errors (3000-3999)
    pub const SCHEDULE_NO_RUNTIME: u16 = 3001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",
        1005 => "Invalid value in configuration",

        2001 => "Method not registered in method table",

        3001 => "No async runtime available to schedule on",

        _ => "Unknown error code",
    }
}
