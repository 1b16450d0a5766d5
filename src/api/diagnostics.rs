//! Host log and fatal-error reporting

use super::{status, to_c};
use crate::errors::ApiError;
use crate::ffi::host::host;

/// Host log priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i32)]
pub enum LogLevel {
    Debug = 0,
    Info = 10,
    InfoSuccess = 11,
    InfoReceive = 12,
    InfoSend = 13,
    Warning = 20,
    Error = 30,
    Fatal = 40,
}

/// Emit a line into the host's log window under the given tag.
pub fn add_log(level: LogLevel, tag: &str, content: &str) -> Result<(), ApiError> {
    let host = host()?;
    let tag = to_c(tag)?;
    let content = to_c(content)?;
    status(unsafe {
        (host.table.add_log)(host.auth_code, level as i32, tag.as_ptr(), content.as_ptr())
    })?;
    Ok(())
}

/// Report an unrecoverable error; the host disables the plugin.
pub fn set_fatal(message: &str) -> Result<(), ApiError> {
    let host = host()?;
    let message = to_c(message)?;
    status(unsafe { (host.table.set_fatal)(host.auth_code, message.as_ptr()) })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_match_host_scale() {
        assert_eq!(LogLevel::Debug as i32, 0);
        assert_eq!(LogLevel::Info as i32, 10);
        assert_eq!(LogLevel::InfoSuccess as i32, 11);
        assert_eq!(LogLevel::InfoReceive as i32, 12);
        assert_eq!(LogLevel::InfoSend as i32, 13);
        assert_eq!(LogLevel::Warning as i32, 20);
        assert_eq!(LogLevel::Error as i32, 30);
        assert_eq!(LogLevel::Fatal as i32, 40);
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warning < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }
}
