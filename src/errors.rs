//! SDK errors

use thiserror::Error;

/// Errors raised while binding the host API table
#[derive(Error, Debug)]
pub enum HostError {
    #[error("failed to open host library: {0}")]
    Library(#[from] libloading::Error),

    #[error("host library is missing symbol: {0}")]
    MissingSymbol(String),

    #[error("host API table is already bound")]
    AlreadyBound,
}

/// Errors raised by host API calls
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("host API table is not bound, Initialize has not run")]
    NotBound,

    #[error("host returned error code {0}")]
    Host(i32),

    #[error("host returned a null response")]
    NullResponse,

    #[error("argument contains an interior NUL byte")]
    InvalidArgument(#[from] std::ffi::NulError),
}

/// Errors raised while reading a plugin manifest or writing app.json
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse manifest: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid version `{0}`, expected `major.minor.patch:sequence`")]
    InvalidVersion(String),

    #[error("unknown permission name: {0}")]
    UnknownAuth(String),

    #[error("failed to encode app.json: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_host_code() {
        let err = ApiError::Host(-23);
        assert_eq!(err.to_string(), "host returned error code -23");
    }

    #[test]
    fn missing_symbol_names_the_symbol() {
        let err = HostError::MissingSymbol("CQ_sendPrivateMsg".into());
        assert!(err.to_string().contains("CQ_sendPrivateMsg"));
    }
}
