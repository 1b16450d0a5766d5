//! Host table binding
//!
//! The host resolves the plugin's exported entry points through the platform
//! loader; the plugin resolves the host's API table here, once, when
//! `Initialize` delivers the auth code. Every safe wrapper threads that auth
//! code through the table's leading `ac` field.

use once_cell::sync::OnceCell;

use super::{HostTable, HOST_LIBRARY, HOST_SYMBOLS};
use crate::errors::{ApiError, HostError};

pub(crate) struct Host {
    pub(crate) table: HostTable,
    pub(crate) auth_code: i32,
    // Keeps the resolved symbols alive; None for installed tables.
    _library: Option<libloading::Library>,
}

static HOST: OnceCell<Host> = OnceCell::new();

/// Resolve and bind the table from the platform host library.
///
/// A table previously supplied through [`install`] wins; the host's auth code
/// is then ignored, since the installer already chose one.
pub(crate) fn bind(auth_code: i32) -> Result<(), HostError> {
    if HOST.get().is_some() {
        return Ok(());
    }
    let library = unsafe { libloading::Library::new(HOST_LIBRARY)? };
    let table = HostTable::resolve(&library)?;
    tracing::debug!(symbols = HOST_SYMBOLS.len(), "host API table resolved");
    HOST.set(Host {
        table,
        auth_code,
        _library: Some(library),
    })
    .map_err(|_| HostError::AlreadyBound)
}

/// Install a caller-supplied table.
///
/// Meant for host emulators and tests; a real plugin never calls this. Fails
/// if a table is already bound.
pub fn install(table: HostTable, auth_code: i32) -> Result<(), HostError> {
    HOST.set(Host {
        table,
        auth_code,
        _library: None,
    })
    .map_err(|_| HostError::AlreadyBound)
}

/// Whether a host table is bound.
pub fn is_bound() -> bool {
    HOST.get().is_some()
}

/// Auth code delivered by the host, if bound.
pub fn auth_code() -> Result<i32, ApiError> {
    Ok(host()?.auth_code)
}

pub(crate) fn host() -> Result<&'static Host, ApiError> {
    HOST.get().ok_or(ApiError::NotBound)
}
