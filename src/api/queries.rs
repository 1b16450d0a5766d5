//! Host-side queries
//!
//! Record-style results (member info, member list, group list) come back as
//! serialized blobs whose layout the host defines; they are surfaced as
//! opaque `String`s.

use super::{copy_host_str, to_c, GroupId, UserId};
use crate::errors::ApiError;
use crate::ffi::host::host;

/// Fetch the login session cookies.
pub fn get_cookies() -> Result<String, ApiError> {
    let host = host()?;
    unsafe { copy_host_str((host.table.get_cookies)(host.auth_code)) }
}

/// Fetch the CSRF token matching the cookies. The token is a raw value, not a
/// status code.
pub fn get_csrf_token() -> Result<i32, ApiError> {
    let host = host()?;
    Ok(unsafe { (host.table.get_csrf_token)(host.auth_code) })
}

/// Fetch the logged-in account number.
pub fn get_login_qq() -> Result<UserId, ApiError> {
    let host = host()?;
    Ok(unsafe { (host.table.get_login_qq)(host.auth_code) })
}

/// Fetch the logged-in account nickname.
pub fn get_login_nick() -> Result<String, ApiError> {
    let host = host()?;
    unsafe { copy_host_str((host.table.get_login_nick)(host.auth_code)) }
}

/// Fetch the plugin's private data directory, created by the host.
pub fn get_app_directory() -> Result<String, ApiError> {
    let host = host()?;
    unsafe { copy_host_str((host.table.get_app_directory)(host.auth_code)) }
}

/// Fetch a serialized group-member record.
pub fn get_group_member_info(group: GroupId, qq: UserId) -> Result<String, ApiError> {
    let host = host()?;
    unsafe { copy_host_str((host.table.get_group_member_info)(host.auth_code, group, qq)) }
}

/// Fetch a serialized group-member record; `no_cache` forces the host to ask
/// the service instead of answering from its cache.
pub fn get_group_member_info_v2(
    group: GroupId,
    qq: UserId,
    no_cache: bool,
) -> Result<String, ApiError> {
    let host = host()?;
    unsafe {
        copy_host_str((host.table.get_group_member_info_v2)(
            host.auth_code,
            group,
            qq,
            no_cache as i32,
        ))
    }
}

/// Fetch a serialized stranger record; `no_cache` bypasses the host cache.
pub fn get_stranger_info(qq: UserId, no_cache: bool) -> Result<String, ApiError> {
    let host = host()?;
    unsafe { copy_host_str((host.table.get_stranger_info)(host.auth_code, qq, no_cache as i32)) }
}

/// Fetch the serialized member list of a group.
pub fn get_group_member_list(group: GroupId) -> Result<String, ApiError> {
    let host = host()?;
    unsafe { copy_host_str((host.table.get_group_member_list)(host.auth_code, group)) }
}

/// Fetch the serialized list of groups the account is in.
pub fn get_group_list() -> Result<String, ApiError> {
    let host = host()?;
    // The raw entry takes the auth code both as the leading field and as its
    // declared parameter.
    unsafe { copy_host_str((host.table.get_group_list)(host.auth_code, host.auth_code)) }
}

/// Fetch a received voice record converted to `outformat` (for example
/// `"mp3"`). Returns the path of the converted file.
pub fn get_record(file: &str, outformat: &str) -> Result<String, ApiError> {
    let host = host()?;
    let file = to_c(file)?;
    let outformat = to_c(outformat)?;
    unsafe {
        copy_host_str((host.table.get_record)(
            host.auth_code,
            file.as_ptr(),
            outformat.as_ptr(),
        ))
    }
}
