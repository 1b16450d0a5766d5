//! Group and discussion moderation calls
//!
//! Boolean-like i32 flags of the raw table surface as `bool`; durations are
//! plain seconds, matching the widths the host expects.

use super::{status, to_c, DiscussId, GroupId, UserId};
use crate::errors::ApiError;
use crate::ffi::host::host;

fn flag(b: bool) -> i32 {
    b as i32
}

/// Remove a member from a group. `reject_add_request` also blacklists them.
pub fn set_group_kick(group: GroupId, qq: UserId, reject_add_request: bool) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe {
        (host.table.set_group_kick)(host.auth_code, group, qq, flag(reject_add_request))
    })?;
    Ok(())
}

/// Mute a member for `seconds`; `0` lifts the mute.
pub fn set_group_ban(group: GroupId, qq: UserId, seconds: i64) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe { (host.table.set_group_ban)(host.auth_code, group, qq, seconds) })?;
    Ok(())
}

/// Grant (`true`) or revoke group admin.
pub fn set_group_admin(group: GroupId, qq: UserId, set: bool) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe { (host.table.set_group_admin)(host.auth_code, group, qq, flag(set)) })?;
    Ok(())
}

/// Give a member a special title, visible for `timeout` seconds (`-1` keeps
/// it forever).
pub fn set_group_special_title(
    group: GroupId,
    qq: UserId,
    title: &str,
    timeout: i64,
) -> Result<(), ApiError> {
    let host = host()?;
    let title = to_c(title)?;
    status(unsafe {
        (host.table.set_group_special_title)(host.auth_code, group, qq, title.as_ptr(), timeout)
    })?;
    Ok(())
}

/// Mute (`true`) or unmute every regular member of a group.
pub fn set_group_whole_ban(group: GroupId, enable: bool) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe { (host.table.set_group_whole_ban)(host.auth_code, group, flag(enable)) })?;
    Ok(())
}

/// Mute an anonymous poster. `anonymous` is the opaque token carried by the
/// anonymous message event.
pub fn set_group_anonymous_ban(
    group: GroupId,
    anonymous: &str,
    seconds: i64,
) -> Result<(), ApiError> {
    let host = host()?;
    let anonymous = to_c(anonymous)?;
    status(unsafe {
        (host.table.set_group_anonymous_ban)(host.auth_code, group, anonymous.as_ptr(), seconds)
    })?;
    Ok(())
}

/// Allow (`true`) or forbid anonymous posting in a group.
pub fn set_group_anonymous(group: GroupId, enable: bool) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe { (host.table.set_group_anonymous)(host.auth_code, group, flag(enable)) })?;
    Ok(())
}

/// Set a member's group card (in-group display name).
pub fn set_group_card(group: GroupId, qq: UserId, card: &str) -> Result<(), ApiError> {
    let host = host()?;
    let card = to_c(card)?;
    status(unsafe { (host.table.set_group_card)(host.auth_code, group, qq, card.as_ptr()) })?;
    Ok(())
}

/// Leave a group; `dismiss` dissolves it instead (owner only).
pub fn set_group_leave(group: GroupId, dismiss: bool) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe { (host.table.set_group_leave)(host.auth_code, group, flag(dismiss)) })?;
    Ok(())
}

/// Leave a discussion.
pub fn set_discuss_leave(discuss: DiscussId) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe { (host.table.set_discuss_leave)(host.auth_code, discuss) })?;
    Ok(())
}
