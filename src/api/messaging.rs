//! Messaging and presence calls

use super::{status, to_c, DiscussId, GroupId, MessageId, UserId};
use crate::errors::ApiError;
use crate::ffi::host::host;

/// Send a private message. Returns the host's id for the sent message.
pub fn send_private_msg(qq: UserId, msg: &str) -> Result<i32, ApiError> {
    let host = host()?;
    let msg = to_c(msg)?;
    status(unsafe { (host.table.send_private_msg)(host.auth_code, qq, msg.as_ptr()) })
}

/// Send a message to a group. Returns the host's id for the sent message.
pub fn send_group_msg(group: GroupId, msg: &str) -> Result<i32, ApiError> {
    let host = host()?;
    let msg = to_c(msg)?;
    status(unsafe { (host.table.send_group_msg)(host.auth_code, group, msg.as_ptr()) })
}

/// Send a message to a discussion. Returns the host's id for the sent message.
pub fn send_discuss_msg(discuss: DiscussId, msg: &str) -> Result<i32, ApiError> {
    let host = host()?;
    let msg = to_c(msg)?;
    status(unsafe { (host.table.send_discuss_msg)(host.auth_code, discuss, msg.as_ptr()) })
}

/// Recall a sent message.
pub fn delete_msg(msg_id: MessageId) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe { (host.table.delete_msg)(host.auth_code, msg_id) })?;
    Ok(())
}

/// Send a single profile like to a user.
pub fn send_like(qq: UserId) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe { (host.table.send_like)(host.auth_code, qq) })?;
    Ok(())
}

/// Send up to ten profile likes to a user in one call.
pub fn send_like_times(qq: UserId, times: i32) -> Result<(), ApiError> {
    let host = host()?;
    status(unsafe { (host.table.send_like_v2)(host.auth_code, qq, times) })?;
    Ok(())
}
