//! Friend-add and group-add request handling
//!
//! `flag` is the opaque request token carried by the corresponding request
//! event; it is only meaningful to the host.

use super::{status, to_c};
use crate::errors::ApiError;
use crate::ffi::host::host;

/// Verdict on an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RequestResponse {
    Approve = 1,
    Reject = 2,
}

/// How a group-add request came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum GroupRequestKind {
    /// Someone asked to join a group the bot moderates.
    Join = 1,
    /// The bot itself was invited into a group.
    Invite = 2,
}

/// Answer a friend-add request. `remark` becomes the new friend's remark name
/// when approving.
pub fn set_friend_add_request(
    flag: &str,
    response: RequestResponse,
    remark: &str,
) -> Result<(), ApiError> {
    let host = host()?;
    let flag = to_c(flag)?;
    let remark = to_c(remark)?;
    status(unsafe {
        (host.table.set_friend_add_request)(
            host.auth_code,
            flag.as_ptr(),
            response as i32,
            remark.as_ptr(),
        )
    })?;
    Ok(())
}

/// Answer a group-add request.
pub fn set_group_add_request(
    flag: &str,
    kind: GroupRequestKind,
    response: RequestResponse,
) -> Result<(), ApiError> {
    let host = host()?;
    let flag = to_c(flag)?;
    status(unsafe {
        (host.table.set_group_add_request)(
            host.auth_code,
            flag.as_ptr(),
            kind as i32,
            response as i32,
        )
    })?;
    Ok(())
}

/// Answer a group-add request, attaching a reason shown to the requester on
/// rejection.
pub fn set_group_add_request_v2(
    flag: &str,
    kind: GroupRequestKind,
    response: RequestResponse,
    reason: &str,
) -> Result<(), ApiError> {
    let host = host()?;
    let flag = to_c(flag)?;
    let reason = to_c(reason)?;
    status(unsafe {
        (host.table.set_group_add_request_v2)(
            host.auth_code,
            flag.as_ptr(),
            kind as i32,
            response as i32,
            reason.as_ptr(),
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_host_convention() {
        assert_eq!(RequestResponse::Approve as i32, 1);
        assert_eq!(RequestResponse::Reject as i32, 2);
        assert_eq!(GroupRequestKind::Join as i32, 1);
        assert_eq!(GroupRequestKind::Invite as i32, 2);
    }
}
