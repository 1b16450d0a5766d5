//! Safe wrappers over the host API table
//!
//! Every call is an independent synchronous round-trip into the host on the
//! calling thread. String arguments are copied into NUL-terminated buffers
//! before the call; an interior NUL is rejected as an invalid argument.
//! Buffers the host returns stay host-owned: they are copied into `String`s
//! immediately and never freed or retained.
//!
//! Status-returning calls map a negative host code to [`ApiError::Host`] and
//! surface non-negative codes (such as message ids) unchanged.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::errors::ApiError;

mod diagnostics;
mod messaging;
mod moderation;
mod queries;
mod requests;

pub use diagnostics::{add_log, set_fatal, LogLevel};
pub use messaging::{
    delete_msg, send_discuss_msg, send_group_msg, send_like, send_like_times, send_private_msg,
};
pub use moderation::{
    set_discuss_leave, set_group_admin, set_group_anonymous, set_group_anonymous_ban,
    set_group_ban, set_group_card, set_group_kick, set_group_leave, set_group_special_title,
    set_group_whole_ban,
};
pub use queries::{
    get_app_directory, get_cookies, get_csrf_token, get_group_list, get_group_member_info,
    get_group_member_info_v2, get_group_member_list, get_login_nick, get_login_qq, get_record,
    get_stranger_info,
};
pub use requests::{
    set_friend_add_request, set_group_add_request, set_group_add_request_v2, GroupRequestKind,
    RequestResponse,
};

/// QQ user number.
pub type UserId = i64;
/// Group number.
pub type GroupId = i64;
/// Discussion number.
pub type DiscussId = i64;
/// Host-assigned message id.
pub type MessageId = i64;

pub(crate) fn to_c(arg: &str) -> Result<CString, ApiError> {
    Ok(CString::new(arg)?)
}

/// Copy a host-owned buffer out. The pointer is only read, never freed.
pub(crate) unsafe fn copy_host_str(ptr: *const c_char) -> Result<String, ApiError> {
    if ptr.is_null() {
        return Err(ApiError::NullResponse);
    }
    Ok(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

pub(crate) fn status(code: i32) -> Result<i32, ApiError> {
    if code < 0 {
        Err(ApiError::Host(code))
    } else {
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_negative_codes() {
        assert!(matches!(status(-11), Err(ApiError::Host(-11))));
        assert_eq!(status(0).unwrap(), 0);
        assert_eq!(status(4821).unwrap(), 4821);
    }

    #[test]
    fn to_c_rejects_interior_nul() {
        assert!(matches!(to_c("a\0b"), Err(ApiError::InvalidArgument(_))));
        assert!(to_c("plain").is_ok());
    }

    #[test]
    fn copy_host_str_rejects_null() {
        let got = unsafe { copy_host_str(std::ptr::null()) };
        assert!(matches!(got, Err(ApiError::NullResponse)));
    }
}
