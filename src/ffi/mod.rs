//! Raw CQP host ABI
//!
//! Mirrors the original `cq.h` header: every host operation is a
//! function-pointer slot resolved from the host library at load time, with an
//! explicit leading `ac` field ahead of its declared parameters. Strings cross
//! the boundary as null-terminated `c_char` buffers; the host owns every
//! buffer it returns.
//!
//! The host ABI is stdcall on x86 Windows. Everywhere else the table degrades
//! to the C convention so the crate and its tests stay buildable.

use std::os::raw::c_char;

use crate::errors::HostError;

pub mod host;

/// ABI version reported to the host through `AppInfo`.
pub const API_VERSION: i32 = 9;

/// Library name the host table is resolved from.
pub const HOST_LIBRARY: &str = "CQP.dll";

/// Exported symbol the host invokes on enable.
pub const ENABLE_EVENT_SYMBOL: &str = "EVENT_ON_ENABLE";

macro_rules! host_table {
    ($abi:literal; $($(#[$meta:meta])* $field:ident: $sym:literal => fn($($arg:ident: $ty:ty),*) -> $ret:ty;)+) => {
        /// Function-pointer table resolved from the host library.
        ///
        /// Field order, symbol names and scalar widths follow the original
        /// header exactly. The leading `ac` field of every entry carries the
        /// auth code the host handed to `Initialize`.
        #[derive(Clone, Copy)]
        pub struct HostTable {
            $($(#[$meta])* pub $field: unsafe extern $abi fn(ac: i32 $(, $arg: $ty)*) -> $ret,)+
        }

        impl HostTable {
            /// Resolve every entry from an open host library.
            pub fn resolve(lib: &libloading::Library) -> Result<Self, HostError> {
                unsafe {
                    Ok(Self {
                        $($field: {
                            let sym: libloading::Symbol<unsafe extern $abi fn(i32 $(, $ty)*) -> $ret> =
                                lib.get($sym.as_bytes())
                                    .map_err(|_| HostError::MissingSymbol($sym.to_string()))?;
                            *sym
                        },)+
                    })
                }
            }
        }

        /// Every host symbol, in declaration order.
        pub const HOST_SYMBOLS: &[&str] = &[$($sym,)+];
    };
}

macro_rules! declare_host_table {
    ($($decl:tt)+) => {
        #[cfg(all(windows, target_arch = "x86"))]
        host_table! { "stdcall"; $($decl)+ }

        #[cfg(not(all(windows, target_arch = "x86")))]
        host_table! { "C"; $($decl)+ }
    };
}

declare_host_table! {
    /// Emit a line into the host log at the given priority.
    add_log: "CQ_addLog" => fn(priority: i32, tag: *const c_char, content: *const c_char) -> i32;
    /// Send a private message to a user.
    send_private_msg: "CQ_sendPrivateMsg" => fn(qq: i64, msg: *const c_char) -> i32;
    /// Send a message to a group.
    send_group_msg: "CQ_sendGroupMsg" => fn(group: i64, msg: *const c_char) -> i32;
    /// Send a message to a discussion.
    send_discuss_msg: "CQ_sendDiscussMsg" => fn(discuss: i64, msg: *const c_char) -> i32;
    /// Send a profile like to a user.
    send_like: "CQ_sendLike" => fn(qq: i64) -> i32;
    /// Send several profile likes to a user.
    send_like_v2: "CQ_sendLikeV2" => fn(qq: i64, times: i32) -> i32;
    /// Fetch the login session cookies.
    get_cookies: "CQ_getCookies" => fn() -> *const c_char;
    /// Fetch a received voice record, converted to the requested format.
    get_record: "CQ_getRecord" => fn(file: *const c_char, outformat: *const c_char) -> *const c_char;
    /// Fetch the CSRF token matching the cookies.
    get_csrf_token: "CQ_getCsrfToken" => fn() -> i32;
    /// Fetch the plugin's data directory.
    get_app_directory: "CQ_getAppDirectory" => fn() -> *const c_char;
    /// Fetch the logged-in account number.
    get_login_qq: "CQ_getLoginQQ" => fn() -> i64;
    /// Fetch the logged-in account nickname.
    get_login_nick: "CQ_getLoginNick" => fn() -> *const c_char;
    /// Remove a member from a group.
    set_group_kick: "CQ_setGroupKick" => fn(group: i64, qq: i64, reject_next: i32) -> i32;
    /// Mute a group member for a number of seconds.
    set_group_ban: "CQ_setGroupBan" => fn(group: i64, qq: i64, seconds: i64) -> i32;
    /// Grant or revoke group admin.
    set_group_admin: "CQ_setGroupAdmin" => fn(group: i64, qq: i64, set: i32) -> i32;
    /// Grant a member a special title for a duration.
    set_group_special_title: "CQ_setGroupSpecialTitle" => fn(group: i64, qq: i64, title: *const c_char, timeout: i64) -> i32;
    /// Mute or unmute the whole group.
    set_group_whole_ban: "CQ_setGroupWholeBan" => fn(group: i64, enable: i32) -> i32;
    /// Mute an anonymous poster, identified by its event token.
    set_group_anonymous_ban: "CQ_setGroupAnonymousBan" => fn(group: i64, anonymous: *const c_char, seconds: i64) -> i32;
    /// Allow or forbid anonymous posting in a group.
    set_group_anonymous: "CQ_setGroupAnonymous" => fn(group: i64, enable: i32) -> i32;
    /// Set a member's group card.
    set_group_card: "CQ_setGroupCard" => fn(group: i64, qq: i64, card: *const c_char) -> i32;
    /// Leave a group, optionally dismissing it.
    set_group_leave: "CQ_setGroupLeave" => fn(group: i64, dismiss: i32) -> i32;
    /// Leave a discussion.
    set_discuss_leave: "CQ_setDiscussLeave" => fn(discuss: i64) -> i32;
    /// Answer a friend-add request.
    set_friend_add_request: "CQ_setFriendAddRequest" => fn(flag: *const c_char, response: i32, remark: *const c_char) -> i32;
    /// Answer a group-add request.
    set_group_add_request: "CQ_setGroupAddRequest" => fn(flag: *const c_char, kind: i32, response: i32) -> i32;
    /// Answer a group-add request with a reason.
    set_group_add_request_v2: "CQ_setGroupAddRequestV2" => fn(flag: *const c_char, kind: i32, response: i32, reason: *const c_char) -> i32;
    /// Report an unrecoverable plugin error to the host.
    set_fatal: "CQ_setFatal" => fn(errmsg: *const c_char) -> i32;
    /// Fetch a serialized group-member record.
    get_group_member_info: "CQ_getGroupMemberInfo" => fn(group: i64, qq: i64) -> *const c_char;
    /// Fetch a serialized group-member record, optionally bypassing the cache.
    get_group_member_info_v2: "CQ_getGroupMemberInfoV2" => fn(group: i64, qq: i64, no_cache: i32) -> *const c_char;
    /// Fetch a serialized stranger record, optionally bypassing the cache.
    get_stranger_info: "CQ_getStrangerInfo" => fn(qq: i64, no_cache: i32) -> *const c_char;
    /// Fetch the serialized member list of a group.
    get_group_member_list: "CQ_getGroupMemberList" => fn(group: i64) -> *const c_char;
    /// Fetch the serialized group list.
    get_group_list: "CQ_getGroupList" => fn(auth_code: i32) -> *const c_char;
    /// Recall a sent message by id.
    delete_msg: "CQ_deleteMsg" => fn(msg_id: i64) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_table_is_complete() {
        assert_eq!(HOST_SYMBOLS.len(), 32);
        assert!(HOST_SYMBOLS.contains(&"CQ_addLog"));
        assert!(HOST_SYMBOLS.contains(&"CQ_sendPrivateMsg"));
        assert!(HOST_SYMBOLS.contains(&"CQ_setGroupAddRequestV2"));
        assert!(HOST_SYMBOLS.contains(&"CQ_deleteMsg"));
    }

    #[test]
    fn symbol_table_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for sym in HOST_SYMBOLS {
            assert!(seen.insert(sym), "duplicate host symbol {sym}");
        }
    }

    #[test]
    fn table_is_a_flat_pointer_array() {
        // One slot per host symbol, nothing else.
        assert_eq!(
            std::mem::size_of::<HostTable>(),
            HOST_SYMBOLS.len() * std::mem::size_of::<usize>()
        );
    }
}
