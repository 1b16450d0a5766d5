//! Behavior before the host table is bound
//! Run with: cargo test --test unbound
//!
//! Runs in its own process: nothing here installs a table, so every API call
//! must fail with the not-bound error instead of reaching a dangling pointer.

use cqplug::api;
use cqplug::errors::ApiError;
use cqplug::ffi::host;

#[test]
fn calls_fail_closed_before_initialize() {
    assert!(!host::is_bound());
    assert!(matches!(api::send_private_msg(1, "hi"), Err(ApiError::NotBound)));
    assert!(matches!(api::get_login_nick(), Err(ApiError::NotBound)));
    assert!(matches!(api::set_group_ban(1, 2, 60), Err(ApiError::NotBound)));
    assert!(matches!(api::get_csrf_token(), Err(ApiError::NotBound)));
    assert!(matches!(host::auth_code(), Err(ApiError::NotBound)));
}
