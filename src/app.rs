//! Plugin application trait

/// Core trait a plugin implements.
///
/// The exported entry points emitted by [`export_app!`](crate::export_app)
/// construct the application once and dispatch the host's lifecycle calls to
/// these hooks. Hooks return the raw status code handed back to the host;
/// `0` means handled.
pub trait App: Send + Sync {
    /// Application id reported to the host, reverse-domain style.
    fn app_id(&self) -> &str;

    /// Called after the host delivered the auth code and the API table was
    /// bound. API calls are available from this point on.
    fn on_initialize(&self, _auth_code: i32) -> i32 {
        0
    }

    /// Called when the user enables the plugin.
    fn on_enable(&self) -> i32 {
        0
    }
}
