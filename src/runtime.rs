//! Entry-point dispatch
//!
//! Backing functions for the symbols `export_app!` emits into the plugin
//! crate. The host calls `AppInfo` first, then `Initialize` with the auth
//! code, then the event entry points; each generated symbol routes through
//! here so the exported shims stay one line each.

use std::ffi::CString;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

use once_cell::sync::OnceCell;

use crate::app::App;
use crate::ffi::{self, host};

static APP: OnceCell<Box<dyn App>> = OnceCell::new();
static APP_INFO: OnceCell<CString> = OnceCell::new();

/// Construct the application on first entry; later calls keep the first one.
pub fn ensure_app(ctor: impl FnOnce() -> Box<dyn App>) {
    let _ = APP.get_or_init(ctor);
}

/// Backing for the exported `AppInfo`: `"<apiver>,<app id>"`.
///
/// The buffer is plugin-owned and stays valid for the process lifetime; the
/// host must not free it.
pub fn app_info() -> *const c_char {
    APP_INFO
        .get_or_init(|| {
            let id = APP.get().map(|app| app.app_id()).unwrap_or("");
            CString::new(format!("{},{}", ffi::API_VERSION, id)).unwrap_or_else(|_| {
                tracing::error!("app id contains an interior NUL byte");
                CString::default()
            })
        })
        .as_ptr()
}

/// Backing for the exported `Initialize`.
///
/// Binds the host API table, then runs the app's hook. A binding failure is
/// reported to the host as a non-zero status.
pub fn initialize(auth_code: i32) -> i32 {
    if let Err(err) = host::bind(auth_code) {
        tracing::error!("failed to bind host API table: {err}");
        return 1;
    }
    dispatch("initialize", |app| app.on_initialize(auth_code))
}

/// Backing for the exported `EVENT_ON_ENABLE`.
pub fn enable() -> i32 {
    dispatch("enable", |app| app.on_enable())
}

// Hooks must not unwind across the ABI; a panic becomes a non-zero status.
fn dispatch(hook: &str, call: impl FnOnce(&dyn App) -> i32) -> i32 {
    let Some(app) = APP.get() else {
        return 0;
    };
    match catch_unwind(AssertUnwindSafe(|| call(app.as_ref()))) {
        Ok(code) => code,
        Err(_) => {
            tracing::error!("panic in {hook} hook");
            1
        }
    }
}

/// Emit the plugin entry points the host resolves at load time.
///
/// Takes an expression constructing the [`App`](crate::App) implementation;
/// it is evaluated once, on the first call from the host.
///
/// ```ignore
/// struct Demo;
///
/// impl cqplug::App for Demo {
///     fn app_id(&self) -> &str {
///         "rs.example.demo"
///     }
/// }
///
/// cqplug::export_app!(Demo);
/// ```
#[macro_export]
macro_rules! export_app {
    ($app:expr) => {
        #[cfg(all(windows, target_arch = "x86"))]
        $crate::__export_app_abi!("stdcall", $app);

        #[cfg(not(all(windows, target_arch = "x86")))]
        $crate::__export_app_abi!("C", $app);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __export_app_abi {
    ($abi:literal, $app:expr) => {
        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern $abi fn AppInfo() -> *const ::std::os::raw::c_char {
            $crate::runtime::ensure_app(|| ::std::boxed::Box::new($app));
            $crate::runtime::app_info()
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern $abi fn Initialize(auth_code: i32) -> i32 {
            $crate::runtime::ensure_app(|| ::std::boxed::Box::new($app));
            $crate::runtime::initialize(auth_code)
        }

        #[no_mangle]
        #[allow(non_snake_case)]
        pub extern $abi fn EVENT_ON_ENABLE() -> i32 {
            $crate::runtime::ensure_app(|| ::std::boxed::Box::new($app));
            $crate::runtime::enable()
        }
    };
}
