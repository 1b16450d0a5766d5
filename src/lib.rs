//! cqplug — typed bindings for the CQP plugin host ABI
//!
//! A plugin is a dynamic library the host loads into its own process. The
//! host calls the plugin's exported entry points (`AppInfo`, `Initialize`,
//! the event symbols) and exposes its API as a function-pointer table the
//! plugin binds at load time. This crate wraps both directions:
//!
//! - implement [`App`] and invoke [`export_app!`] to emit the entry points;
//! - call the [`api`] functions anywhere after `Initialize` has run.
//!
//! The companion `cqcfg` binary generates the `app.json` descriptor the host
//! reads next to the plugin library.
//!
//! ```no_run
//! use cqplug::{api, App, LogLevel};
//!
//! struct Demo;
//!
//! impl App for Demo {
//!     fn app_id(&self) -> &str {
//!         "rs.example.demo"
//!     }
//!
//!     fn on_enable(&self) -> i32 {
//!         let _ = api::add_log(LogLevel::Info, "demo", "enabled");
//!         0
//!     }
//! }
//!
//! cqplug::export_app!(Demo);
//! # fn main() {}
//! ```

pub mod api;
pub mod app;
pub mod appinfo;
pub mod errors;
pub mod ffi;
pub mod runtime;

pub use api::LogLevel;
pub use app::App;
pub use errors::{ApiError, HostError, ManifestError};
pub use ffi::{HostTable, API_VERSION, HOST_LIBRARY, HOST_SYMBOLS};
