//! Built-in sinks for `layerlog-dispatch`.
//!
//! Two kinds of sink are provided, each for both callback schemes:
//!
//! * [`stream`] sinks format a message and write it to stdout or a file.
//! * [`debug_break`] sinks raise a breakpoint trap.
//!
//! [`install_default_sinks`] reads a [`SinkConfig`] and registers the matching
//! default-role report sinks, which go quiet once an application registers a
//! sink of its own.

/// Default-sink configuration.
pub mod config;
/// Debugger-break sinks.
pub mod debug_break;
/// Flag set rendering.
pub mod describe;
mod error;
mod install;
/// Stream sinks and message formatting.
pub mod stream;

pub use config::{DebugAction, LogTarget, ReportFlagName, SinkConfig};
pub use error::SinkError;
pub use install::install_default_sinks;
pub use stream::{LogOutput, format_messenger_message, format_report_message};
