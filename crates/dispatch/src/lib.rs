//! Diagnostic dispatch for validation layers.
//!
//! A [`DebugReport`] multiplexes diagnostics produced by validation logic out
//! to registered sinks under two callback schemes: legacy report callbacks
//! keyed by a single [`ReportFlags`] mask, and utils messengers keyed by
//! [`MessageSeverity`] and [`MessageType`]. Alongside the sinks it tracks
//! display names for object handles and scoped [`Label`] stacks for queues
//! and command buffers, so each message can name the objects and the region
//! of GPU work it concerns.
//!
//! # Locking
//!
//! All state sits behind one mutex. Sinks are invoked with that mutex held,
//! so a sink must never call back into the `DebugReport` that invoked it.

/// Sink registration, handles, and callback payloads.
pub mod callbacks;
/// Event routing and message composition.
pub mod dispatch;
/// Error types.
pub mod error;
/// Severity and type flags and their translation.
pub mod flags;
/// Queue and command-buffer label stacks.
pub mod labels;
/// State teardown and instance-temporary callbacks.
pub mod lifecycle;
/// Object handle display names.
pub mod names;
/// Object type tags.
pub mod object;
/// Shared dispatch state.
pub mod state;
/// VUID constants and catalog lookup.
pub mod vuid;

pub use callbacks::{
	CallbackCreateInfo, CallbackData, CallbackStatus, InstanceHandles, MessengerCallback,
	MessengerCreateInfo, ReportCallback, ReportCallbackCreateInfo, ReportMessage, Scheme,
	SinkHandle,
};
pub use dispatch::{DiagnosticEvent, LAYER_PREFIX, describe_object};
pub use error::ReportError;
pub use flags::{MessageSeverity, MessageType, ReportFlags, report_to_utils, utils_to_report};
pub use labels::{Label, LabelStack, LabelTarget};
pub use lifecycle::{ChainStruct, InstanceCallbackScope, destroy};
pub use object::{ObjectNameInfo, ObjectType};
pub use state::{DebugReport, DebugReportBuilder};
pub use vuid::{StaticVuidCatalog, VUID_UNDEFINED, VuidCatalog};
