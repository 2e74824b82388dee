//! The shared dispatch state and its locked mutation API.
//!
//! One [`parking_lot::Mutex`] guards the sink registry, both name maps and
//! both label maps as a single unit, so a dispatch never observes a torn
//! update from a concurrent naming or label call.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::callbacks::{
	CallbackCreateInfo, CallbackRegistry, CallbackStatus, MessengerCreateInfo,
	ReportCallbackCreateInfo, Scheme, SinkHandle,
};
use crate::error::ReportError;
use crate::flags::{MessageSeverity, MessageType};
use crate::labels::{Label, LabelMaps, LabelTarget};
use crate::lifecycle::ChainStruct;
use crate::names::ObjectNames;
use crate::object::ObjectType;
use crate::vuid::VuidCatalog;

#[derive(Debug, Default)]
pub(crate) struct ReportState {
	pub(crate) callbacks: CallbackRegistry,
	pub(crate) names: ObjectNames,
	pub(crate) labels: LabelMaps,
	pub(crate) instance_chain: Vec<ChainStruct>,
}

/// Shared diagnostic dispatch state for one instance.
///
/// Sinks run while the state lock is held. A sink must not call back into
/// the same `DebugReport`; doing so deadlocks.
pub struct DebugReport {
	pub(crate) state: Mutex<ReportState>,
	pub(crate) vuids: Option<Arc<dyn VuidCatalog>>,
}

impl fmt::Debug for DebugReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DebugReport")
			.field("state", &self.state)
			.field("vuids", &self.vuids.is_some())
			.finish()
	}
}

impl Default for DebugReport {
	fn default() -> Self {
		Self::new()
	}
}

impl DebugReport {
	/// Creates an empty state with no sinks, names, labels, or VUID catalog.
	pub fn new() -> Self {
		Self::builder().build()
	}

	pub fn builder() -> DebugReportBuilder {
		DebugReportBuilder::default()
	}

	/// Registers a sink with explicit role bits.
	///
	/// A supplied `handle` must not already be registered. Without one, a
	/// synthetic handle is allocated.
	pub fn register(
		&self,
		status: CallbackStatus,
		info: impl Into<CallbackCreateInfo>,
		handle: Option<SinkHandle>,
	) -> Result<SinkHandle, ReportError> {
		self.state.lock().callbacks.register(status, info.into(), handle)
	}

	/// Registers a report-scheme sink, optionally as a default sink.
	pub fn create_report_callback(
		&self,
		default_callback: bool,
		info: ReportCallbackCreateInfo,
		handle: Option<SinkHandle>,
	) -> Result<SinkHandle, ReportError> {
		self.register(default_status(default_callback), info, handle)
	}

	/// Registers a utils-scheme sink, optionally as a default sink.
	pub fn create_messenger(
		&self,
		default_callback: bool,
		info: MessengerCreateInfo,
		handle: Option<SinkHandle>,
	) -> Result<SinkHandle, ReportError> {
		self.register(default_status(default_callback), info, handle)
	}

	/// Unregisters the sink under `handle`. Unknown handles are ignored.
	pub fn remove_callback(&self, handle: SinkHandle) -> bool {
		self.state.lock().callbacks.remove(handle)
	}

	pub fn remove_all_callbacks(&self) {
		self.state.lock().callbacks.remove_all();
	}

	pub fn callback_count(&self) -> usize {
		self.state.lock().callbacks.len()
	}

	/// Union of every registered sink's severity filter.
	pub fn active_severities(&self) -> MessageSeverity {
		self.state.lock().callbacks.active_severities()
	}

	/// Union of every registered sink's type filter.
	pub fn active_types(&self) -> MessageType {
		self.state.lock().callbacks.active_types()
	}

	/// Sets or clears an object's display name under `scheme`.
	pub fn set_object_name(&self, scheme: Scheme, handle: u64, name: Option<&str>) {
		self.state.lock().names.set(scheme, handle, name);
	}

	/// Resolves an object's display name, preferring the utils scheme.
	pub fn object_name(&self, handle: u64) -> Option<String> {
		self.state.lock().names.resolve(handle).map(str::to_owned)
	}

	/// Renders `handle` as `"<TypeName> 0x<hex>[<name>]"`.
	pub fn format_handle(&self, object_type: ObjectType, handle: u64) -> String {
		let state = self.state.lock();
		let name = state.names.resolve(handle).unwrap_or_default();
		format!("{} {handle:#x}[{name}]", object_type.type_name())
	}

	pub fn begin_label(&self, target: LabelTarget, label: Option<Label>) {
		tracing::trace!(?target, "begin label");
		self.state.lock().labels.begin(target, label);
	}

	pub fn end_label(&self, target: LabelTarget) {
		tracing::trace!(?target, "end label");
		self.state.lock().labels.end(target);
	}

	pub fn insert_label(&self, target: LabelTarget, label: Option<Label>) {
		self.state.lock().labels.insert(target, label);
	}

	/// Clears a key's label scopes, e.g. when a command buffer is reset.
	pub fn reset_labels(&self, target: LabelTarget) {
		self.state.lock().labels.reset(target);
	}

	/// Drops all label state for a command buffer being freed or reset.
	pub fn erase_command_buffer_labels(&self, command_buffer: u64) {
		self.state
			.lock()
			.labels
			.erase_command_buffer(command_buffer);
	}

	/// Exported labels for `target`, most recent first.
	pub fn labels(&self, target: LabelTarget) -> Vec<Label> {
		self.state.lock().labels.export(target)
	}
}

fn default_status(default_callback: bool) -> CallbackStatus {
	if default_callback {
		CallbackStatus::DEFAULT
	} else {
		CallbackStatus::empty()
	}
}

/// Configures a [`DebugReport`] before it is shared.
#[derive(Default)]
pub struct DebugReportBuilder {
	vuids: Option<Arc<dyn VuidCatalog>>,
	instance_chain: Vec<ChainStruct>,
}

impl DebugReportBuilder {
	/// Installs the catalog used to append reference text to messages.
	pub fn vuid_catalog(mut self, catalog: impl VuidCatalog + 'static) -> Self {
		self.vuids = Some(Arc::new(catalog));
		self
	}

	/// Sets the instance creation chain scanned for temporary callbacks.
	pub fn instance_chain(mut self, chain: impl IntoIterator<Item = ChainStruct>) -> Self {
		self.instance_chain = chain.into_iter().collect();
		self
	}

	pub fn build(self) -> DebugReport {
		DebugReport {
			state: Mutex::new(ReportState {
				instance_chain: self.instance_chain,
				..ReportState::default()
			}),
			vuids: self.vuids,
		}
	}
}
