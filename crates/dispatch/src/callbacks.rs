//! Registered sinks and the aggregate severity/type filters derived from them.

use std::fmt;
use std::num::NonZeroU64;
use std::sync::Arc;

use crate::error::ReportError;
use crate::flags::{MessageSeverity, MessageType, ReportFlags, report_to_utils};
use crate::labels::Label;
use crate::object::{ObjectNameInfo, ObjectType};

/// Callback registration style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
	/// Legacy single-mask report callbacks (also the debug-marker naming call).
	Report,
	/// Severity-by-type utils messengers (also the utils naming call).
	Utils,
}

bitflags::bitflags! {
	/// Role bits carried by a registered sink, independent of its scheme.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CallbackStatus: u32 {
		/// Internally created; fires only when no other sink is registered.
		const DEFAULT = 0x0000_0002;
		/// Bound to a single instance construction or destruction call.
		const INSTANCE = 0x0000_0004;
	}
}

/// Identity of a registered sink. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SinkHandle(NonZeroU64);

impl SinkHandle {
	/// Wraps a raw handle value; the null handle yields `None`.
	pub const fn new(raw: u64) -> Option<Self> {
		match NonZeroU64::new(raw) {
			Some(raw) => Some(Self(raw)),
			None => None,
		}
	}

	pub const fn raw(self) -> u64 {
		self.0.get()
	}
}

impl fmt::Display for SinkHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:#x}", self.0.get())
	}
}

/// Payload delivered to report-scheme sinks.
#[derive(Debug, Clone, Copy)]
pub struct ReportMessage<'a> {
	pub flags: ReportFlags,
	pub object_type: ObjectType,
	pub object: u64,
	pub location: usize,
	pub message_code: i32,
	pub layer_prefix: &'a str,
	/// Composed message, prefixed with the object description and VUID.
	pub message: &'a str,
}

/// Payload delivered to utils-scheme sinks.
#[derive(Debug, Clone, Copy)]
pub struct CallbackData<'a> {
	pub message_id_name: &'a str,
	/// Always zero; sinks should key on `message_id_name`.
	pub message_id_number: i32,
	pub message: &'a str,
	pub objects: &'a [ObjectNameInfo],
	pub queue_labels: &'a [Label],
	pub cmd_buf_labels: &'a [Label],
}

/// Report-scheme sink. Returning `true` asks the caller to skip the call.
pub type ReportCallback = Arc<dyn Fn(&ReportMessage<'_>) -> bool + Send + Sync>;

/// Utils-scheme sink. Returning `true` asks the caller to skip the call.
pub type MessengerCallback =
	Arc<dyn Fn(MessageSeverity, MessageType, &CallbackData<'_>) -> bool + Send + Sync>;

/// Parameters for a report-scheme sink.
#[derive(Clone)]
pub struct ReportCallbackCreateInfo {
	pub flags: ReportFlags,
	pub callback: ReportCallback,
}

impl ReportCallbackCreateInfo {
	pub fn new(
		flags: ReportFlags,
		callback: impl Fn(&ReportMessage<'_>) -> bool + Send + Sync + 'static,
	) -> Self {
		Self {
			flags,
			callback: Arc::new(callback),
		}
	}
}

impl fmt::Debug for ReportCallbackCreateInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ReportCallbackCreateInfo")
			.field("flags", &self.flags)
			.finish_non_exhaustive()
	}
}

/// Parameters for a utils-scheme sink.
#[derive(Clone)]
pub struct MessengerCreateInfo {
	pub severity: MessageSeverity,
	pub types: MessageType,
	pub callback: MessengerCallback,
}

impl MessengerCreateInfo {
	pub fn new(
		severity: MessageSeverity,
		types: MessageType,
		callback: impl Fn(MessageSeverity, MessageType, &CallbackData<'_>) -> bool
		+ Send
		+ Sync
		+ 'static,
	) -> Self {
		Self {
			severity,
			types,
			callback: Arc::new(callback),
		}
	}
}

impl fmt::Debug for MessengerCreateInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MessengerCreateInfo")
			.field("severity", &self.severity)
			.field("types", &self.types)
			.finish_non_exhaustive()
	}
}

/// Scheme-tagged sink creation parameters.
#[derive(Debug, Clone)]
pub enum CallbackCreateInfo {
	Report(ReportCallbackCreateInfo),
	Messenger(MessengerCreateInfo),
}

impl CallbackCreateInfo {
	pub fn scheme(&self) -> Scheme {
		match self {
			Self::Report(_) => Scheme::Report,
			Self::Messenger(_) => Scheme::Utils,
		}
	}
}

impl From<ReportCallbackCreateInfo> for CallbackCreateInfo {
	fn from(info: ReportCallbackCreateInfo) -> Self {
		Self::Report(info)
	}
}

impl From<MessengerCreateInfo> for CallbackCreateInfo {
	fn from(info: MessengerCreateInfo) -> Self {
		Self::Messenger(info)
	}
}

/// One registered sink.
#[derive(Debug)]
pub(crate) struct CallbackEntry {
	pub(crate) handle: SinkHandle,
	pub(crate) status: CallbackStatus,
	pub(crate) info: CallbackCreateInfo,
}

impl CallbackEntry {
	pub(crate) fn is_default(&self) -> bool {
		self.status.contains(CallbackStatus::DEFAULT)
	}

	pub(crate) fn is_instance(&self) -> bool {
		self.status.contains(CallbackStatus::INSTANCE)
	}

	/// Severity and type filters of this entry in utils terms.
	fn effective_filter(&self) -> (MessageSeverity, MessageType) {
		match &self.info {
			CallbackCreateInfo::Report(info) => report_to_utils(info.flags),
			CallbackCreateInfo::Messenger(info) => (info.severity, info.types),
		}
	}
}

/// Handles of instance-temporary sinks, split by scheme.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstanceHandles {
	pub utils: Vec<SinkHandle>,
	pub report: Vec<SinkHandle>,
}

impl InstanceHandles {
	pub fn is_empty(&self) -> bool {
		self.utils.is_empty() && self.report.is_empty()
	}
}

/// Ordered sink list plus the union of every sink's filters.
#[derive(Debug)]
pub(crate) struct CallbackRegistry {
	entries: Vec<CallbackEntry>,
	active_severities: MessageSeverity,
	active_types: MessageType,
	next_synthetic: u64,
}

impl Default for CallbackRegistry {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
			active_severities: MessageSeverity::empty(),
			active_types: MessageType::empty(),
			next_synthetic: 1,
		}
	}
}

impl CallbackRegistry {
	/// Appends a sink, returning the handle it is registered under.
	///
	/// Uses `handle` when supplied, otherwise allocates a synthetic handle
	/// distinct from every live one.
	pub(crate) fn register(
		&mut self,
		status: CallbackStatus,
		info: CallbackCreateInfo,
		handle: Option<SinkHandle>,
	) -> Result<SinkHandle, ReportError> {
		match handle {
			Some(handle) if self.contains(handle) => Err(ReportError::DuplicateHandle(handle)),
			Some(handle) => {
				self.push(handle, status, info);
				Ok(handle)
			}
			None => Ok(self.register_synthetic(status, info)),
		}
	}

	/// Appends a sink under a freshly allocated synthetic handle.
	pub(crate) fn register_synthetic(
		&mut self,
		status: CallbackStatus,
		info: CallbackCreateInfo,
	) -> SinkHandle {
		let handle = self.allocate_handle();
		self.push(handle, status, info);
		handle
	}

	fn push(&mut self, handle: SinkHandle, status: CallbackStatus, info: CallbackCreateInfo) {
		tracing::trace!(%handle, scheme = ?info.scheme(), ?status, "registering sink");
		self.entries.push(CallbackEntry {
			handle,
			status,
			info,
		});
		self.recompute_filters();
	}

	/// Removes the sink registered under `handle`. Returns false if absent.
	pub(crate) fn remove(&mut self, handle: SinkHandle) -> bool {
		let removed = match self.entries.iter().position(|e| e.handle == handle) {
			Some(idx) => {
				self.entries.remove(idx);
				tracing::trace!(%handle, "removed sink");
				true
			}
			None => false,
		};
		self.recompute_filters();
		removed
	}

	pub(crate) fn remove_all(&mut self) {
		self.entries.clear();
		self.recompute_filters();
	}

	pub(crate) fn instance_handles(&self) -> InstanceHandles {
		let mut out = InstanceHandles::default();
		for entry in self.entries.iter().filter(|e| e.is_instance()) {
			match entry.info.scheme() {
				Scheme::Utils => out.utils.push(entry.handle),
				Scheme::Report => out.report.push(entry.handle),
			}
		}
		out
	}

	pub(crate) fn contains(&self, handle: SinkHandle) -> bool {
		self.entries.iter().any(|e| e.handle == handle)
	}

	pub(crate) fn entries(&self) -> &[CallbackEntry] {
		&self.entries
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when every registered sink is a default sink (or none exist).
	pub(crate) fn use_default_callbacks(&self) -> bool {
		self.entries.iter().all(CallbackEntry::is_default)
	}

	pub(crate) fn active_severities(&self) -> MessageSeverity {
		self.active_severities
	}

	pub(crate) fn active_types(&self) -> MessageType {
		self.active_types
	}

	fn allocate_handle(&mut self) -> SinkHandle {
		loop {
			let raw = self.next_synthetic;
			self.next_synthetic = self.next_synthetic.wrapping_add(1);
			if let Some(handle) = SinkHandle::new(raw)
				&& !self.contains(handle)
			{
				return handle;
			}
		}
	}

	fn recompute_filters(&mut self) {
		let (severities, types) = self.entries.iter().map(CallbackEntry::effective_filter).fold(
			(MessageSeverity::empty(), MessageType::empty()),
			|(sev_acc, ty_acc), (sev, ty)| (sev_acc | sev, ty_acc | ty),
		);
		self.active_severities = severities;
		self.active_types = types;
	}
}
