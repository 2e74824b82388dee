//! Routing one diagnostic event to every eligible sink.

use crate::callbacks::{CallbackCreateInfo, CallbackData, ReportMessage};
use crate::flags::{ReportFlags, report_to_utils};
use crate::labels::LabelTarget;
use crate::object::{ObjectNameInfo, ObjectType};
use crate::state::{DebugReport, ReportState};
use crate::vuid::{self, VUID_UNDEFINED};

/// Layer prefix reported to report-scheme sinks.
pub const LAYER_PREFIX: &str = "Validation";

/// A diagnostic produced by validation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticEvent<'a> {
	pub flags: ReportFlags,
	pub object_type: ObjectType,
	/// Zero is the null handle.
	pub object: u64,
	/// `None` only when message formatting itself failed.
	pub message: Option<&'a str>,
	/// VUID of the finding, or [`VUID_UNDEFINED`].
	pub vuid: &'a str,
}

impl<'a> DiagnosticEvent<'a> {
	pub fn new(
		flags: ReportFlags,
		object_type: ObjectType,
		object: u64,
		vuid: &'a str,
		message: &'a str,
	) -> Self {
		Self {
			flags,
			object_type,
			object,
			message: Some(message),
			vuid,
		}
	}

	/// An event with no VUID.
	pub fn unclassified(flags: ReportFlags, object_type: ObjectType, object: u64, message: &'a str) -> Self {
		Self::new(flags, object_type, object, VUID_UNDEFINED, message)
	}
}

/// Renders the object description that leads every report-scheme message.
pub fn describe_object(object_type: ObjectType, handle: u64, name: Option<&str>) -> String {
	if handle == 0 {
		return format!("Object: VK_NULL_HANDLE (Type = {object_type})");
	}
	match name {
		Some(name) => format!("Object: {handle:#x} (Name = {name} : Type = {object_type})"),
		None => format!("Object: {handle:#x} (Type = {object_type})"),
	}
}

impl DebugReport {
	/// Delivers `event` to every eligible sink in registration order.
	///
	/// Returns true if any sink asked for the triggering call to be skipped.
	/// All eligible sinks run even after one has asked to stop.
	///
	/// # Panics
	///
	/// Panics if a VUID catalog is installed and `event.vuid` is a classified
	/// identifier missing from it.
	pub fn dispatch(&self, event: &DiagnosticEvent<'_>) -> bool {
		let message = vuid::finish_message(self.vuids.as_deref(), event.vuid, event.message);
		let state = self.state.lock();
		dispatch_locked(&state, event, &message)
	}

	/// Convenience wrapper building a [`DiagnosticEvent`] and dispatching it.
	pub fn log(
		&self,
		flags: ReportFlags,
		object_type: ObjectType,
		object: u64,
		vuid: &str,
		message: &str,
	) -> bool {
		self.dispatch(&DiagnosticEvent::new(flags, object_type, object, vuid, message))
	}
}

fn dispatch_locked(state: &ReportState, event: &DiagnosticEvent<'_>, message: &str) -> bool {
	let (severity, types) = report_to_utils(event.flags);

	let mut object = ObjectNameInfo {
		object_type: event.object_type,
		handle: event.object,
		name: None,
	};
	let mut queue_labels = Vec::new();
	let mut cmd_buf_labels = Vec::new();

	if event.object != 0 {
		match event.object_type {
			ObjectType::Queue => {
				queue_labels = state.labels.export(LabelTarget::Queue(event.object));
			}
			ObjectType::CommandBuffer => {
				cmd_buf_labels = state.labels.export(LabelTarget::CommandBuffer(event.object));
			}
			_ => {}
		}
		object.name = state.names.resolve(event.object).map(str::to_owned);
	}

	let described = describe_object(event.object_type, event.object, object.name.as_deref());
	let report_text = if vuid::is_undefined(event.vuid) {
		format!("{described} | {message}")
	} else {
		format!("[ {} ] {described} | {message}", event.vuid)
	};

	let objects = [object];
	let data = CallbackData {
		message_id_name: event.vuid,
		message_id_number: 0,
		message,
		objects: &objects,
		queue_labels: &queue_labels,
		cmd_buf_labels: &cmd_buf_labels,
	};
	let report_message = ReportMessage {
		flags: event.flags,
		object_type: event.object_type,
		object: event.object,
		location: 0,
		message_code: 0,
		layer_prefix: LAYER_PREFIX,
		message: &report_text,
	};

	let use_defaults = state.callbacks.use_default_callbacks();
	let mut stop = false;
	for entry in state.callbacks.entries() {
		if entry.is_default() && !use_defaults {
			continue;
		}
		let skip = match &entry.info {
			CallbackCreateInfo::Report(info) if info.flags.intersects(event.flags) => {
				(info.callback)(&report_message)
			}
			CallbackCreateInfo::Messenger(info)
				if info.severity.intersects(severity) && info.types.intersects(types) =>
			{
				(info.callback)(severity, types, &data)
			}
			_ => continue,
		};
		stop |= skip;
	}
	stop
}
