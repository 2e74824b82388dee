//! Sinks that format each message and write it to an output stream.

use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use layerlog_dispatch::{
	CallbackData, MessageSeverity, MessageType, MessengerCreateInfo, ReportCallbackCreateInfo,
	ReportFlags, ReportMessage,
};
use parking_lot::Mutex;

use crate::SinkError;
use crate::describe;

/// A shared, flushable output stream.
#[derive(Clone)]
pub struct LogOutput {
	inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl fmt::Debug for LogOutput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LogOutput").finish_non_exhaustive()
	}
}

impl LogOutput {
	pub fn new(writer: impl Write + Send + 'static) -> Self {
		Self {
			inner: Arc::new(Mutex::new(Box::new(writer))),
		}
	}

	pub fn stdout() -> Self {
		Self::new(io::stdout())
	}

	/// Creates (or truncates) `path` for writing.
	pub fn file(path: &Path) -> Result<Self, SinkError> {
		let file = File::create(path).map_err(|error| SinkError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Ok(Self::new(file))
	}

	/// Writes `text` and flushes. Failures are logged, never propagated.
	pub fn write_str(&self, text: &str) {
		let mut writer = self.inner.lock();
		if let Err(error) = writer.write_all(text.as_bytes()).and_then(|()| writer.flush()) {
			tracing::warn!(%error, "failed to write diagnostic to log output");
		}
	}
}

/// Formats a report-scheme message as one line.
pub fn format_report_message(msg: &ReportMessage<'_>) -> String {
	format!(
		"{}({}): msg_code: {}: {}\n",
		msg.layer_prefix,
		describe::report_flags(msg.flags),
		msg.message_code,
		msg.message
	)
}

/// Formats a utils-scheme message followed by its object list.
pub fn format_messenger_message(
	severity: MessageSeverity,
	types: MessageType,
	data: &CallbackData<'_>,
) -> String {
	let mut out = format!(
		"{}({} / {}): msgNum: {} - {}\n    Objects: {}\n",
		data.message_id_name,
		describe::severity(severity),
		describe::message_type(types),
		data.message_id_number,
		data.message,
		data.objects.len()
	);
	for (i, object) in data.objects.iter().enumerate() {
		let _ = writeln!(
			out,
			"        [{i}] {:#x}, type: {}, name: {}",
			object.handle,
			object.object_type.core_raw(),
			object.name.as_deref().unwrap_or("NULL")
		);
	}
	out
}

/// Report-scheme sink writing every matching message to `output`.
pub fn report_sink(flags: ReportFlags, output: LogOutput) -> ReportCallbackCreateInfo {
	ReportCallbackCreateInfo::new(flags, move |msg| {
		output.write_str(&format_report_message(msg));
		false
	})
}

/// Utils-scheme sink writing every matching message to `output`.
pub fn messenger_sink(
	severity: MessageSeverity,
	types: MessageType,
	output: LogOutput,
) -> MessengerCreateInfo {
	MessengerCreateInfo::new(severity, types, move |sev, ty, data| {
		output.write_str(&format_messenger_message(sev, ty, data));
		false
	})
}

#[cfg(test)]
mod tests;
