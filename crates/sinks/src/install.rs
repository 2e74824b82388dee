//! Registers the configured default sinks with a [`DebugReport`].

use layerlog_dispatch::{DebugReport, ReportCallbackCreateInfo, SinkHandle};

use crate::config::{DebugAction, LogTarget, SinkConfig};
use crate::stream::LogOutput;
use crate::{SinkError, debug_break, stream};

/// Registers one default-role report sink per configured action.
///
/// Default sinks only receive messages while no user sink is registered.
/// `ignore` registers nothing. Returns the handles in action order.
///
/// On error nothing stays registered: the log output is opened before any
/// sink is added, and sinks added before a failed registration are removed.
pub fn install_default_sinks(
	report: &DebugReport,
	config: &SinkConfig,
) -> Result<Vec<SinkHandle>, SinkError> {
	let flags = config.flags();
	let output = if config.has_action(DebugAction::Log) {
		Some(open_output(config)?)
	} else {
		None
	};

	let mut handles = Vec::with_capacity(config.debug_action.len());
	for action in &config.debug_action {
		let info: ReportCallbackCreateInfo = match (action, &output) {
			(DebugAction::Log, Some(output)) => stream::report_sink(flags, output.clone()),
			(DebugAction::Break, _) => debug_break::report_sink(flags),
			(DebugAction::Log, None) | (DebugAction::Ignore, _) => continue,
		};
		match report.create_report_callback(true, info, None) {
			Ok(handle) => {
				tracing::debug!(?action, ?flags, handle = %handle, "installed default sink");
				handles.push(handle);
			}
			Err(error) => {
				for handle in handles {
					report.remove_callback(handle);
				}
				return Err(error.into());
			}
		}
	}
	Ok(handles)
}

fn open_output(config: &SinkConfig) -> Result<LogOutput, SinkError> {
	match config.log_target() {
		LogTarget::Stdout => Ok(LogOutput::stdout()),
		LogTarget::File(path) => LogOutput::file(&path),
	}
}
