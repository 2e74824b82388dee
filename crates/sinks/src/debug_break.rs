//! Sinks that stop an attached debugger on every matching message.

use layerlog_dispatch::{MessageSeverity, MessageType, MessengerCreateInfo, ReportCallbackCreateInfo, ReportFlags};

/// Raises a breakpoint trap in the current process.
#[cfg(unix)]
pub fn trigger_breakpoint() {
	// SAFETY: raising a signal has no memory-safety preconditions.
	unsafe {
		libc::raise(libc::SIGTRAP);
	}
}

/// Raises a breakpoint exception in the current process.
#[cfg(windows)]
pub fn trigger_breakpoint() {
	// SAFETY: DebugBreak takes no arguments and only raises an exception.
	unsafe {
		windows_sys::Win32::System::Diagnostics::Debug::DebugBreak();
	}
}

/// Logs that breaking is unsupported on this platform.
#[cfg(not(any(unix, windows)))]
pub fn trigger_breakpoint() {
	tracing::warn!("debugger break requested but unsupported on this platform");
}

/// Report-scheme sink that breaks into the debugger.
pub fn report_sink(flags: ReportFlags) -> ReportCallbackCreateInfo {
	ReportCallbackCreateInfo::new(flags, |_| {
		trigger_breakpoint();
		false
	})
}

/// Utils-scheme sink that breaks into the debugger.
pub fn messenger_sink(severity: MessageSeverity, types: MessageType) -> MessengerCreateInfo {
	MessengerCreateInfo::new(severity, types, |_, _, _| {
		trigger_breakpoint();
		false
	})
}

#[cfg(test)]
mod tests {
	use layerlog_dispatch::{DebugReport, ObjectType, VUID_UNDEFINED};

	use super::*;

	#[test]
	fn sinks_carry_requested_filters() {
		assert_eq!(report_sink(ReportFlags::ERROR).flags, ReportFlags::ERROR);
		let info = messenger_sink(MessageSeverity::WARNING, MessageType::PERFORMANCE);
		assert_eq!(info.severity, MessageSeverity::WARNING);
		assert_eq!(info.types, MessageType::PERFORMANCE);
	}

	#[test]
	fn non_matching_events_do_not_break() {
		let report = DebugReport::new();
		report.create_report_callback(true, report_sink(ReportFlags::ERROR), None).unwrap();
		report
			.create_messenger(true, messenger_sink(MessageSeverity::ERROR, MessageType::VALIDATION), None)
			.unwrap();
		assert!(!report.log(ReportFlags::INFORMATION, ObjectType::Device, 0x1, VUID_UNDEFINED, "fine"));
	}
}
