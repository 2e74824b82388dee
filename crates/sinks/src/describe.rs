//! Short human-readable names for flag sets.

use layerlog_dispatch::{MessageSeverity, MessageType, ReportFlags};

fn join(names: impl IntoIterator<Item = &'static str>) -> String {
	let joined = names.into_iter().collect::<Vec<_>>().join(",");
	if joined.is_empty() { "NONE".to_owned() } else { joined }
}

/// Renders report flags, e.g. `"ERROR,PERF"`.
pub fn report_flags(flags: ReportFlags) -> String {
	const NAMES: [(ReportFlags, &str); 5] = [
		(ReportFlags::ERROR, "ERROR"),
		(ReportFlags::WARNING, "WARN"),
		(ReportFlags::PERFORMANCE_WARNING, "PERF"),
		(ReportFlags::INFORMATION, "INFO"),
		(ReportFlags::DEBUG, "DEBUG"),
	];
	join(NAMES.into_iter().filter(|(f, _)| flags.contains(*f)).map(|(_, n)| n))
}

/// Renders message severities, e.g. `"ERROR"`.
pub fn severity(severity: MessageSeverity) -> String {
	const NAMES: [(MessageSeverity, &str); 4] = [
		(MessageSeverity::VERBOSE, "VERBOSE"),
		(MessageSeverity::INFO, "INFO"),
		(MessageSeverity::WARNING, "WARNING"),
		(MessageSeverity::ERROR, "ERROR"),
	];
	join(NAMES.into_iter().filter(|(f, _)| severity.contains(*f)).map(|(_, n)| n))
}

/// Renders message types, e.g. `"GENERAL,VALIDATION"`.
pub fn message_type(types: MessageType) -> String {
	const NAMES: [(MessageType, &str); 3] = [
		(MessageType::GENERAL, "GENERAL"),
		(MessageType::VALIDATION, "VALIDATION"),
		(MessageType::PERFORMANCE, "PERFORMANCE"),
	];
	join(NAMES.into_iter().filter(|(f, _)| types.contains(*f)).map(|(_, n)| n))
}
