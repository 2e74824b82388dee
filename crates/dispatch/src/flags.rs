//! Severity and category flags for both callback schemes, and the translation
//! between them.
//!
//! The legacy report scheme folds severity and category into one mask. The
//! utils scheme splits them into a severity mask and a message-type mask. The
//! two translations are deliberately not inverses: [`report_to_utils`] can
//! produce combined bits that [`utils_to_report`] collapses to the single
//! dominant legacy bit.

bitflags::bitflags! {
	/// Legacy report-scheme flags.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct ReportFlags: u32 {
		const INFORMATION = 0x0000_0001;
		const WARNING = 0x0000_0002;
		const PERFORMANCE_WARNING = 0x0000_0004;
		const ERROR = 0x0000_0008;
		const DEBUG = 0x0000_0010;
	}
}

bitflags::bitflags! {
	/// Utils-scheme message severities.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct MessageSeverity: u32 {
		const VERBOSE = 0x0000_0001;
		const INFO = 0x0000_0010;
		const WARNING = 0x0000_0100;
		const ERROR = 0x0000_1000;
	}
}

bitflags::bitflags! {
	/// Utils-scheme message categories.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct MessageType: u32 {
		const GENERAL = 0x0000_0001;
		const VALIDATION = 0x0000_0002;
		const PERFORMANCE = 0x0000_0004;
	}
}

/// Converts legacy report flags to a `(severity, type)` pair.
///
/// Every set legacy bit contributes independently; outputs accumulate.
pub fn report_to_utils(flags: ReportFlags) -> (MessageSeverity, MessageType) {
	let mut severity = MessageSeverity::empty();
	let mut types = MessageType::empty();

	// Only an explicit performance warning is classified as a performance message.
	if flags.contains(ReportFlags::PERFORMANCE_WARNING) {
		types |= MessageType::PERFORMANCE;
		severity |= MessageSeverity::WARNING;
	}
	if flags.contains(ReportFlags::DEBUG) {
		types |= MessageType::GENERAL | MessageType::VALIDATION;
		severity |= MessageSeverity::VERBOSE;
	}
	if flags.contains(ReportFlags::INFORMATION) {
		types |= MessageType::VALIDATION;
		severity |= MessageSeverity::INFO;
	}
	if flags.contains(ReportFlags::WARNING) {
		types |= MessageType::VALIDATION;
		severity |= MessageSeverity::WARNING;
	}
	if flags.contains(ReportFlags::ERROR) {
		types |= MessageType::VALIDATION;
		severity |= MessageSeverity::ERROR;
	}

	(severity, types)
}

/// Converts a utils-scheme severity and type back to a single legacy bit.
///
/// The most severe bit wins: error, then warning (performance warning when the
/// type includes [`MessageType::PERFORMANCE`]), then info, then verbose. Returns
/// an empty set when no severity bit is recognized.
pub fn utils_to_report(severity: MessageSeverity, types: MessageType) -> ReportFlags {
	if severity.contains(MessageSeverity::ERROR) {
		ReportFlags::ERROR
	} else if severity.contains(MessageSeverity::WARNING) {
		if types.contains(MessageType::PERFORMANCE) {
			ReportFlags::PERFORMANCE_WARNING
		} else {
			ReportFlags::WARNING
		}
	} else if severity.contains(MessageSeverity::INFO) {
		ReportFlags::INFORMATION
	} else if severity.contains(MessageSeverity::VERBOSE) {
		ReportFlags::DEBUG
	} else {
		ReportFlags::empty()
	}
}
