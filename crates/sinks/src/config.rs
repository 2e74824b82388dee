//! Default-sink configuration loaded from TOML.
//!
//! ```toml
//! debug_action = ["log", "break"]
//! report_flags = ["error", "warn", "perf"]
//! log_filename = "layer.log"
//! ```

use std::path::{Path, PathBuf};

use layerlog_dispatch::ReportFlags;
use serde::Deserialize;

use crate::SinkError;

/// What a default sink does with a matching message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugAction {
	/// Write the message to the log output.
	Log,
	/// Break into an attached debugger.
	Break,
	/// Register nothing.
	Ignore,
}

/// One legacy report flag, by its configuration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFlagName {
	Error,
	Warn,
	Perf,
	Info,
	Debug,
}

impl From<ReportFlagName> for ReportFlags {
	fn from(name: ReportFlagName) -> Self {
		match name {
			ReportFlagName::Error => Self::ERROR,
			ReportFlagName::Warn => Self::WARNING,
			ReportFlagName::Perf => Self::PERFORMANCE_WARNING,
			ReportFlagName::Info => Self::INFORMATION,
			ReportFlagName::Debug => Self::DEBUG,
		}
	}
}

/// Where `log` actions write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
	#[default]
	Stdout,
	File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SinkConfig {
	pub debug_action: Vec<DebugAction>,
	pub report_flags: Vec<ReportFlagName>,
	pub log_filename: Option<PathBuf>,
}

impl Default for SinkConfig {
	fn default() -> Self {
		Self {
			debug_action: vec![DebugAction::Log],
			report_flags: vec![ReportFlagName::Error],
			log_filename: None,
		}
	}
}

impl SinkConfig {
	/// Parses configuration from TOML text. Missing keys take their defaults.
	pub fn from_toml(text: &str) -> Result<Self, SinkError> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a TOML configuration file.
	pub fn load(path: &Path) -> Result<Self, SinkError> {
		let text = std::fs::read_to_string(path).map_err(|error| SinkError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml(&text)
	}

	/// Union of the configured report flags.
	pub fn flags(&self) -> ReportFlags {
		self.report_flags
			.iter()
			.copied()
			.map(ReportFlags::from)
			.fold(ReportFlags::empty(), |acc, f| acc | f)
	}

	pub fn log_target(&self) -> LogTarget {
		match &self.log_filename {
			Some(path) if path.as_os_str() != "stdout" => LogTarget::File(path.clone()),
			_ => LogTarget::Stdout,
		}
	}

	pub fn has_action(&self, action: DebugAction) -> bool {
		self.debug_action.contains(&action)
	}
}

#[cfg(test)]
mod tests;
