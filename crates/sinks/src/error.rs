//! Error types for sink configuration and installation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or installing sinks.
#[derive(Debug, Error)]
pub enum SinkError {
	/// Configuration text is not valid TOML or names an unknown action/flag.
	#[error("invalid sink configuration: {0}")]
	Parse(#[from] toml::de::Error),

	/// A configuration or log file could not be opened.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path of the file that failed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Registering a sink with the dispatch state failed.
	#[error(transparent)]
	Report(#[from] layerlog_dispatch::ReportError),
}
