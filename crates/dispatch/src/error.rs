//! Error types for the dispatch state.

use thiserror::Error;

use crate::callbacks::SinkHandle;

/// Errors surfaced by sink registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
	/// The caller-supplied handle already identifies a registered sink.
	#[error("sink handle {0} is already registered")]
	DuplicateHandle(SinkHandle),
}
