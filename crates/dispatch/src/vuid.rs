//! Validation usage identifiers and the catalog of their reference text.

/// Identifier for findings with no assigned VUID.
pub const VUID_UNDEFINED: &str = "VUID_Undefined";

/// Prefix of identifiers for checks not yet covered by a published VUID.
pub const VUID_UNASSIGNED_PREFIX: &str = "UNASSIGNED-";

/// Message used when the caller could not produce one.
pub const ALLOCATION_FAILURE_MESSAGE: &str = "Allocation failure";

/// Lookup from VUID to the reference text it cites.
pub trait VuidCatalog: Send + Sync {
	fn lookup(&self, vuid: &str) -> Option<&str>;
}

/// Catalog backed by a static `(vuid, text)` table, searched linearly.
#[derive(Debug, Clone, Copy)]
pub struct StaticVuidCatalog {
	entries: &'static [(&'static str, &'static str)],
}

impl StaticVuidCatalog {
	pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
		Self { entries }
	}
}

impl VuidCatalog for StaticVuidCatalog {
	fn lookup(&self, vuid: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(id, _)| *id == vuid)
			.map(|(_, text)| *text)
	}
}

/// True when `vuid` names no finding class at all.
pub fn is_undefined(vuid: &str) -> bool {
	vuid.is_empty() || vuid == VUID_UNDEFINED
}

/// True when `vuid` is expected to have catalog text.
pub fn expects_catalog_text(vuid: &str) -> bool {
	!vuid.is_empty() && !vuid.contains(VUID_UNASSIGNED_PREFIX) && !vuid.contains(VUID_UNDEFINED)
}

/// Appends catalog text for `vuid` to `message`, substituting the allocation
/// failure placeholder for an absent message.
///
/// # Panics
///
/// Panics when `vuid` expects catalog text but `catalog` has no entry. Every
/// identifier emitted by validation code must be present in the catalog.
pub fn finish_message(catalog: Option<&dyn VuidCatalog>, vuid: &str, message: Option<&str>) -> String {
	let mut out = String::from(message.unwrap_or(ALLOCATION_FAILURE_MESSAGE));
	let Some(catalog) = catalog else {
		return out;
	};
	if !expects_catalog_text(vuid) {
		return out;
	}
	match catalog.lookup(vuid) {
		Some(text) => {
			out.push_str(" The Vulkan spec states: ");
			out.push_str(text);
			out
		}
		None => panic!("VUID {vuid:?} is not present in the VUID catalog"),
	}
}
