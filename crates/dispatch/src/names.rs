//! Display names for object handles, set through either naming scheme.

use rustc_hash::FxHashMap as HashMap;

use crate::callbacks::Scheme;

/// Two independent handle-to-name maps, one per naming scheme.
///
/// Lookups prefer the utils-scheme name and fall back to the report-scheme
/// (debug marker) name. Empty names are never stored.
#[derive(Debug, Default)]
pub struct ObjectNames {
	report: HashMap<u64, String>,
	utils: HashMap<u64, String>,
}

impl ObjectNames {
	fn map_mut(&mut self, scheme: Scheme) -> &mut HashMap<u64, String> {
		match scheme {
			Scheme::Report => &mut self.report,
			Scheme::Utils => &mut self.utils,
		}
	}

	/// Sets or clears the name of `handle` under `scheme`.
	///
	/// An absent or empty name removes any existing entry.
	pub fn set(&mut self, scheme: Scheme, handle: u64, name: Option<&str>) {
		let map = self.map_mut(scheme);
		match name.filter(|n| !n.is_empty()) {
			Some(name) => {
				map.insert(handle, name.to_owned());
			}
			None => {
				map.remove(&handle);
			}
		}
	}

	/// Returns the name registered under one specific scheme.
	pub fn get(&self, scheme: Scheme, handle: u64) -> Option<&str> {
		let map = match scheme {
			Scheme::Report => &self.report,
			Scheme::Utils => &self.utils,
		};
		map.get(&handle).map(String::as_str)
	}

	/// Resolves the display name for `handle`, preferring the utils scheme.
	pub fn resolve(&self, handle: u64) -> Option<&str> {
		self.get(Scheme::Utils, handle)
			.or_else(|| self.get(Scheme::Report, handle))
	}
}
