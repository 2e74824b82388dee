//! Teardown of the dispatch state and the instance-temporary callback window.
//!
//! Callback create infos embedded in the instance creation chain are live only
//! while the instance itself is being created or destroyed. The owning layer
//! brackets those calls with [`DebugReport::activate_instance_callbacks`] and
//! [`DebugReport::deactivate_instance_callbacks`], or holds an
//! [`InstanceCallbackScope`] for the duration.

use crate::callbacks::{
	CallbackCreateInfo, CallbackStatus, InstanceHandles, MessengerCreateInfo,
	ReportCallbackCreateInfo,
};
use crate::state::DebugReport;

/// One structure in an instance creation chain.
#[derive(Debug, Clone)]
pub enum ChainStruct {
	DebugReport(ReportCallbackCreateInfo),
	DebugUtils(MessengerCreateInfo),
	/// Any structure unrelated to debug callbacks, by structure type.
	Other(u32),
}

impl ChainStruct {
	fn callback_info(&self) -> Option<CallbackCreateInfo> {
		match self {
			Self::DebugReport(info) => Some(info.clone().into()),
			Self::DebugUtils(info) => Some(info.clone().into()),
			Self::Other(_) => None,
		}
	}
}

impl DebugReport {
	/// Replaces the instance creation chain scanned by activation.
	pub fn set_instance_chain(&self, chain: impl IntoIterator<Item = ChainStruct>) {
		self.state.lock().instance_chain = chain.into_iter().collect();
	}

	/// Registers one instance-temporary sink per callback create info in the
	/// instance chain, in chain order. Returns how many were registered.
	pub fn activate_instance_callbacks(&self) -> usize {
		let mut guard = self.state.lock();
		let state = &mut *guard;
		let mut count = 0;
		for info in state.instance_chain.iter().filter_map(ChainStruct::callback_info) {
			state
				.callbacks
				.register_synthetic(CallbackStatus::INSTANCE, info);
			count += 1;
		}
		if count > 0 {
			tracing::debug!(count, "activated instance callbacks");
		}
		count
	}

	/// Handles of the currently registered instance-temporary sinks.
	pub fn instance_callback_handles(&self) -> InstanceHandles {
		self.state.lock().callbacks.instance_handles()
	}

	/// Removes every instance-temporary sink. A no-op when the instance chain
	/// carries no callback create infos.
	pub fn deactivate_instance_callbacks(&self) {
		let mut state = self.state.lock();
		let has_callbacks = state
			.instance_chain
			.iter()
			.any(|s| s.callback_info().is_some());
		if !has_callbacks {
			return;
		}

		let handles = state.callbacks.instance_handles();
		for handle in handles.utils.iter().chain(&handles.report) {
			state.callbacks.remove(*handle);
		}
		tracing::debug!(
			utils = handles.utils.len(),
			report = handles.report.len(),
			"deactivated instance callbacks"
		);
	}

	/// Activates instance callbacks until the returned guard is dropped.
	pub fn instance_scope(&self) -> InstanceCallbackScope<'_> {
		self.activate_instance_callbacks();
		InstanceCallbackScope { report: self }
	}

	/// Unregisters every sink and releases the state.
	pub fn destroy(self) {
		self.state.lock().callbacks.remove_all();
		tracing::debug!("destroyed debug report state");
	}
}

/// Tears down `report` if present.
pub fn destroy(report: Option<DebugReport>) {
	if let Some(report) = report {
		report.destroy();
	}
}

/// Keeps instance-temporary callbacks registered while alive.
#[must_use = "instance callbacks are removed as soon as the scope is dropped"]
#[derive(Debug)]
pub struct InstanceCallbackScope<'a> {
	report: &'a DebugReport,
}

impl Drop for InstanceCallbackScope<'_> {
	fn drop(&mut self) {
		self.report.deactivate_instance_callbacks();
	}
}

#[cfg(test)]
mod tests;
