use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::flags::{MessageSeverity, MessageType, ReportFlags};
use crate::object::ObjectType;
use crate::{SinkHandle, VUID_UNDEFINED};

fn chain(hits: &Arc<AtomicUsize>) -> Vec<ChainStruct> {
	let utils_hits = hits.clone();
	let report_hits = hits.clone();
	vec![
		ChainStruct::Other(1000),
		ChainStruct::DebugUtils(MessengerCreateInfo::new(
			MessageSeverity::ERROR,
			MessageType::VALIDATION,
			move |_, _, _| {
				utils_hits.fetch_add(1, Ordering::SeqCst);
				false
			},
		)),
		ChainStruct::DebugReport(ReportCallbackCreateInfo::new(ReportFlags::ERROR, move |_| {
			report_hits.fetch_add(10, Ordering::SeqCst);
			false
		})),
	]
}

#[test]
fn activation_registers_chain_callbacks_in_order() {
	let hits = Arc::new(AtomicUsize::new(0));
	let report = DebugReport::builder().instance_chain(chain(&hits)).build();

	assert_eq!(report.activate_instance_callbacks(), 2);
	let handles = report.instance_callback_handles();
	assert_eq!(handles.utils.len(), 1);
	assert_eq!(handles.report.len(), 1);
	assert!(handles.utils[0] < handles.report[0]);

	report.log(ReportFlags::ERROR, ObjectType::Instance, 0x1, VUID_UNDEFINED, "m");
	assert_eq!(hits.load(Ordering::SeqCst), 11);
}

#[test]
fn deactivation_removes_only_instance_callbacks() {
	let hits = Arc::new(AtomicUsize::new(0));
	let report = DebugReport::builder().instance_chain(chain(&hits)).build();
	let user = report
		.create_report_callback(false, ReportCallbackCreateInfo::new(ReportFlags::ERROR, |_| false), None)
		.unwrap();

	report.activate_instance_callbacks();
	assert_eq!(report.callback_count(), 3);

	report.deactivate_instance_callbacks();
	assert_eq!(report.callback_count(), 1);
	assert!(report.instance_callback_handles().is_empty());
	assert!(report.remove_callback(user));
}

#[test]
fn deactivation_without_chain_callbacks_is_noop() {
	let report = DebugReport::builder()
		.instance_chain([ChainStruct::Other(7)])
		.build();
	// Registered directly with the instance role; not reachable from the chain.
	report
		.register(
			CallbackStatus::INSTANCE,
			ReportCallbackCreateInfo::new(ReportFlags::ERROR, |_| false),
			None,
		)
		.unwrap();

	assert_eq!(report.activate_instance_callbacks(), 0);
	report.deactivate_instance_callbacks();
	assert_eq!(report.callback_count(), 1);
}

#[test]
fn scope_guard_brackets_activation() {
	let hits = Arc::new(AtomicUsize::new(0));
	let report = DebugReport::new();
	report.set_instance_chain(chain(&hits));
	{
		let _scope = report.instance_scope();
		assert_eq!(report.callback_count(), 2);
	}
	assert_eq!(report.callback_count(), 0);
	assert_eq!(report.active_severities(), MessageSeverity::empty());
}

#[test]
fn destroy_accepts_none_and_some() {
	destroy(None);

	let report = DebugReport::new();
	report
		.register(
			CallbackStatus::empty(),
			ReportCallbackCreateInfo::new(ReportFlags::ERROR, |_| false),
			SinkHandle::new(5),
		)
		.unwrap();
	destroy(Some(report));
}
