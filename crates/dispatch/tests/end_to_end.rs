use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use layerlog_dispatch::{
	DebugReport, Label, LabelTarget, MessageSeverity, MessageType, MessengerCreateInfo,
	ObjectType, ReportFlags, Scheme, VUID_UNDEFINED,
};
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct Seen {
	calls: usize,
	object_name: Option<String>,
	queue_labels: Vec<String>,
}

fn queue_error_scenario(stop: bool) {
	let report = DebugReport::new();
	let seen = Arc::new(Mutex::new(Seen::default()));
	let sink_seen = seen.clone();
	report
		.create_messenger(
			false,
			MessengerCreateInfo::new(MessageSeverity::ERROR, MessageType::VALIDATION, move |_, _, data| {
				let mut seen = sink_seen.lock();
				seen.calls += 1;
				seen.object_name = data.objects[0].name.clone();
				seen.queue_labels = data.queue_labels.iter().map(|l| l.name.clone()).collect();
				stop
			}),
			None,
		)
		.unwrap();

	let queue = 0x5151_0000;
	report.set_object_name(Scheme::Utils, queue, Some("graphics queue"));
	report.begin_label(LabelTarget::Queue(queue), Some(Label::new("outer", [1.0, 0.0, 0.0, 1.0])));
	report.begin_label(LabelTarget::Queue(queue), Some(Label::new("inner", [0.0, 1.0, 0.0, 1.0])));

	let result = report.log(ReportFlags::ERROR, ObjectType::Queue, queue, VUID_UNDEFINED, "submit failed");

	let seen = seen.lock();
	assert_eq!(seen.calls, 1);
	assert_eq!(seen.object_name.as_deref(), Some("graphics queue"));
	assert_eq!(seen.queue_labels, ["inner", "outer"]);
	assert_eq!(result, stop);
}

#[test]
fn named_queue_with_labels_reaches_messenger() {
	queue_error_scenario(false);
}

#[test]
fn dispatch_result_follows_sink_vote() {
	queue_error_scenario(true);
}

#[test]
fn legacy_then_modern_names_resolve_modern_first() {
	let report = DebugReport::new();
	report.set_object_name(Scheme::Report, 0x42, Some("Foo"));
	report.set_object_name(Scheme::Utils, 0x42, Some("Bar"));
	assert_eq!(report.object_name(0x42).as_deref(), Some("Bar"));

	report.set_object_name(Scheme::Utils, 0x42, Some(""));
	assert_eq!(report.object_name(0x42).as_deref(), Some("Foo"));
}

#[test]
fn remove_all_silences_dispatch() {
	let report = DebugReport::new();
	let hits = Arc::new(AtomicUsize::new(0));
	let sink_hits = hits.clone();
	report
		.create_messenger(
			false,
			MessengerCreateInfo::new(MessageSeverity::all(), MessageType::all(), move |_, _, _| {
				sink_hits.fetch_add(1, Ordering::SeqCst);
				true
			}),
			None,
		)
		.unwrap();

	report.remove_all_callbacks();
	assert!(!report.log(ReportFlags::ERROR, ObjectType::Device, 1, VUID_UNDEFINED, "m"));
	assert_eq!(hits.load(Ordering::SeqCst), 0);
}
