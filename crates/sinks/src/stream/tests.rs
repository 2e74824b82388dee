use layerlog_dispatch::{
	DebugReport, Label, LabelTarget, ObjectNameInfo, ObjectType, Scheme, VUID_UNDEFINED,
};

use super::*;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
	fn text(&self) -> String {
		String::from_utf8(self.0.lock().clone()).unwrap()
	}
}

impl Write for Capture {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[test]
fn report_line_format() {
	let msg = ReportMessage {
		flags: ReportFlags::ERROR,
		object_type: ObjectType::Device,
		object: 1,
		location: 0,
		message_code: 0,
		layer_prefix: "Validation",
		message: "Object: 0x1 (Type = VkDevice) | lost",
	};
	assert_eq!(
		format_report_message(&msg),
		"Validation(ERROR): msg_code: 0: Object: 0x1 (Type = VkDevice) | lost\n"
	);
}

#[test]
fn messenger_block_lists_objects() {
	let objects = [ObjectNameInfo {
		object_type: ObjectType::Queue,
		handle: 0x2a,
		name: None,
	}];
	let labels: [Label; 0] = [];
	let data = CallbackData {
		message_id_name: "UNASSIGNED-q",
		message_id_number: 0,
		message: "stalled",
		objects: &objects,
		queue_labels: &labels,
		cmd_buf_labels: &labels,
	};
	assert_eq!(
		format_messenger_message(MessageSeverity::WARNING, MessageType::PERFORMANCE, &data),
		"UNASSIGNED-q(WARNING / PERFORMANCE): msgNum: 0 - stalled\n    Objects: 1\n        [0] 0x2a, type: 4, name: NULL\n"
	);
}

#[test]
fn report_sink_writes_through_dispatch() {
	let capture = Capture::default();
	let report = DebugReport::new();
	report
		.create_report_callback(
			false,
			report_sink(ReportFlags::ERROR | ReportFlags::WARNING, LogOutput::new(capture.clone())),
			None,
		)
		.unwrap();

	report.log(ReportFlags::WARNING, ObjectType::Image, 0x10, VUID_UNDEFINED, "layout mismatch");
	report.log(ReportFlags::INFORMATION, ObjectType::Image, 0x10, VUID_UNDEFINED, "filtered out");

	assert_eq!(
		capture.text(),
		"Validation(WARN): msg_code: 0: Object: 0x10 (Type = VkImage) | layout mismatch\n"
	);
}

#[test]
fn messenger_sink_writes_names_and_ignores_labels() {
	let capture = Capture::default();
	let report = DebugReport::new();
	report
		.create_messenger(
			false,
			messenger_sink(MessageSeverity::ERROR, MessageType::VALIDATION, LogOutput::new(capture.clone())),
			None,
		)
		.unwrap();
	report.set_object_name(Scheme::Utils, 0x3, Some("present"));
	report.begin_label(LabelTarget::Queue(0x3), Some(Label::new("frame", [0.0; 4])));

	report.log(ReportFlags::ERROR, ObjectType::Queue, 0x3, "UNASSIGNED-p", "oops");

	assert_eq!(
		capture.text(),
		"UNASSIGNED-p(ERROR / VALIDATION): msgNum: 0 - oops\n    Objects: 1\n        [0] 0x3, type: 4, name: present\n"
	);
}

#[test]
fn file_output_reports_bad_path() {
	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join("no/such/dir/log.txt");
	let err = LogOutput::file(&missing).unwrap_err();
	assert!(matches!(err, SinkError::Io { ref path, .. } if *path == missing));
}

#[test]
fn file_output_appends_lines() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("layer.log");
	let output = LogOutput::file(&path).unwrap();
	output.write_str("one\n");
	output.write_str("two\n");
	assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn messenger_objects_print_core_type() {
	let objects = [
		ObjectNameInfo {
			object_type: ObjectType::Swapchain,
			handle: 0x7,
			name: Some("main".to_owned()),
		},
		ObjectNameInfo {
			object_type: ObjectType::from_raw(31),
			handle: 0x8,
			name: None,
		},
	];
	let data = CallbackData {
		message_id_name: "UNASSIGNED-s",
		message_id_number: 0,
		message: "out of date",
		objects: &objects,
		queue_labels: &[],
		cmd_buf_labels: &[],
	};
	let text = format_messenger_message(MessageSeverity::ERROR, MessageType::VALIDATION, &data);
	assert!(text.contains("        [0] 0x7, type: 1000001000, name: main\n"));
	assert!(text.contains("        [1] 0x8, type: 0, name: NULL\n"));
}
