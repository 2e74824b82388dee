use super::*;

#[test]
fn empty_text_uses_defaults() {
	let config = SinkConfig::from_toml("").unwrap();
	assert_eq!(config, SinkConfig::default());
	assert_eq!(config.flags(), ReportFlags::ERROR);
	assert_eq!(config.log_target(), LogTarget::Stdout);
	assert!(config.has_action(DebugAction::Log));
}

#[test]
fn full_config_parses() {
	let config = SinkConfig::from_toml(
		r#"
		debug_action = ["log", "break"]
		report_flags = ["error", "warn", "perf"]
		log_filename = "layer.log"
		"#,
	)
	.unwrap();
	assert_eq!(config.debug_action, [DebugAction::Log, DebugAction::Break]);
	assert_eq!(
		config.flags(),
		ReportFlags::ERROR | ReportFlags::WARNING | ReportFlags::PERFORMANCE_WARNING
	);
	assert_eq!(config.log_target(), LogTarget::File(PathBuf::from("layer.log")));
}

#[test]
fn stdout_filename_is_not_a_file() {
	let config = SinkConfig::from_toml(r#"log_filename = "stdout""#).unwrap();
	assert_eq!(config.log_target(), LogTarget::Stdout);
}

#[test]
fn unknown_flag_is_rejected() {
	let err = SinkConfig::from_toml(r#"report_flags = ["fatal"]"#).unwrap_err();
	assert!(matches!(err, SinkError::Parse(_)));
}

#[test]
fn unknown_key_is_rejected() {
	assert!(SinkConfig::from_toml("verbosity = 3").is_err());
}

#[test]
fn load_reads_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("sinks.toml");
	std::fs::write(&path, r#"debug_action = ["ignore"]"#).unwrap();
	let config = SinkConfig::load(&path).unwrap();
	assert_eq!(config.debug_action, [DebugAction::Ignore]);

	let err = SinkConfig::load(&dir.path().join("missing.toml")).unwrap_err();
	assert!(matches!(err, SinkError::Io { .. }));
}
