use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use rentmatch_config::{Config, Error, Matching};

const SAMPLE_CONFIG_TOML: &str = include_str!("fixtures/sample_config.toml");

fn sample_toml_with_matching(
	browse_limit: i64,
	rank_limit: i64,
	fallback_limit: i64,
	max_results: i64,
) -> String {
	let mut value: Value =
		toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample config.");
	let root = value.as_table_mut().expect("Sample config must be a table.");
	let matching = root
		.get_mut("matching")
		.and_then(Value::as_table_mut)
		.expect("Sample config must include [matching].");

	matching.insert("browse_limit".to_string(), Value::Integer(browse_limit));
	matching.insert("rank_limit".to_string(), Value::Integer(rank_limit));
	matching.insert("fallback_limit".to_string(), Value::Integer(fallback_limit));
	matching.insert("max_results".to_string(), Value::Integer(max_results));

	toml::to_string(&value).expect("Failed to render sample config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("rentmatch_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

#[test]
fn loads_sample_config_from_disk() {
	let path = write_temp_config(SAMPLE_CONFIG_TOML.to_string());
	let result = rentmatch_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Sample config must load.");

	assert_eq!(cfg.service.log_level, "info");
	assert_eq!(cfg.catalog.path, PathBuf::from("data/chennai_listings.json"));
	assert_eq!(cfg.matching, Matching::default());
	assert_eq!(
		cfg.extraction.localities,
		Some(vec!["adyar".to_string(), "anna nagar".to_string(), "velachery".to_string()])
	);
}

#[test]
fn missing_file_reports_read_error() {
	let path = env::temp_dir().join("rentmatch_config_test_missing_file.toml");
	let err = rentmatch_config::load(&path).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadConfig { .. }), "Unexpected error: {err:?}");
}

#[test]
fn malformed_toml_reports_parse_error() {
	let err = rentmatch_config::parse("[service\nlog_level = 1").expect_err("Expected parse error.");

	assert!(matches!(err, Error::ParseConfig { .. }), "Unexpected error: {err:?}");
}

#[test]
fn optional_sections_fall_back_to_defaults() {
	let payload = r#"
[service]
log_level = "debug"

[catalog]
path = "listings.json"
"#;
	let cfg: Config = rentmatch_config::parse(payload).expect("Minimal config must load.");

	assert_eq!(cfg.matching.browse_limit, 20);
	assert_eq!(cfg.matching.rank_limit, 50);
	assert_eq!(cfg.matching.fallback_limit, 10);
	assert_eq!(cfg.matching.max_results, 50);
	assert!(cfg.extraction.localities.is_none());
}

#[test]
fn blank_log_level_normalizes_to_info() {
	let payload = r#"
[service]
log_level = "   "

[catalog]
path = "listings.json"
"#;
	let cfg = rentmatch_config::parse(payload).expect("Config must load.");

	assert_eq!(cfg.service.log_level, "info");
}

#[test]
fn gazetteer_entries_are_trimmed_and_lowercased() {
	let payload = r#"
[service]
log_level = "info"

[catalog]
path = "listings.json"

[extraction]
localities = ["  Adyar ", "", "T. Nagar"]
"#;
	let cfg = rentmatch_config::parse(payload).expect("Config must load.");

	assert_eq!(cfg.extraction.localities, Some(vec!["adyar".to_string(), "t. nagar".to_string()]));
}

#[test]
fn all_blank_gazetteer_becomes_unset() {
	let payload = r#"
[service]
log_level = "info"

[catalog]
path = "listings.json"

[extraction]
localities = [" ", ""]
"#;
	let cfg = rentmatch_config::parse(payload).expect("Config must load.");

	assert!(cfg.extraction.localities.is_none());
}

#[test]
fn zero_limits_are_rejected() {
	let payload = sample_toml_with_matching(0, 50, 10, 50);
	let err = rentmatch_config::parse(&payload).expect_err("Expected validation error.");
	let message = err.to_string();

	assert!(
		message.contains("matching.browse_limit must be greater than zero."),
		"Unexpected error message: {message}"
	);
}

#[test]
fn limits_must_not_exceed_max_results() {
	let payload = sample_toml_with_matching(20, 80, 10, 50);
	let err = rentmatch_config::parse(&payload).expect_err("Expected validation error.");
	let message = err.to_string();

	assert!(
		message.contains("matching.rank_limit must not exceed matching.max_results (50)."),
		"Unexpected error message: {message}"
	);
}

#[test]
fn empty_catalog_path_is_rejected() {
	let payload = r#"
[service]
log_level = "info"

[catalog]
path = ""
"#;
	let err = rentmatch_config::parse(payload).expect_err("Expected validation error.");

	assert!(matches!(err, Error::Validation { field: "catalog.path", .. }));
}
