use std::{
	env, fs,
	path::{Path, PathBuf},
	process,
	sync::atomic::{AtomicU64, Ordering},
};

use clap::Parser;

use rentmatch_query::{Args, Command, execute, load_catalog, resolve_catalog_path};
use rentmatch_service::{InMemoryCatalog, Matcher};

static NEXT_FILE: AtomicU64 = AtomicU64::new(0);

fn write_temp_catalog(contents: &str) -> PathBuf {
	let n = NEXT_FILE.fetch_add(1, Ordering::Relaxed);
	let path = env::temp_dir().join(format!("rentmatch_catalog_{}_{n}.json", process::id()));

	fs::write(&path, contents).expect("Failed to write test catalog.");

	path
}

fn provider() -> InMemoryCatalog {
	InMemoryCatalog::new(rentmatch_testkit::sample_catalog().expect("fixture is valid JSON"))
}

#[test]
fn loads_catalog_from_json_file() {
	let path = write_temp_catalog(rentmatch_testkit::SAMPLE_CATALOG_JSON);
	let listings = load_catalog(&path).expect("catalog loads");

	fs::remove_file(&path).expect("Failed to remove test catalog.");

	assert_eq!(listings.len(), 12);
	assert_eq!(listings[0].property_id, "CHN-001");
}

#[test]
fn missing_fields_load_as_empty_values() {
	let path = write_temp_catalog(r#"[{"property_id": "X-1", "rent": 15000}]"#);
	let listings = load_catalog(&path).expect("catalog loads");

	fs::remove_file(&path).expect("Failed to remove test catalog.");

	assert_eq!(listings[0].bhk, 0);
	assert!(listings[0].amenities.is_empty());
	assert!(!listings[0].pets_allowed);
}

#[test]
fn malformed_catalog_is_reported() {
	let path = write_temp_catalog("{\"listings\": ");
	let err = load_catalog(&path).expect_err("catalog must not load");

	fs::remove_file(&path).expect("Failed to remove test catalog.");

	assert!(err.to_string().contains("Failed to parse catalog"), "Unexpected error: {err}");
}

#[test]
fn relative_catalog_path_follows_the_config() {
	assert_eq!(
		resolve_catalog_path(Path::new("/etc/rentmatch/rentmatch.toml"), Path::new("data/l.json")),
		PathBuf::from("/etc/rentmatch/data/l.json")
	);
	assert_eq!(
		resolve_catalog_path(Path::new("/etc/rentmatch.toml"), Path::new("/srv/l.json")),
		PathBuf::from("/srv/l.json")
	);
}

#[test]
fn parses_search_arguments() {
	let args = Args::try_parse_from([
		"rentmatch-query",
		"-c",
		"rentmatch.toml",
		"search",
		"2bhk",
		"in",
		"adyar",
		"--criteria",
		"{}",
	])
	.expect("arguments parse");

	match args.command {
		Command::Search { query, criteria } => {
			assert_eq!(query, vec!["2bhk", "in", "adyar"]);
			assert_eq!(criteria.as_deref(), Some("{}"));
		},
		other => panic!("Unexpected command: {other:?}"),
	}
}

#[test]
fn search_prints_stage_and_criteria() {
	let command = Command::Search {
		query: vec!["2bhk".to_string(), "in".to_string(), "adyar".to_string()],
		criteria: None,
	};
	let output = execute(&command, &provider(), &Matcher::default()).expect("search runs");

	assert_eq!(output["stage"], "filtered");
	assert_eq!(output["criteria"]["locality"], "Adyar");
	assert_eq!(output["listings"][0]["property_id"], "CHN-001");
}

#[test]
fn show_reports_unknown_ids() {
	let command = Command::Show { id: "CHN-404".to_string() };
	let err = execute(&command, &provider(), &Matcher::default()).expect_err("id is unknown");

	assert!(err.to_string().contains("CHN-404"));
}

#[test]
fn facets_summarize_the_catalog() {
	let output = execute(&Command::Facets, &provider(), &Matcher::default()).expect("facets run");

	assert_eq!(output["rent"]["min"], 12_000.0);
	assert_eq!(output["rent"]["max"], 120_000.0);
	assert_eq!(output["furnishing_statuses"].as_array().map(Vec::len), Some(3));
}
