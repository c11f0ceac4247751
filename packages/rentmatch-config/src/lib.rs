mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Catalog, Config, DEFAULT_BROWSE_LIMIT, DEFAULT_FALLBACK_LIMIT, DEFAULT_MAX_RESULTS,
	DEFAULT_RANK_LIMIT, Extraction, Matching, Service,
};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse_at(&raw, path)
}

/// Parses, normalizes, and validates a config held in memory.
pub fn parse(raw: &str) -> Result<Config> {
	parse_at(raw, Path::new("<inline>"))
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.catalog.path.as_os_str().is_empty() {
		return Err(Error::invalid("catalog.path", "must be non-empty."));
	}

	validate_matching(&cfg.matching)?;

	if let Some(localities) = cfg.extraction.localities.as_ref()
		&& localities.iter().any(|locality| locality.trim().is_empty())
	{
		return Err(Error::invalid("extraction.localities", "must not contain blank entries."));
	}

	Ok(())
}

pub fn validate_matching(matching: &Matching) -> Result<()> {
	for (field, value) in [
		("matching.browse_limit", matching.browse_limit),
		("matching.rank_limit", matching.rank_limit),
		("matching.fallback_limit", matching.fallback_limit),
		("matching.max_results", matching.max_results),
	] {
		if value == 0 {
			return Err(Error::invalid(field, "must be greater than zero."));
		}
	}
	for (field, value) in [
		("matching.browse_limit", matching.browse_limit),
		("matching.rank_limit", matching.rank_limit),
		("matching.fallback_limit", matching.fallback_limit),
	] {
		if value > matching.max_results {
			return Err(Error::invalid(
				field,
				format!("must not exceed matching.max_results ({}).", matching.max_results),
			));
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
	if let Some(localities) = cfg.extraction.localities.take() {
		let cleaned: Vec<String> = localities
			.into_iter()
			.map(|locality| locality.trim().to_lowercase())
			.filter(|locality| !locality.is_empty())
			.collect();

		cfg.extraction.localities = if cleaned.is_empty() { None } else { Some(cleaned) };
	}
}

fn parse_at(raw: &str, path: &Path) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}
