use std::{
	fs,
	path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, WrapErr};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use rentmatch_domain::Listing;
use rentmatch_service::{Error, Facets, InMemoryCatalog, ListingProvider, Matcher};

#[derive(Debug, Parser)]
#[command(
	version = rentmatch_cli::VERSION,
	rename_all = "kebab",
	styles = rentmatch_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Listing catalog to load instead of `catalog.path`.
	#[arg(long, value_name = "FILE")]
	pub catalog: Option<PathBuf>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Match a free-text query and print the result with the criteria used.
	Search {
		/// Query words; an empty query browses the catalog.
		#[arg(num_args = 0..)]
		query: Vec<String>,
		/// Criteria JSON to use instead of extracting criteria from the query.
		#[arg(long, value_name = "JSON")]
		criteria: Option<String>,
	},
	/// Print one listing.
	Show { id: String },
	/// Print distinct localities, property types, furnishing statuses, and rent/area ranges.
	Facets,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = rentmatch_config::load(&args.config)?;

	init_tracing(&config.service.log_level);

	let catalog_path = match args.catalog {
		Some(path) => path,
		None => resolve_catalog_path(&args.config, &config.catalog.path),
	};
	let provider = InMemoryCatalog::new(load_catalog(&catalog_path)?);

	tracing::info!(path = %catalog_path.display(), listings = provider.len(), "Catalog loaded.");

	let matcher = Matcher::from_config(&config);
	let output = execute(&args.command, &provider, &matcher)?;

	println!("{}", serde_json::to_string_pretty(&output)?);

	Ok(())
}

pub fn execute(
	command: &Command,
	provider: &dyn ListingProvider,
	matcher: &Matcher,
) -> color_eyre::Result<Value> {
	match command {
		Command::Search { query, criteria } => {
			let query = query.join(" ");
			let result = match criteria {
				Some(raw) => {
					let parsed = rentmatch_service::criteria_from_json(raw)?;

					for warning in &parsed.warnings {
						tracing::warn!(
							field = warning.field,
							reason = %warning.reason,
							"Criteria field ignored."
						);
					}

					matcher.run_with_criteria(provider, &query, parsed.criteria)?
				},
				None => matcher.run(provider, &query)?,
			};

			Ok(serde_json::to_value(&result)?)
		},
		Command::Show { id } => {
			let listing = provider
				.listing_by_id(id)
				.ok_or_else(|| eyre::eyre!("Listing {id} was not found."))?;

			Ok(serde_json::to_value(&listing)?)
		},
		Command::Facets => {
			let listings = provider.all_listings().ok_or(Error::CatalogUnavailable)?;

			Ok(serde_json::to_value(Facets::from_listings(&listings))?)
		},
	}
}

/// Reads a JSON array of listings.
pub fn load_catalog(path: &Path) -> color_eyre::Result<Vec<Listing>> {
	let raw = fs::read_to_string(path)
		.wrap_err_with(|| format!("Failed to read catalog at {}.", path.display()))?;
	let listings = serde_json::from_str(&raw)
		.wrap_err_with(|| format!("Failed to parse catalog at {}.", path.display()))?;

	Ok(listings)
}

/// A relative `catalog.path` is taken relative to the config file's directory.
pub fn resolve_catalog_path(config_path: &Path, catalog_path: &Path) -> PathBuf {
	if catalog_path.is_absolute() {
		return catalog_path.to_path_buf();
	}

	match config_path.parent() {
		Some(dir) => dir.join(catalog_path),
		None => catalog_path.to_path_buf(),
	}
}

fn init_tracing(log_level: &str) {
	let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
