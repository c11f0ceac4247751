use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = rentmatch_query::Args::parse();
	rentmatch_query::run(args)
}
