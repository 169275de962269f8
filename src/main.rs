use anyhow::{bail, Result};
use clap::Parser;

use coral::{
    app::{init_config, load_config, load_config_file},
    catalog::GenerateMode,
    cli::{Cli, Commands},
    tui::{run_ui, App},
    utils::init_logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.verbose);

    if let Some(Commands::Init) = cli.command {
        return init_config();
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        load_config_file(config_path)?
    } else {
        load_config()?
    };

    // CLI overrides for the initial selections
    if let Some(site) = &cli.site {
        if !config.sites.allowed.contains(site) {
            bail!(
                "Unknown site '{}'. Allowed: {}",
                site,
                config.sites.allowed.join(", ")
            );
        }
        config.sites.default_site = site.clone();
    }
    if let Some(mode) = &cli.mode {
        match GenerateMode::parse(mode) {
            Some(parsed) => config.default_mode = parsed,
            None => bail!("Unknown mode '{}'. Expected list, summarize or generate", mode),
        }
    }

    let app = App::new(&config);
    run_ui(app)
}
