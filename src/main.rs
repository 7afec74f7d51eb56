// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use log::debug;
use sphinx_filtration::{ApplyFilters, RecordingSphinxClient, load_definitions};

// ==========================
// CLI (Args / Enums)
// ==========================
mod cli {
    use std::path::PathBuf;

    use clap::Parser;

    #[derive(Debug, Clone, Copy, clap::ValueEnum)]
    pub enum OutputFormat {
        Json,
        Yaml,
    }

    #[derive(Parser, Debug)]
    #[command(
        name = "sphinx_filtration",
        version = sphinx_filtration::VERSION,
        about = "Resolve filter definitions into Sphinx client filter calls"
    )]
    pub struct Args {
        /// Filter definition file (.json, .yaml, .yml)
        pub path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        pub format: OutputFormat,
    }
}

// ==========================
// Output
// ==========================
mod output {
    use anyhow::Result;
    use sphinx_filtration::ApplyOutcome;

    use crate::cli::OutputFormat;

    pub fn emit(outcome: &ApplyOutcome, format: OutputFormat) -> Result<()> {
        let rendered = match format {
            OutputFormat::Json => serde_json::to_string_pretty(outcome)?,
            OutputFormat::Yaml => yaml(outcome)?,
        };
        println!("{}", rendered.trim_end());
        Ok(())
    }

    #[cfg(feature = "yaml")]
    fn yaml(outcome: &ApplyOutcome) -> Result<String> {
        Ok(serde_yaml::to_string(outcome)?)
    }

    #[cfg(not(feature = "yaml"))]
    fn yaml(_outcome: &ApplyOutcome) -> Result<String> {
        anyhow::bail!("YAML output requires the `yaml` feature")
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = cli::Args::parse();

    let document = load_definitions(&args.path)?;
    let filters = document.build()?;

    let mut client = RecordingSphinxClient::new();
    let outcome = ApplyFilters::new(&mut client).run(&filters)?;
    debug!("{} call(s) recorded", client.len());

    output::emit(&outcome, args.format)?;

    Ok(())
}
