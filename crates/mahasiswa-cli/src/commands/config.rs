//! Config command implementation.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};

use mahasiswa_core::BaseUrl;

use crate::output;
use crate::settings::{self, storage};

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show the effective settings and where they come from
    Show,

    /// Store a default base URL and/or request timeout
    Set(SetArgs),

    /// Remove stored settings
    Reset,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Base URL to use when --base-url is not given
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds for HTTP backends
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

pub fn run(cmd: ConfigCommand, override_url: Option<&str>) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(override_url),
        ConfigSubcommand::Set(args) => set(args),
        ConfigSubcommand::Reset => reset(),
    }
}

fn show(override_url: Option<&str>) -> Result<()> {
    let settings = settings::resolve(override_url)?;

    output::field("Base URL", settings.base_url.as_str());
    output::field("Source", &settings.source.to_string());
    output::field(
        "Timeout",
        &settings
            .timeout
            .map(|t| format!("{}s", t.as_secs()))
            .unwrap_or_else(|| "none".to_string()),
    );
    output::field("Settings file", &storage::settings_path()?.display().to_string());

    Ok(())
}

fn set(args: SetArgs) -> Result<()> {
    if args.url.is_none() && args.timeout_secs.is_none() {
        bail!("Nothing to store. Pass --url and/or --timeout-secs");
    }

    let mut stored = storage::load()?.unwrap_or_default();

    if let Some(url) = &args.url {
        let base_url = BaseUrl::new(url).context("Invalid base URL")?;
        stored.base_url = Some(base_url.to_string());
    }
    if let Some(secs) = args.timeout_secs {
        stored.timeout_secs = Some(secs);
    }

    storage::save(&stored)?;

    if let Some(url) = &stored.base_url {
        output::field("Base URL", url);
    }
    if let Some(secs) = stored.timeout_secs {
        output::field("Timeout", &format!("{}s", secs));
    }
    output::success("Settings saved");

    Ok(())
}

fn reset() -> Result<()> {
    if storage::clear()? {
        output::success("Stored settings removed");
    } else {
        output::success("No stored settings");
    }
    Ok(())
}
