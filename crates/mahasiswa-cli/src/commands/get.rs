//! Get command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use mahasiswa_core::Nim;
use mahasiswa_viewstate::ViewState;

use crate::container::AppContainer;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Student number of the record
    pub nim: String,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GetArgs, container: &AppContainer) -> Result<()> {
    let nim = Nim::new(&args.nim).context("Invalid NIM")?;
    let vm = container.detail_view_model(nim);

    match vm.settled().await {
        ViewState::Success(record) => {
            if args.json {
                output::json_pretty(&record)?;
            } else {
                output::record(&record);
            }
            Ok(())
        }
        ViewState::Error(message) => bail!(message),
        state => bail!("Lookup did not settle (state: {:?})", state),
    }
}
