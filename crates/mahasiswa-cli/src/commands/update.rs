//! Update command implementation.
//!
//! Loads the record first so that fields not given on the command line keep
//! their current values.

use anyhow::{Context, Result, bail};
use clap::Args;

use mahasiswa_core::Nim;
use mahasiswa_viewstate::ViewState;

use crate::commands::FieldArgs;
use crate::container::AppContainer;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Student number of the record to edit
    pub nim: String,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Print the updated record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: UpdateArgs, container: &AppContainer) -> Result<()> {
    let nim = Nim::new(&args.nim).context("Invalid NIM")?;

    if args.fields.is_empty() {
        bail!("Nothing to update. Pass at least one of --name, --address, --gender, --class, --year");
    }

    let vm = container.update_view_model();
    vm.load(nim);

    match vm.settled().await {
        ViewState::Success(_) => {}
        ViewState::Error(message) => bail!(message),
        state => bail!("Load did not settle (state: {:?})", state),
    }

    vm.edit(|draft| args.fields.apply(draft));

    if vm.submit().is_none() {
        return match vm.state() {
            ViewState::Error(message) => bail!(message),
            state => bail!("Submit was rejected (state: {:?})", state),
        };
    }

    match vm.settled().await {
        ViewState::Success(record) => {
            if args.json {
                output::json_pretty(&record)?;
            } else {
                output::record(&record);
                output::success("Record updated");
            }
            Ok(())
        }
        ViewState::Error(message) => bail!(message),
        state => bail!("Update did not settle (state: {:?})", state),
    }
}
