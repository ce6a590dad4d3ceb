//! Create command implementation.

use anyhow::{Result, bail};
use clap::Args;

use mahasiswa_viewstate::ViewState;

use crate::commands::FieldArgs;
use crate::container::AppContainer;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Student number for the new record
    #[arg(long)]
    pub nim: String,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Print the created record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: CreateArgs, container: &AppContainer) -> Result<()> {
    let vm = container.insert_view_model();

    vm.edit(|draft| {
        draft.nim = args.nim.clone();
        args.fields.apply(draft);
    });

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
                output::success("Record created");
            }
            Ok(())
        }
        ViewState::Error(message) => bail!(message),
        state => bail!("Insert did not settle (state: {:?})", state),
    }
}
