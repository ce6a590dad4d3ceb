//! Delete command implementation.
//!
//! Mirrors the list screen: the list is shown, the record is removed, and
//! the list is refreshed afterwards.

use anyhow::{Context, Result, bail};
use clap::Args;

use mahasiswa_core::Nim;
use mahasiswa_viewstate::ViewState;

use crate::container::AppContainer;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Student number of the record to delete
    pub nim: String,

    /// Do not print the remaining records
    #[arg(long, short)]
    pub quiet: bool,
}

pub async fn run(args: DeleteArgs, container: &AppContainer) -> Result<()> {
    let nim = Nim::new(&args.nim).context("Invalid NIM")?;
    let vm = container.list_view_model();

    // Let the initial load finish so the refresh below is the last write.
    vm.settled().await;

    let outcome = vm
        .remove(nim.clone())
        .await
        .context("Delete task failed")?;

    match outcome {
        Some(Ok(())) => {}
        Some(Err(e)) => bail!("Failed to delete mahasiswa {}: {}", nim, e),
        None => bail!("Delete of {} was cancelled", nim),
    }

    vm.refresh();
    let state = vm.settled().await;

    output::success(&format!("Deleted {}", nim));

    if args.quiet {
        return Ok(());
    }

    match state {
        ViewState::Success(records) => {
            output::records(&records);
            Ok(())
        }
        ViewState::Error(e) => bail!("Record deleted but the list could not be reloaded: {}", e),
        state => bail!("List did not settle (state: {:?})", state),
    }
}
