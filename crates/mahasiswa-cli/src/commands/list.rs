//! List command implementation.

use anyhow::{Result, bail};
use clap::Args;

use mahasiswa_viewstate::ViewState;

use crate::container::AppContainer;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, container: &AppContainer) -> Result<()> {
    let vm = container.list_view_model();

    match vm.settled().await {
        ViewState::Success(records) => {
            if args.json {
                output::json_pretty(&records)?;
            } else {
                output::records(&records);
            }
            Ok(())
        }
        ViewState::Error(e) => bail!("Failed to list records from {}: {}", container.base_url(), e),
        state => bail!("List did not settle (state: {:?})", state),
    }
}
