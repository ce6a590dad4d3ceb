//! Command implementations, one per screen.

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use anyhow::Result;
use clap::Args;

use mahasiswa_viewstate::MahasiswaDraft;

use crate::cli::Commands;
use crate::container::AppContainer;
use crate::settings;

/// Run one command. `override_url` is the `--base-url` flag or its
/// environment variable.
pub async fn handle(command: Commands, override_url: Option<&str>) -> Result<()> {
    match command {
        Commands::List(args) => list::run(args, &container(override_url)?).await,
        Commands::Get(args) => get::run(args, &container(override_url)?).await,
        Commands::Create(args) => create::run(args, &container(override_url)?).await,
        Commands::Update(args) => update::run(args, &container(override_url)?).await,
        Commands::Delete(args) => delete::run(args, &container(override_url)?).await,
        // Settings commands must work even when the stored URL is broken.
        Commands::Config(cmd) => config::run(cmd, override_url),
    }
}

fn container(override_url: Option<&str>) -> Result<AppContainer> {
    let settings = settings::resolve(override_url)?;
    AppContainer::new(&settings)
}

/// Record fields that can be set from the command line.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Full name
    #[arg(long, alias = "nama")]
    pub name: Option<String>,

    /// Home address
    #[arg(long, alias = "alamat")]
    pub address: Option<String>,

    /// Gender
    #[arg(long, alias = "jenis-kelamin")]
    pub gender: Option<String>,

    /// Class or section
    #[arg(long, alias = "kelas")]
    pub class: Option<String>,

    /// Enrollment year
    #[arg(long, alias = "angkatan")]
    pub year: Option<String>,
}

impl FieldArgs {
    /// Copy every given field onto the draft, leaving the rest untouched.
    pub fn apply(&self, draft: &mut MahasiswaDraft) {
        let fields = [
            (&self.name, &mut draft.name),
            (&self.address, &mut draft.address),
            (&self.gender, &mut draft.gender),
            (&self.class, &mut draft.class),
            (&self.year, &mut draft.year),
        ];

        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.gender.is_none()
            && self.class.is_none()
            && self.year.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_only_touches_given_fields() {
        let mut draft = MahasiswaDraft {
            nim: "2021001".to_string(),
            name: "Alice".to_string(),
            address: "Jl. A".to_string(),
            ..MahasiswaDraft::default()
        };

        let fields = FieldArgs {
            address: Some("Jl. B".to_string()),
            ..FieldArgs::default()
        };
        fields.apply(&mut draft);

        assert_eq!(draft.name, "Alice");
        assert_eq!(draft.address, "Jl. B");
        assert!(!fields.is_empty());
        assert!(FieldArgs::default().is_empty());
    }
}
