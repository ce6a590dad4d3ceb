//! mahasiswa-viewstate - Per-screen view-state machines.
//!
//! Each screen gets one view model. A view model owns a [`Scope`], exposes
//! its current [`ViewState`] through a watch channel, and runs repository
//! calls as tasks launched on that scope. Dropping the view model cancels the
//! scope; results of work still in flight are discarded.

mod detail;
mod draft;
mod insert;
mod list;
mod scope;
mod state;
mod update;

pub use detail::DetailViewModel;
pub use draft::MahasiswaDraft;
pub use insert::InsertViewModel;
pub use list::{ListState, ListViewModel};
pub use scope::{Job, Scope, ScopeToken};
pub use state::{LoadFailed, StateHolder, ViewState};
pub use update::UpdateViewModel;
