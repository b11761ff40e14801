//! CLI command implementations

pub mod category;
pub mod check;
pub mod completions;
pub mod drug;
pub mod export;
pub mod import;
pub mod init;
pub mod interaction;
pub mod reset;
pub mod severity;
pub mod status;

use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::{Config, FileBackend, Store};

/// Open the store at the resolved catalog path
///
/// The first read seeds the default document, so commands work without an
/// explicit `rxcat init`.
pub(crate) fn open_store(global: &GlobalOpts) -> Result<Store<FileBackend>> {
    let config = Config::load();
    let path = config.resolve_db_path(global.db.as_deref());
    Ok(Store::new(FileBackend::new(path)))
}
