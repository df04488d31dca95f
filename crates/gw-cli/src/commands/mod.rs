pub mod add;
pub mod init;
pub mod list;
pub mod play;

use std::path::Path;

use gw_core::Catalog;

/// Load the catalog at `path`, or the built-in sample catalog if none is given.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => Catalog::load(path)
            .map_err(|e| format!("cannot load catalog {}: {e}", path.display())),
        None => Ok(Catalog::sample()),
    }
}
