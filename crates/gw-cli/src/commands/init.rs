use std::path::Path;

use gw_core::Catalog;

pub fn run(file: &Path, force: bool) -> Result<(), String> {
    if file.exists() && !force {
        return Err(format!(
            "'{}' already exists (use --force to overwrite)",
            file.display()
        ));
    }

    let catalog = Catalog::sample();
    catalog
        .save(file)
        .map_err(|e| format!("cannot write {}: {e}", file.display()))?;

    println!("Wrote {} people to {}", catalog.len(), file.display());
    println!();
    println!("Get started:");
    println!("  gw list --catalog {}", file.display());
    println!("  gw add --catalog {} --name ...", file.display());
    println!("  gw play --catalog {}", file.display());

    Ok(())
}
