use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use gw_core::{Person, PersonId};

#[derive(Args)]
pub struct AddArgs {
    /// Catalog file to update
    #[arg(short, long)]
    catalog: PathBuf,

    /// Full name
    #[arg(long)]
    name: String,

    /// Gender (M or F)
    #[arg(long)]
    gender: String,

    /// Age in years
    #[arg(long, allow_negative_numbers = true)]
    age: i64,

    /// Occupation, free text
    #[arg(long)]
    occupation: String,

    /// Industry: sports, politics, science, music, film or business
    #[arg(long)]
    industry: String,

    /// Nationality, free text
    #[arg(long)]
    nationality: String,

    /// Id to use (default: one past the highest id)
    #[arg(long)]
    id: Option<u32>,
}

pub fn run(args: &AddArgs) -> Result<(), String> {
    let mut catalog = super::load_catalog(Some(&args.catalog))?;
    let id = args.id.unwrap_or_else(|| catalog.next_id());
    if let Some(existing) = catalog.get(PersonId(id)) {
        return Err(format!("id {id} is already taken by {}", existing.name()));
    }

    let person = Person::new(
        id,
        &args.name,
        &args.gender,
        args.age,
        &args.occupation,
        &args.industry,
        &args.nationality,
    )
    .map_err(|e| e.to_string())?;

    catalog.insert(person.clone()).map_err(|e| e.to_string())?;
    catalog
        .save(&args.catalog)
        .map_err(|e| format!("cannot write {}: {e}", args.catalog.display()))?;

    println!("  {} #{id} {person}", "Added".green().bold());
    Ok(())
}
