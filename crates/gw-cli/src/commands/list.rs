use std::path::PathBuf;

use clap::Args;
use comfy_table::{ContentArrangement, Table};

use gw_core::{Attribute, Gender, Industry};

#[derive(Args)]
pub struct ListArgs {
    /// Catalog file (default: built-in sample catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Filter by gender (M or F)
    #[arg(short, long)]
    gender: Option<String>,

    /// Filter by industry (e.g. sports, music, science)
    #[arg(short, long)]
    industry: Option<String>,

    /// Filter by nationality (case-insensitive)
    #[arg(short, long)]
    nationality: Option<String>,

    /// Filter by occupation substring (case-insensitive)
    #[arg(short, long)]
    occupation: Option<String>,

    /// Minimum age
    #[arg(long)]
    min_age: Option<u32>,

    /// Maximum age
    #[arg(long)]
    max_age: Option<u32>,

    /// Only people the named check holds for (e.g. sport, ball-sport)
    #[arg(short, long)]
    attribute: Option<String>,

    /// Show at most this many people
    #[arg(long)]
    limit: Option<usize>,

    /// Skip this many matching people
    #[arg(long, default_value_t = 0)]
    offset: usize,
}

pub fn run(args: &ListArgs) -> Result<(), String> {
    let catalog = super::load_catalog(args.catalog.as_deref())?;

    let mut query = catalog.query();

    if let Some(g) = &args.gender {
        let gender = Gender::parse(g).ok_or_else(|| format!("unknown gender '{g}'"))?;
        query = query.gender(gender);
    }

    if let Some(i) = &args.industry {
        let industry = Industry::parse(i).ok_or_else(|| format!("unknown industry '{i}'"))?;
        query = query.industry(industry);
    }

    if let Some(n) = &args.nationality {
        query = query.nationality(n.as_str());
    }

    if let Some(o) = &args.occupation {
        query = query.occupation_contains(o.as_str());
    }

    if let Some(age) = args.min_age {
        query = query.age_min(age);
    }

    if let Some(age) = args.max_age {
        query = query.age_max(age);
    }

    let attribute = args
        .attribute
        .as_deref()
        .map(|a| Attribute::parse(a).ok_or_else(|| format!("unknown attribute '{a}'")))
        .transpose()?;
    if let Some(a) = attribute {
        query = query.attribute(a);
    }

    let total = query.clone().count();
    query = query.offset(args.offset);
    if let Some(n) = args.limit {
        query = query.limit(n);
    }
    let results = query.execute();

    if results.is_empty() {
        println!("  No people found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Id",
        "Name",
        "Gender",
        "Age",
        "Occupation",
        "Industry",
        "Nationality",
    ]);

    for p in &results {
        table.add_row(vec![
            p.id().to_string(),
            p.name().to_string(),
            p.gender().to_string(),
            p.age().to_string(),
            p.occupation().to_string(),
            p.industry().to_string(),
            p.nationality().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    if results.len() < total {
        println!("  {} of {total} people", results.len());
    } else {
        println!("  {} people", results.len());
    }
    if let Some(a) = attribute
        && a.is_heuristic()
    {
        println!("  ({a} is a keyword match on occupation)");
    }

    Ok(())
}
