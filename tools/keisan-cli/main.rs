use clap::Parser;
use keisan::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Instant;

/// Evaluate an admin-defined calculation against a form submission.
#[derive(Parser)]
#[command(name = "keisan-cli", version, about)]
struct Cli {
    /// Path to the calculation JSON file.
    #[arg(long)]
    calculation: String,

    /// Path to the field catalog JSON file.
    #[arg(long)]
    catalog: String,

    /// Path to the submitted form data JSON file (object of id -> raw value).
    #[arg(long)]
    form: String,

    /// Run editor validation and print every issue before evaluating.
    #[arg(long)]
    validate: bool,
}

// Matches the catalog export format of the admin dashboard.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    #[serde(default)]
    fields: Vec<InputField>,
    #[serde(default)]
    logic_fields: Vec<LogicField>,
    #[serde(default)]
    calculations: Vec<Calculation>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let calculation: Calculation = serde_json::from_str(&fs::read_to_string(&cli.calculation)?)?;
    let raw: RawCatalog = serde_json::from_str(&fs::read_to_string(&cli.catalog)?)?;
    let form: ahash::AHashMap<String, String> =
        serde_json::from_str(&fs::read_to_string(&cli.form)?)?;

    let mut catalog = FieldCatalog::new();
    for field in raw.fields {
        catalog = catalog.with_field(field);
    }
    for field in raw.logic_fields {
        catalog = catalog.with_logic_field(field);
    }
    for calc in raw.calculations {
        catalog = catalog.with_calculation(calc);
    }

    if cli.validate {
        let validation = validate_calculation(&calculation, &catalog, &form);
        println!("Validation: {}", validation.summary());
        if !validation.is_valid() {
            std::process::exit(1);
        }
    }

    let engine = Engine::new(&catalog, &form);
    let start = Instant::now();
    let result = engine.compute_calculation(&calculation)?;
    let elapsed = start.elapsed();

    println!("Result: {}", result);
    println!("Evaluated in {:?}", elapsed);
    Ok(())
}
