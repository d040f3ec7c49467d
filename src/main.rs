use anyhow::Result;
use clap::Parser;

use mdf_gen::cli::Cli;
use mdf_gen::config::Config;
use mdf_gen::error::AppError;
use mdf_gen::logging;
use mdf_gen::models::DefinitionSource;
use mdf_gen::services::{assembler, dictionary, properties, workbook, AttributeRegistry};

fn main() -> Result<()> {
    // Initialize logging
    logging::init_logging()?;

    let args = Cli::parse();

    // Load configuration
    let config = Config::new()?;

    // Read the Nodes and Edges files respectively.
    let node_sheets = workbook::load(&args.nodes)?;
    let edge_sheets = workbook::load(&args.edges)?;

    // The definition source must match the node sheets before anything is
    // written.
    let definitions = match &args.defn {
        Some(path) => {
            let sheets = workbook::load(path)?;
            let definitions = match sheets.first() {
                Some(sheet) => assembler::read_definitions(sheet),
                None => DefinitionSource::default(),
            };
            assembler::validate_definitions(&definitions, &node_sheets)?;
            Some(definitions)
        }
        None => None,
    };

    let mut registry = AttributeRegistry::new();
    let document = assembler::assemble(
        &node_sheets,
        &edge_sheets,
        definitions.as_ref(),
        &mut registry,
    )?;

    std::fs::write(&config.model_file, assembler::render(&document)).map_err(AppError::Io)?;
    std::fs::write(&config.properties_file, properties::render(&registry))
        .map_err(AppError::Io)?;
    std::fs::write(&config.dictionary_file, dictionary::render(&registry))
        .map_err(AppError::Io)?;

    tracing::info!(
        "Wrote {}, {} and {}",
        config.model_file.display(),
        config.properties_file.display(),
        config.dictionary_file.display()
    );
    println!(
        "Files {} and {} and {} have been successfully created in current directory.",
        config.model_file.display(),
        config.properties_file.display(),
        config.dictionary_file.display()
    );

    Ok(())
}
