use clap::Parser;
use std::path::PathBuf;

/// Create model description files in the YAML format from schema workbooks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workbook that lists nodes and their properties.
    #[arg(short, long)]
    pub nodes: PathBuf,

    /// Workbook that lists edges and their properties.
    #[arg(short, long)]
    pub edges: PathBuf,

    /// Workbook that stores node definitions and categories.
    #[arg(short, long)]
    pub defn: Option<PathBuf>,
}
