use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::AppError;

/// What an empty or missing spreadsheet cell reads as.
pub const NO_VALUE: &str = "None";

/// Constraint kind that switches an attribute to enumerated rendering.
pub const OF_ENUMERATION: &str = "Of Enumeration";

/// Separator between enumerated values inside a single cell.
pub const ENUM_SEPARATOR: char = ',';

static TYPE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("int", "integer"),
        ("integer", "integer"),
        ("float", "number"),
        ("number", "number"),
        ("string", "string"),
        ("boolean", "boolean"),
        ("datetime", "datetime"),
    ])
});

static BOOLEAN_MAP: Lazy<HashMap<&'static str, bool>> =
    Lazy::new(|| HashMap::from([("Yes", true), ("No", false)]));

pub fn map_source_type(value: &str) -> Result<&'static str, AppError> {
    TYPE_MAP
        .get(value)
        .copied()
        .ok_or_else(|| AppError::UnknownVocabularyValue {
            field: "data type",
            value: value.to_string(),
        })
}

pub fn map_yes_no(field: &'static str, value: &str) -> Result<bool, AppError> {
    BOOLEAN_MAP
        .get(value)
        .copied()
        .ok_or_else(|| AppError::UnknownVocabularyValue {
            field,
            value: value.to_string(),
        })
}

/// One worksheet: its name and its data rows (header row excluded, cells
/// trimmed, empty cells normalized to [`NO_VALUE`]).
#[derive(Debug, Clone)]
pub struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

pub fn cell(cells: &[String], idx: usize) -> &str {
    cells.get(idx).map(String::as_str).unwrap_or(NO_VALUE)
}

/// Positional column contract for node and relationship attribute sheets,
/// parsed once per row so nothing downstream indexes raw positions.
#[derive(Debug, Clone)]
pub struct AttributeRow {
    pub source_field: String,
    pub name: String,
    pub display_name: String,
    pub source_type: String,
    pub constraint: String,
    pub minimum: String,
    pub exclusive_minimum: String,
    pub maximum: String,
    pub exclusive_maximum: String,
    pub enumeration: String,
    pub required: String,
    pub private: String,
    pub display: String,
    pub description: String,
    pub unit: String,
}

impl AttributeRow {
    /// Returns `None` when the attribute-name column reads [`NO_VALUE`],
    /// i.e. the row carries no attribute.
    pub fn from_cells(cells: &[String]) -> Option<Self> {
        let name = cell(cells, 2);
        if name == NO_VALUE {
            return None;
        }
        Some(AttributeRow {
            source_field: cell(cells, 0).to_string(),
            name: name.to_string(),
            display_name: cell(cells, 3).to_string(),
            source_type: cell(cells, 4).to_string(),
            constraint: cell(cells, 5).to_string(),
            minimum: cell(cells, 6).to_string(),
            exclusive_minimum: cell(cells, 7).to_string(),
            maximum: cell(cells, 8).to_string(),
            exclusive_maximum: cell(cells, 9).to_string(),
            enumeration: cell(cells, 10).to_string(),
            required: cell(cells, 11).to_string(),
            private: cell(cells, 12).to_string(),
            display: cell(cells, 13).to_string(),
            description: cell(cells, 14).to_string(),
            unit: cell(cells, 15).to_string(),
        })
    }
}

/// Row of the first edges sheet: one (source, destination) end pair of a
/// named relationship plus its multiplicity label.
#[derive(Debug, Clone)]
pub struct EndpointRow {
    pub relationship: String,
    pub source: String,
    pub destination: String,
    pub multiplicity: String,
}

impl EndpointRow {
    pub fn from_cells(cells: &[String]) -> Self {
        EndpointRow {
            relationship: cell(cells, 0).to_string(),
            source: cell(cells, 1).to_string(),
            destination: cell(cells, 2).to_string(),
            multiplicity: cell(cells, 3).to_string(),
        }
    }
}

/// Accumulated metadata for one named attribute. Singular fields hold the
/// last-seen values; rendering facets (`value_type`, `unit`, `enumeration`)
/// are set per registration and never cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attribute {
    pub source_field: String,
    pub display_name: String,
    pub description: String,
    pub constraint: String,
    pub data_type: String,
    pub value_type: Option<String>,
    pub unit: Option<String>,
    pub enumeration: Vec<String>,
    pub required: bool,
    pub private: bool,
    pub display: bool,
    pub minimum: Option<String>,
    pub exclusive_minimum: Option<String>,
    pub maximum: Option<String>,
    pub exclusive_maximum: Option<String>,
}

/// Node-type name to category text, in definition-source row order.
#[derive(Debug, Clone, Default)]
pub struct DefinitionSource {
    pub categories: IndexMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct NodeBlock {
    pub name: String,
    pub category: Option<String>,
    pub props: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RelationshipBlock {
    pub name: String,
    pub multiplicity: String,
    pub ends: Vec<(String, String)>,
    pub props: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ModelDocument {
    pub nodes: Vec<NodeBlock>,
    pub relationships: Vec<RelationshipBlock>,
}
