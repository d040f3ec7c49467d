use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::error::AppError;
use crate::models::{
    cell, AttributeRow, DefinitionSource, EndpointRow, ModelDocument, NodeBlock, RelationshipBlock,
    SheetData,
};
use crate::services::registry::AttributeRegistry;

/// Read the type-name → category mapping from the definition sheet.
pub fn read_definitions(sheet: &SheetData) -> DefinitionSource {
    let mut categories = IndexMap::new();
    for cells in &sheet.rows {
        categories.insert(cell(cells, 0).to_string(), cell(cells, 1).to_string());
    }
    DefinitionSource { categories }
}

/// The definition source must enumerate exactly the node type names present
/// in the nodes workbook, compared as sets.
pub fn validate_definitions(
    definitions: &DefinitionSource,
    node_sheets: &[SheetData],
) -> Result<(), AppError> {
    let defined: BTreeSet<&str> = definitions.categories.keys().map(String::as_str).collect();
    let sheets: BTreeSet<&str> = node_sheets.iter().map(|s| s.name.as_str()).collect();
    if defined != sheets {
        return Err(AppError::SchemaMismatch(
            "Node names in the Nodes file and Definition file do not match. Please check input data."
                .to_string(),
        ));
    }
    Ok(())
}

/// Walk the node sheets, then the edges sheets, populating the registry and
/// building the model document. The node pass fully precedes the
/// relationship pass.
pub fn assemble(
    node_sheets: &[SheetData],
    edge_sheets: &[SheetData],
    definitions: Option<&DefinitionSource>,
    registry: &mut AttributeRegistry,
) -> Result<ModelDocument, AppError> {
    let mut nodes = Vec::with_capacity(node_sheets.len());
    for sheet in node_sheets {
        let mut props = Vec::new();
        for cells in &sheet.rows {
            if let Some(row) = AttributeRow::from_cells(cells) {
                registry.register_node_row(&sheet.name, &row)?;
                props.push(row.name);
            }
        }
        let category = definitions.and_then(|d| d.categories.get(&sheet.name).cloned());
        nodes.push(NodeBlock {
            name: sheet.name.clone(),
            category,
            props,
        });
    }
    tracing::info!("Assembled {} node types", nodes.len());

    let mut relationships = Vec::new();
    if let Some((ends_sheet, attribute_sheets)) = edge_sheets.split_first() {
        let mut ends: IndexMap<String, Vec<(String, String)>> = IndexMap::new();
        let mut multiplicities: IndexMap<String, String> = IndexMap::new();
        for cells in &ends_sheet.rows {
            let row = EndpointRow::from_cells(cells);
            ends.entry(row.relationship.clone())
                .or_default()
                .push((row.source, row.destination));
            multiplicities.insert(row.relationship, row.multiplicity);
        }

        let mut props: IndexMap<String, Vec<String>> = IndexMap::new();
        for sheet in attribute_sheets {
            for cells in &sheet.rows {
                if let Some(row) = AttributeRow::from_cells(cells) {
                    registry.register_relationship_row(&sheet.name, &row)?;
                    props.entry(sheet.name.clone()).or_default().push(row.name);
                }
            }
        }

        for (name, multiplicity) in &multiplicities {
            relationships.push(RelationshipBlock {
                name: name.clone(),
                multiplicity: multiplicity.clone(),
                ends: ends.get(name).cloned().unwrap_or_default(),
                props: props.get(name).cloned().unwrap_or_default(),
            });
        }
    }
    tracing::info!("Assembled {} relationship types", relationships.len());

    Ok(ModelDocument {
        nodes,
        relationships,
    })
}

/// Render the Nodes and Relationships sections of the model file.
pub fn render(document: &ModelDocument) -> String {
    let mut out = String::from("Nodes:\n");
    for node in &document.nodes {
        out.push_str(&format!("  {}:\n", node.name));
        if let Some(category) = &node.category {
            out.push_str(&format!("    Category: {}\n", category));
        }
        out.push_str("    Props:\n");
        for prop in &node.props {
            out.push_str(&format!("      - {}\n", prop));
        }
    }

    out.push_str("Relationships:\n");
    for relationship in &document.relationships {
        out.push_str(&format!("  {}:\n", relationship.name));
        out.push_str(&format!("    Mul: {}\n", relationship.multiplicity));
        out.push_str("    Ends:\n");
        for (source, destination) in &relationship.ends {
            out.push_str(&format!("      - Src: {}\n", source));
            out.push_str(&format!("        Dst: {}\n", destination));
        }
        if relationship.props.is_empty() {
            out.push_str("    Props: null\n");
        } else {
            out.push_str("    Props:\n");
            for prop in &relationship.props {
                out.push_str(&format!("      - {}\n", prop));
            }
        }
    }
    out
}
