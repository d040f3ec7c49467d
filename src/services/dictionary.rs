use crate::models::{Attribute, NO_VALUE};
use crate::services::registry::AttributeRegistry;

/// Render the human-readable data dictionary. Private attributes are
/// skipped; records are separated by a blank line.
pub fn render(registry: &AttributeRegistry) -> String {
    let mut out = String::new();
    for (name, owners, attr) in registry.node_entries() {
        if attr.private {
            continue;
        }
        write_record(&mut out, name, owners, attr, "Node");
    }
    for (name, owners, attr) in registry.relationship_entries() {
        if attr.private {
            continue;
        }
        write_record(&mut out, name, owners, attr, "Relationship");
    }
    out
}

fn write_record(out: &mut String, name: &str, owners: &[String], attr: &Attribute, context: &str) {
    out.push_str(&format!("Attribute Name: {}\n", name));
    out.push_str(&format!("Description: {}\n", attr.description));
    out.push_str(&format!("Attribute of {}: {}\n", context, owners.join(", ")));
    if attr.display {
        out.push_str(&format!("Display Name: {}\n", attr.display_name));
    }
    out.push_str(&format!("Required: {}\n", attr.required));
    out.push_str(&format!("Type: {}\n", attr.data_type));
    out.push_str(&format!("Constraints: {}\n", attr.constraint));
    let enumeration = if attr.enumeration.is_empty() {
        NO_VALUE.to_string()
    } else {
        attr.enumeration.join(", ")
    };
    out.push_str(&format!("Enumeration: {}\n\n", enumeration));
}
