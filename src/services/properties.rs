use crate::models::Attribute;
use crate::services::registry::AttributeRegistry;

/// Render the property-definition catalog: every node-context attribute in
/// registration order, then every relationship-context attribute. An
/// attribute registered under both contexts is emitted once per context.
pub fn render(registry: &AttributeRegistry) -> String {
    let mut out = String::from("PropDefinitions:\n");
    for (name, owners, attr) in registry.node_entries() {
        write_definition(&mut out, name, owners, attr);
    }
    for (name, owners, attr) in registry.relationship_entries() {
        write_definition(&mut out, name, owners, attr);
    }
    out
}

fn write_definition(out: &mut String, name: &str, owners: &[String], attr: &Attribute) {
    out.push_str(&format!("#property of {}\n", owners.join(", ")));
    out.push_str(&format!("  {}:\n", name));
    out.push_str(&format!("    Desc: {}\n", attr.description));
    out.push_str(&format!("    Src: {}\n", attr.source_field));

    match (&attr.value_type, &attr.unit) {
        (Some(value_type), None) => {
            out.push_str(&format!("    Type: {}\n", value_type));
        }
        (Some(value_type), Some(unit)) => {
            out.push_str("    Type:\n");
            out.push_str("      units:\n");
            out.push_str(&format!("       - {}\n", unit));
            out.push_str(&format!("      value_type: {}\n", value_type));
        }
        (None, _) => {
            if !attr.enumeration.is_empty() {
                out.push_str("    Type:\n");
                for value in &attr.enumeration {
                    out.push_str(&format!("      - {}\n", value));
                }
            }
        }
    }

    out.push_str(&format!("    Req: {}\n", attr.required));
    out.push_str(&format!("    Private: {}\n", attr.private));

    if let Some(minimum) = &attr.minimum {
        out.push_str(&format!("    minimum: {}\n", minimum));
    }
    if let Some(exclusive_minimum) = &attr.exclusive_minimum {
        out.push_str(&format!("    exclusiveMinimum: {}\n", exclusive_minimum));
    }
    if let Some(maximum) = &attr.maximum {
        out.push_str(&format!("    maximum: {}\n", maximum));
    }
    if let Some(exclusive_maximum) = &attr.exclusive_maximum {
        out.push_str(&format!("    exclusiveMaximum: {}\n", exclusive_maximum));
    }
}
