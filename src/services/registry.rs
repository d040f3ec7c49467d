use indexmap::IndexMap;
use std::collections::HashMap;

use crate::error::AppError;
use crate::models::{
    map_source_type, map_yes_no, Attribute, AttributeRow, ENUM_SEPARATOR, NO_VALUE, OF_ENUMERATION,
};

/// Accumulates per-attribute metadata keyed by attribute name across all node
/// and relationship sheets. Owner lists are kept separately per context so
/// the emitters can walk node-context and relationship-context attributes
/// independently, each in first-registration order.
#[derive(Debug, Default)]
pub struct AttributeRegistry {
    node_owners: IndexMap<String, Vec<String>>,
    relationship_owners: IndexMap<String, Vec<String>>,
    attributes: HashMap<String, Attribute>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering the same (attribute, owner) pair twice appends a duplicate
    /// owner entry; singular fields always take the last-seen values.
    pub fn register_node_row(&mut self, type_name: &str, row: &AttributeRow) -> Result<(), AppError> {
        self.upsert(row)?;
        self.node_owners
            .entry(row.name.clone())
            .or_default()
            .push(type_name.to_string());
        Ok(())
    }

    pub fn register_relationship_row(
        &mut self,
        type_name: &str,
        row: &AttributeRow,
    ) -> Result<(), AppError> {
        self.upsert(row)?;
        self.relationship_owners
            .entry(row.name.clone())
            .or_default()
            .push(type_name.to_string());
        Ok(())
    }

    fn upsert(&mut self, row: &AttributeRow) -> Result<(), AppError> {
        let mapped_type = map_source_type(&row.source_type)?;
        let required = map_yes_no("required", &row.required)?;
        let private = map_yes_no("private", &row.private)?;
        let display = map_yes_no("display", &row.display)?;

        let attr = self.attributes.entry(row.name.clone()).or_default();
        attr.source_field = row.source_field.clone();
        attr.display_name = row.display_name.clone();
        attr.description = row.description.clone();
        attr.constraint = row.constraint.clone();
        attr.data_type = mapped_type.to_string();
        attr.required = required;
        attr.private = private;
        attr.display = display;

        // Enumeration, unit-compound and plain type are decided per row, in
        // that priority order. A facet set by an earlier row is never cleared.
        if row.constraint == OF_ENUMERATION {
            attr.enumeration = row
                .enumeration
                .split(ENUM_SEPARATOR)
                .map(|value| format!("\"{}\"", value.trim()))
                .collect();
        } else if row.unit != NO_VALUE {
            attr.unit = Some(row.unit.clone());
            attr.value_type = Some(mapped_type.to_string());
        } else {
            attr.value_type = Some(mapped_type.to_string());
        }

        if row.minimum != NO_VALUE {
            attr.minimum = Some(row.minimum.clone());
        }
        if row.exclusive_minimum != NO_VALUE {
            attr.exclusive_minimum = Some(row.exclusive_minimum.clone());
        }
        if row.maximum != NO_VALUE {
            attr.maximum = Some(row.maximum.clone());
        }
        if row.exclusive_maximum != NO_VALUE {
            attr.exclusive_maximum = Some(row.exclusive_maximum.clone());
        }

        Ok(())
    }

    pub fn node_entries(&self) -> impl Iterator<Item = (&str, &[String], &Attribute)> + '_ {
        Self::entries(&self.node_owners, &self.attributes)
    }

    pub fn relationship_entries(&self) -> impl Iterator<Item = (&str, &[String], &Attribute)> + '_ {
        Self::entries(&self.relationship_owners, &self.attributes)
    }

    fn entries<'a>(
        owners: &'a IndexMap<String, Vec<String>>,
        attributes: &'a HashMap<String, Attribute>,
    ) -> impl Iterator<Item = (&'a str, &'a [String], &'a Attribute)> + 'a {
        owners.iter().filter_map(|(name, owner_list)| {
            attributes
                .get(name)
                .map(|attr| (name.as_str(), owner_list.as_slice(), attr))
        })
    }
}
