//! Schema definitions
//!
//! The schema registers fields, assigns each a stable id and field-mask bit,
//! and resolves field names for query construction.

use std::collections::HashMap;

use tracing::debug;

use super::field_mask::{FieldId, FieldMask};
use super::field_type::{FieldOptions, FieldTypes};
use crate::{QuernError, Result};

/// A registered field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub id: FieldId,
    pub types: FieldTypes,
    pub options: FieldOptions,
    /// Relative weight of a text field
    pub text_weight: f64,
    /// Tag separator override; `None` uses the index default
    pub tag_separator: Option<char>,
    /// Slot in the sorting table for sortable fields
    pub sort_index: Option<usize>,
}

impl FieldSpec {
    pub fn is(&self, types: FieldTypes) -> bool {
        self.types.intersects(types)
    }

    pub fn is_dynamic(&self) -> bool {
        self.types.is_dynamic()
    }

    pub fn is_indexable(&self) -> bool {
        !self.options.contains(FieldOptions::NOINDEX)
    }

    /// Text values of this field get stem terms
    pub fn is_stemmed(&self) -> bool {
        self.is(FieldTypes::TEXT) && !self.options.contains(FieldOptions::NOSTEM)
    }

    pub fn mask(&self) -> FieldMask {
        self.id.mask()
    }
}

/// Field registry for one index
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    by_name: HashMap<String, FieldId>,
    sortables: usize,
}

impl Schema {
    /// Create a new empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field and return its id
    pub fn create_field(
        &mut self,
        name: &str,
        types: FieldTypes,
        options: FieldOptions,
    ) -> Result<FieldId> {
        if types.is_empty() {
            return Err(QuernError::InvalidArgument(format!(
                "field '{}' needs at least one type",
                name
            )));
        }
        if self.by_name.contains_key(name) {
            return Err(QuernError::DuplicateField(name.to_string()));
        }
        if self.fields.len() >= FieldMask::BITS {
            return Err(QuernError::TooManyFields {
                max: FieldMask::BITS,
            });
        }

        let id = FieldId(self.fields.len() as u16);
        let sort_index = if options.contains(FieldOptions::SORTABLE) {
            self.sortables += 1;
            Some(self.sortables - 1)
        } else {
            None
        };

        debug!(field = name, id = id.0, ?types, ?options, "registered field");

        self.fields.push(FieldSpec {
            name: name.to_string(),
            id,
            types,
            options,
            text_weight: 1.0,
            tag_separator: None,
            sort_index,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.by_name.get(name).map(|id| &self.fields[id.as_usize()])
    }

    /// Look up a field by id
    pub fn field_by_id(&self, id: FieldId) -> Option<&FieldSpec> {
        self.fields.get(id.as_usize())
    }

    /// Resolve a field name to its id
    pub fn field_id(&self, name: &str) -> Result<FieldId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| QuernError::UnknownField(name.to_string()))
    }

    /// Resolve a field name to its single-bit mask
    pub fn field_mask(&self, name: &str) -> Result<FieldMask> {
        self.field_id(name).map(FieldId::mask)
    }

    /// Resolve an optional field name; no name means all fields
    pub fn resolve(&self, name: Option<&str>) -> Result<FieldMask> {
        match name {
            Some(name) => self.field_mask(name),
            None => Ok(FieldMask::ALL),
        }
    }

    /// Set the weight of a text field
    pub fn set_text_weight(&mut self, name: &str, weight: f64) -> Result<()> {
        let field = self.field_mut(name)?;
        if !field.is(FieldTypes::TEXT) {
            return Err(QuernError::InvalidOperation(format!(
                "text weight on non-text field '{}'",
                name
            )));
        }
        field.text_weight = weight;
        Ok(())
    }

    /// Set the separator of a tag field
    pub fn set_tag_separator(&mut self, name: &str, separator: char) -> Result<()> {
        let field = self.field_mut(name)?;
        if !field.is(FieldTypes::TAG) {
            return Err(QuernError::InvalidOperation(format!(
                "tag separator on non-tag field '{}'",
                name
            )));
        }
        field.tag_separator = Some(separator);
        Ok(())
    }

    /// Mask of all fields whose text values carry stem terms
    pub fn stemmed_mask(&self) -> FieldMask {
        self.fields
            .iter()
            .filter(|f| f.is_stemmed())
            .fold(FieldMask::NONE, |mask, f| mask | f.mask())
    }

    /// Number of sortable slots handed out
    pub fn sortable_count(&self) -> usize {
        self.sortables
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter()
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut FieldSpec> {
        let id = self.field_id(name)?;
        Ok(&mut self.fields[id.as_usize()])
    }
}
