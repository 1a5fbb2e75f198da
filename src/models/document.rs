use crate::schema::FieldTypes;

/// Language used when a document doesn't name one
pub const DEFAULT_LANGUAGE: &str = "english";

/// Value held by a document field
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Text rendering used for full-text and tag indexing
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format!("{:.6}", n),
        }
    }

    /// Numeric reading used for numeric indexing
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Number(n) => Some(*n),
        }
    }
}

/// One field of a document
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentField {
    pub name: String,
    pub value: FieldValue,
    /// Types to index the value as; empty means every type the field declares
    pub index_as: FieldTypes,
}

/// Document submitted for indexing, addressed by an external key
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub key: String,
    pub score: f64,
    pub language: String,
    pub fields: Vec<DocumentField>,
}

impl Document {
    /// Create a document with no fields
    pub fn new(key: impl Into<String>, score: f64, language: Option<&str>) -> Self {
        Self {
            key: key.into(),
            score,
            language: language.unwrap_or(DEFAULT_LANGUAGE).to_string(),
            fields: Vec::new(),
        }
    }

    /// Add a string value
    pub fn add_text_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        index_as: FieldTypes,
    ) -> &mut Self {
        self.fields.push(DocumentField {
            name: name.into(),
            value: FieldValue::Text(value.into()),
            index_as,
        });
        self
    }

    /// Add a numeric value
    pub fn add_number_field(
        &mut self,
        name: impl Into<String>,
        value: f64,
        index_as: FieldTypes,
    ) -> &mut Self {
        self.fields.push(DocumentField {
            name: name.into(),
            value: FieldValue::Number(value),
            index_as,
        });
        self
    }

    /// Builder-style text field
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_text_field(name, value, FieldTypes::empty());
        self
    }

    /// Builder-style numeric field
    pub fn with_number(mut self, name: impl Into<String>, value: f64) -> Self {
        self.add_number_field(name, value, FieldTypes::empty());
        self
    }
}
