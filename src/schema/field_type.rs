//! Field type and option flags
//!
//! A field may be indexed under several types at once; such fields are
//! dynamic and every value added to them is indexed per requested type.

use bitflags::bitflags;

bitflags! {
    /// How a field's values are indexed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FieldTypes: u8 {
        /// Tokenized full-text with positions
        const TEXT = 1;
        /// Numeric values answering range predicates
        const NUMERIC = 2;
        /// Geo points (registration only)
        const GEO = 4;
        /// Separator-delimited exact tag values
        const TAG = 8;
    }
}

bitflags! {
    /// Per-field indexing options.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FieldOptions: u8 {
        /// Registered but never indexed
        const NOINDEX = 1;
        /// Reserve a sorting slot
        const SORTABLE = 2;
        /// Skip stem terms for text values
        const NOSTEM = 4;
        /// Phonetic matching requested
        const PHONETIC = 8;
    }
}

impl FieldTypes {
    /// More than one type requested
    pub fn is_dynamic(self) -> bool {
        self.bits().count_ones() > 1
    }
}
