//! Payloads of the query node variants
//!
//! Each variant of [`NodeKind`](crate::query::NodeKind) carries one of these.

mod lex_range;
mod numeric;
mod phrase;
mod prefix;
mod tag;
mod token;
mod union;

pub use lex_range::LexRangeNode;
pub use numeric::NumericFilter;
pub use phrase::{positions_form_phrase, PhraseNode};
pub use prefix::PrefixNode;
pub use tag::TagNode;
pub use token::TokenNode;
pub use union::UnionNode;
