//! Field masks scope a predicate to a subset of the schema's fields.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Stable small-integer identifier of a registered field
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(pub u16);

impl FieldId {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The single-bit mask addressing this field
    pub fn mask(self) -> FieldMask {
        FieldMask::bit(self)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field_{}", self.0)
    }
}

/// Bitset over field ids; bit `i` set means "applies to field `i`"
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldMask(u128);

impl FieldMask {
    /// Width of the mask, which is also the maximum number of fields in a schema
    pub const BITS: usize = u128::BITS as usize;

    /// Unscoped: matches every field
    pub const ALL: FieldMask = FieldMask(u128::MAX);

    /// Matches no field
    pub const NONE: FieldMask = FieldMask(0);

    pub fn bit(field: FieldId) -> Self {
        debug_assert!(field.as_usize() < Self::BITS);
        FieldMask(1u128 << field.0)
    }

    pub fn from_bits(bits: u128) -> Self {
        FieldMask(bits)
    }

    pub fn bits(self) -> u128 {
        self.0
    }

    pub fn is_all(self) -> bool {
        self == Self::ALL
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, field: FieldId) -> bool {
        field.as_usize() < Self::BITS && self.0 & (1u128 << field.0) != 0
    }

    pub fn intersects(self, other: FieldMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Field ids whose bits are set, ascending
    pub fn fields(self) -> impl Iterator<Item = FieldId> {
        (0..Self::BITS as u16)
            .map(FieldId)
            .filter(move |f| self.contains(*f))
    }
}

impl Default for FieldMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Debug for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            write!(f, "FieldMask(ALL)")
        } else {
            write!(f, "FieldMask({:#x})", self.0)
        }
    }
}

impl BitAnd for FieldMask {
    type Output = FieldMask;

    fn bitand(self, rhs: FieldMask) -> FieldMask {
        FieldMask(self.0 & rhs.0)
    }
}

impl BitAndAssign for FieldMask {
    fn bitand_assign(&mut self, rhs: FieldMask) {
        self.0 &= rhs.0;
    }
}

impl BitOr for FieldMask {
    type Output = FieldMask;

    fn bitor(self, rhs: FieldMask) -> FieldMask {
        FieldMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for FieldMask {
    fn bitor_assign(&mut self, rhs: FieldMask) {
        self.0 |= rhs.0;
    }
}
