//! The resolver contract for destination taxonomies.

use std::fmt::Debug;
use std::hash::Hash;

/// A member of a closed, externally defined category enumeration.
///
/// The mapping tables are generic over this trait so an alternate taxonomy
/// (or a tiny test enumeration) can be plugged in without touching the
/// parser or the lookup code.
pub trait TaxonomyCategory: Copy + Ord + Hash + Debug + Send + Sync + 'static {
    /// Resolve a numeric code to a member, or `None` if the code is unknown.
    fn from_code(code: u32) -> Option<Self>;

    /// Numeric code of this member.
    fn code(self) -> u32;

    /// Human-readable label published by the standard.
    fn label(self) -> &'static str;
}
