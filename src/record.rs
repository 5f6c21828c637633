//! Page Record — the value container the four ARC lists move between them.

/// Which list currently owns a key.
///
/// Authoritative for routing: every operation that moves a key between
/// lists updates the tag and the list membership together, never one
/// without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Resident, accessed once recently.
    T1,
    /// Resident, accessed more than once ("frequent").
    T2,
    /// Ghost of an eviction from T1.
    B1,
    /// Ghost of an eviction from T2.
    B2,
    /// Not present in any list.
    None,
}

impl Tag {
    pub fn is_resident(&self) -> bool {
        matches!(self, Tag::T1 | Tag::T2)
    }

    pub fn is_ghost(&self) -> bool {
        matches!(self, Tag::B1 | Tag::B2)
    }
}

/// The value associated with a key, tagged with its current owning list.
///
/// Record identity is preserved across any promotion/demotion that keeps
/// the key in the cache: a resident -> ghost -> resident round trip only
/// replaces the payload with whatever the latest `Set` supplied, it does
/// not allocate a fresh record for bookkeeping purposes.
#[derive(Debug, Clone)]
pub struct Record<V> {
    pub payload: V,
    pub tag: Tag,
}

impl<V> Record<V> {
    pub fn new(payload: V, tag: Tag) -> Self {
        Self { payload, tag }
    }
}
