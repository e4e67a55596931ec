//! The [`CellEntry`] type — per-cell state read by painters and renderers.

/// What a cell *is*: painted terrain, or a search endpoint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Traversable and unremarkable.
    #[default]
    Open,
    /// A search origin. The search treats every `Start` cell as a source.
    Start,
    /// A search goal. The search stops at the nearest `End` cell.
    End,
    /// Impassable; never enumerated as a neighbor during search.
    Wall,
}

/// Per-cell record.
///
/// `kind` is owned by the paint collaborator; the search flags are written
/// by whoever consumes search events. `modified` is a dirty flag: set
/// whenever any other field changes, cleared only by the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellEntry {
    pub kind: CellKind,
    /// The search finalized (expanded) this cell.
    pub searched: bool,
    /// Reserved: the cell is in the search frontier.
    pub queued: bool,
    /// The cell lies on the reconstructed best path.
    pub path: bool,
    /// Dirty flag for the renderer.
    pub modified: bool,
}

impl CellEntry {
    /// Set the kind (builder).
    #[inline]
    pub const fn with_kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }
}

impl Default for CellEntry {
    /// A fresh entry is `Open` and already dirty, so a newly built grid is
    /// drawn in full on the first frame.
    #[inline]
    fn default() -> Self {
        Self {
            kind: CellKind::Open,
            searched: false,
            queued: false,
            path: false,
            modified: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_entry_is_open_and_dirty() {
        let e = CellEntry::default();
        assert_eq!(e.kind, CellKind::Open);
        assert!(e.modified);
        assert!(!e.searched && !e.queued && !e.path);
    }

    #[test]
    fn with_kind_builder() {
        let e = CellEntry::default().with_kind(CellKind::Wall);
        assert_eq!(e.kind, CellKind::Wall);
        assert!(e.modified);
    }
}
