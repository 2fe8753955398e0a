use serde::{Deserialize, Serialize};

/// Hidden value stored in a mine cell.
pub const MINE: i8 = -1;

/// Player-facing marker of a cell. Serialized with the short tags callers already store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellStatus {
    #[serde(rename = "C")]
    Covered,
    #[serde(rename = "U")]
    Uncovered,
    #[serde(rename = "F")]
    Flagged,
    #[serde(rename = "?")]
    Questioned,
}

impl CellStatus {
    /// Next marker in the `Covered -> Flagged -> Questioned -> Covered` cycle, `None` for uncovered
    /// cells which cannot be marked.
    pub const fn next_mark(self) -> Option<Self> {
        use CellStatus::*;
        match self {
            Covered => Some(Flagged),
            Flagged => Some(Questioned),
            Questioned => Some(Covered),
            Uncovered => None,
        }
    }

    /// Whether a reveal may open a cell with this status.
    pub const fn is_revealable(self) -> bool {
        matches!(self, Self::Covered | Self::Questioned)
    }

    pub const fn tag(self) -> &'static str {
        use CellStatus::*;
        match self {
            Covered => "C",
            Uncovered => "U",
            Flagged => "F",
            Questioned => "?",
        }
    }
}

impl Default for CellStatus {
    fn default() -> Self {
        Self::Covered
    }
}

/// One grid position: the hidden value fixed at generation and its current status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: i8,
    status: CellStatus,
}

impl Cell {
    pub const fn value(self) -> i8 {
        self.value
    }

    pub const fn status(self) -> CellStatus {
        self.status
    }

    pub const fn is_mine(self) -> bool {
        self.value == MINE
    }

    pub(crate) fn set_value(&mut self, value: i8) {
        self.value = value;
    }

    pub(crate) fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_cycle_back_to_covered() {
        let mut status = CellStatus::Covered;
        let mut seen = Vec::new();
        for _ in 0..3 {
            status = status.next_mark().unwrap();
            seen.push(status);
        }

        assert_eq!(
            seen,
            [CellStatus::Flagged, CellStatus::Questioned, CellStatus::Covered]
        );
        assert_eq!(CellStatus::Uncovered.next_mark(), None);
    }

    #[test]
    fn flagged_cells_are_not_revealable() {
        assert!(CellStatus::Covered.is_revealable());
        assert!(CellStatus::Questioned.is_revealable());
        assert!(!CellStatus::Flagged.is_revealable());
        assert!(!CellStatus::Uncovered.is_revealable());
    }

    #[test]
    fn status_serializes_as_short_tag() {
        for status in [
            CellStatus::Covered,
            CellStatus::Uncovered,
            CellStatus::Flagged,
            CellStatus::Questioned,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.tag()));
        }
    }
}
