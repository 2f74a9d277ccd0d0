//! Unmerged path model (what the backend reports as conflicted)

use std::fmt;

/// How a path ended up unmerged, from the index stage codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmergedKind {
    #[default]
    BothModified,
    BothAdded,
    AddedByUs,
    AddedByThem,
    DeletedByUs,
    DeletedByThem,
    BothDeleted,
}

impl UnmergedKind {
    /// Map a two-letter porcelain status code to a kind
    ///
    /// Returns `None` for codes that do not denote an unmerged entry.
    pub fn from_status_code(code: &str) -> Option<Self> {
        match code {
            "UU" => Some(Self::BothModified),
            "AA" => Some(Self::BothAdded),
            "AU" => Some(Self::AddedByUs),
            "UA" => Some(Self::AddedByThem),
            "DU" => Some(Self::DeletedByUs),
            "UD" => Some(Self::DeletedByThem),
            "DD" => Some(Self::BothDeleted),
            _ => None,
        }
    }

    /// Short label for compact display
    pub fn short_label(self) -> &'static str {
        match self {
            Self::BothModified => "UU",
            Self::BothAdded => "AA",
            Self::AddedByUs => "AU",
            Self::AddedByThem => "UA",
            Self::DeletedByUs => "DU",
            Self::DeletedByThem => "UD",
            Self::BothDeleted => "DD",
        }
    }
}

impl fmt::Display for UnmergedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothModified => write!(f, "both modified"),
            Self::BothAdded => write!(f, "both added"),
            Self::AddedByUs => write!(f, "added by us"),
            Self::AddedByThem => write!(f, "added by them"),
            Self::DeletedByUs => write!(f, "deleted by us"),
            Self::DeletedByThem => write!(f, "deleted by them"),
            Self::BothDeleted => write!(f, "both deleted"),
        }
    }
}

/// A path reported as unmerged by the version-control backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmergedPath {
    /// Path relative to the repository root
    pub path: String,
    pub kind: UnmergedKind,
}

impl UnmergedPath {
    pub fn new(path: impl Into<String>, kind: UnmergedKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Shorthand for the common "both modified" case
    pub fn both_modified(path: impl Into<String>) -> Self {
        Self::new(path, UnmergedKind::BothModified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_code_unmerged() {
        assert_eq!(
            UnmergedKind::from_status_code("UU"),
            Some(UnmergedKind::BothModified)
        );
        assert_eq!(
            UnmergedKind::from_status_code("DD"),
            Some(UnmergedKind::BothDeleted)
        );
        assert_eq!(
            UnmergedKind::from_status_code("UA"),
            Some(UnmergedKind::AddedByThem)
        );
    }

    #[test]
    fn test_from_status_code_regular() {
        assert_eq!(UnmergedKind::from_status_code("M "), None);
        assert_eq!(UnmergedKind::from_status_code("??"), None);
        assert_eq!(UnmergedKind::from_status_code(""), None);
    }

    #[test]
    fn test_short_label_round_trips() {
        for code in ["UU", "AA", "AU", "UA", "DU", "UD", "DD"] {
            let kind = UnmergedKind::from_status_code(code).unwrap();
            assert_eq!(kind.short_label(), code);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(UnmergedKind::DeletedByUs.to_string(), "deleted by us");
        assert_eq!(UnmergedKind::default().to_string(), "both modified");
    }
}
