//! git output parser

use std::sync::LazyLock;

use regex::Regex;

use super::GitError;
use crate::model::{UnmergedKind, UnmergedPath};

/// `git --version` output, e.g. `git version 2.39.3 (Apple Git-145)`
///
/// Groups: major, minor, optional patch.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git version (\d+)\.(\d+)(?:\.(\d+))?").expect("Invalid git version regex")
});

/// Extract `(major, minor, patch)` from `git --version` output
pub fn parse_version(output: &str) -> Option<(u32, u32, u32)> {
    let caps = VERSION_REGEX.captures(output.trim())?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    let patch = caps
        .get(3)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Some((major, minor, patch))
}

/// Parse `git status --porcelain=v1 -z` output into the unmerged paths
///
/// Each record is `XY <path>` terminated by NUL. Rename and copy records carry
/// their source path as an extra NUL-terminated field, which is skipped.
/// Records that are not unmerged are ignored; order is preserved.
pub fn parse_unmerged(output: &str) -> Result<Vec<UnmergedPath>, GitError> {
    let mut records = output.split('\0').filter(|r| !r.is_empty());
    let mut unmerged = Vec::new();

    while let Some(record) = records.next() {
        let (code, path) = split_record(record)?;

        if let Some(kind) = UnmergedKind::from_status_code(code) {
            unmerged.push(UnmergedPath::new(path, kind));
        } else if code.starts_with(['R', 'C']) {
            // source path of the rename/copy
            records.next();
        }
    }

    Ok(unmerged)
}

fn split_record(record: &str) -> Result<(&str, &str), GitError> {
    match (record.get(..2), record.get(2..3), record.get(3..)) {
        (Some(code), Some(" "), Some(path)) if !path.is_empty() => Ok((code, path)),
        _ => Err(GitError::ParseError(format!(
            "unexpected porcelain record: {:?}",
            record
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("git version 2.43.0\n"), Some((2, 43, 0)));
        assert_eq!(
            parse_version("git version 2.39.3 (Apple Git-145)"),
            Some((2, 39, 3))
        );
        assert_eq!(
            parse_version("git version 2.45.1.windows.1"),
            Some((2, 45, 1))
        );
        assert_eq!(parse_version("git version 3.0"), Some((3, 0, 0)));
        assert_eq!(parse_version("svn, version unknown"), None);
    }

    #[test]
    fn test_parse_unmerged_all_codes() {
        let output = "UU both.txt\0AA added.txt\0DD gone.txt\0AU ours.txt\0UA theirs.txt\0DU del_us.txt\0UD del_them.txt\0";
        let paths = parse_unmerged(output).unwrap();

        let kinds: Vec<(&str, UnmergedKind)> =
            paths.iter().map(|p| (p.path.as_str(), p.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("both.txt", UnmergedKind::BothModified),
                ("added.txt", UnmergedKind::BothAdded),
                ("gone.txt", UnmergedKind::BothDeleted),
                ("ours.txt", UnmergedKind::AddedByUs),
                ("theirs.txt", UnmergedKind::AddedByThem),
                ("del_us.txt", UnmergedKind::DeletedByUs),
                ("del_them.txt", UnmergedKind::DeletedByThem),
            ]
        );
    }

    #[test]
    fn test_parse_unmerged_skips_other_records() {
        let output = "M  staged.rs\0 M dirty.rs\0R  new.rs\0old.rs\0UU src/lib.rs\0";
        let paths = parse_unmerged(output).unwrap();
        assert_eq!(paths, vec![UnmergedPath::both_modified("src/lib.rs")]);
    }

    #[test]
    fn test_parse_unmerged_keeps_spaces_in_paths() {
        let paths = parse_unmerged("UU dir with space/file name.txt\0").unwrap();
        assert_eq!(paths[0].path, "dir with space/file name.txt");
    }

    #[test]
    fn test_parse_unmerged_empty() {
        assert!(parse_unmerged("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_unmerged_rejects_garbage() {
        assert!(matches!(
            parse_unmerged("UU\0"),
            Err(GitError::ParseError(_))
        ));
    }
}
