use crate::domain::models::MergeMode;
use anyhow::Context;
use indexmap::IndexSet;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum MergeError {
    #[error("no input files supplied")]
    NoInputFiles,
}

/// Read each file into an insertion-ordered set of trimmed lines.
/// First occurrence wins; blank lines become the empty string and take
/// part in set algebra like any other value.
pub fn read_line_sets<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<Vec<IndexSet<String>>> {
    let mut sets = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        sets.push(raw.lines().map(|line| line.trim().to_string()).collect());
    }
    Ok(sets)
}

/// Fold the line sets with the selected combinator.
///
/// Union keeps every element of any set, intersection keeps the elements
/// present in all sets, and symmetric difference chains the pairwise
/// operator (keeping elements present in an odd number of sets). Without
/// `sort`, first-seen order is preserved.
pub fn merge_lines(
    sets: Vec<IndexSet<String>>,
    mode: MergeMode,
    sort: bool,
) -> anyhow::Result<Vec<String>> {
    let mut sets = sets.into_iter();
    let first = sets.next().ok_or(MergeError::NoInputFiles)?;
    let merged = sets.fold(first, |acc, set| match mode {
        MergeMode::Union => &acc | &set,
        MergeMode::Intersect => &acc & &set,
        MergeMode::Difference => &acc ^ &set,
    });

    let mut lines: Vec<String> = merged.into_iter().collect();
    if sort {
        lines.sort();
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::{merge_lines, read_line_sets};
    use crate::domain::models::MergeMode;
    use indexmap::IndexSet;

    fn set(lines: &[&str]) -> IndexSet<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn fixtures() -> Vec<IndexSet<String>> {
        vec![set(&["?l?l", "?d?d"]), set(&["?d?d", "?u?u"])]
    }

    #[test]
    fn union_keeps_everything_once() {
        let merged = merge_lines(fixtures(), MergeMode::Union, false).unwrap();
        assert_eq!(merged, vec!["?l?l", "?d?d", "?u?u"]);
    }

    #[test]
    fn intersection_keeps_common_lines() {
        let merged = merge_lines(fixtures(), MergeMode::Intersect, false).unwrap();
        assert_eq!(merged, vec!["?d?d"]);
    }

    #[test]
    fn symmetric_difference_drops_common_lines() {
        let merged = merge_lines(fixtures(), MergeMode::Difference, false).unwrap();
        assert_eq!(merged, vec!["?l?l", "?u?u"]);
    }

    #[test]
    fn symmetric_difference_chains_across_three_sets() {
        let sets = vec![set(&["a", "b"]), set(&["b", "c"]), set(&["c", "d"])];
        let merged = merge_lines(sets, MergeMode::Difference, false).unwrap();
        assert_eq!(merged, vec!["a", "d"]);
    }

    #[test]
    fn sort_orders_the_merged_lines() {
        let merged = merge_lines(fixtures(), MergeMode::Union, true).unwrap();
        assert_eq!(merged, vec!["?d?d", "?l?l", "?u?u"]);
    }

    #[test]
    fn single_set_passes_through_any_mode() {
        for mode in [MergeMode::Union, MergeMode::Intersect, MergeMode::Difference] {
            let merged = merge_lines(vec![set(&["?l", "?u"])], mode, false).unwrap();
            assert_eq!(merged, vec!["?l", "?u"]);
        }
    }

    #[test]
    fn no_sets_is_an_error() {
        let err = merge_lines(Vec::new(), MergeMode::Union, false).unwrap_err();
        assert!(err.to_string().contains("no input files"));
    }

    #[test]
    fn lines_are_trimmed_and_deduplicated_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("masks.txt");
        std::fs::write(&path, "  ?l?l \n?d?d\n?l?l\n").unwrap();

        let sets = read_line_sets(&[&path]).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(
            sets[0].iter().collect::<Vec<_>>(),
            vec!["?l?l", "?d?d"]
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_line_sets(&["/no/such/masks.txt"]).unwrap_err();
        assert!(err.to_string().contains("/no/such/masks.txt"));
    }
}
