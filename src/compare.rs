//! Version-string comparison with constraint expressions.
//!
//! Utilities for deciding whether a version string satisfies a constraint, in the style of
//! package-manager range syntax:
//!
//! - `>=1.2&<2.0` — AND clauses joined by `&` (or a space);
//! - `<1.0|>=2.0` — OR clauses joined by `|`;
//! - `^1.2` — at least the given version, within the same major;
//! - `=1.2.3` or a bare `1.2.3` — equality;
//! - `*` — any non-empty operand.
//!
//! Version strings are normalized before comparison: a leading `v` is dropped, `-`/`_`/`+` act as
//! part separators, and boundaries between digits and letters split into their own parts.
//! Pre-release words rank below any release number (`dev` < `alpha` < `beta` < `rc` < `patch`),
//! so `1.0.0-beta` sorts before `1.0.0`.
//!
//! [`Comparator`] memoizes evaluated constraints in an instance-scoped cache; give each thread its
//! own instance for concurrent use.
//!
//! ## Examples
//!
//! ```rust
//! use numera::compare::{compare_versions, Comparator};
//!
//! let mut comparator = Comparator::new();
//! assert!(comparator.compare("1.4.2", ">=1.2&<2.0"));
//! assert!(comparator.compare("2.5.0", "<1.0|^2.1"));
//! assert!(!comparator.compare("2.0.0", "^1.0"));
//!
//! // 1.0.0-rc.1 is older than the 1.0.0 release.
//! assert!(compare_versions("1.0.0-rc.1", "1.0.0", false, false, false));
//! ```

use regex::Regex;
use std::collections::HashMap;

/// Splits a version string into comparable numeric parts.
///
/// Pre-release words collapse to their first letter's rank: `d`(ev) -5, `a`(lpha) -4, `b`(eta)
/// -3, `r`(c) -2, `p`(atch) -1, anything else lettered -6. The result is padded to at least
/// three parts.
///
/// # Examples
///
/// ```rust
/// use numera::compare::split_version_parts;
///
/// assert_eq!(split_version_parts("1.2.3"), vec![1, 2, 3]);
/// assert_eq!(split_version_parts("v1.2"), vec![1, 2, 0]);
/// assert_eq!(split_version_parts("2.0.0-alpha.1"), vec![2, 0, 0, -4, 1]);
/// assert_eq!(split_version_parts("1.0b2"), vec![1, 0, -3, 2]);
/// ```
#[must_use]
pub fn split_version_parts(version: &str) -> Vec<i64> {
    let lowered = version.to_lowercase();
    let stripped = Regex::new(r"^v\.?")
        .expect("static pattern")
        .replace(&lowered, "");
    let unified = stripped.replace(&['-', '_', '+'][..], ".");
    let digit_alpha = Regex::new(r"(\d)([a-z])")
        .expect("static pattern")
        .replace_all(&unified, "${1}.${2}")
        .into_owned();
    let alpha_digit = Regex::new(r"([a-z])(\d)")
        .expect("static pattern")
        .replace_all(&digit_alpha, "${1}.${2}")
        .into_owned();

    let mut parts: Vec<i64> = alpha_digit.split('.').map(rank_part).collect();
    while parts.len() < 3 {
        parts.push(0);
    }
    parts
}

fn rank_part(part: &str) -> i64 {
    match part.chars().next() {
        Some(c) if c.is_ascii_lowercase() => match c {
            'd' => -5,
            'a' => -4,
            'b' => -3,
            'r' => -2,
            'p' => -1,
            _ => -6,
        },
        _ => {
            let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        }
    }
}

/// Ordered comparison of two version strings.
///
/// Missing parts compare as zero. With `next_major`, versions whose leading part differs from the
/// constraint's never match. `greater_than` selects the direction and `or_equal` decides the
/// result when all parts are equal.
#[must_use]
pub fn compare_versions(
    actual: &str,
    constraint: &str,
    next_major: bool,
    greater_than: bool,
    or_equal: bool,
) -> bool {
    let actual = split_version_parts(actual);
    let constraint = split_version_parts(constraint);
    if next_major && actual[0] != constraint[0] {
        return false;
    }
    for i in 0..actual.len().max(constraint.len()) {
        let a = actual.get(i).copied().unwrap_or(0);
        let c = constraint.get(i).copied().unwrap_or(0);
        if a < c {
            return !greater_than;
        }
        if a > c {
            return greater_than;
        }
    }
    or_equal
}

/// Part-for-part equality of two version strings.
///
/// Unlike [`compare_versions`], trailing parts are not zero-padded against each other beyond the
/// shared normalization, so `1.0` equals `1.0.0` (both normalize to three parts) but `1.0.0.0`
/// does not equal `1.0.0`.
#[must_use]
pub fn versions_equal(actual: &str, constraint: &str) -> bool {
    split_version_parts(actual) == split_version_parts(constraint)
}

/// Evaluates constraint expressions against operands, memoizing each result.
///
/// # Examples
///
/// ```rust
/// use numera::compare::Comparator;
///
/// let mut comparator = Comparator::new();
/// assert!(comparator.compare("1.2.3", "1.2.3"));
/// assert!(comparator.compare("1.2.3", ">1.2|<1.0"));
/// assert!(comparator.compare_all(
///     &["1.2.3", "4.5.6"],
///     &[">=1.0", ">=4.5&<5.0"],
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    cache: HashMap<(String, String), bool>,
}

impl Comparator {
    /// Creates a comparator with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a single constraint expression against one operand.
    pub fn compare(&mut self, operand: &str, expression: &str) -> bool {
        let key = (operand.to_string(), expression.to_string());
        if let Some(&hit) = self.cache.get(&key) {
            return hit;
        }
        let result = evaluate(operand, expression);
        self.cache.insert(key, result);
        result
    }

    /// Evaluates expressions pairwise against operands; every pair must match.
    ///
    /// Iteration stops at the first empty operand, and an operand without a matching expression
    /// is compared against the empty expression.
    pub fn compare_all(&mut self, operands: &[&str], expressions: &[&str]) -> bool {
        let mut result = false;
        for (i, operand) in operands.iter().enumerate() {
            if operand.is_empty() {
                break;
            }
            let expression = expressions.get(i).copied().unwrap_or("");
            result = self.compare(operand, expression);
            if !result {
                return false;
            }
        }
        result
    }
}

fn evaluate(operand: &str, expression: &str) -> bool {
    if expression == "*" {
        return !operand.is_empty();
    }
    let mut result = true;
    'clauses: for clause in expression.split('|') {
        for piece in clause
            .split(|c| c == '&' || c == ' ')
            .filter(|piece| !piece.is_empty())
        {
            result = evaluate_piece(operand, piece);
            if !result {
                continue 'clauses;
            }
        }
        if result {
            break;
        }
    }
    result
}

fn evaluate_piece(operand: &str, piece: &str) -> bool {
    if let Some(rest) = piece.strip_prefix('>') {
        if let Some(rest) = rest.strip_prefix('=') {
            compare_versions(operand, rest, false, true, true)
        } else {
            compare_versions(operand, rest, false, true, false)
        }
    } else if let Some(rest) = piece.strip_prefix('<') {
        if let Some(rest) = rest.strip_prefix('=') {
            compare_versions(operand, rest, false, false, true)
        } else {
            compare_versions(operand, rest, false, false, false)
        }
    } else if let Some(rest) = piece.strip_prefix('^') {
        compare_versions(operand, rest, true, true, true)
    } else if let Some(rest) = piece.strip_prefix('=') {
        versions_equal(operand, rest)
    } else {
        versions_equal(operand, piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_normalizes_prefixes_and_separators() {
        assert_eq!(split_version_parts("v1.2.3"), vec![1, 2, 3]);
        assert_eq!(split_version_parts("v.1"), vec![1, 0, 0]);
        assert_eq!(split_version_parts("1_2-3"), vec![1, 2, 3]);
        assert_eq!(split_version_parts(""), vec![0, 0, 0]);
    }

    #[test]
    fn split_ranks_prerelease_words() {
        assert_eq!(split_version_parts("1.0.0-dev")[3], -5);
        assert_eq!(split_version_parts("1.0.0-alpha")[3], -4);
        assert_eq!(split_version_parts("1.0.0-beta")[3], -3);
        assert_eq!(split_version_parts("1.0.0-rc1"), vec![1, 0, 0, -2, 1]);
        assert_eq!(split_version_parts("1.0.0-xyz")[3], -6);
    }

    #[test]
    fn ordered_comparison() {
        assert!(compare_versions("1.2.3", "1.0.0", false, true, false));
        assert!(compare_versions("0.9", "1.0.0", false, false, false));
        assert!(compare_versions("1.0", "1.0.0", false, true, true));
        assert!(!compare_versions("1.0", "1.0.0", false, true, false));
    }

    #[test]
    fn prereleases_sort_before_releases() {
        assert!(compare_versions("1.0.0-beta", "1.0.0", false, false, false));
        assert!(compare_versions("1.0.0", "1.0.0-rc.2", false, true, false));
        // dev < alpha < beta < rc
        assert!(compare_versions("1.0.0-alpha", "1.0.0-beta", false, false, false));
        assert!(compare_versions("1.0.0-rc", "1.0.0-beta", false, true, false));
    }

    #[test]
    fn caret_stays_within_the_major() {
        assert!(compare_versions("1.5.0", "1.2.0", true, true, true));
        assert!(!compare_versions("2.0.0", "1.2.0", true, true, true));
        assert!(compare_versions("1.2.0", "1.2.0", true, true, true));
    }

    #[test]
    fn equality_pads_only_to_three_parts() {
        assert!(versions_equal("1.0", "1.0.0"));
        assert!(versions_equal("v1.0.0", "1.0.0"));
        assert!(!versions_equal("1.0.0.0", "1.0.0"));
        assert!(!versions_equal("1.0.1", "1.0.0"));
    }

    #[test]
    fn expressions_combine_and_or() {
        let mut comparator = Comparator::new();
        assert!(comparator.compare("1.2.3", ">=1.0&<2.0"));
        assert!(comparator.compare("1.2.3", ">=1.0 <2.0"));
        assert!(!comparator.compare("2.1.0", ">=1.0&<2.0"));
        assert!(comparator.compare("2.1.0", ">=1.0&<2.0|^2.1"));
        assert!(comparator.compare("1.2.3", "1.2.3"));
        assert!(comparator.compare("1.2.3", "=1.2.3"));
        assert!(!comparator.compare("1.2.4", "=1.2.3"));
    }

    #[test]
    fn star_matches_any_nonempty_operand() {
        let mut comparator = Comparator::new();
        assert!(comparator.compare("anything", "*"));
        assert!(!comparator.compare("", "*"));
    }

    #[test]
    fn results_are_cached_per_instance() {
        let mut comparator = Comparator::new();
        assert!(comparator.compare("1.2.3", ">=1.0"));
        assert_eq!(comparator.cache.len(), 1);
        assert!(comparator.compare("1.2.3", ">=1.0"));
        assert_eq!(comparator.cache.len(), 1);
    }

    #[test]
    fn compare_all_requires_every_pair_to_match() {
        let mut comparator = Comparator::new();
        assert!(comparator.compare_all(&["1.0", "2.0"], &[">=1.0", ">=2.0"]));
        assert!(!comparator.compare_all(&["1.0", "1.9"], &[">=1.0", ">=2.0"]));
        // An empty operand ends the walk with the result so far.
        assert!(comparator.compare_all(&["1.0", ""], &[">=1.0", ">=2.0"]));
        assert!(!comparator.compare_all(&[], &[]));
    }
}
