//! File-name patterns that are never bundled into an asset archive.
//!
//! Patterns are matched against a single path component, so a rule applies
//! at any nesting depth. A matching directory is pruned together with
//! everything beneath it.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::ffi::OsStr;

/// Patterns excluded from workshop archives.
///
/// - `.gitkeep`: placeholder keeping empty directories in git
/// - `__pycache__`: Python bytecode caches
/// - `.DS_Store`: Finder metadata
/// - `._*`: AppleDouble resource-fork shadow files
pub const DEFAULT_EXCLUSIONS: [&str; 4] = [".gitkeep", "__pycache__", ".DS_Store", "._*"];

/// A compiled set of file-name exclusion patterns.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    patterns: Vec<String>,
    set: GlobSet,
}

impl ExclusionRules {
    /// Compile `patterns` into a rule set.
    ///
    /// # Errors
    ///
    /// Returns a [`globset::Error`] if any pattern is not a valid glob.
    pub fn new<I, S>(patterns: I) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder.add(Glob::new(pattern)?);
            kept.push(pattern.to_owned());
        }
        Ok(Self {
            patterns: kept,
            set: builder.build()?,
        })
    }

    /// Compile the [`DEFAULT_EXCLUSIONS`].
    ///
    /// # Errors
    ///
    /// Returns a [`globset::Error`] if a default pattern fails to compile.
    pub fn workshop_defaults() -> Result<Self, globset::Error> {
        Self::new(DEFAULT_EXCLUSIONS)
    }

    /// Return whether the path component `name` is excluded.
    #[must_use]
    pub fn is_excluded(&self, name: &OsStr) -> bool {
        self.set.is_match(name)
    }

    /// Return the source patterns in the order they were added.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn rules() -> ExclusionRules {
        ExclusionRules::workshop_defaults().expect("defaults compile")
    }

    #[rstest]
    #[case::placeholder(".gitkeep")]
    #[case::pycache("__pycache__")]
    #[case::finder(".DS_Store")]
    #[case::apple_double("._article.json")]
    #[case::apple_double_bare("._")]
    fn excludes_noise(rules: ExclusionRules, #[case] name: &str) {
        assert!(rules.is_excluded(OsStr::new(name)), "{name} should be excluded");
    }

    #[rstest]
    #[case::article("cbssports-articles-2025-07-01-12-00-00.json")]
    #[case::parquet("embeddings.parquet")]
    #[case::wasm("turbopuffer_index_articles.wasm")]
    #[case::dotfile(".env")]
    #[case::underscore_only("_private")]
    #[case::gitkeep_suffix("not.gitkeep")]
    fn keeps_assets(rules: ExclusionRules, #[case] name: &str) {
        assert!(!rules.is_excluded(OsStr::new(name)), "{name} should be kept");
    }

    #[rstest]
    fn patterns_preserve_order(rules: ExclusionRules) {
        assert_eq!(rules.patterns(), DEFAULT_EXCLUSIONS);
    }

    #[test]
    fn rejects_invalid_glob() {
        assert!(ExclusionRules::new(["[unterminated"]).is_err());
    }

    #[test]
    fn empty_rules_exclude_nothing() {
        let rules = ExclusionRules::new(Vec::<String>::new()).expect("empty set");
        assert!(!rules.is_excluded(OsStr::new(".DS_Store")));
    }
}
