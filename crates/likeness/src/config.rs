use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use likeness_types::TypeDescriptor;

use crate::error::{CompareError, CompareResult};

/// Configuration for one comparison.
///
/// The same configuration is used, unchanged, at every level of the
/// descent started by a top-level comparison call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Whether members declared on ancestor types are compared too.
    pub include_inherited_members: bool,
    /// When present and non-empty, only these members are compared, on every
    /// record at every depth.
    pub member_allow_list: Option<BTreeSet<String>>,
    /// Upper bound on descent depth. `None` is unbounded.
    pub max_depth: Option<usize>,
}

impl CompareConfig {
    /// The default configuration: own members only, no allow-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare every member, including those declared on ancestors.
    pub fn strict() -> Self {
        Self {
            include_inherited_members: true,
            ..Default::default()
        }
    }

    /// Set whether ancestor members are compared.
    pub fn with_inherited_members(mut self, include: bool) -> Self {
        self.include_inherited_members = include;
        self
    }

    /// Restrict comparison to the named members.
    pub fn with_allowed_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.member_allow_list = Some(members.into_iter().map(Into::into).collect());
        self
    }

    /// Bound the descent depth.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Returns `true` if the member `name` takes part in comparison. An
    /// absent or empty allow-list admits every member.
    pub fn member_allows(&self, name: &str) -> bool {
        match &self.member_allow_list {
            Some(allowed) if !allowed.is_empty() => allowed.contains(name),
            _ => true,
        }
    }

    /// Parse a configuration from TOML text.
    ///
    /// ```rust
    /// use likeness::CompareConfig;
    ///
    /// let config = CompareConfig::from_toml_str(
    ///     "include_inherited_members = true\nmember_allow_list = [\"Age\"]",
    /// )
    /// .unwrap();
    /// assert!(config.include_inherited_members);
    /// assert!(config.member_allows("Age"));
    /// assert!(!config.member_allows("FirstName"));
    /// ```
    pub fn from_toml_str(text: &str) -> CompareResult<Self> {
        toml::from_str(text).map_err(|e| CompareError::Config(e.to_string()))
    }

    /// Check that every allow-listed member exists on some record reachable
    /// from `descriptor`.
    pub fn validate_for(&self, descriptor: &TypeDescriptor) -> CompareResult<()> {
        let Some(allowed) = &self.member_allow_list else {
            return Ok(());
        };
        let known = descriptor.reachable_member_names();
        match allowed.iter().find(|name| !known.contains(name.as_str())) {
            Some(name) => Err(CompareError::UnknownMember {
                name: name.clone(),
                type_name: descriptor.short_name(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = CompareConfig::default();
        assert!(!c.include_inherited_members);
        assert!(c.member_allow_list.is_none());
        assert!(c.max_depth.is_none());
        assert!(c.member_allows("anything"));
    }

    #[test]
    fn strict_includes_inherited() {
        assert!(CompareConfig::strict().include_inherited_members);
    }

    #[test]
    fn empty_allow_list_admits_everything() {
        let c = CompareConfig::new().with_allowed_members(Vec::<String>::new());
        assert!(c.member_allows("Age"));
    }

    #[test]
    fn allow_list_restricts() {
        let c = CompareConfig::new().with_allowed_members(["Age", "Children"]);
        assert!(c.member_allows("Age"));
        assert!(c.member_allows("Children"));
        assert!(!c.member_allows("FirstName"));
    }

    #[test]
    fn toml_parsing() {
        let c = CompareConfig::from_toml_str("max_depth = 8").unwrap();
        assert_eq!(c.max_depth, Some(8));
        assert!(!c.include_inherited_members);
    }

    #[test]
    fn toml_errors_are_config_errors() {
        let err = CompareConfig::from_toml_str("include_inherited_members = \"yes\"").unwrap_err();
        assert!(matches!(err, CompareError::Config(_)));
    }

    #[test]
    fn json_roundtrip() {
        let c = CompareConfig::strict()
            .with_allowed_members(["Age"])
            .with_max_depth(4);
        let json = serde_json::to_string(&c).unwrap();
        let parsed: CompareConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, parsed);
    }
}
