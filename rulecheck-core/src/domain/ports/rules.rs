use crate::domain::rules::Rule;

/// Read access to a loaded rule collection.
pub trait RuleCatalog {
    /// Every loaded rule, in load order.
    fn get_rules(&self) -> &[Rule];

    /// Rules carrying at least one of `tags` (any-match, not all-match).
    fn get_rules_by_tags(&self, tags: &[String]) -> Vec<&Rule> {
        self.get_rules()
            .iter()
            .filter(|rule| rule.matches_any_tag(tags))
            .collect()
    }
}
