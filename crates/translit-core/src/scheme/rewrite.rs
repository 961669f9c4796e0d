/// A literal substring substitution applied to base-mapped output.
///
/// Matching is case-sensitive, left-to-right and non-overlapping; text
/// produced by a replacement is never rescanned by the same rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pattern: String,
    replacement: String,
}

impl RewriteRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule, returning `None` when the pattern does not occur.
    pub fn apply(&self, text: &str) -> Option<String> {
        if self.pattern.is_empty() || !text.contains(&self.pattern) {
            return None;
        }
        Some(text.replace(&self.pattern, &self.replacement))
    }
}

/// Run all rules in declared order, each over the previous rule's output.
pub(crate) fn run_rules(rules: &[RewriteRule], text: String) -> String {
    rules
        .iter()
        .fold(text, |acc, rule| rule.apply(&acc).unwrap_or(acc))
}

/// Expand a digraph-collapse declaration into rewrite rules.
///
/// `digraph` followed by any of `before` becomes `single` followed by the
/// same letter. Rules are produced for each case combination of the
/// digraph and the following letter, grouped in this order:
/// lower/lower, UPPER/lower, UPPER/UPPER, lower/UPPER.
pub fn expand_collapse(digraph: &str, single: &str, before: &[String]) -> Vec<RewriteRule> {
    let lower = (digraph.to_lowercase(), single.to_lowercase());
    let upper = (digraph.to_uppercase(), single.to_uppercase());

    let mut rules = Vec::with_capacity(before.len() * 4);
    for ((pattern, replacement), upper_follow) in [
        (&lower, false),
        (&upper, false),
        (&upper, true),
        (&lower, true),
    ] {
        for letter in before {
            let follow = if upper_follow {
                letter.to_uppercase()
            } else {
                letter.to_lowercase()
            };
            rules.push(RewriteRule::new(
                format!("{pattern}{follow}"),
                format!("{replacement}{follow}"),
            ));
        }
    }
    rules
}
