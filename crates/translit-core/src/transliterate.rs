use tracing::debug_span;

use crate::scheme::{run_rules, CasePolicy, Scheme};

/// Transliterate `text` under `scheme`.
///
/// Stages run in a fixed order and never interleave:
/// 1. base mapping, one input code point at a time, no lookahead;
/// 2. the scheme's rewrite rules, in declared order, over the stage-1 string;
/// 3. the case policy.
///
/// Total and deterministic: code points without a map entry pass through
/// unless the scheme declares a fallback grapheme.
pub fn transliterate(text: &str, scheme: &Scheme) -> String {
    let _span = debug_span!(
        "transliterate",
        scheme = scheme.id().code(),
        len = text.len()
    )
    .entered();

    let mapped = base_map(text, scheme);
    let rewritten = run_rules(scheme.rules(), mapped);
    match scheme.case_policy() {
        CasePolicy::Preserve => rewritten,
        CasePolicy::ForceUppercase => rewritten.to_uppercase(),
    }
}

fn base_map(text: &str, scheme: &Scheme) -> String {
    let map = scheme.map();
    let fallback = scheme.fallback();
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if let Some(grapheme) = map.get(c) {
            out.push_str(grapheme);
            continue;
        }
        match fallback {
            Some(fb) if !fb.passthrough.contains(c) => out.push_str(&fb.grapheme),
            _ => out.push(c),
        }
    }
    out
}
