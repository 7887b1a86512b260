//! Cross-reference linking between canvas items.
//!
//! Items such as a pain reliever and the pain it addresses are linked in one
//! of two ways:
//!
//! - **Explicit reference**: the linking item carries a ref that equals the
//!   target's `id`. Exact, case-sensitive match.
//! - **Text heuristic**: with no ref, the two texts match when either one
//!   contains the other, ignoring case. This can over-match on short or
//!   overlapping phrasing and under-match on paraphrases.

/// Case-insensitive containment in either direction.
pub fn texts_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Resolves a link from a referencing item to a candidate target.
///
/// `reference` and `reference_text` describe the linking side (e.g. a
/// reliever's `pain_ref` and `target_pain`); `target_id` and `target_text`
/// describe the candidate (e.g. a pain's `id` and `description`).
pub fn links_to(
    reference: Option<&str>,
    reference_text: &str,
    target_id: Option<&str>,
    target_text: &str,
) -> bool {
    match reference {
        Some(reference) => target_id == Some(reference),
        None => texts_match(reference_text, target_text),
    }
}
