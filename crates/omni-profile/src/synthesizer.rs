//! Profile summary synthesis.

use omni_core::PersonaKind;

use crate::seed::seeded_index;
use crate::templates::{
    render_template, FOCUS_TEMPLATES, HOBBY_TEMPLATES, ROLE_TEMPLATES, TRAIT_TEMPLATES,
};

/// Name substituted when the input is empty after trimming.
///
/// The HTTP layer applies its own `"Explorer"` fallback before calling in;
/// this one only shows up for callers that pass a blank name directly.
pub const MISSING_NAME_FALLBACK: &str = "This member";

// One salt per pool so the same name indexes each pool independently.
const ROLE_SALT: i64 = 0;
const FOCUS_SALT: i64 = 7;
const TRAIT_SALT: i64 = 11;
const HOBBY_SALT: i64 = 17;
const PERSONA_SALT: i64 = 23;

/// Synthesize a deterministic two-paragraph profile summary for a name.
///
/// Paragraph one is the member's role and current focus, paragraph two a
/// trait and a hobby, separated by a blank line. The same input always
/// yields the same summary, and the function never fails: empty and
/// whitespace-only names fall back to [`MISSING_NAME_FALLBACK`].
pub fn synthesize_profile_summary(raw_name: &str) -> String {
    let trimmed = raw_name.trim();
    let name = if trimmed.is_empty() {
        MISSING_NAME_FALLBACK
    } else {
        trimmed
    };
    let first_name = name.split_whitespace().next().unwrap_or(name);

    let role = ROLE_TEMPLATES[seeded_index(name, ROLE_TEMPLATES.len(), ROLE_SALT)];
    let focus = render_template(
        FOCUS_TEMPLATES[seeded_index(name, FOCUS_TEMPLATES.len(), FOCUS_SALT)],
        name,
        first_name,
    );
    let trait_line = render_template(
        TRAIT_TEMPLATES[seeded_index(name, TRAIT_TEMPLATES.len(), TRAIT_SALT)],
        name,
        first_name,
    );
    let hobby = render_template(
        HOBBY_TEMPLATES[seeded_index(name, HOBBY_TEMPLATES.len(), HOBBY_SALT)],
        name,
        first_name,
    );

    format!("{name} {role}. {focus}\n\n{trait_line} {hobby}")
}

/// Deterministically assign an agent persona to a member name.
///
/// Uses the same seeded hash as the summary pools with its own salt, so a
/// member keeps their persona across sessions without any stored state.
pub fn persona_for_name(name: &str) -> PersonaKind {
    PersonaKind::ALL[seeded_index(name, PersonaKind::ALL.len(), PERSONA_SALT)]
}
