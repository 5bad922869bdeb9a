//! Template pools and placeholder substitution for profile summaries.
//!
//! Pool order matters: the seeded index selects by position, so reordering
//! or resizing a pool changes which sentence a given name receives.

/// Role descriptions; rendered directly after the member's name.
pub static ROLE_TEMPLATES: &[&str] = &[
    "is a connector who treats every channel like a front door",
    "is a builder at heart, happiest when conversations flow into one place",
    "is a natural host who makes even the busiest inbox feel calm",
    "is a pragmatist with a soft spot for well-labelled queues",
    "is a tinkerer who pokes at every new channel the day it ships",
    "is a quiet organizer who keeps the whole team in sync",
];

/// Current-focus sentences; each contains `{firstName}`.
pub static FOCUS_TEMPLATES: &[&str] = &[
    "These days {firstName} is focused on bringing voice, chat, and email into one tidy stream.",
    "Right now {firstName} is teaching teammates to hand off threads without dropping context.",
    "Lately {firstName} has been shaving seconds off first-reply times, one macro at a time.",
    "At the moment {firstName} is sorting out which conversations deserve a human and which a bot.",
    "This month {firstName} is untangling an old backlog one saved reply at a time.",
    "Currently {firstName} is campaigning for fewer dashboards and better defaults.",
];

/// Personality-trait sentences; each contains `{firstName}`.
pub static TRAIT_TEMPLATES: &[&str] = &[
    "Teammates say {firstName} stays calm even when every channel lights up at once.",
    "Around the office, {firstName} is known for remembering every customer's last conversation.",
    "People count on {firstName} to ask the question everyone else forgot.",
    "Colleagues describe {firstName} as generous with credit and allergic to jargon.",
    "Friends joke that {firstName} can triage an inbox faster than most people can read one.",
    "Anyone who works with {firstName} knows good ideas become tickets within the hour.",
];

/// After-hours sentences; each contains `{firstName}`.
pub static HOBBY_TEMPLATES: &[&str] = &[
    "Off the clock, {firstName} unwinds with long walks and longer playlists.",
    "Outside of work, {firstName} is slowly perfecting a single pour-over recipe.",
    "On weekends, {firstName} trades notifications for a stack of paperbacks.",
    "After hours, {firstName} tends a balcony garden that gets more attention than any inbox.",
    "When the queues go quiet, {firstName} is usually planning the next hiking trip.",
    "Evenings find {firstName} sketching, cooking, or losing gracefully at board games.",
];

/// Substitute name placeholders in a template.
///
/// Replaces every occurrence of the literal `{name}`, then every occurrence
/// of `{firstName}`. No other placeholders are recognized; unknown `{...}`
/// tokens pass through unchanged.
pub fn render_template(template: &str, name: &str, first_name: &str) -> String {
    template
        .replace("{name}", name)
        .replace("{firstName}", first_name)
}
