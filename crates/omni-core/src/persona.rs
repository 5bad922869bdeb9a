//! Agent persona catalog used by the dashboard and onboarding flow.

use serde::{Deserialize, Serialize};

/// Built-in agent persona presets
///
/// Each persona bundles a tone of voice and a short pitch shown during
/// onboarding. The set is fixed; custom personas are configured in the
/// separate agent backend, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonaKind {
    /// Warm, service-first, anticipates needs
    Concierge,
    /// Precise, leads with numbers and specifics
    Analyst,
    /// Narrative, paints the bigger picture
    Storyteller,
    /// Step-by-step, keeps the customer oriented
    Navigator,
    /// Short sentences, no filler
    Minimalist,
    /// Upbeat, celebrates every small win
    Cheerleader,
}

impl PersonaKind {
    pub const ALL: [PersonaKind; 6] = [
        PersonaKind::Concierge,
        PersonaKind::Analyst,
        PersonaKind::Storyteller,
        PersonaKind::Navigator,
        PersonaKind::Minimalist,
        PersonaKind::Cheerleader,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PersonaKind::Concierge => "Concierge",
            PersonaKind::Analyst => "Analyst",
            PersonaKind::Storyteller => "Storyteller",
            PersonaKind::Navigator => "Navigator",
            PersonaKind::Minimalist => "Minimalist",
            PersonaKind::Cheerleader => "Cheerleader",
        }
    }

    pub fn tone(&self) -> &'static str {
        match self {
            PersonaKind::Concierge => "Warm and attentive, always one step ahead",
            PersonaKind::Analyst => "Measured and exact, comfortable with detail",
            PersonaKind::Storyteller => "Conversational and vivid, favors examples",
            PersonaKind::Navigator => "Patient and structured, never skips a step",
            PersonaKind::Minimalist => "Brief and direct, trims every extra word",
            PersonaKind::Cheerleader => "Energetic and encouraging, quick to celebrate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PersonaKind::Concierge => {
                "Greets every customer like a regular and smooths over friction \
                 before it is mentioned. Best for high-touch support queues."
            }
            PersonaKind::Analyst => {
                "Answers with concrete figures, links, and caveats. Best for \
                 billing, usage, and technical accounts."
            }
            PersonaKind::Storyteller => {
                "Walks customers through what will happen and why it matters. \
                 Best for onboarding and product education."
            }
            PersonaKind::Navigator => {
                "Breaks every resolution into numbered steps and confirms each \
                 one. Best for troubleshooting flows."
            }
            PersonaKind::Minimalist => {
                "Gets to the answer in the fewest possible words. Best for \
                 SMS and other tight-format channels."
            }
            PersonaKind::Cheerleader => {
                "Keeps momentum up and makes progress visible. Best for \
                 activation campaigns and renewals."
            }
        }
    }
}
