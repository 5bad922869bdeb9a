//! Demo dataset for the dashboard.
//!
//! The production dashboard reads from the message backend; out of the box
//! the API serves this fixture instead. Attributes are derived from each
//! contact's name with the same seeded hash the profile synthesizer uses,
//! so every boot produces the same inbox apart from ids and timestamps.

use omni_conversations::Conversation;
use omni_core::{ChannelKind, ConversationId, ConversationStatus, Timestamp, VoiceSessionId};
use omni_profile::{persona_for_name, seeded_index};
use omni_voice::{EmotionKind, EmotionSample, VoiceSession};

const DEMO_CONTACTS: &[&str] = &[
    "Amara Chen",
    "Luis Ortega",
    "Priya Nair",
    "Sam Okafor",
    "Ines Moreau",
    "Dmitri Volkov",
    "Yuki Tanaka",
    "Grace Adeyemi",
];

const DEMO_PREVIEWS: &[&str] = &[
    "Thanks, that fixed it!",
    "Can you move my order to the new address?",
    "Still seeing the error after the update.",
    "What time does the callback window open?",
    "Perfect, see you Thursday then.",
    "Is the annual plan cheaper than monthly?",
];

// Salts distinct from the profile pools so demo attributes do not simply
// shadow the summary selections for the same name.
const CHANNEL_SALT: i64 = 3;
const STATUS_SALT: i64 = 5;
const UNREAD_SALT: i64 = 13;
const PREVIEW_SALT: i64 = 19;
const EMOTION_SALT: i64 = 29;
const INTENSITY_SALT: i64 = 31;

/// Conversations shown in the demo inbox
pub fn demo_conversations() -> Vec<Conversation> {
    let now = Timestamp::now();

    DEMO_CONTACTS
        .iter()
        .enumerate()
        .map(|(i, contact)| {
            let channel =
                ChannelKind::ALL[seeded_index(contact, ChannelKind::ALL.len(), CHANNEL_SALT)];
            let status = ConversationStatus::ALL
                [seeded_index(contact, ConversationStatus::ALL.len(), STATUS_SALT)];
            let preview =
                DEMO_PREVIEWS[seeded_index(contact, DEMO_PREVIEWS.len(), PREVIEW_SALT)];

            Conversation {
                id: ConversationId::new(),
                contact_name: contact.to_string(),
                channel,
                status,
                last_message_preview: preview.to_string(),
                last_activity: Timestamp::from_millis(
                    now.as_millis() - (i as i64 + 1) * 7 * 60_000,
                ),
                unread_count: seeded_index(contact, 7, UNREAD_SALT) as u32,
                assigned_persona: persona_for_name(contact),
            }
        })
        .collect()
}

/// Recorded voice sessions for the demo session view
pub fn demo_voice_sessions() -> Vec<VoiceSession> {
    let now = Timestamp::now();

    DEMO_CONTACTS
        .iter()
        .take(4)
        .enumerate()
        .map(|(i, contact)| {
            // 8-14 samples, one every four seconds
            let sample_count = 8 + seeded_index(contact, 7, EMOTION_SALT);
            let samples: Vec<EmotionSample> = (0..sample_count)
                .map(|step| {
                    let key = format!("{contact}#{step}");
                    let emotion = EmotionKind::ALL
                        [seeded_index(&key, EmotionKind::ALL.len(), EMOTION_SALT)];
                    let intensity = 0.35 + 0.12 * seeded_index(&key, 5, INTENSITY_SALT) as f32;
                    EmotionSample::new(step as u64 * 4_000, emotion, intensity)
                })
                .collect();

            let duration_ms = sample_count as u64 * 4_000;

            VoiceSession {
                id: VoiceSessionId::new(),
                member_name: contact.to_string(),
                started_at: Timestamp::from_millis(
                    now.as_millis() - (i as i64 + 1) * 45 * 60_000,
                ),
                duration_ms,
                samples,
            }
        })
        .collect()
}
