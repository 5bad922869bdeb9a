//! Emotion vocabulary for voice sessions.

use serde::{Deserialize, Serialize};

/// Emotion classes emitted by the voice backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmotionKind {
    Neutral,
    Joy,
    Surprise,
    Curiosity,
    Frustration,
    Sadness,
}

impl EmotionKind {
    /// Catalog order; also the tiebreak order for dominance
    pub const ALL: [EmotionKind; 6] = [
        EmotionKind::Neutral,
        EmotionKind::Joy,
        EmotionKind::Surprise,
        EmotionKind::Curiosity,
        EmotionKind::Frustration,
        EmotionKind::Sadness,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            EmotionKind::Neutral => "Neutral",
            EmotionKind::Joy => "Joy",
            EmotionKind::Surprise => "Surprise",
            EmotionKind::Curiosity => "Curiosity",
            EmotionKind::Frustration => "Frustration",
            EmotionKind::Sadness => "Sadness",
        }
    }

    /// Pleasantness on a [-1, 1] scale
    pub fn valence(&self) -> f32 {
        match self {
            EmotionKind::Neutral => 0.0,
            EmotionKind::Joy => 0.9,
            EmotionKind::Surprise => 0.3,
            EmotionKind::Curiosity => 0.5,
            EmotionKind::Frustration => -0.7,
            EmotionKind::Sadness => -0.8,
        }
    }

    /// Position in [`EmotionKind::ALL`], for per-kind accumulators
    pub fn index(&self) -> usize {
        match self {
            EmotionKind::Neutral => 0,
            EmotionKind::Joy => 1,
            EmotionKind::Surprise => 2,
            EmotionKind::Curiosity => 3,
            EmotionKind::Frustration => 4,
            EmotionKind::Sadness => 5,
        }
    }
}

/// One scored emotion observation within a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionSample {
    /// Offset from session start, in milliseconds
    pub offset_ms: u64,

    pub emotion: EmotionKind,

    /// Model confidence/strength, clamped to [0, 1]
    pub intensity: f32,
}

impl EmotionSample {
    pub fn new(offset_ms: u64, emotion: EmotionKind, intensity: f32) -> Self {
        Self {
            offset_ms,
            emotion,
            intensity: intensity.clamp(0.0, 1.0),
        }
    }
}
