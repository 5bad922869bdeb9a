//! Bucketed emotion timeline aggregation.

use serde::{Deserialize, Serialize};

use crate::emotion::{EmotionKind, EmotionSample};

/// Default bucket width used by the session view
pub const DEFAULT_BUCKET_MS: u64 = 5_000;

/// One fixed-width slice of the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBucket {
    pub start_ms: u64,
    pub end_ms: u64,

    /// Emotion with the highest summed intensity in this bucket.
    /// Empty buckets report `Neutral` at zero intensity so renderers see
    /// gaps instead of skipped spans.
    pub dominant: EmotionKind,

    pub mean_intensity: f32,
    pub sample_count: usize,
}

/// Aggregated emotion timeline for one voice session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionTimeline {
    pub bucket_ms: u64,
    pub duration_ms: u64,
    pub buckets: Vec<TimelineBucket>,
}

impl EmotionTimeline {
    /// Aggregate samples into contiguous fixed-width buckets.
    ///
    /// Buckets cover `[0, max_offset]`; a sample at offset `t` lands in
    /// bucket `t / bucket_ms`. Dominance is the highest summed intensity,
    /// ties resolved in [`EmotionKind::ALL`] order. A zero `bucket_ms` is
    /// treated as 1 so the aggregation stays total.
    pub fn from_samples(samples: &[EmotionSample], bucket_ms: u64) -> Self {
        let bucket_ms = bucket_ms.max(1);

        let Some(max_offset) = samples.iter().map(|s| s.offset_ms).max() else {
            return Self {
                bucket_ms,
                duration_ms: 0,
                buckets: Vec::new(),
            };
        };

        let bucket_count = (max_offset / bucket_ms) as usize + 1;
        let mut sums = vec![[0.0f32; EmotionKind::ALL.len()]; bucket_count];
        let mut totals = vec![0.0f32; bucket_count];
        let mut counts = vec![0usize; bucket_count];

        for sample in samples {
            let bucket = (sample.offset_ms / bucket_ms) as usize;
            sums[bucket][sample.emotion.index()] += sample.intensity;
            totals[bucket] += sample.intensity;
            counts[bucket] += 1;
        }

        let buckets = (0..bucket_count)
            .map(|i| {
                let dominant = if counts[i] == 0 {
                    EmotionKind::Neutral
                } else {
                    dominant_of(&sums[i])
                };
                let mean_intensity = if counts[i] == 0 {
                    0.0
                } else {
                    totals[i] / counts[i] as f32
                };
                TimelineBucket {
                    start_ms: i as u64 * bucket_ms,
                    end_ms: (i as u64 + 1) * bucket_ms,
                    dominant,
                    mean_intensity,
                    sample_count: counts[i],
                }
            })
            .collect();

        Self {
            bucket_ms,
            duration_ms: max_offset,
            buckets,
        }
    }

    /// Session-wide dominant emotion, weighted by intensity
    pub fn dominant_emotion(&self) -> Option<EmotionKind> {
        if self.buckets.iter().all(|b| b.sample_count == 0) {
            return None;
        }

        let mut sums = [0.0f32; EmotionKind::ALL.len()];
        for bucket in &self.buckets {
            if bucket.sample_count > 0 {
                sums[bucket.dominant.index()] += bucket.mean_intensity * bucket.sample_count as f32;
            }
        }
        Some(dominant_of(&sums))
    }

    /// Intensity-weighted mean valence across all buckets, 0.0 when empty
    pub fn average_valence(&self) -> f32 {
        let mut weighted = 0.0f32;
        let mut weight = 0.0f32;
        for bucket in &self.buckets {
            if bucket.sample_count > 0 {
                let w = bucket.mean_intensity * bucket.sample_count as f32;
                weighted += bucket.dominant.valence() * w;
                weight += w;
            }
        }
        if weight > 0.0 {
            weighted / weight
        } else {
            0.0
        }
    }
}

fn dominant_of(sums: &[f32; EmotionKind::ALL.len()]) -> EmotionKind {
    let mut best = EmotionKind::ALL[0];
    let mut best_sum = sums[0];
    for emotion in EmotionKind::ALL {
        // Strict comparison keeps catalog order as the tiebreak
        if sums[emotion.index()] > best_sum {
            best = emotion;
            best_sum = sums[emotion.index()];
        }
    }
    best
}
