use crate::risk::{classify, RiskLevel, RiskResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed camera slots on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChannelId {
    Cctv1,
    Cctv2,
    Cctv3,
    Cctv4,
}

impl ChannelId {
    pub const ALL: [ChannelId; 4] = [
        ChannelId::Cctv1,
        ChannelId::Cctv2,
        ChannelId::Cctv3,
        ChannelId::Cctv4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelId::Cctv1 => "CCTV1",
            ChannelId::Cctv2 => "CCTV2",
            ChannelId::Cctv3 => "CCTV3",
            ChannelId::Cctv4 => "CCTV4",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied literal result that replaces the computed classification
/// for one channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskOverride {
    pub level: RiskLevel,
    pub score: u8,
    pub description: String,
}

impl From<RiskOverride> for RiskResult {
    fn from(value: RiskOverride) -> Self {
        RiskResult {
            level: value.level,
            score: value.score,
            description: value.description,
        }
    }
}

/// Classifier input for a channel: the image basename joined with the channel
/// name, so that changing either changes the classification.
pub fn classify_input(image_basename: &str, channel: ChannelId) -> String {
    format!("{image_basename}-{channel}")
}

/// Classify one channel's current image, honoring an override if one is
/// configured. The override wins unconditionally; the classifier is not
/// consulted for that channel.
pub fn assess(
    channel: ChannelId,
    image_basename: &str,
    override_result: Option<&RiskOverride>,
) -> RiskResult {
    if let Some(fixed) = override_result {
        return fixed.clone().into();
    }
    classify(&classify_input(image_basename, channel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_joins_basename_and_channel() {
        assert_eq!(classify_input("case1.png", ChannelId::Cctv1), "case1.png-CCTV1");
    }

    #[test]
    fn override_takes_precedence() {
        let fixed = RiskOverride {
            level: RiskLevel::Medium,
            score: 68,
            description: "fixed".into(),
        };
        let result = assess(ChannelId::Cctv2, "case2.png", Some(&fixed));
        assert_eq!(
            result,
            RiskResult {
                level: RiskLevel::Medium,
                score: 68,
                description: "fixed".into(),
            }
        );
        // The computed value would have been different.
        let computed = assess(ChannelId::Cctv2, "case2.png", None);
        assert_eq!(computed.score, 90);
        assert_ne!(result, computed);
    }

    #[test]
    fn channels_are_assessed_independently() {
        let a = assess(ChannelId::Cctv1, "x.png", None);
        let b = assess(ChannelId::Cctv2, "x.png", None);
        assert_eq!(a, classify("x.png-CCTV1"));
        assert_eq!(b, classify("x.png-CCTV2"));
    }
}
