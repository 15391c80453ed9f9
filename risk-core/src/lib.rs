pub mod assets;
pub mod channels;
pub mod risk;

pub use channels::{ChannelId, RiskOverride};
pub use risk::{RiskLevel, RiskResult};
