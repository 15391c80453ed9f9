use report_locale::{self as locale, Lang};
use risk_core::assets::image_basename;
use risk_core::channels::assess;
use risk_core::{ChannelId, RiskLevel};
use std::collections::BTreeMap;

/// Everything one channel row needs on screen, with localization already
/// resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelCardDto {
    pub channel: String,
    pub image_url: String,
    pub level: RiskLevel,
    pub score: u8,
    pub alarm_class: String,
    pub alarm_main: String,
    pub alarm_sub: String,
    pub description: String,
}

fn alarm_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "alarm-box alarm-high",
        RiskLevel::Medium => "alarm-box alarm-medium",
        RiskLevel::Low => "alarm-box alarm-low",
    }
}

/// Build the four channel cards for the active language. Results are computed
/// fresh on every call; the CCTV2 override replaces its computed result at
/// this call site.
pub fn build_cards(lang: Lang, images: &BTreeMap<ChannelId, String>) -> Vec<ChannelCardDto> {
    ChannelId::ALL
        .iter()
        .map(|&channel| {
            let image_url = images
                .get(&channel)
                .cloned()
                .unwrap_or_default();
            let fixed = locale::channel_override(channel, lang);
            let result = assess(channel, image_basename(&image_url), fixed.as_ref());
            let description = match fixed {
                Some(_) => result.description.clone(),
                None => locale::level_description(lang, result.level).to_string(),
            };
            ChannelCardDto {
                channel: channel.as_str().to_string(),
                image_url,
                level: result.level,
                score: result.score,
                alarm_class: alarm_class(result.level).to_string(),
                alarm_main: locale::alarm_main(lang, result.level),
                alarm_sub: locale::alarm_sub(lang, result.score),
                description,
            }
        })
        .collect()
}

/// Report column content, built from the first channel's assessment.
pub fn report_for(lang: Lang, cards: &[ChannelCardDto]) -> Option<(String, String)> {
    cards.first().map(|card| {
        (
            locale::report_title(lang).to_string(),
            locale::report_html(lang, card.level, card.score),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images() -> BTreeMap<ChannelId, String> {
        ChannelId::ALL
            .iter()
            .map(|&c| (c, risk_core::assets::channel_image_path(c).to_string()))
            .collect()
    }

    #[test]
    fn builds_one_card_per_channel() {
        let cards = build_cards(Lang::En, &images());
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].channel, "CCTV1");
        assert_eq!(cards[0].score, 82);
        assert_eq!(cards[0].level, RiskLevel::High);
        assert_eq!(cards[0].alarm_class, "alarm-box alarm-high");
    }

    #[test]
    fn cctv2_card_shows_the_override() {
        let cards = build_cards(Lang::Ko, &images());
        let cctv2 = &cards[1];
        assert_eq!(cctv2.channel, "CCTV2");
        assert_eq!(cctv2.level, RiskLevel::Medium);
        assert_eq!(cctv2.score, 68);
        assert_eq!(cctv2.alarm_sub, "위험 점수: 68 / 100");
    }

    #[test]
    fn report_follows_first_channel() {
        let cards = build_cards(Lang::En, &images());
        let (title, html) = report_for(Lang::En, &cards).unwrap();
        assert!(title.contains("CCTV1"));
        assert!(html.contains("High"));
        assert!(html.contains("82"));
    }

    #[test]
    fn language_flip_localizes_every_card() {
        let en = build_cards(Lang::En, &images());
        let ko = build_cards(Lang::Ko, &images());
        for (e, k) in en.iter().zip(&ko) {
            assert_eq!(e.level, k.level);
            assert_eq!(e.score, k.score);
            assert_ne!(e.alarm_main, k.alarm_main);
        }
    }
}
