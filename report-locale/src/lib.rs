use risk_core::{ChannelId, RiskLevel, RiskOverride};
use serde::{Deserialize, Serialize};

pub mod templates;

/// Display language for the dashboard. The product ships Korean-first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    En,
    #[default]
    Ko,
}

pub fn page_title(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "DTRO Safety Dashboard",
        Lang::Ko => "DTRO 안전 대시보드",
    }
}

pub fn brand_title(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "PIA-SPACE Safety Dashboard",
        Lang::Ko => "PIA-SPACE 안전 대시보드",
    }
}

pub fn brand_subtitle(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "PIA SPACE - CCTV-Based Safety Description Report",
        Lang::Ko => "PIA SPACE - CCTV 기반 안전 설명 보고서",
    }
}

pub fn alarm_card_title(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Alarm",
        Lang::Ko => "알림",
    }
}

pub fn cctv_view_title(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "CCTV View",
        Lang::Ko => "CCTV 화면",
    }
}

pub fn vlm_description_title(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "VLM Description",
        Lang::Ko => "VLM 설명",
    }
}

pub fn description_title(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Description",
        Lang::Ko => "설명",
    }
}

pub fn report_title(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "🚨 CCTV1 Safety Risk Assessment Report",
        Lang::Ko => "🚨 CCTV1 안전 위험 평가 보고서",
    }
}

pub fn missing_assets_error(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Default image not found. Check `assets/case1.png` or `assets/logo`.",
        Lang::Ko => "기본 이미지를 찾지 못했습니다. `assets/case1.png` 또는 `assets/logo`를 확인해주세요.",
    }
}

/// Localized label for a level (High/Medium/Low vs 높음/보통/낮음).
pub fn level_label(lang: Lang, level: RiskLevel) -> &'static str {
    match lang {
        Lang::En => level.as_str(),
        Lang::Ko => match level {
            RiskLevel::High => "높음",
            RiskLevel::Medium => "보통",
            RiskLevel::Low => "낮음",
        },
    }
}

pub fn alarm_icon(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "🚨",
        RiskLevel::Medium => "⚠️",
        RiskLevel::Low => "✅",
    }
}

pub fn alarm_main(lang: Lang, level: RiskLevel) -> String {
    let icon = alarm_icon(level);
    let label = level_label(lang, level);
    match lang {
        Lang::En => format!("{icon} {label} Risk"),
        Lang::Ko => format!("{icon} {label} 위험"),
    }
}

pub fn alarm_sub(lang: Lang, score: u8) -> String {
    match lang {
        Lang::En => format!("Risk Score: {score} / 100"),
        Lang::Ko => format!("위험 점수: {score} / 100"),
    }
}

/// Localized variant of the per-level description. Keyed by the same enum the
/// classifier produces; the English table matches the classifier's base text.
pub fn level_description(lang: Lang, level: RiskLevel) -> &'static str {
    match lang {
        Lang::En => risk_core::risk::base_description(level),
        Lang::Ko => match level {
            RiskLevel::High => {
                "지게차가 창고 통로에서 운행 중이며 보행자가 근접 작업 중입니다. \
                 보행자 동선과 장비 동선이 충분히 분리되지 않아, 지게차 사각지대와 \
                 급작스러운 이동으로 인한 충돌 위험이 높습니다."
            }
            RiskLevel::Medium => {
                "일부 위험 징후가 관찰됩니다. 즉시 작업 중지 수준은 아니지만, \
                 인원과 장비 간 충분한 거리 확보가 필요합니다. \
                 근접 작업 상황과 PPE 준수 여부를 빠르게 확인해야 합니다."
            }
            RiskLevel::Low => {
                "뚜렷한 고위험 징후는 제한적입니다. 현재 상태를 유지하되, \
                 기본 안전 수칙 준수 여부를 지속적으로 모니터링해야 합니다."
            }
        },
    }
}

/// The one hardcoded demo override: CCTV2 is pinned to a Medium/68 result
/// instead of its computed classification. Applied by the caller, never by
/// the classifier.
pub fn channel_override(channel: ChannelId, lang: Lang) -> Option<RiskOverride> {
    if channel != ChannelId::Cctv2 {
        return None;
    }
    let description = match lang {
        Lang::En => {
            "Some risk signs are observed. It is not at the level of requiring an immediate stop, \
             but sufficient distance between personnel and equipment appears necessary. Please \
             quickly verify compliance with safe separation distances between nearby workers and \
             equipment, as well as PPE usage."
        }
        Lang::Ko => {
            "일부 위험 징후가 관찰됩니다. 즉시 작업 중지 수준은 아니지만, \
             인원과 장비 간 충분한 거리 확보가 필요합니다. \
             근접 작업 상황과 PPE 준수 여부를 빠르게 확인해야 합니다."
        }
    };
    Some(RiskOverride {
        level: RiskLevel::Medium,
        score: 68,
        description: description.to_string(),
    })
}

/// Two-column report card markup with the level label and score substituted.
pub fn report_html(lang: Lang, level: RiskLevel, score: u8) -> String {
    let template = match lang {
        Lang::En => templates::REPORT_TWO_COLUMNS_HTML_EN,
        Lang::Ko => templates::REPORT_TWO_COLUMNS_HTML_KO,
    };
    template
        .replace("{level}", level_label(lang, level))
        .replace("{score}", &score.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_cover_both_languages() {
        assert_eq!(level_label(Lang::En, RiskLevel::High), "High");
        assert_eq!(level_label(Lang::Ko, RiskLevel::High), "높음");
        assert_eq!(level_label(Lang::Ko, RiskLevel::Low), "낮음");
    }

    #[test]
    fn alarm_card_title_is_localized() {
        assert_eq!(alarm_card_title(Lang::En), "Alarm");
        assert_eq!(alarm_card_title(Lang::Ko), "알림");
    }

    #[test]
    fn alarm_strings_substitute_fields() {
        assert_eq!(alarm_main(Lang::En, RiskLevel::Medium), "⚠️ Medium Risk");
        assert_eq!(alarm_sub(Lang::En, 68), "Risk Score: 68 / 100");
        assert_eq!(alarm_sub(Lang::Ko, 82), "위험 점수: 82 / 100");
    }

    #[test]
    fn english_description_matches_classifier_base() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert_eq!(
                level_description(Lang::En, level),
                risk_core::risk::base_description(level)
            );
        }
    }

    #[test]
    fn only_cctv2_is_overridden() {
        let fixed = channel_override(ChannelId::Cctv2, Lang::En).unwrap();
        assert_eq!(fixed.level, RiskLevel::Medium);
        assert_eq!(fixed.score, 68);
        for channel in [ChannelId::Cctv1, ChannelId::Cctv3, ChannelId::Cctv4] {
            assert!(channel_override(channel, Lang::Ko).is_none());
        }
    }

    #[test]
    fn report_markup_has_no_leftover_placeholders() {
        for lang in [Lang::En, Lang::Ko] {
            let html = report_html(lang, RiskLevel::High, 82);
            assert!(html.contains("82"));
            assert!(!html.contains("{level}"));
            assert!(!html.contains("{score}"));
        }
    }
}
