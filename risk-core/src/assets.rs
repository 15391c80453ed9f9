use crate::channels::ChannelId;
use std::collections::BTreeMap;

/// Fallback images tried in order when a channel's own image is missing.
pub const DEFAULT_IMAGE_CANDIDATES: [&str; 3] = [
    "assets/case1.png",
    "assets/logo/289.jpg",
    "assets/logo/batch_test_sample.png",
];

pub const LOGO_PATH: &str = "assets/logo/pia-logo-white.png";

pub fn channel_image_path(channel: ChannelId) -> &'static str {
    match channel {
        ChannelId::Cctv1 => "assets/case1.png",
        ChannelId::Cctv2 => "assets/case2.png",
        ChannelId::Cctv3 => "assets/case3.png",
        ChannelId::Cctv4 => "assets/case4.png",
    }
}

/// Brand logo, when it is served. The header renders it conditionally, so
/// absence is not an error.
pub fn resolve_logo(exists: impl Fn(&str) -> bool) -> Option<&'static str> {
    exists(LOGO_PATH).then_some(LOGO_PATH)
}

/// Final path segment of an asset path. Feeds the classifier input, so it must
/// be stable for a given path.
pub fn image_basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Pick an image for every channel: the channel's own image when present,
/// otherwise the first existing default candidate.
///
/// The existence probe is injected so this stays free of I/O; the UI probes
/// over HTTP, tests probe against a fixed set. With no usable default at all
/// there is nothing to render, so that is a fatal startup condition reported
/// as `Err` for the caller to surface as a blocking error.
pub fn resolve_channel_images(
    exists: impl Fn(&str) -> bool,
) -> Result<BTreeMap<ChannelId, String>, String> {
    let fallback = DEFAULT_IMAGE_CANDIDATES
        .iter()
        .find(|path| exists(path))
        .ok_or_else(|| {
            format!(
                "no default image among candidates: {}",
                DEFAULT_IMAGE_CANDIDATES.join(", ")
            )
        })?;

    let mut resolved = BTreeMap::new();
    for channel in ChannelId::ALL {
        let own = channel_image_path(channel);
        let path = if exists(own) { own } else { fallback };
        resolved.insert(channel, path.to_string());
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_strips_directories() {
        assert_eq!(image_basename("assets/case1.png"), "case1.png");
        assert_eq!(image_basename("case1.png"), "case1.png");
    }

    #[test]
    fn resolves_own_image_when_present() {
        let all = |_: &str| true;
        let resolved = resolve_channel_images(all).unwrap();
        assert_eq!(resolved[&ChannelId::Cctv3], "assets/case3.png");
        assert_eq!(resolved.len(), 4);
    }

    #[test]
    fn falls_back_to_first_existing_candidate() {
        let only_logo = |path: &str| path == "assets/logo/289.jpg";
        let resolved = resolve_channel_images(only_logo).unwrap();
        for channel in ChannelId::ALL {
            assert_eq!(resolved[&channel], "assets/logo/289.jpg");
        }
    }

    #[test]
    fn missing_defaults_are_fatal() {
        let none = |_: &str| false;
        let err = resolve_channel_images(none).unwrap_err();
        // The message lists the probed candidates, not just a generic hint.
        for candidate in DEFAULT_IMAGE_CANDIDATES {
            assert!(err.contains(candidate));
        }
    }

    #[test]
    fn logo_is_optional() {
        assert_eq!(resolve_logo(|_| true), Some(LOGO_PATH));
        assert_eq!(resolve_logo(|_| false), None);
    }
}
