use risk_core::assets::{
    channel_image_path, resolve_channel_images, resolve_logo, DEFAULT_IMAGE_CANDIDATES, LOGO_PATH,
};
use risk_core::ChannelId;
use std::collections::{BTreeMap, BTreeSet};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

async fn url_exists(url: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(value) = JsFuture::from(window.fetch_with_str(url)).await else {
        return false;
    };
    value
        .dyn_into::<web_sys::Response>()
        .map(|response| response.ok())
        .unwrap_or(false)
}

/// Probe the served asset paths, then let the core resolver pick an image per
/// channel. `Err` means no usable default image exists and the page cannot
/// render.
pub async fn resolve_images() -> Result<BTreeMap<ChannelId, String>, String> {
    let mut candidates: Vec<&str> = DEFAULT_IMAGE_CANDIDATES.to_vec();
    for channel in ChannelId::ALL {
        candidates.push(channel_image_path(channel));
    }

    let mut existing = BTreeSet::new();
    for path in candidates {
        if url_exists(path).await {
            existing.insert(path.to_string());
        }
    }

    resolve_channel_images(|path| existing.contains(path))
}

/// Brand logo URL, if the asset is served.
pub async fn brand_logo() -> Option<String> {
    let present = url_exists(LOGO_PATH).await;
    resolve_logo(|_| present).map(ToString::to_string)
}
