use crate::assets;
use crate::dto::{self, ChannelCardDto};
use leptos::*;
use report_locale::{self as locale, templates, Lang};
use risk_core::ChannelId;
use std::collections::BTreeMap;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let lang = create_rw_signal(Lang::default());
    let images = create_rw_signal(None::<BTreeMap<ChannelId, String>>);
    let logo = create_rw_signal(None::<String>);
    let load_error = create_rw_signal(None::<String>);

    spawn_local(async move {
        logo.set(assets::brand_logo().await);
        match assets::resolve_images().await {
            Ok(resolved) => images.set(Some(resolved)),
            Err(e) => load_error.set(Some(e)),
        }
    });

    // Results are recomputed from scratch whenever the language flips.
    let cards = create_memo(move |_| {
        images
            .get()
            .map(|resolved| dto::build_cards(lang.get(), &resolved))
            .unwrap_or_default()
    });
    let report = create_memo(move |_| dto::report_for(lang.get(), &cards.get()));

    create_effect(move |_| {
        document().set_title(locale::page_title(lang.get()));
    });

    let lang_button = move |target: Lang, label: &'static str| {
        view! {
          <button
            class=move || if lang.get() == target { "lang active" } else { "lang" }
            on:click=move |_| lang.set(target)
          >{label}</button>
        }
    };

    view! {
      <div class="brand-wrap">
        <div>
          <h1 class="brand-title">{move || locale::brand_title(lang.get())}</h1>
          <p class="brand-sub">{move || locale::brand_subtitle(lang.get())}</p>
        </div>
        <div class="brand-logos">
          {move || logo.get().map(|src| view! { <img src=src alt="PIA"/> })}
          {lang_button(Lang::Ko, "한국어")}
          {lang_button(Lang::En, "EN")}
        </div>
      </div>

      <Show
        when=move || load_error.get().is_some()
        fallback=|| ()
      >
        <pre class="error">
          {move || locale::missing_assets_error(lang.get()).to_string()}
          "\n"
          {move || load_error.get().unwrap_or_default()}
        </pre>
      </Show>

      <Show
        when=move || images.get().is_some()
        fallback=|| ()
      >
        <div class="layout">
          <section class="panel">
            <p class="card-title">{move || locale::cctv_view_title(lang.get())}</p>
            {move || cards.get().into_iter().map(cctv_item).collect_view()}
          </section>

          <section class="panel">
            <p class="card-title">{move || locale::vlm_description_title(lang.get())}</p>
            {move || {
              let active = lang.get();
              cards.get().into_iter().map(|card| output_item(active, card)).collect_view()
            }}
          </section>

          <section class="panel">
            {move || report.get().map(|(title, html)| view! {
              <h2 class="report-title">{title}</h2>
              <div inner_html=html></div>
            })}
          </section>
        </div>
      </Show>
    }
}

fn cctv_item(card: ChannelCardDto) -> impl IntoView {
    view! {
      <div class="cctv-item">
        <p class="cctv-item-title">{card.channel.clone()}</p>
        <img class="cctv-image" src=card.image_url alt=card.channel/>
      </div>
    }
}

fn output_item(lang: Lang, card: ChannelCardDto) -> impl IntoView {
    view! {
      <div class="cctv-item">
        <p class="cctv-item-title">{card.channel}</p>
        <p class="alarm-title">{locale::alarm_card_title(lang)}</p>
        <div class=card.alarm_class>
          <p class="alarm-main">{card.alarm_main}</p>
          <p class="alarm-sub">{card.alarm_sub}</p>
        </div>
        <div class="desc-box">
          <div class="desc-head">
            <div class="robot" inner_html=templates::ROBOT_SVG></div>
            <span>{locale::description_title(lang)}</span>
          </div>
          <div class="desc-text">{card.description}</div>
        </div>
      </div>
    }
}
