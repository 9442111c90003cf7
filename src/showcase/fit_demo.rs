//! FitDemo - textfit running against a live card
//!
//! The card has a fixed height, the stats row is pinned to its bottom,
//! and the description in between gets refit whenever the text changes.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::Route;
use crate::textfit::{FitConfig, dom::fit_description};

const SAMPLES: &[&str] = &[
    "Small CLI that renames photos by EXIF date.",
    "A terminal dashboard for home servers: disk health, container status and \
     temperatures on one screen, refreshed over SSH without agents.",
    "Self-hosted read-it-later service with full-text search, offline article \
     snapshots, tag-based feeds and a keyboard-driven reader UI. Imports from \
     browser bookmarks and syncs highlights back into plain Markdown notes.",
    "An experiment in content-addressed package mirroring for air-gapped labs: \
     every artifact is chunked and deduplicated, trust is anchored in a signed \
     manifest chain, proxies exchange deltas over sneakernet media, and the \
     whole history stays auditable from any single mirror. Includes a fuse \
     mount for browsing snapshots and a verifier that replays the manifest \
     chain from genesis.",
];

fn refit() -> Option<(f32, bool)> {
    let document = web_sys::window().and_then(|w| w.document())?;
    let description = document
        .get_element_by_id("fit-description")?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    let stats = document
        .get_element_by_id("fit-stats")?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    let outcome = fit_description(&description, &stats, &FitConfig::default());
    Some((outcome.rem(), outcome.needs_clamp()))
}

#[component]
pub fn FitDemo() -> Element {
    let mut sample = use_signal(|| 0usize);
    let mut outcome = use_signal(|| Option::<(f32, bool)>::None);

    // Refit after every commit; guard the signal write so an unchanged
    // outcome doesn't re-dirty the component.
    use_effect(move || {
        let _ = sample.read();
        let fitted = refit();
        if *outcome.peek() != fitted {
            outcome.set(fitted);
        }
    });

    let text = SAMPLES[sample() % SAMPLES.len()];
    let outcome_label = match outcome() {
        Some((rem, true)) => format!("{rem:.2}rem, clamped to 4 lines"),
        Some((rem, false)) => format!("{rem:.2}rem, fits"),
        None => "unmeasured".to_string(),
    };

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 32px 20px; font-family: system-ui, sans-serif;",

            div {
                style: "display: flex; gap: 16px; align-items: center; margin-bottom: 24px;",
                Link {
                    to: Route::Landing {},
                    style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                    "\u{2190} Home"
                }
                h2 {
                    style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                    "Text fit"
                }
                button {
                    style: "padding: 8px 20px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 14px;",
                    onclick: move |_| {
                        sample.set(sample() + 1);
                    },
                    "Next description"
                }
                span {
                    style: "color: #22c55e; font-size: 13px; font-family: monospace;",
                    "{outcome_label}"
                }
            }

            div {
                style: "width: 260px; height: 220px; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 20px; position: relative; box-sizing: border-box;",
                h4 {
                    style: "color: #e5e7eb; margin: 0 0 8px 0; font-size: 16px; font-family: monospace;",
                    "demo-project"
                }
                p {
                    id: "fit-description",
                    style: "color: #9ca3af; margin: 0; font-size: 0.7rem; line-height: 1.3;",
                    "{text}"
                }
                div {
                    id: "fit-stats",
                    style: "position: absolute; left: 20px; right: 20px; bottom: 16px; display: flex; justify-content: space-between; color: #6b7280; font-size: 12px; font-family: monospace; border-top: 1px solid #2a2a4a; padding-top: 8px;",
                    span { "\u{2605} 84" }
                    span { "\u{2442} 12" }
                    span { "Rust" }
                }
            }
        }
    }
}
