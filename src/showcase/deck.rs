//! Deck - profile card, project cards, tech chips and social badges,
//! all bound to the tilt engine after mount
//!
//! Targets carry a `tilt` class plus a `data-tilt` preset name; a
//! post-render effect queries them and binds each one. Binding is
//! idempotent, so re-running the effect after a shuffle only picks up
//! freshly created elements.

use std::rc::Rc;

use dioxus::prelude::*;
use rand::Rng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;

use crate::Route;
use crate::engine::{PointerTiltEngine, detect_tier};
use crate::tilt::{EffectTier, TiltConfig};
use super::fresh_rng;

struct Project {
    name: &'static str,
    blurb: &'static str,
    tag: &'static str,
    accent: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "hexwave",
        blurb: "Procedural audio synthesizer with a hexagonal pad interface and zero-latency wasm DSP core.",
        tag: "Rust",
        accent: "#22c55e",
    },
    Project {
        name: "driftlog",
        blurb: "Append-only notebook that syncs over LAN without a server, resolving edits with CRDTs.",
        tag: "TypeScript",
        accent: "#3b82f6",
    },
    Project {
        name: "permafrost",
        blurb: "Cold-storage backup tool that chunks, encrypts and verifies archives against bit rot.",
        tag: "Rust",
        accent: "#06b6d4",
    },
    Project {
        name: "ledgerline",
        blurb: "Plain-text double-entry accounting with live charts and an importer for bank CSV exports.",
        tag: "Python",
        accent: "#f59e0b",
    },
    Project {
        name: "quietgrid",
        blurb: "Static site generator tuned for photo portfolios: responsive images, no client JS.",
        tag: "Go",
        accent: "#a855f7",
    },
    Project {
        name: "relaymap",
        blurb: "Visualizes mesh network topology in real time from gossip traffic captures.",
        tag: "Rust",
        accent: "#ef4444",
    },
];

const TECH: &[&str] = &[
    "Rust", "WebAssembly", "Dioxus", "TypeScript", "PostgreSQL", "Docker", "Linux", "CSS",
];

struct Social {
    name: &'static str,
    initial: char,
}

const SOCIALS: &[Social] = &[
    Social { name: "GitHub", initial: 'G' },
    Social { name: "Mastodon", initial: 'M' },
    Social { name: "RSS", initial: 'R' },
    Social { name: "Email", initial: 'E' },
];

fn sample_distinct(rng: &mut SmallRng, len: usize, count: usize) -> Vec<usize> {
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count.min(len) {
        let idx = rng.random_range(0..len);
        if !picked.contains(&idx) {
            picked.push(idx);
        }
    }
    picked
}

/// Find every `.tilt` element and bind it with its `data-tilt` preset
fn bind_targets(engine: &PointerTiltEngine, tier: EffectTier) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let elements = document.get_elements_by_class_name("tilt");
    for i in 0..elements.length() {
        let Some(element) = elements.item(i) else {
            continue;
        };
        let config = element
            .get_attribute("data-tilt")
            .and_then(|name| TiltConfig::by_name(&name))
            .unwrap_or_default();
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            let _ = engine.bind_with_tier(&element, config, tier);
        }
    }
}

#[component]
pub fn Deck() -> Element {
    let engine = use_hook(|| Rc::new(PointerTiltEngine::new()));
    let tier = use_hook(detect_tier);

    let mut project_picks = use_signal(|| sample_distinct(&mut fresh_rng(), PROJECTS.len(), 3));
    let mut chip_picks = use_signal(|| sample_distinct(&mut fresh_rng(), TECH.len(), 5));

    // Runs after every commit; targets exist by then, and rebinding
    // already-bound ones is a no-op.
    let effect_engine = engine.clone();
    use_effect(move || {
        let _ = project_picks.read();
        let _ = chip_picks.read();
        bind_targets(&effect_engine, tier);
    });

    let tier_label = tier.describe();
    let projects: Vec<&'static Project> =
        project_picks.read().iter().map(|&i| &PROJECTS[i]).collect();
    let chips: Vec<&'static str> = chip_picks.read().iter().map(|&i| TECH[i]).collect();

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
                    "Deck"
                }
                span {
                    style: "color: #6b7280; font-size: 13px; font-family: monospace;",
                    "tier: {tier_label}"
                }
                button {
                    style: "padding: 8px 20px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 14px;",
                    onclick: move |_| {
                        project_picks.set(sample_distinct(&mut fresh_rng(), PROJECTS.len(), 3));
                        chip_picks.set(sample_distinct(&mut fresh_rng(), TECH.len(), 5));
                    },
                    "Shuffle"
                }
            }

            // Profile card
            div {
                class: "tilt",
                "data-tilt": "portrait",
                style: "width: 360px; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 14px; padding: 28px; text-align: center; margin-bottom: 32px;",
                div {
                    style: "width: 72px; height: 72px; border-radius: 50%; background: linear-gradient(135deg, #3b82f6, #a855f7); margin: 0 auto 14px auto;",
                }
                h3 {
                    style: "color: #e5e7eb; margin: 0 0 4px 0; font-size: 18px;",
                    "Sam Keller"
                }
                p {
                    style: "color: #9ca3af; margin: 0; font-size: 14px; line-height: 1.5;",
                    "Systems tinkerer. I build small tools that respect your attention."
                }
            }

            // Project cards
            div {
                style: "display: grid; grid-template-columns: repeat(3, 260px); gap: 20px; margin-bottom: 32px;",
                for project in projects {
                    div {
                        key: "{project.name}",
                        class: "tilt",
                        "data-tilt": "card",
                        style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-left: 3px solid {project.accent}; border-radius: 10px; padding: 20px;",
                        h4 {
                            style: "color: #e5e7eb; margin: 0 0 8px 0; font-size: 16px; font-family: monospace;",
                            "{project.name}"
                        }
                        p {
                            style: "color: #9ca3af; margin: 0 0 12px 0; font-size: 13px; line-height: 1.5;",
                            "{project.blurb}"
                        }
                        span {
                            style: "color: {project.accent}; font-size: 12px; font-family: monospace;",
                            "{project.tag}"
                        }
                    }
                }
            }

            // Tech chips
            div {
                style: "display: flex; gap: 12px; margin-bottom: 32px;",
                for chip in chips {
                    div {
                        key: "{chip}",
                        class: "tilt",
                        "data-tilt": "chip",
                        style: "background: #16213e; border: 1px solid #2a2a4a; border-radius: 8px; padding: 10px 18px; color: #9ca3af; font-size: 13px; font-family: monospace;",
                        "{chip}"
                    }
                }
            }

            // Social badges
            div {
                style: "display: flex; gap: 16px;",
                for social in SOCIALS {
                    div {
                        key: "{social.name}",
                        class: "tilt",
                        "data-tilt": "badge",
                        style: "width: 48px; height: 48px; border-radius: 50%; background: #1a1a2e; border: 1px solid #2a2a4a; display: flex; align-items: center; justify-content: center; color: #6b7280; font-size: 11px;",
                        title: "{social.name}",
                        "{social.initial}"
                    }
                }
            }
        }
    }
}
