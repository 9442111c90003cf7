use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            // Hero
            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Tilt Deck"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "Pointer-tracked 3D card tilt for the web. One parametrized engine \u{2014} clamped rotations, coalesced renders, and a shadow that follows the light."
                }
                div {
                    style: "display: flex; gap: 16px; justify-content: center;",
                    Link {
                        to: Route::Deck {},
                        style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #22c55e, #16a34a); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                        "Deck \u{2192}"
                    }
                    Link {
                        to: Route::FitDemo {},
                        style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                        "Text fit \u{2192}"
                    }
                }
            }

            // Feature grid
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px; margin-top: 64px;",

                // Card 1
                div {
                    style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
                    h3 {
                        style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                        "One frame per tick"
                    }
                    p {
                        style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                        "Pointer moves coalesce into a single pending render \u{2014} the newest position always wins, no matter how fast the mouse goes."
                    }
                }

                // Card 2
                div {
                    style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
                    h3 {
                        style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                        "Presets, not magic numbers"
                    }
                    p {
                        style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                        "Rotation limits, translation, depth and intensity are all configuration. Cards, chips and badges each get their own feel."
                    }
                }

                // Card 3
                div {
                    style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
                    h3 {
                        style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                        "Motion-aware"
                    }
                    p {
                        style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                        "Respects prefers-reduced-motion and coarse pointers: damped tracking on touch, a fixed hover pose when motion is off."
                    }
                }
            }

            // Footer
            p {
                style: "color: #4b5563; font-size: 13px; margin-top: 64px;",
                "Hover anything on the deck"
            }
        }
    }
}
