//! DOM-backed measurement and application for textfit

use web_sys::HtmlElement;

use super::{FitConfig, FitOutcome, TextMetrics, fit_text, line_height_for};

/// Measures the gap between a description block and the stats row below
/// it by writing the candidate size and reading fresh bounding rects.
pub struct DomMetrics {
    description: HtmlElement,
    stats: HtmlElement,
}

impl DomMetrics {
    pub fn new(description: HtmlElement, stats: HtmlElement) -> Self {
        Self { description, stats }
    }
}

impl TextMetrics for DomMetrics {
    fn gap_at(&mut self, font_rem: f32, line_height: f32) -> f32 {
        let style = self.description.style();
        let _ = style.set_property("font-size", &format!("{font_rem}rem"));
        let _ = style.set_property("line-height", &format!("{line_height}"));

        let description = self.description.get_bounding_client_rect();
        let stats = self.stats.get_bounding_client_rect();
        (stats.top() - description.bottom()) as f32
    }
}

/// Fit a card's description above its stats row, applying the line-clamp
/// fallback when even the floor size overflows.
pub fn fit_description(
    description: &HtmlElement,
    stats: &HtmlElement,
    config: &FitConfig,
) -> FitOutcome {
    let mut metrics = DomMetrics::new(description.clone(), stats.clone());
    let outcome = fit_text(&mut metrics, config);

    let style = description.style();
    let rem = outcome.rem();
    let _ = style.set_property("font-size", &format!("{rem}rem"));
    let _ = style.set_property("line-height", &format!("{}", line_height_for(rem)));

    if outcome.needs_clamp() {
        let _ = style.set_property("display", "-webkit-box");
        let _ = style.set_property("-webkit-box-orient", "vertical");
        let _ = style.set_property("-webkit-line-clamp", "4");
        let _ = style.set_property("overflow", "hidden");
        let _ = style.set_property("text-overflow", "ellipsis");
    } else {
        let _ = style.remove_property("display");
        let _ = style.remove_property("-webkit-box-orient");
        let _ = style.remove_property("-webkit-line-clamp");
        let _ = style.remove_property("overflow");
        let _ = style.remove_property("text-overflow");
    }

    let _ = style.set_property("transition", "font-size 0.3s ease, line-height 0.3s ease");
    outcome
}
