//! PointerTiltEngine - binds the tilt driver to live DOM elements
//!
//! The engine owns all bookkeeping in a side table keyed by element
//! identity; nothing is stashed on the elements themselves. Each binding
//! wires three listeners to one `TiltDriver` and a single persistent
//! requestAnimationFrame callback, so renders coalesce to the display's
//! refresh cadence no matter how fast move events arrive.

mod registry;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use registry::BindRegistry;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent};

use crate::primitives::Rect;
use crate::tilt::{EffectTier, MoveAction, TiltConfig, TiltDriver};

/// Decide how much motion this device should get. Media queries only;
/// the browser knows better than any user-agent string.
pub fn detect_tier() -> EffectTier {
    let Some(window) = web_sys::window() else {
        return EffectTier::Full;
    };
    if let Ok(Some(query)) = window.match_media("(prefers-reduced-motion: reduce)") {
        if query.matches() {
            return EffectTier::Static;
        }
    }
    if let Ok(Some(query)) = window.match_media("(pointer: coarse)") {
        if query.matches() {
            return EffectTier::Reduced;
        }
    }
    EffectTier::Full
}

/// Attaches hover tilt behavior to elements and tracks what it has bound
pub struct PointerTiltEngine {
    bound: RefCell<BindRegistry<HtmlElement>>,
}

impl PointerTiltEngine {
    pub fn new() -> Self {
        Self {
            bound: RefCell::new(BindRegistry::new()),
        }
    }

    pub fn bound_count(&self) -> usize {
        self.bound.borrow().len()
    }

    /// Bind under a device tier: full or damped tracking, or the fixed
    /// hover pose for static targets.
    pub fn bind_with_tier(
        &self,
        element: &HtmlElement,
        config: TiltConfig,
        tier: EffectTier,
    ) -> Result<bool, JsValue> {
        match tier.tracking_config(config) {
            Some(config) => self.bind(element, config),
            None => self.bind_static(element, &config),
        }
    }

    /// Attach pointer-tracking tilt to `element`. Idempotent: a second
    /// bind of the same element is a no-op and returns Ok(false).
    pub fn bind(&self, element: &HtmlElement, config: TiltConfig) -> Result<bool, JsValue> {
        if self.is_bound(element) {
            return Ok(false);
        }
        Self::prepare_3d_context(element)?;

        let driver = Rc::new(RefCell::new(TiltDriver::new(config)));
        let raf_handle = Rc::new(Cell::new(None::<i32>));

        // One persistent render callback per binding; scheduling it is
        // what a move "renders" - the driver holds only the latest frame.
        let tick = Rc::new(Closure::<dyn FnMut()>::new({
            let driver = driver.clone();
            let element = element.clone();
            let raf_handle = raf_handle.clone();
            move || {
                raf_handle.set(None);
                let Some(frame) = driver.borrow_mut().frame_tick() else {
                    return;
                };
                // The element can leave the document between the move
                // and this tick; writing styles then is pointless.
                if !element.is_connected() {
                    return;
                }
                let style = element.style();
                let _ = style.set_property("transform", &frame.transform.to_css());
                let _ = style.set_property("box-shadow", &frame.shadow.to_css());
            }
        }));

        {
            let driver = driver.clone();
            let on_enter = Closure::<dyn FnMut(MouseEvent)>::new({
                let element = element.clone();
                move |_| {
                    let phase = driver.borrow_mut().pointer_enter();
                    let _ = element.style().set_property("transition", phase.to_css());
                }
            });
            element
                .add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
            on_enter.forget();
        }

        {
            let driver = driver.clone();
            let raf_handle = raf_handle.clone();
            let tick = tick.clone();
            let on_move = Closure::<dyn FnMut(MouseEvent)>::new({
                let element = element.clone();
                move |event: MouseEvent| {
                    // Bounds are read fresh every move; layout can shift
                    let rect = Rect::from_dom(&element.get_bounding_client_rect());
                    let action = driver.borrow_mut().pointer_move(
                        rect,
                        event.client_x() as f32,
                        event.client_y() as f32,
                    );
                    if action == MoveAction::Skipped {
                        return;
                    }
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    // A newer move supersedes any tick still waiting to paint
                    if let Some(id) = raf_handle.take() {
                        let _ = window.cancel_animation_frame(id);
                    }
                    if let Ok(id) =
                        window.request_animation_frame(tick.as_ref().as_ref().unchecked_ref())
                    {
                        raf_handle.set(Some(id));
                    }
                }
            });
            element
                .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
            on_move.forget();
        }

        {
            let driver = driver.clone();
            let raf_handle = raf_handle.clone();
            let on_leave = Closure::<dyn FnMut(MouseEvent)>::new({
                let element = element.clone();
                move |_| {
                    if let Some(id) = raf_handle.take() {
                        if let Some(window) = web_sys::window() {
                            let _ = window.cancel_animation_frame(id);
                        }
                    }
                    let action = driver.borrow_mut().pointer_leave();
                    let style = element.style();
                    let _ = style.set_property("transition", action.transition.to_css());
                    let _ = style.set_property("transform", &action.transform.to_css());

                    // Clear the inline shadow once the settle animation is
                    // over, unless the pointer came back in the meantime.
                    let driver = driver.clone();
                    let element = element.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(action.clear_shadow_after_ms).await;
                        if driver.borrow().shadow_clear_due(action.epoch) && element.is_connected()
                        {
                            let _ = element.style().remove_property("box-shadow");
                        }
                    });
                }
            });
            element
                .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
            on_leave.forget();
        }

        self.bound.borrow_mut().insert(element.clone());
        Ok(true)
    }

    /// Static-tier binding: a fixed pose on hover, no pointer tracking
    fn bind_static(&self, element: &HtmlElement, config: &TiltConfig) -> Result<bool, JsValue> {
        if self.is_bound(element) {
            return Ok(false);
        }
        Self::prepare_3d_context(element)?;
        element
            .style()
            .set_property("transition", "transform 0.3s ease, box-shadow 0.3s ease")?;

        let pose = EffectTier::static_hover_css(config);
        {
            let on_enter = Closure::<dyn FnMut(MouseEvent)>::new({
                let element = element.clone();
                move |_| {
                    let style = element.style();
                    let _ = style.set_property("transform", &pose);
                    let _ = style.set_property("box-shadow", "0 15px 35px rgba(0, 0, 0, 0.3)");
                }
            });
            element
                .add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
            on_enter.forget();
        }
        {
            let on_leave = Closure::<dyn FnMut(MouseEvent)>::new({
                let element = element.clone();
                move |_| {
                    let style = element.style();
                    let _ = style.set_property("transform", "none");
                    let _ = style.remove_property("box-shadow");
                }
            });
            element
                .add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
            on_leave.forget();
        }

        self.bound.borrow_mut().insert(element.clone());
        Ok(true)
    }

    fn is_bound(&self, element: &HtmlElement) -> bool {
        // Element identity comparison; the side table never touches
        // the element's own attributes
        self.bound.borrow().contains(element)
    }

    fn prepare_3d_context(element: &HtmlElement) -> Result<(), JsValue> {
        let style = element.style();
        style.set_property("transform-style", "preserve-3d")?;
        style.set_property("will-change", "transform")?;
        style.set_property("backface-visibility", "hidden")?;
        style.set_property("perspective", "1000px")?;
        Ok(())
    }
}

impl Default for PointerTiltEngine {
    fn default() -> Self {
        Self::new()
    }
}
