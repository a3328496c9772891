use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, HtmlElement, PointerEvent};
use yew::prelude::*;

use crate::config;
use crate::utils::cn;

/// Bounding box of the backdrop in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer location as a share of the backdrop, both axes in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x_percent: f64,
    pub y_percent: f64,
}

impl PointerPosition {
    /// `None` when the rectangle has no area.
    pub fn within(rect: &Rect, client_x: f64, client_y: f64) -> Option<Self> {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return None;
        }
        Some(Self {
            x_percent: percent(client_x - rect.left, rect.width),
            y_percent: percent(client_y - rect.top, rect.height),
        })
    }
}

fn percent(offset: f64, extent: f64) -> f64 {
    (offset / extent * 100.0).clamp(0.0, 100.0)
}

/// Receiver of the custom properties the backdrop publishes.
pub trait StyleSink {
    fn set_var(&self, name: &str, value: &str);
}

impl StyleSink for CssStyleDeclaration {
    fn set_var(&self, name: &str, value: &str) {
        if self.set_property(name, value).is_err() {
            debug!("Could not set {} on backdrop", name);
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    enabled: bool,
}

impl PointerTracker {
    pub fn new(reduced_motion: bool) -> Self {
        Self { enabled: !reduced_motion }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Publishes the pointer position to `sink`. Writes nothing when
    /// disabled or when the backdrop has collapsed to zero size.
    pub fn track<S: StyleSink + ?Sized>(
        &self,
        rect: &Rect,
        client_x: f64,
        client_y: f64,
        sink: &S,
    ) -> Option<PointerPosition> {
        if !self.enabled {
            return None;
        }
        let position = PointerPosition::within(rect, client_x, client_y)?;
        sink.set_var(config::POINTER_X_VAR, &format!("{}%", position.x_percent));
        sink.set_var(config::POINTER_Y_VAR, &format!("{}%", position.y_percent));
        Some(position)
    }
}

fn prefers_reduced_motion() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.match_media(config::REDUCED_MOTION_QUERY) {
        Ok(Some(query)) => query.matches(),
        _ => {
            debug!("Reduced motion query unavailable, assuming motion is fine");
            false
        }
    }
}

/// Pointer-move listener registered on the backdrop; removed on drop.
struct PointerListener {
    element: HtmlElement,
    callback: Closure<dyn FnMut(PointerEvent)>,
}

impl PointerListener {
    fn attach(node: &NodeRef) -> Option<Self> {
        let element = node.cast::<HtmlElement>()?;
        let tracker = PointerTracker::new(prefers_reduced_motion());
        if !tracker.is_enabled() {
            debug!("Reduced motion requested, backdrop stays static");
            return None;
        }

        let target = element.clone();
        let callback = Closure::wrap(Box::new(move |event: PointerEvent| {
            let bounds = target.get_bounding_client_rect();
            let rect = Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            tracker.track(
                &rect,
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                &target.style(),
            );
        }) as Box<dyn FnMut(PointerEvent)>);

        if element
            .add_event_listener_with_callback("pointermove", callback.as_ref().unchecked_ref())
            .is_err()
        {
            debug!("Failed to attach backdrop pointer listener");
            return None;
        }
        debug!("Backdrop pointer tracking enabled");
        Some(Self { element, callback })
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("pointermove", self.callback.as_ref().unchecked_ref());
        debug!("Backdrop pointer tracking removed");
    }
}

#[derive(Properties, PartialEq)]
pub struct AuroraBackdropProps {
    #[prop_or_default]
    pub class: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Soft pointer-reactive gradient behind the page content.
#[function_component(AuroraBackdrop)]
pub fn aurora_backdrop(props: &AuroraBackdropProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let listener = PointerListener::attach(&node);
                move || drop(listener)
            },
            (),
        );
    }

    let class = cn([Some("bg-hero"), props.class.as_deref()]);

    html! {
        <div ref={node} class={class}>
            <style>
                {r#"
                .bg-hero {
                    --pointer-x-percent: 50%;
                    --pointer-y-percent: 50%;
                    position: relative;
                    background:
                        radial-gradient(900px circle at var(--pointer-x-percent) var(--pointer-y-percent),
                            hsl(var(--primary-hsl) / 0.16), transparent 60%),
                        radial-gradient(700px circle at 10% 0%, hsl(38 92% 70% / 0.18), transparent 55%),
                        linear-gradient(180deg, var(--background) 0%, var(--background-soft) 100%);
                }
                @media (prefers-reduced-motion: reduce) {
                    .bg-hero { transition: none; }
                }
                "#}
            </style>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        writes: RefCell<Vec<(String, String)>>,
    }

    impl StyleSink for RecordingSink {
        fn set_var(&self, name: &str, value: &str) {
            self.writes.borrow_mut().push((name.to_string(), value.to_string()));
        }
    }

    const RECT: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };

    #[test]
    fn position_is_proportional_inside_bounds() {
        for step_x in 0..=20 {
            for step_y in 0..=20 {
                let x = RECT.left + RECT.width * f64::from(step_x) / 20.0;
                let y = RECT.top + RECT.height * f64::from(step_y) / 20.0;
                let position = PointerPosition::within(&RECT, x, y).unwrap();
                assert!((position.x_percent - f64::from(step_x) * 5.0).abs() < 1e-9);
                assert!((position.y_percent - f64::from(step_y) * 5.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn position_is_clamped_outside_bounds() {
        let position = PointerPosition::within(&RECT, 0.0, 1_000.0).unwrap();
        assert_eq!(position.x_percent, 0.0);
        assert_eq!(position.y_percent, 100.0);
    }

    #[test]
    fn zero_sized_rect_has_no_position() {
        let flat = Rect { height: 0.0, ..RECT };
        assert_eq!(PointerPosition::within(&flat, 150.0, 50.0), None);
    }

    #[test]
    fn tracker_writes_both_vars_as_percentages() {
        let sink = RecordingSink::default();
        let tracker = PointerTracker::new(false);
        tracker.track(&RECT, 300.0, 100.0, &sink);
        assert_eq!(
            *sink.writes.borrow(),
            vec![
                (config::POINTER_X_VAR.to_string(), "50%".to_string()),
                (config::POINTER_Y_VAR.to_string(), "25%".to_string()),
            ]
        );
    }

    #[test]
    fn reduced_motion_never_writes() {
        let sink = RecordingSink::default();
        let tracker = PointerTracker::new(true);
        assert!(!tracker.is_enabled());
        for i in 0..50 {
            let offset = f64::from(i) * 10.0;
            assert_eq!(tracker.track(&RECT, RECT.left + offset, RECT.top + offset, &sink), None);
        }
        assert!(sink.writes.borrow().is_empty());
    }

    #[test]
    fn zero_sized_rect_writes_nothing() {
        let sink = RecordingSink::default();
        let tracker = PointerTracker::new(false);
        let empty = Rect { width: 0.0, ..RECT };
        assert_eq!(tracker.track(&empty, 120.0, 60.0, &sink), None);
        assert!(sink.writes.borrow().is_empty());
    }
}
