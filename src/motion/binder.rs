use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::Callback;

/// Normalize a scroll offset against a scrollable extent.
///
/// An extent of zero (content shorter than the viewport) means there is
/// nothing to scroll, so progress is 0 rather than a division by zero.
pub fn normalize_progress(offset: f64, extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / extent).clamp(0.0, 1.0)
}

/// Watches real scroll position against a container element and pushes
/// normalized [0,1] progress to a subscriber.
///
/// Holds its own scroll and resize listeners and removes both on drop, so a
/// component can bind on mount, keep the binder in its effect cleanup, and
/// never leak window-level listeners. Extent is re-derived from the live
/// bounding rect on every notification because resize and layout reflow
/// change the scrollable height.
pub struct ViewportBinder {
    window: web_sys::Window,
    on_scroll: Closure<dyn FnMut()>,
    on_resize: Closure<dyn FnMut()>,
}

impl ViewportBinder {
    /// Attach to `target` and start pushing progress to `subscriber`.
    /// Pushes one initial measurement immediately so the first paint is
    /// correct before any scroll event arrives.
    pub fn bind(target: Element, subscriber: Callback<f64>) -> Option<Self> {
        let window = web_sys::window()?;

        let measure = {
            let window = window.clone();
            move || {
                let rect = target.get_bounding_client_rect();
                let viewport = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                // How far the viewport has travelled into the container.
                let offset = -rect.top();
                let extent = rect.height() - viewport;
                subscriber.emit(normalize_progress(offset, extent));
            }
        };

        let on_scroll = {
            let measure = measure.clone();
            Closure::wrap(Box::new(move || measure()) as Box<dyn FnMut()>)
        };
        let on_resize = {
            let measure = measure.clone();
            Closure::wrap(Box::new(move || measure()) as Box<dyn FnMut()>)
        };

        window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .ok()?;
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .ok()?;

        measure();

        Some(Self {
            window,
            on_scroll,
            on_resize,
        })
    }
}

impl Drop for ViewportBinder {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_progress;

    #[test]
    fn zero_extent_reports_zero_not_nan() {
        let p = normalize_progress(120.0, 0.0);
        assert_eq!(p, 0.0);
        assert!(p.is_finite());
    }

    #[test]
    fn negative_extent_is_treated_as_unscrollable() {
        assert_eq!(normalize_progress(50.0, -200.0), 0.0);
    }

    #[test]
    fn offset_is_clamped_to_unit_range() {
        assert_eq!(normalize_progress(-30.0, 600.0), 0.0);
        assert_eq!(normalize_progress(300.0, 600.0), 0.5);
        assert_eq!(normalize_progress(900.0, 600.0), 1.0);
    }

    #[test]
    fn non_finite_inputs_degrade_to_zero() {
        assert_eq!(normalize_progress(f64::NAN, 600.0), 0.0);
        assert_eq!(normalize_progress(10.0, f64::INFINITY), 0.0);
    }
}
