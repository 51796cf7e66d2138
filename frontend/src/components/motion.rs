use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Fraction of the viewport height an element's top has to rise above
/// before it counts as scrolled into view.
const IN_VIEW_THRESHOLD: f64 = 0.9;
const DRAG_LIMIT_PX: f64 = 300.0;

/// Linear interpolation of `value` from `input` onto `output`, clamped to
/// the output range.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_start;
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// How far down the page the window is, 0.0 at the top and 1.0 at the bottom.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

pub fn is_in_view(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height * IN_VIEW_THRESHOLD
}

pub fn clamp_drag(offset: f64) -> f64 {
    offset.clamp(-DRAG_LIMIT_PX, DRAG_LIMIT_PX)
}

/// Degrees of rotateY for a horizontal drag offset.
pub fn drag_tilt(offset: f64) -> f64 {
    map_range(offset, (-200.0, 200.0), (-15.0, 15.0))
}

pub fn stagger_ms(base: u32, index: usize, step: u32) -> u32 {
    base + index as u32 * step
}

pub fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
