//! Pointer events the host forwards to the widget.

/// Pointer interaction over the widget's viewport. The host maps its
/// native mouse or touch events to these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer moved into the viewport; rotation switches to full speed.
    Entered,
    /// Pointer moved out; rotation drops back to the idle rate.
    Left,
    /// Pointer pressed; spawns one particle burst at the flower center.
    Clicked,
}
