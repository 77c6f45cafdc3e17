use std::time::Duration;

mod appearance;
mod core;
mod interact;
mod navigation;
mod reveal;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    /// Jump the page scrollable to an absolute vertical offset.
    ScrollTo(f32),
    /// Flip one timeline item visible after a fire-and-forget delay.
    RevealTimelineItem { index: usize, delay: Duration },
    /// Persist per-portfolio UI preferences.
    SaveUiPrefs,
}
