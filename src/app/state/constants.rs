use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Fixed header clearance subtracted from a section's top when jumping to it.
pub(crate) const NAV_CLEARANCE_PX: f32 = 120.0;
/// A section reveals once its viewport-relative top drops below this fraction
/// of the viewport height.
pub(crate) const REVEAL_VIEWPORT_FRACTION: f32 = 0.8;
/// Timeline items reveal once their absolute top is within the viewport
/// bottom minus this margin.
pub(crate) const TIMELINE_REVEAL_MARGIN_PX: f32 = 100.0;
/// Delay step between consecutive timeline item reveals.
pub(crate) const TIMELINE_STAGGER_STEP: Duration = Duration::from_millis(200);
/// Settling delay before the initial reveal pass runs.
pub(crate) const LAYOUT_SETTLE_DELAY: Duration = Duration::from_millis(100);
/// Delay before the first nav dot is primed active on a fresh page.
pub(crate) const HERO_DOT_PRIME_DELAY: Duration = Duration::from_millis(500);
/// Collapsed and expanded widths of the navigation rail.
pub(crate) const NAV_RAIL_WIDTH_PX: f32 = 72.0;
pub(crate) const NAV_RAIL_EXPANDED_WIDTH_PX: f32 = 180.0;
/// Below this viewport width the rail stays collapsed regardless of the
/// expand toggle.
pub(crate) const COMPACT_NAV_BREAKPOINT_PX: f32 = 768.0;
pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("portfolio-page"));
