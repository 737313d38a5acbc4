use crate::geometry::{ArcLayout, Point};
use crate::item::{ItemList, NavigableItem};

/// Distance (logical units) a pointer must travel before a press becomes a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;
/// How far from an item's connector or label text a tap may land and still
/// hit it.
pub const HIT_SLOP: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Pending {
        start: Point,
    },
    Dragging {
        angle: f64,
    },
}

/// How a pointer session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEnd {
    /// Nothing was in progress, or the session was abandoned before a drag.
    Nothing,
    /// Released before crossing the drag threshold, at the press position.
    Tap(Point),
    /// Released (or left) while dragging.
    Drop(f64),
}

#[derive(Debug, Clone)]
pub struct GestureController {
    state: GestureState,
    threshold: f64,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

impl GestureController {
    pub fn new(threshold: f64) -> Self {
        Self {
            state: GestureState::Idle,
            threshold,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != GestureState::Idle
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    pub fn press(&mut self, point: Point) {
        if !point.is_finite() {
            return;
        }
        log::trace!("gesture pending at ({:.1}, {:.1})", point.x, point.y);
        self.state = GestureState::Pending { start: point };
    }

    /// Feeds a pointer position. Returns the clamped drag angle once the session
    /// is a drag. `current` stands in for the angle when the pointer sits
    /// exactly on the pivot.
    pub fn motion(&mut self, point: Point, layout: &ArcLayout, current: f64) -> Option<f64> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Pending { start } => {
                if point.distance(start) <= self.threshold {
                    return None;
                }
                let angle = Self::drag_angle(point, layout).unwrap_or(current);
                log::trace!("gesture became a drag at {:.1} degrees", angle);
                self.state = GestureState::Dragging { angle };
                Some(angle)
            }
            GestureState::Dragging { angle: previous } => {
                let angle = Self::drag_angle(point, layout).unwrap_or(previous);
                self.state = GestureState::Dragging { angle };
                Some(angle)
            }
        }
    }

    fn drag_angle(point: Point, layout: &ArcLayout) -> Option<f64> {
        layout
            .point_to_angle(point)
            .map(|angle| layout.domain.clamp(angle))
    }

    pub fn release(&mut self) -> GestureEnd {
        match std::mem::take(&mut self.state) {
            GestureState::Idle => GestureEnd::Nothing,
            GestureState::Pending { start } => GestureEnd::Tap(start),
            GestureState::Dragging { angle } => GestureEnd::Drop(angle),
        }
    }

    /// The pointer left the widget. A drag still snaps; a press that never
    /// became a drag is abandoned.
    pub fn leave(&mut self) -> GestureEnd {
        match std::mem::take(&mut self.state) {
            GestureState::Dragging { angle } => GestureEnd::Drop(angle),
            GestureState::Idle | GestureState::Pending { .. } => GestureEnd::Nothing,
        }
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}

/// Item whose connector or label text lies closest to `point`, within
/// [`HIT_SLOP`]. Ties go to list order.
pub fn hit_test<'a>(
    items: &'a ItemList,
    layout: &ArcLayout,
    point: Point,
) -> Option<&'a NavigableItem> {
    items
        .iter()
        .map(|item| {
            let geometry = layout.item_geometry(item.angle);
            let connector = point.distance_to_segment(geometry.dot, geometry.label);
            let text = layout.label_bounds(item.angle, &item.label).distance(point);
            (item, connector.min(text))
        })
        .filter(|(_, distance)| *distance <= HIT_SLOP)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(item, _)| item)
}
