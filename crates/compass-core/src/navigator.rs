use crate::error::NavigatorError;
use crate::geometry::{ArcLayout, ItemGeometry, Orientation, Point, Viewport};
use crate::gesture::{self, GestureController, GestureEnd, GestureState};
use crate::item::{ItemId, ItemList, NavigableItem};
use crate::spring::{SpringParams, SpringState, Ticker};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Tap,
    Drag,
    Direct,
}

/// "Go to this section". The host performs the actual scroll or routing.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub id: ItemId,
    pub angle: f64,
    pub trigger: Trigger,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Needle {
    pub pivot: Point,
    /// Screen rotation in radians.
    pub rotation: f64,
    pub angle: f64,
    pub in_motion: bool,
    /// Where the needle was one tick ago, while it is moving fast enough to
    /// smear.
    pub trail: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemMark {
    pub id: ItemId,
    pub label: String,
    pub angle: f64,
    pub geometry: ItemGeometry,
    pub active: bool,
}

/// Everything a renderer needs for one frame, in logical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub layout: ArcLayout,
    pub needle: Needle,
    pub marks: Vec<ItemMark>,
}

/// Owns the spring, the gesture session and the active-section signal, and
/// decides which of them moves the needle.
#[derive(Debug, Clone)]
pub struct Navigator {
    items: ItemList,
    orientation: Orientation,
    layout: ArcLayout,
    spring: SpringState,
    params: SpringParams,
    ticker: Ticker,
    gesture: GestureController,
    active: Option<ItemId>,
    deferred_signal: bool,
    size: (f64, f64),
}

impl Navigator {
    pub fn new(
        items: Vec<NavigableItem>,
        active: Option<ItemId>,
        orientation: Orientation,
    ) -> Result<Self, NavigatorError> {
        let items = ItemList::new(items)?;
        let start = active
            .as_ref()
            .and_then(|id| items.get(id))
            .unwrap_or_else(|| items.first())
            .angle;

        Ok(Self {
            items,
            orientation,
            layout: orientation.layout(),
            spring: SpringState::at_rest(start),
            params: SpringParams::default(),
            ticker: Ticker::default(),
            gesture: GestureController::default(),
            active,
            deferred_signal: false,
            size: (0.0, 0.0),
        })
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn layout(&self) -> &ArcLayout {
        &self.layout
    }

    pub fn spring(&self) -> SpringState {
        self.spring
    }

    pub fn displayed_angle(&self) -> f64 {
        self.spring.displayed_angle
    }

    pub fn target_angle(&self) -> f64 {
        self.spring.target_angle
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture.state()
    }

    pub fn active_section(&self) -> Option<&ItemId> {
        self.active.as_ref()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        Viewport::fit(self.size.0, self.size.1, self.layout.view_box)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = (width, height);
    }

    /// Replaces the item list. This is a reset: any gesture in flight is
    /// dropped and the needle heads for the active section if it still exists.
    pub fn set_items(&mut self, items: Vec<NavigableItem>) -> Result<(), NavigatorError> {
        self.items = ItemList::new(items)?;
        self.gesture.reset();
        self.deferred_signal = false;
        if let Some(angle) = self.active_angle() {
            self.spring = self.spring.with_target(angle);
        }
        log::debug!("compass reset with {} items", self.items.len());
        Ok(())
    }

    /// Swaps the layout. The needle is pulled into the new drag domain and then
    /// heads for the active section, so an interrupted drag never leaves it
    /// parked between items.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation == self.orientation {
            return;
        }
        self.orientation = orientation;
        self.layout = orientation.layout();

        let domain = self.layout.domain;
        let mut spring = self.spring.stopped();
        spring.displayed_angle = domain.clamp(spring.displayed_angle);
        spring.target_angle = domain.clamp(spring.target_angle);
        self.spring = spring;

        if self.gesture.is_active() {
            log::debug!("orientation changed mid-gesture, dropping it");
            self.gesture.reset();
        }
        self.deferred_signal = false;
        if let Some(angle) = self.active_angle() {
            self.spring = self.spring.with_target(angle);
        }
        log::debug!("compass orientation set to {}", orientation);
    }

    /// The externally tracked active section. Only a change retargets the
    /// needle, and never in the middle of a gesture.
    pub fn set_active_section(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        if self.active.as_ref() == Some(&id) {
            return;
        }
        self.active = Some(id);

        if self.gesture.is_active() {
            log::trace!("active section changed mid-gesture, deferring");
            self.deferred_signal = true;
            return;
        }
        self.apply_active_section();
    }

    fn active_angle(&self) -> Option<f64> {
        self.active
            .as_ref()
            .and_then(|id| self.items.get(id))
            .map(|item| item.angle)
    }

    fn apply_active_section(&mut self) {
        self.deferred_signal = false;
        match self.active_angle() {
            Some(angle) => {
                log::debug!("needle retargeted to {:.1} degrees", angle);
                self.spring = self.spring.with_target(angle);
            }
            None => {
                if let Some(id) = &self.active {
                    log::warn!("ignoring unknown active section '{}'", id);
                }
            }
        }
    }

    fn logical(&self, screen: Point) -> Option<Point> {
        self.viewport()
            .map(|viewport| viewport.to_logical(screen))
            .filter(Point::is_finite)
    }

    pub fn pointer_down(&mut self, screen: Point) {
        let Some(point) = self.logical(screen) else {
            return;
        };
        self.gesture.press(point);
        self.spring = self.spring.stopped();
    }

    pub fn pointer_move(&mut self, screen: Point) {
        if !self.gesture.is_active() {
            return;
        }
        let Some(point) = self.logical(screen) else {
            return;
        };
        let current = self.spring.displayed_angle;
        if let Some(angle) = self.gesture.motion(point, &self.layout, current) {
            self.spring = self.spring.snap_to(angle);
        }
    }

    pub fn pointer_up(&mut self) -> Option<Navigation> {
        let end = self.gesture.release();
        self.finish(end)
    }

    pub fn pointer_leave(&mut self) -> Option<Navigation> {
        let end = self.gesture.leave();
        self.finish(end)
    }

    fn finish(&mut self, end: GestureEnd) -> Option<Navigation> {
        let navigation = match end {
            GestureEnd::Nothing => None,
            GestureEnd::Tap(point) => {
                let hit = gesture::hit_test(&self.items, &self.layout, point)
                    .map(|item| (item.id.clone(), item.angle));
                hit.map(|(id, angle)| self.navigate(id, angle, Trigger::Tap))
            }
            GestureEnd::Drop(_) => {
                let item = self.items.nearest(self.spring.displayed_angle);
                let (id, angle) = (item.id.clone(), item.angle);
                Some(self.navigate(id, angle, Trigger::Drag))
            }
        };

        if navigation.is_none() && self.deferred_signal {
            self.apply_active_section();
        }
        self.deferred_signal = false;
        navigation
    }

    fn navigate(&mut self, id: ItemId, angle: f64, trigger: Trigger) -> Navigation {
        log::debug!("navigate to '{}' ({:?}) at {:.1} degrees", id, trigger, angle);
        self.spring = self.spring.with_target(angle);
        Navigation { id, angle, trigger }
    }

    /// Programmatic equivalent of tapping an item. Ignored mid-gesture.
    pub fn navigate_to(&mut self, id: &ItemId) -> Option<Navigation> {
        if self.gesture.is_active() {
            return None;
        }
        let angle = self.items.get(id)?.angle;
        Some(self.navigate(id.clone(), angle, Trigger::Direct))
    }

    /// Navigates `offset` places along the list from the item the needle is
    /// heading for, stopping at either end.
    pub fn navigate_relative(&mut self, offset: isize) -> Option<Navigation> {
        let current = self.items.nearest(self.spring.target_angle);
        let index = self.items.position(&current.id)?;
        let next = index
            .saturating_add_signed(offset)
            .min(self.items.len() - 1);
        let id = self.items[next].id.clone();
        self.navigate_to(&id)
    }

    /// One fixed spring tick.
    pub fn step(&mut self) {
        self.spring = self.spring.step(self.params);
    }

    /// Runs as many ticks as the frame at `now` is owed. Returns the count.
    pub fn advance(&mut self, now: Duration) -> u32 {
        let ticks = self.ticker.ticks(now);
        for _ in 0..ticks {
            self.step();
        }
        ticks
    }

    /// Forgets the last frame time, so a panel shown again does not replay the
    /// time it spent hidden.
    pub fn resume(&mut self) {
        self.ticker.reset();
    }

    pub fn frame(&self) -> Frame {
        let angle = self.spring.displayed_angle;
        let marks = self
            .items
            .iter()
            .map(|item| ItemMark {
                id: item.id.clone(),
                label: item.label.clone(),
                angle: item.angle,
                geometry: self.layout.item_geometry(item.angle),
                active: self.active.as_ref() == Some(&item.id),
            })
            .collect();

        Frame {
            layout: self.layout,
            needle: Needle {
                pivot: self.layout.pivot,
                rotation: self.layout.needle_rotation(angle),
                angle,
                in_motion: self.spring.in_motion(),
                trail: self
                    .spring
                    .in_motion()
                    .then(|| self.layout.needle_rotation(angle - self.spring.velocity)),
            },
            marks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compass_items() -> Vec<NavigableItem> {
        vec![
            NavigableItem::new("profile", "Profile", 60.0),
            NavigableItem::new("work", "Work Experience", 20.0),
            NavigableItem::new("about", "About", -20.0),
            NavigableItem::new("contact", "Contact", -60.0),
        ]
    }

    /// 200x200 widget: screen and logical coordinates coincide.
    fn navigator() -> Navigator {
        let mut nav = Navigator::new(
            compass_items(),
            Some(ItemId::new("profile")),
            Orientation::PrimaryArc,
        )
        .unwrap();
        nav.resize(200.0, 200.0);
        nav
    }

    fn dot(nav: &Navigator, angle: f64) -> Point {
        nav.layout().item_geometry(angle).dot
    }

    fn offset(p: Point, dx: f64, dy: f64) -> Point {
        Point::new(p.x + dx, p.y + dy)
    }

    fn settle(nav: &mut Navigator) {
        for _ in 0..200 {
            nav.step();
        }
    }

    #[test]
    fn test_starts_on_active_item() {
        let nav = navigator();
        assert_eq!(nav.displayed_angle(), 60.0);
        assert_eq!(nav.target_angle(), 60.0);

        let nav = Navigator::new(compass_items(), None, Orientation::SecondaryArc).unwrap();
        assert_eq!(nav.displayed_angle(), 60.0);
    }

    #[test]
    fn test_rejects_bad_item_lists() {
        assert_eq!(
            Navigator::new(Vec::new(), None, Orientation::PrimaryArc).unwrap_err(),
            NavigatorError::EmptyItems
        );
        let mut items = compass_items();
        items.push(NavigableItem::new("about", "About again", 0.0));
        assert!(matches!(
            Navigator::new(items, None, Orientation::PrimaryArc),
            Err(NavigatorError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_active_section_moves_target() {
        let mut nav = navigator();
        nav.set_active_section("about");
        assert_eq!(nav.target_angle(), -20.0);
        settle(&mut nav);
        assert!((nav.displayed_angle() + 20.0).abs() < 0.01);
    }

    #[test]
    fn test_unknown_active_section_is_ignored() {
        let mut nav = navigator();
        nav.set_active_section("work");
        nav.set_active_section("nowhere");
        assert_eq!(nav.target_angle(), 20.0);
        assert_eq!(nav.active_section(), Some(&ItemId::new("nowhere")));
        assert!(nav.frame().marks.iter().all(|mark| !mark.active));
    }

    #[test]
    fn test_tap_navigates() {
        let mut nav = navigator();
        nav.pointer_down(dot(&nav, 20.0));
        let navigation = nav.pointer_up().unwrap();
        assert_eq!(navigation.id.as_str(), "work");
        assert_eq!(navigation.trigger, Trigger::Tap);
        assert_eq!(nav.target_angle(), 20.0);
        assert_eq!(nav.gesture_state(), GestureState::Idle);
    }

    #[test]
    fn test_tap_on_active_item_still_fires_once() {
        let mut nav = navigator();
        for _ in 0..2 {
            nav.pointer_down(dot(&nav, 60.0));
            let navigation = nav.pointer_up();
            assert_eq!(navigation.map(|n| n.id), Some(ItemId::new("profile")));
            assert_eq!(nav.pointer_up(), None);
            assert_eq!(nav.target_angle(), 60.0);
        }
    }

    #[test]
    fn test_small_wobble_is_a_tap() {
        let mut nav = navigator();
        let start = dot(&nav, 20.0);
        nav.pointer_down(start);
        nav.pointer_move(offset(start, 4.0, 0.0));
        assert!(matches!(nav.gesture_state(), GestureState::Pending { .. }));
        let navigation = nav.pointer_up().unwrap();
        assert_eq!(navigation.trigger, Trigger::Tap);
        assert_eq!(navigation.id.as_str(), "work");
    }

    #[test]
    fn test_long_move_is_a_drag() {
        let mut nav = navigator();
        let start = dot(&nav, 20.0);
        nav.pointer_down(start);
        nav.pointer_move(offset(start, 0.0, 10.0));
        assert!(matches!(nav.gesture_state(), GestureState::Dragging { .. }));
        // dragging writes straight through the spring
        assert_eq!(nav.displayed_angle(), nav.target_angle());
        assert_eq!(nav.spring().velocity, 0.0);

        let navigation = nav.pointer_up().unwrap();
        assert_eq!(navigation.trigger, Trigger::Drag);
        assert_eq!(navigation.id.as_str(), "work");
    }

    #[test]
    fn test_drag_stays_a_drag_after_returning() {
        let mut nav = navigator();
        let start = dot(&nav, 20.0);
        nav.pointer_down(start);
        nav.pointer_move(offset(start, 0.0, 10.0));
        nav.pointer_move(offset(start, 0.0, 2.0));
        let navigation = nav.pointer_up().unwrap();
        assert_eq!(navigation.trigger, Trigger::Drag);
    }

    #[test]
    fn test_drag_snaps_to_nearest() {
        let mut nav = navigator();
        nav.pointer_down(dot(&nav, 60.0));
        nav.pointer_move(dot(&nav, -5.0));
        assert!((nav.displayed_angle() + 5.0).abs() < 1e-9);
        let navigation = nav.pointer_up().unwrap();
        assert_eq!(navigation.id.as_str(), "about");
        assert_eq!(nav.target_angle(), -20.0);
    }

    #[test]
    fn test_drag_tie_snaps_to_first_item() {
        let mut nav = navigator();
        nav.pointer_down(dot(&nav, 60.0));
        nav.pointer_move(dot(&nav, 0.0));
        assert!(nav.displayed_angle().abs() < 1e-9);
        assert_eq!(nav.pointer_up().unwrap().id.as_str(), "work");
    }

    #[test]
    fn test_drag_is_clamped_to_domain() {
        let mut nav = navigator();
        nav.pointer_down(dot(&nav, 20.0));
        nav.pointer_move(nav.layout().angle_to_point(88.0, 72.0));
        assert_eq!(nav.displayed_angle(), 70.0);
    }

    #[test]
    fn test_leaving_mid_drag_snaps() {
        let mut nav = navigator();
        nav.pointer_down(dot(&nav, 60.0));
        nav.pointer_move(dot(&nav, -50.0));
        let navigation = nav.pointer_leave().unwrap();
        assert_eq!(navigation.id.as_str(), "contact");
        assert_eq!(nav.pointer_up(), None);
    }

    #[test]
    fn test_leaving_before_drag_cancels() {
        let mut nav = navigator();
        nav.pointer_down(dot(&nav, 20.0));
        assert_eq!(nav.pointer_leave(), None);
        assert_eq!(nav.target_angle(), 60.0);
    }

    #[test]
    fn test_tap_on_empty_space_does_nothing() {
        let mut nav = navigator();
        nav.pointer_down(Point::new(190.0, 190.0));
        assert_eq!(nav.pointer_up(), None);
        assert_eq!(nav.target_angle(), 60.0);
    }

    #[test]
    fn test_signal_waits_for_gesture() {
        let mut nav = navigator();
        nav.pointer_down(Point::new(190.0, 190.0));
        nav.set_active_section("contact");
        assert_eq!(nav.target_angle(), 60.0);
        assert_eq!(nav.pointer_up(), None);
        assert_eq!(nav.target_angle(), -60.0);
    }

    #[test]
    fn test_gesture_wins_over_signal() {
        let mut nav = navigator();
        nav.pointer_down(dot(&nav, 20.0));
        nav.set_active_section("contact");
        nav.pointer_up();
        assert_eq!(nav.target_angle(), 20.0);

        // an unchanged signal does not pull the needle back
        nav.set_active_section("contact");
        assert_eq!(nav.target_angle(), 20.0);
    }

    #[test]
    fn test_no_size_means_no_input() {
        let mut nav = navigator();
        nav.resize(0.0, 0.0);
        nav.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(nav.gesture_state(), GestureState::Idle);
        assert_eq!(nav.pointer_up(), None);
        // the animation keeps going regardless
        nav.set_active_section("contact");
        nav.step();
        assert!(nav.displayed_angle() < 60.0);
    }

    #[test]
    fn test_letterboxed_input_is_normalized() {
        let mut nav = navigator();
        nav.resize(400.0, 200.0);
        let work = dot(&nav, 20.0);
        nav.pointer_down(offset(work, 100.0, 0.0));
        assert_eq!(nav.pointer_up().unwrap().id.as_str(), "work");

        nav.resize(400.0, 400.0);
        let screen = nav.viewport().unwrap().to_screen(dot(&nav, -60.0));
        nav.pointer_down(screen);
        assert_eq!(nav.pointer_up().unwrap().id.as_str(), "contact");
    }

    #[test]
    fn test_press_stops_the_needle() {
        let mut nav = navigator();
        nav.set_active_section("contact");
        nav.step();
        assert!(nav.spring().velocity != 0.0);
        nav.pointer_down(Point::new(190.0, 190.0));
        assert_eq!(nav.spring().velocity, 0.0);
    }

    #[test]
    fn test_navigate_relative_walks_list() {
        let mut nav = navigator();
        assert_eq!(nav.navigate_relative(1).unwrap().id.as_str(), "work");
        assert_eq!(nav.navigate_relative(1).unwrap().id.as_str(), "about");
        assert_eq!(nav.navigate_relative(5).unwrap().id.as_str(), "contact");
        assert_eq!(nav.navigate_relative(-10).unwrap().id.as_str(), "profile");
    }

    #[test]
    fn test_navigate_to_unknown_is_none() {
        let mut nav = navigator();
        assert_eq!(nav.navigate_to(&ItemId::new("missing")), None);
        let navigation = nav.navigate_to(&ItemId::new("about")).unwrap();
        assert_eq!(navigation.trigger, Trigger::Direct);
    }

    #[test]
    fn test_set_items_resets() {
        let mut nav = navigator();
        nav.set_active_section("about");
        nav.pointer_down(dot(&nav, 20.0));
        nav.set_items(vec![
            NavigableItem::new("about", "About", -45.0),
            NavigableItem::new("home", "Home", 45.0),
        ])
        .unwrap();
        assert_eq!(nav.gesture_state(), GestureState::Idle);
        assert_eq!(nav.target_angle(), -45.0);
        assert_eq!(nav.set_items(Vec::new()), Err(NavigatorError::EmptyItems));
        assert_eq!(nav.items().len(), 2);
    }

    #[test]
    fn test_frame_marks_active_item() {
        let mut nav = navigator();
        nav.set_active_section("work");
        let frame = nav.frame();
        let active: Vec<_> = frame.marks.iter().filter(|m| m.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id.as_str(), "work");
        assert_eq!(frame.needle.pivot, nav.layout().pivot);
        assert!((frame.needle.rotation - (-60f64).to_radians()).abs() < 1e-9);
        assert_eq!(frame.needle.trail, None);
    }

    #[test]
    fn test_fast_needle_leaves_trail() {
        let mut nav = navigator();
        nav.set_active_section("contact");
        nav.step();
        let needle = nav.frame().needle;
        assert!(needle.in_motion);
        let trail = needle.trail.unwrap();
        // heading clockwise on screen, so the trail lags behind
        assert!(trail < needle.rotation);
    }

    #[test]
    fn test_needle_points_at_item_in_both_orientations() {
        for orientation in [Orientation::PrimaryArc, Orientation::SecondaryArc] {
            let mut nav = navigator();
            nav.set_orientation(orientation);
            let frame = nav.frame();
            let tip = Point::new(
                frame.needle.pivot.x + frame.needle.rotation.cos() * 72.0,
                frame.needle.pivot.y + frame.needle.rotation.sin() * 72.0,
            );
            let profile = &frame.marks[0].geometry.dot;
            assert!(tip.distance(*profile) < 1e-9);
        }
    }

    #[test]
    fn test_advance_follows_frame_clock() {
        let mut nav = navigator();
        nav.set_active_section("contact");
        assert_eq!(nav.advance(Duration::from_millis(1000)), 1);
        assert_eq!(nav.advance(Duration::from_millis(1034)), 2);
        assert!(nav.displayed_angle() < 60.0);
    }

    #[test]
    fn test_resume_skips_hidden_time() {
        let mut nav = navigator();
        nav.set_active_section("contact");
        nav.advance(Duration::from_millis(1000));
        nav.resume();
        // an hour later the first frame still gets exactly one tick
        assert_eq!(nav.advance(Duration::from_secs(3600)), 1);
        assert_eq!(nav.advance(Duration::from_millis(3_600_017)), 1);
    }

    #[test]
    fn test_orientation_change_mid_drag_returns_to_active() {
        let mut nav = navigator();
        nav.pointer_down(dot(&nav, 60.0));
        nav.pointer_move(dot(&nav, 0.0));
        assert!(nav.displayed_angle().abs() < 1e-9);

        nav.set_orientation(Orientation::SecondaryArc);
        assert_eq!(nav.gesture_state(), GestureState::Idle);
        assert_eq!(nav.target_angle(), 60.0);
        assert_eq!(nav.pointer_up(), None);

        settle(&mut nav);
        assert!((nav.displayed_angle() - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_orientation_change_clamps_needle() {
        let mut nav = Navigator::new(
            vec![
                NavigableItem::new("far", "Far", 85.0),
                NavigableItem::new("near", "Near", 0.0),
            ],
            Some(ItemId::new("far")),
            Orientation::PrimaryArc,
        )
        .unwrap();
        assert_eq!(nav.displayed_angle(), 85.0);

        nav.set_orientation(Orientation::SecondaryArc);
        assert_eq!(nav.displayed_angle(), 70.0);
        assert_eq!(nav.spring().velocity, 0.0);
        // the item itself may sit outside the domain, so the needle still heads there
        assert_eq!(nav.target_angle(), 85.0);
    }

    #[test]
    fn test_orientation_change_applies_waiting_signal() {
        let mut nav = navigator();
        nav.pointer_down(Point::new(190.0, 190.0));
        nav.set_active_section("contact");
        assert_eq!(nav.target_angle(), 60.0);

        nav.set_orientation(Orientation::SecondaryArc);
        assert_eq!(nav.target_angle(), -60.0);
        assert_eq!(nav.gesture_state(), GestureState::Idle);
    }

    #[test]
    fn test_same_orientation_keeps_gesture() {
        let mut nav = navigator();
        nav.pointer_down(dot(&nav, 20.0));
        nav.set_orientation(Orientation::PrimaryArc);
        assert!(matches!(nav.gesture_state(), GestureState::Pending { .. }));
    }

    #[test]
    fn test_tap_on_label_text_navigates() {
        let mut nav = navigator();
        let label = nav.layout().item_geometry(20.0).label;
        // inside "Work Experience", well past the connector's end
        nav.pointer_down(offset(label, 30.0, 0.0));
        let navigation = nav.pointer_up().unwrap();
        assert_eq!(navigation.id.as_str(), "work");
        assert_eq!(navigation.trigger, Trigger::Tap);
    }
}
