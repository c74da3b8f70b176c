//! Decorative destination map.
//!
//! Markers are spread over up to three rings around the centre of the map
//! container. The layout is a function of a marker's index and the number of
//! markers only; it is not a projection of latitude/longitude.

use crate::types::Destination;
use std::f64::consts::TAU;

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 2.0;
pub const ZOOM_STEP: f64 = 0.2;
/// Pan limit per axis at zoom 1.0, in pixels.
pub const PAN_LIMIT: f64 = 100.0;

const RING_BASE: f64 = 30.0;
const RING_STEP: f64 = 15.0;
const RING_COUNT: usize = 3;

/// Marker position as a percentage of the container size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPosition {
    pub left: f64,
    pub top: f64,
}

impl MarkerPosition {
    pub fn style(&self) -> String {
        format!("left: {:.3}%; top: {:.3}%;", self.left, self.top)
    }
}

pub fn marker_position(index: usize, count: usize) -> MarkerPosition {
    if count == 0 {
        return MarkerPosition {
            left: 50.0,
            top: 50.0,
        };
    }
    let angle = (index as f64 / count as f64) * TAU;
    let radius = RING_BASE + (index % RING_COUNT) as f64 * RING_STEP;
    MarkerPosition {
        left: 50.0 + angle.cos() * radius,
        top: 50.0 + angle.sin() * radius,
    }
}

/// Positions for every destination, in list order.
pub fn layout_markers(destinations: &[Destination]) -> Vec<(&Destination, MarkerPosition)> {
    let count = destinations.len();
    destinations
        .iter()
        .enumerate()
        .map(|(index, destination)| (destination, marker_position(index, count)))
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub const ORIGIN: MapPoint = MapPoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Zoom, pan and drag state of one rendered map.
///
/// Invariants: `zoom` stays in `[ZOOM_MIN, ZOOM_MAX]` and each axis of
/// `position` stays in `[-PAN_LIMIT * zoom, PAN_LIMIT * zoom]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapViewState {
    zoom: f64,
    position: MapPoint,
    dragging: bool,
    drag_origin: MapPoint,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            position: MapPoint::ORIGIN,
            dragging: false,
            drag_origin: MapPoint::ORIGIN,
        }
    }
}

impl MapViewState {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn position(&self) -> MapPoint {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn pointer_down(&mut self, pointer: MapPoint) {
        self.dragging = true;
        self.drag_origin = MapPoint::new(pointer.x - self.position.x, pointer.y - self.position.y);
    }

    pub fn pointer_move(&mut self, pointer: MapPoint) {
        if !self.dragging {
            return;
        }
        let candidate = MapPoint::new(pointer.x - self.drag_origin.x, pointer.y - self.drag_origin.y);
        self.position = self.clamp(candidate);
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.position = MapPoint::ORIGIN;
    }

    /// CSS transform for the layer holding the markers.
    pub fn transform(&self) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px) scale({:.2});",
            self.position.x, self.position.y, self.zoom
        )
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        // A smaller zoom shrinks the pan limit.
        self.position = self.clamp(self.position);
    }

    fn clamp(&self, point: MapPoint) -> MapPoint {
        let limit = PAN_LIMIT * self.zoom;
        MapPoint::new(point.x.clamp(-limit, limit), point.y.clamp(-limit, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_marker_sits_right_of_centre() {
        let pos = marker_position(0, 4);
        assert!((pos.left - 80.0).abs() < 1e-9);
        assert!((pos.top - 50.0).abs() < 1e-9);
    }

    #[test]
    fn rings_cycle_every_three_markers() {
        // Quarter turn for index 1 of 4, on the middle ring (radius 45).
        let pos = marker_position(1, 4);
        assert!((pos.left - 50.0).abs() < 1e-9);
        assert!((pos.top - 95.0).abs() < 1e-9);
        // Index 3 is back on the inner ring (radius 30), three quarters round.
        let pos = marker_position(3, 4);
        assert!((pos.left - 50.0).abs() < 1e-9);
        assert!((pos.top - 20.0).abs() < 1e-9);
    }

    #[test]
    fn pointer_move_without_press_is_ignored() {
        let mut view = MapViewState::default();
        view.pointer_move(MapPoint::new(40.0, 40.0));
        assert_eq!(view.position(), MapPoint::ORIGIN);
    }

    #[test]
    fn drag_follows_pointer_relative_to_grab_point() {
        let mut view = MapViewState::default();
        view.pointer_down(MapPoint::new(10.0, 10.0));
        view.pointer_move(MapPoint::new(30.0, 5.0));
        assert_eq!(view.position(), MapPoint::new(20.0, -5.0));
        view.pointer_up();

        // Second grab continues from the current offset.
        view.pointer_down(MapPoint::new(0.0, 0.0));
        view.pointer_move(MapPoint::new(10.0, 10.0));
        assert_eq!(view.position(), MapPoint::new(30.0, 5.0));
    }

    #[test]
    fn zooming_out_pulls_position_back_in_bounds() {
        let mut view = MapViewState::default();
        view.zoom_in();
        view.zoom_in();
        view.pointer_down(MapPoint::ORIGIN);
        view.pointer_move(MapPoint::new(500.0, -500.0));
        view.pointer_up();
        assert!((view.position().x - 140.0).abs() < 1e-9);

        for _ in 0..5 {
            view.zoom_out();
        }
        assert!((view.zoom() - ZOOM_MIN).abs() < 1e-9);
        assert!((view.position().x - 50.0).abs() < 1e-9);
        assert!((view.position().y + 50.0).abs() < 1e-9);
    }

    #[test]
    fn transform_renders_offset_and_scale() {
        let view = MapViewState::default();
        assert_eq!(view.transform(), "transform: translate(0.0px, 0.0px) scale(1.00);");
    }
}
