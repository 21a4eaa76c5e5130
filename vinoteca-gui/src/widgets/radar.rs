//! Characteristic radar editor widget
//!
//! Interactive canvas widget for the five taste axes. Draws the radar
//! polygon and lets the user drag each vertex along its axis; every drag
//! step emits the full updated value set to the owning view. Constructed
//! without an `on_change` constructor it becomes a read-only chart.

use crate::message::Message;
use crate::theme::colors;

use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::canvas::{self, event, Event, Frame, Geometry, Path, Stroke, Text};
use iced::{Point, Rectangle, Renderer, Theme, Vector};
use vinoteca::domain::{Characteristic, CharacteristicSet, CharacteristicValue};

/// Radius for hit detection on markers (larger than drawn, for touch)
const MARKER_HIT_RADIUS: f32 = 25.0;
/// Visual radius for markers
const MARKER_RADIUS: f32 = 8.0;
/// Enlarged marker radius while hovered or dragged
const MARKER_ACTIVE_RADIUS: f32 = 12.0;
/// Label distance beyond the rim
const LABEL_OFFSET: f32 = 26.0;
/// Below this surface size the reference grid drops to 3 rings
const SPARSE_GRID_THRESHOLD: f32 = 200.0;

/// Characteristic radar editor widget
pub struct RadarEditor {
    data: CharacteristicSet,
    on_change: Option<fn(CharacteristicSet) -> Message>,
    show_axis_labels: bool,
    show_values: bool,
}

/// State for the radar editor (tracks interaction)
#[derive(Debug, Clone, Default)]
pub struct RadarState {
    /// Axis index being dragged
    dragging: Option<usize>,
    /// Axis index being hovered
    hovered: Option<usize>,
}

impl RadarEditor {
    /// Create an editable radar chart; `on_change` receives the full
    /// updated set after every drag step
    pub fn new(data: CharacteristicSet, on_change: fn(CharacteristicSet) -> Message) -> Self {
        Self {
            data,
            on_change: Some(on_change),
            show_axis_labels: true,
            show_values: true,
        }
    }

    /// Create a read-only radar chart (list thumbnails, detail panes)
    pub fn display(data: CharacteristicSet) -> Self {
        Self {
            data,
            on_change: None,
            show_axis_labels: true,
            show_values: false,
        }
    }

    /// Toggle axis labels outside the rim
    pub fn with_axis_labels(mut self, show: bool) -> Self {
        self.show_axis_labels = show;
        self
    }

    /// Toggle numeric value labels at the markers
    pub fn with_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }
}

/// Mapping between (axis, value) space and surface coordinates.
///
/// Axis 0 points straight up; axes proceed clockwise. All pointer math
/// for the editor goes through this one struct so the forward and
/// inverse mappings cannot drift apart.
#[derive(Debug, Clone, Copy)]
pub struct RadarGeometry {
    center: Point,
    radius: f32,
}

impl RadarGeometry {
    /// Fraction of the short surface side used as the reference radius
    const RADIUS_FACTOR: f32 = 0.35;

    /// Build the geometry for a drawing surface of the given size.
    ///
    /// Non-positive dimensions collapse to a zero radius; this is a
    /// rendering widget and never rejects its inputs.
    pub fn new(width: f32, height: f32) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius: width.min(height) * Self::RADIUS_FACTOR,
        }
    }

    /// Surface center
    pub fn center(&self) -> Point {
        self.center
    }

    /// Reference radius (value 100 sits at this distance)
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Angle of axis `index`, with axis 0 straight up
    fn angle(index: usize) -> f32 {
        index as f32 * std::f32::consts::TAU / Characteristic::COUNT as f32
            - std::f32::consts::FRAC_PI_2
    }

    /// Unit direction of axis `index`
    fn direction(index: usize) -> Vector {
        let angle = Self::angle(index);
        Vector::new(angle.cos(), angle.sin())
    }

    /// Forward mapping: the surface point for `value` on axis `index`
    pub fn point_at(&self, index: usize, value: CharacteristicValue) -> Point {
        let dir = Self::direction(index);
        let distance = self.radius * value.as_fraction();
        Point::new(
            self.center.x + distance * dir.x,
            self.center.y + distance * dir.y,
        )
    }

    /// Point on the rim of axis `index` (value 100)
    fn rim_point(&self, index: usize) -> Point {
        self.point_at(index, CharacteristicValue::from_f32(100.0))
    }

    /// Hit-testing: the axis whose marker is nearest `position`, if any
    /// marker lies within the capture radius. Ties break to the lowest
    /// axis index.
    pub fn axis_at(&self, position: Point, data: &CharacteristicSet) -> Option<usize> {
        let mut closest: Option<usize> = None;
        let mut min_distance = MARKER_HIT_RADIUS;

        for (i, value) in data.values().into_iter().enumerate() {
            let marker = self.point_at(i, value);
            let dx = position.x - marker.x;
            let dy = position.y - marker.y;
            let distance = (dx * dx + dy * dy).sqrt();
            // Strict comparison keeps the lowest index on exact ties
            if distance <= MARKER_HIT_RADIUS && closest.map_or(true, |_| distance < min_distance) {
                min_distance = distance;
                closest = Some(i);
            }
        }

        closest
    }

    /// Inverse mapping: the value for axis `index` with the pointer at
    /// `position`.
    ///
    /// The vector from the center to the pointer is projected onto the
    /// axis direction, so motion perpendicular to the axis line does not
    /// change the value. Clamped to 0-100 and rounded.
    pub fn value_at(&self, index: usize, position: Point) -> CharacteristicValue {
        if self.radius <= 0.0 {
            return CharacteristicValue::from_f32(0.0);
        }
        let dir = Self::direction(index);
        let projected = (position.x - self.center.x) * dir.x + (position.y - self.center.y) * dir.y;
        CharacteristicValue::from_f32(projected / self.radius * 100.0)
    }

    /// Number of concentric reference rings for this surface size
    fn ring_count(&self) -> usize {
        if self.radius / Self::RADIUS_FACTOR < SPARSE_GRID_THRESHOLD {
            3
        } else {
            5
        }
    }
}

impl canvas::Program<Message> for RadarEditor {
    type State = RadarState;

    fn update(
        &self,
        state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let on_change = match self.on_change {
            Some(on_change) => on_change,
            None => return (event::Status::Ignored, None),
        };

        let geometry = RadarGeometry::new(bounds.width, bounds.height);

        let cursor_position = match cursor.position_in(bounds) {
            Some(pos) => pos,
            None => {
                // Cursor left the canvas; drop both transient states
                state.hovered = None;
                state.dragging = None;
                return (event::Status::Ignored, None);
            }
        };

        if let Event::Mouse(mouse_event) = event {
            match mouse_event {
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    // Press on empty space keeps the current state
                    if let Some(axis) = geometry.axis_at(cursor_position, &self.data) {
                        state.dragging = Some(axis);
                        state.hovered = Some(axis);
                        return (event::Status::Captured, None);
                    }
                }
                mouse::Event::ButtonReleased(mouse::Button::Left) => {
                    if state.dragging.take().is_some() {
                        return (event::Status::Captured, None);
                    }
                }
                mouse::Event::CursorMoved { .. } => {
                    if let Some(axis_idx) = state.dragging {
                        // Every move commits the full updated set, no batching
                        let axis = match Characteristic::from_index(axis_idx) {
                            Some(axis) => axis,
                            None => return (event::Status::Ignored, None),
                        };
                        let value = geometry.value_at(axis_idx, cursor_position);
                        let updated = self.data.with_value(axis, value);
                        return (event::Status::Captured, Some(on_change(updated)));
                    } else {
                        let hovered = geometry.axis_at(cursor_position, &self.data);
                        if hovered != state.hovered {
                            state.hovered = hovered;
                        }
                    }
                }
                _ => {}
            }
        }

        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let geometry = RadarGeometry::new(bounds.width, bounds.height);
        let center = geometry.center();

        // Concentric reference rings
        let rings = geometry.ring_count();
        for j in 1..=rings {
            let ring = Path::circle(center, geometry.radius() * j as f32 / rings as f32);
            frame.stroke(
                &ring,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(colors::BG_OVERLAY),
            );
        }

        // One spoke per axis, center to rim
        for i in 0..Characteristic::COUNT {
            let spoke = Path::line(center, geometry.rim_point(i));
            frame.stroke(
                &spoke,
                Stroke::default()
                    .with_width(1.0)
                    .with_color(colors::BG_ELEVATED),
            );
        }

        // Value polygon, filled translucent and stroked solid
        let values = self.data.values();
        let polygon = Path::new(|builder| {
            for (i, value) in values.into_iter().enumerate() {
                let point = geometry.point_at(i, value);
                if i == 0 {
                    builder.move_to(point);
                } else {
                    builder.line_to(point);
                }
            }
            builder.close();
        });
        frame.fill(&polygon, colors::with_alpha(colors::ACCENT_WINE, 0.25));
        frame.stroke(
            &polygon,
            Stroke::default()
                .with_width(2.0)
                .with_color(colors::ACCENT_WINE),
        );

        // Markers, with hover/drag emphasis
        for (i, axis) in Characteristic::ALL.into_iter().enumerate() {
            let value = self.data.get(axis);
            let point = geometry.point_at(i, value);

            let is_dragging = state.dragging == Some(i);
            let is_hovered = state.hovered == Some(i);

            let (color, radius) = if is_dragging {
                (colors::ACCENT_WINE_BRIGHT, MARKER_ACTIVE_RADIUS)
            } else if is_hovered {
                (colors::ACCENT_AMBER, MARKER_ACTIVE_RADIUS)
            } else {
                (colors::axis_color(axis), MARKER_RADIUS)
            };

            let marker = Path::circle(point, radius);
            frame.fill(&marker, color);
            frame.stroke(
                &marker,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(colors::TEXT_PRIMARY),
            );

            if self.show_values {
                frame.fill_text(Text {
                    content: value.to_string(),
                    position: Point::new(point.x, point.y - radius - 6.0),
                    color: colors::TEXT_SECONDARY,
                    size: 12.0.into(),
                    horizontal_alignment: Horizontal::Center,
                    vertical_alignment: Vertical::Bottom,
                    ..Text::default()
                });
            }
        }

        // Axis labels outside the rim, alignment flipped per half-plane
        if self.show_axis_labels {
            for (i, axis) in Characteristic::ALL.into_iter().enumerate() {
                let angle = RadarGeometry::angle(i);
                let label_distance = geometry.radius() + LABEL_OFFSET;
                let x = center.x + label_distance * angle.cos();
                let y = center.y + label_distance * angle.sin();

                // Right-align on the left half, left-align on the right;
                // nudge down in the lower half, up in the upper half
                let horizontal = if angle.cos() < -0.01 {
                    Horizontal::Right
                } else if angle.cos() > 0.01 {
                    Horizontal::Left
                } else {
                    Horizontal::Center
                };
                let y = if angle.sin() > 0.0 { y + 5.0 } else { y - 5.0 };

                frame.fill_text(Text {
                    content: axis.label().to_string(),
                    position: Point::new(x, y),
                    color: colors::axis_color(axis),
                    size: 13.0.into(),
                    horizontal_alignment: horizontal,
                    vertical_alignment: Vertical::Center,
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.on_change.is_none() {
            return mouse::Interaction::default();
        }

        if state.dragging.is_some() {
            return mouse::Interaction::Grabbing;
        }

        if let Some(pos) = cursor.position_in(bounds) {
            let geometry = RadarGeometry::new(bounds.width, bounds.height);
            if geometry.axis_at(pos, &self.data).is_some() {
                return mouse::Interaction::Grab;
            }
        }

        mouse::Interaction::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 400.0;
    const H: f32 = 400.0;

    fn geometry() -> RadarGeometry {
        RadarGeometry::new(W, H)
    }

    fn value(v: u8) -> CharacteristicValue {
        CharacteristicValue::new(v).unwrap()
    }

    #[test]
    fn test_reference_radius() {
        let g = geometry();
        assert_eq!(g.center(), Point::new(200.0, 200.0));
        assert!((g.radius() - 140.0).abs() < f32::EPSILON);

        // Rectangular surface uses the short side
        let g = RadarGeometry::new(600.0, 200.0);
        assert!((g.radius() - 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_degenerate_surface_is_clamped() {
        let g = RadarGeometry::new(-100.0, 50.0);
        assert!(g.radius() >= 0.0);
        assert_eq!(g.value_at(0, Point::new(10.0, 10.0)).as_percentage(), 0);
    }

    #[test]
    fn test_axis_zero_points_up() {
        let g = geometry();
        let top = g.point_at(0, value(100));
        assert!((top.x - 200.0).abs() < 1e-3);
        assert!((top.y - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_forward_inverse_roundtrip() {
        let g = geometry();
        for i in 0..Characteristic::COUNT {
            for v in [0u8, 1, 13, 50, 77, 99, 100] {
                let point = g.point_at(i, value(v));
                let back = g.value_at(i, point).as_percentage();
                assert!(
                    (back as i16 - v as i16).abs() <= 1,
                    "axis {} value {} came back as {}",
                    i,
                    v,
                    back
                );
            }
        }
    }

    #[test]
    fn test_value_clamps_beyond_rim_and_behind_center() {
        let g = geometry();
        // Far past the rim on axis 0 (straight up)
        let past_rim = Point::new(200.0, -500.0);
        assert_eq!(g.value_at(0, past_rim).as_percentage(), 100);
        // Behind the center (projection is negative)
        let behind = Point::new(200.0, 350.0);
        assert_eq!(g.value_at(0, behind).as_percentage(), 0);
    }

    #[test]
    fn test_perpendicular_motion_projects_onto_axis() {
        let g = geometry();
        let half = g.radius() / 2.0;
        // On axis 0 at R/2, then offset sideways; the projection keeps 50
        let on_axis = Point::new(200.0, 200.0 - half);
        let offset = Point::new(218.0, 200.0 - half);
        assert_eq!(g.value_at(0, on_axis).as_percentage(), 50);
        assert_eq!(g.value_at(0, offset).as_percentage(), 50);
    }

    #[test]
    fn test_hit_nearest_marker_within_capture() {
        let g = geometry();
        let data = CharacteristicSet::default();
        // Exactly on the axis-0 marker
        let marker = g.point_at(0, data.get(Characteristic::Sweetness));
        assert_eq!(g.axis_at(marker, &data), Some(0));
        // Slightly off, still within capture radius
        let near = Point::new(marker.x + 10.0, marker.y - 10.0);
        assert_eq!(g.axis_at(near, &data), Some(0));
    }

    #[test]
    fn test_hit_none_outside_capture() {
        let g = geometry();
        let data = CharacteristicSet::default();
        // The center is R/2 = 70 px from every marker at the defaults
        assert_eq!(g.axis_at(g.center(), &data), None);
        assert_eq!(g.axis_at(Point::new(2.0, 2.0), &data), None);
    }

    #[test]
    fn test_hit_tie_breaks_to_lowest_index() {
        let g = geometry();
        // With all values 0 every marker sits at the center
        let data = CharacteristicSet::uniform(value(0));
        assert_eq!(g.axis_at(g.center(), &data), Some(0));
    }

    #[test]
    fn test_drag_along_axis_to_half_radius_yields_50() {
        let g = geometry();
        let data = CharacteristicSet::uniform(value(20));
        let pointer = Point::new(200.0, 200.0 - g.radius() / 2.0);

        let updated = data.with_value(Characteristic::Sweetness, g.value_at(0, pointer));
        assert_eq!(updated.get(Characteristic::Sweetness).as_percentage(), 50);
        for axis in &Characteristic::ALL[1..] {
            assert_eq!(updated.get(*axis).as_percentage(), 20);
        }
    }

    #[test]
    fn test_drag_to_rim_yields_100_others_unchanged() {
        let g = geometry();
        let data = CharacteristicSet::default();
        let rim = Point::new(200.0, 200.0 - g.radius());

        let updated = data.with_value(Characteristic::Sweetness, g.value_at(0, rim));
        assert_eq!(updated.get(Characteristic::Sweetness).as_percentage(), 100);
        for axis in &Characteristic::ALL[1..] {
            assert_eq!(updated.get(*axis).as_percentage(), 50);
        }
    }

    #[test]
    fn test_repeated_drag_commit_is_idempotent() {
        let g = geometry();
        let data = CharacteristicSet::default();
        let pointer = Point::new(263.0, 171.0);

        let first = data.with_value(Characteristic::Body, g.value_at(1, pointer));
        let second = first.with_value(Characteristic::Body, g.value_at(1, pointer));
        assert_eq!(first, second);
    }

    #[test]
    fn test_ring_count_by_surface_size() {
        assert_eq!(RadarGeometry::new(400.0, 400.0).ring_count(), 5);
        assert_eq!(RadarGeometry::new(120.0, 120.0).ring_count(), 3);
    }

    #[test]
    fn test_radar_state_default() {
        let state = RadarState::default();
        assert!(state.dragging.is_none());
        assert!(state.hovered.is_none());
    }
}
