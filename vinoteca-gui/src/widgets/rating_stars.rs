//! Star rating widget
//!
//! Canvas widget drawing 1-5 stars; optionally clickable to pick a rating.

use crate::message::Message;
use crate::theme::colors;

use iced::mouse;
use iced::widget::canvas::{self, event, Event, Frame, Geometry, Path, Stroke};
use iced::{Point, Rectangle, Renderer, Theme};
use vinoteca::domain::TastingRating;

/// Horizontal padding around the star row
const PADDING: f32 = 4.0;

/// Star rating widget
pub struct RatingStars {
    rating: Option<TastingRating>,
    on_select: Option<fn(Option<TastingRating>) -> Message>,
}

impl RatingStars {
    /// Create a clickable rating row; clicking the current rating clears it
    pub fn new(
        rating: Option<TastingRating>,
        on_select: fn(Option<TastingRating>) -> Message,
    ) -> Self {
        Self {
            rating,
            on_select: Some(on_select),
        }
    }

    /// Create a read-only rating row
    pub fn display(rating: Option<TastingRating>) -> Self {
        Self {
            rating,
            on_select: None,
        }
    }

    /// Which star (1-5) the cursor is over, if any
    fn star_at(position: Point, bounds: &Rectangle) -> Option<u8> {
        let slot = (bounds.width - PADDING * 2.0) / TastingRating::MAX as f32;
        if slot <= 0.0 || position.x < PADDING || position.x > bounds.width - PADDING {
            return None;
        }
        let star = ((position.x - PADDING) / slot) as u8 + 1;
        (star <= TastingRating::MAX).then_some(star)
    }

    /// Center of the star at 1-based index `star`
    fn star_center(star: u8, bounds: &Rectangle) -> Point {
        let slot = (bounds.width - PADDING * 2.0) / TastingRating::MAX as f32;
        Point::new(
            PADDING + slot * (star as f32 - 0.5),
            bounds.height / 2.0,
        )
    }
}

impl canvas::Program<Message> for RatingStars {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        let on_select = match self.on_select {
            Some(on_select) => on_select,
            None => return (event::Status::Ignored, None),
        };

        if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(pos) = cursor.position_in(bounds) {
                if let Some(star) = Self::star_at(pos, &bounds) {
                    // Clicking the active star clears the rating
                    let picked = if self.rating.map(|r| r.stars()) == Some(star) {
                        None
                    } else {
                        TastingRating::new(star).ok()
                    };
                    return (event::Status::Captured, Some(on_select(picked)));
                }
            }
        }

        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let filled = self.rating.map(|r| r.stars()).unwrap_or(0);
        let outer = (bounds.height / 2.0 - 2.0).max(3.0);

        for star in 1..=TastingRating::MAX {
            let center = Self::star_center(star, &bounds);
            let path = star_path(center, outer);

            if star <= filled {
                frame.fill(&path, colors::ACCENT_GOLD);
            } else {
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(colors::TEXT_MUTED),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.on_select.is_some() {
            if let Some(pos) = cursor.position_in(bounds) {
                if Self::star_at(pos, &bounds).is_some() {
                    return mouse::Interaction::Pointer;
                }
            }
        }
        mouse::Interaction::default()
    }
}

/// Five-pointed star outline centered at `center`
fn star_path(center: Point, outer: f32) -> Path {
    let inner = outer * 0.42;
    Path::new(|builder| {
        for i in 0..10 {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle =
                i as f32 * std::f32::consts::PI / 5.0 - std::f32::consts::FRAC_PI_2;
            let point = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            if i == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }
        builder.close();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: 128.0,
            height: 24.0,
        }
    }

    #[test]
    fn test_star_at_positions() {
        let b = bounds();
        // Slot width is (128 - 8) / 5 = 24
        assert_eq!(RatingStars::star_at(Point::new(5.0, 12.0), &b), Some(1));
        assert_eq!(RatingStars::star_at(Point::new(60.0, 12.0), &b), Some(3));
        assert_eq!(RatingStars::star_at(Point::new(123.0, 12.0), &b), Some(5));
        assert_eq!(RatingStars::star_at(Point::new(1.0, 12.0), &b), None);
        assert_eq!(RatingStars::star_at(Point::new(127.0, 12.0), &b), None);
    }

    #[test]
    fn test_star_centers_are_ordered() {
        let b = bounds();
        let centers: Vec<_> = (1..=5).map(|s| RatingStars::star_center(s, &b).x).collect();
        for pair in centers.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
