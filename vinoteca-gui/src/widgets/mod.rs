//! Custom canvas widgets for vinoteca-gui

mod radar;
mod rating_stars;

pub use radar::RadarEditor;
pub use rating_stars::RatingStars;
