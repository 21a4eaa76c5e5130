//! Application views
//!
//! Each view corresponds to a screen in the application.

pub mod cellar;
pub mod editor;
pub mod settings;

pub use cellar::view_cellar;
pub use editor::view_editor;
pub use settings::view_settings;
