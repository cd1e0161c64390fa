// Library interface for nexus-cli, shared by the binary and integration tests.

pub mod app;
pub mod keys;
pub mod theme;

pub use keys::{action_for_key, PanelAction};
pub use theme::Theme;
