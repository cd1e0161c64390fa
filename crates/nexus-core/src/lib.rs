pub mod bridge;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod host;
pub mod llm;
pub mod page;
pub mod protocol;

// Re-export key types
pub use bridge::{open_panel, ChannelPanel, ControllerEndpoint, PageEndpoint};
pub use config::{Settings, SettingsCredentials};
pub use controller::PanelController;
pub use error::{ErrorKind, NexusError};
pub use host::{CredentialSource, Notification, Notifier, PanelHandle};
pub use llm::{CompletionClient, GeminiClient};
pub use page::{ChatMessage, EmbeddedPage, Origin};
pub use protocol::{ControllerMessage, PageMessage};
