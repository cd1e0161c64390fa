use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{NexusError, Result};
use crate::host::{CredentialSource, Notification, Notifier, PanelHandle};
use crate::llm::CompletionClient;
use crate::protocol::{ControllerMessage, PageMessage};

/// Host-side half of the panel. Turns page submissions into completion
/// requests and posts the replies back.
///
/// Cloning is cheap: every clone shares the same panel handle and
/// collaborators, which is how each request task gets its own copy.
#[derive(Clone)]
pub struct PanelController {
    panel: Arc<dyn PanelHandle>,
    client: Arc<dyn CompletionClient>,
    credentials: Arc<dyn CredentialSource>,
    notifier: Arc<dyn Notifier>,
}

impl PanelController {
    pub fn new(
        panel: impl PanelHandle + 'static,
        client: impl CompletionClient + 'static,
        credentials: impl CredentialSource + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        Self {
            panel: Arc::new(panel),
            client: Arc::new(client),
            credentials: Arc::new(credentials),
            notifier: Arc::new(notifier),
        }
    }

    /// Drain page messages until the page goes away. Each submission runs in
    /// its own task, so a slow request never blocks the next one.
    pub async fn run(self, mut inbox: mpsc::UnboundedReceiver<PageMessage>) {
        while let Some(message) = inbox.recv().await {
            self.on_page_message(message);
        }
        tracing::debug!("Page closed, controller stopping");
    }

    /// Sole entry point from the page.
    pub fn on_page_message(&self, message: PageMessage) -> JoinHandle<()> {
        match message {
            PageMessage::SendMessage { text } => {
                let controller = self.clone();
                tokio::spawn(async move { controller.request_completion(text).await })
            }
        }
    }

    /// Run one completion request to the end. Failures become a single
    /// notification; nothing is posted to the page unless a reply was
    /// extracted.
    pub async fn request_completion(&self, user_text: String) {
        match self.fetch_reply(&user_text).await {
            Ok(reply) => {
                if !self.panel.post_message(ControllerMessage::display(reply)) {
                    tracing::debug!("Panel torn down before the reply arrived");
                }
            }
            Err(e) => self.report(&e),
        }
    }

    async fn fetch_reply(&self, user_text: &str) -> Result<String> {
        let api_key = self
            .credentials
            .api_key()
            .ok_or(NexusError::MissingCredential)?;
        self.client.complete(&api_key, user_text).await
    }

    fn report(&self, err: &NexusError) {
        tracing::warn!(kind = ?err.kind(), "Gemini API error: {err}");
        self.notifier.notify(Notification::from(err));
    }
}
