use tokio::sync::mpsc;

use crate::protocol::{ControllerMessage, PageMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub origin: Origin,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::User,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Assistant,
        }
    }

    pub fn is_user(&self) -> bool {
        self.origin == Origin::User
    }
}

/// Page-side state: the input box and an append-only transcript.
pub struct EmbeddedPage {
    transcript: Vec<ChatMessage>,
    input: String,
    outbox: mpsc::UnboundedSender<PageMessage>,
}

impl EmbeddedPage {
    pub fn new(outbox: mpsc::UnboundedSender<PageMessage>) -> Self {
        Self {
            transcript: Vec::new(),
            input: String::new(),
            outbox,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Echo the trimmed input into the transcript, hand it to the controller
    /// and clear the box. Blank input is a no-op. Returns whether anything was
    /// sent.
    pub fn submit(&mut self) -> bool {
        let text = self.input.trim();
        if text.is_empty() {
            return false;
        }
        let text = text.to_string();

        self.transcript.push(ChatMessage::user(text.clone()));
        if self.outbox.send(PageMessage::send(text)).is_err() {
            tracing::debug!("Controller gone; message not delivered");
        }
        self.input.clear();
        true
    }

    pub fn on_controller_message(&mut self, message: ControllerMessage) {
        match message {
            ControllerMessage::DisplayResponse { text } => {
                self.transcript.push(ChatMessage::assistant(text));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> (EmbeddedPage, mpsc::UnboundedReceiver<PageMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (EmbeddedPage::new(tx), rx)
    }

    #[test]
    fn submit_echoes_trimmed_text_and_clears_input() {
        let (mut page, mut rx) = page();
        page.set_input("  hello world \n");

        assert!(page.submit());
        assert_eq!(page.transcript(), &[ChatMessage::user("hello world")]);
        assert_eq!(page.input(), "");
        assert_eq!(rx.try_recv().unwrap(), PageMessage::send("hello world"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn blank_input_sends_nothing() {
        let (mut page, mut rx) = page();
        for blank in ["", "   ", "\t\n"] {
            page.set_input(blank);
            assert!(!page.submit());
        }
        assert!(page.transcript().is_empty());
        assert!(rx.try_recv().is_err());
        assert_eq!(page.input(), "\t\n");
    }

    #[test]
    fn display_response_appends_assistant_entry() {
        let (mut page, _rx) = page();
        page.set_input("hi");
        page.submit();
        page.on_controller_message(ControllerMessage::display("Hello"));

        let transcript = page.transcript();
        assert_eq!(transcript.len(), 2);
        assert!(transcript[0].is_user());
        assert_eq!(transcript[1], ChatMessage::assistant("Hello"));
    }

    #[test]
    fn typing_edits_the_input_box() {
        let (mut page, _rx) = page();
        for c in "hey!".chars() {
            page.insert_char(c);
        }
        page.backspace();
        assert_eq!(page.input(), "hey");
        page.backspace();
        page.backspace();
        page.backspace();
        page.backspace();
        assert_eq!(page.input(), "");
    }

    #[test]
    fn submit_still_echoes_when_controller_is_gone() {
        let (mut page, rx) = page();
        drop(rx);
        page.set_input("offline");
        assert!(page.submit());
        assert_eq!(page.transcript().len(), 1);
    }
}
