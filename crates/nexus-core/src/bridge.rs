//! In-process bridge between the embedded page and the panel controller:
//! two ordered, one-way channels, one per direction.

use tokio::sync::mpsc;

use crate::host::PanelHandle;
use crate::protocol::{ControllerMessage, PageMessage};

/// Controller-side panel handle backed by the page's inbound channel.
#[derive(Debug, Clone)]
pub struct ChannelPanel {
    tx: mpsc::UnboundedSender<ControllerMessage>,
}

impl PanelHandle for ChannelPanel {
    fn post_message(&self, message: ControllerMessage) -> bool {
        self.tx.send(message).is_ok()
    }
}

/// What the controller holds: the panel handle and the page's outbound queue.
pub struct ControllerEndpoint {
    pub panel: ChannelPanel,
    pub inbox: mpsc::UnboundedReceiver<PageMessage>,
}

/// What the page holds: its outbound sender and the controller's replies.
pub struct PageEndpoint {
    pub outbox: mpsc::UnboundedSender<PageMessage>,
    pub inbox: mpsc::UnboundedReceiver<ControllerMessage>,
}

/// Create a fresh panel. Dropping the [`PageEndpoint`] tears the panel down:
/// the controller's run loop ends and late responses are discarded.
pub fn open_panel() -> (ControllerEndpoint, PageEndpoint) {
    let (page_tx, page_rx) = mpsc::unbounded_channel();
    let (ctrl_tx, ctrl_rx) = mpsc::unbounded_channel();

    (
        ControllerEndpoint {
            panel: ChannelPanel { tx: ctrl_tx },
            inbox: page_rx,
        },
        PageEndpoint {
            outbox: page_tx,
            inbox: ctrl_rx,
        },
    )
}
