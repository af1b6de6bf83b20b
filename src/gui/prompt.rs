use std::{
    collections::VecDeque,
    sync::{
        Mutex,
        MutexGuard,
        PoisonError,
    },
};

use async_trait::async_trait;
use eframe::egui;
use tokio::sync::oneshot;
use tracing::warn;

use crate::core::{
    Notification,
    UserPrompt,
};

/// A yes/no question waiting for the confirmation modal.
pub struct PendingConfirmation {
    pub message: String,
    responder: oneshot::Sender<bool>,
}

impl PendingConfirmation {
    pub fn answer(self, confirmed: bool) {
        let _ = self.responder.send(confirmed);
    }
}

#[derive(Default)]
struct PromptQueue {
    confirmations: VecDeque<PendingConfirmation>,
    notifications: VecDeque<Notification>,
}

/// Bridges background tasks to the modals drawn on the UI thread.
pub struct GuiPrompt {
    queue: Mutex<PromptQueue>,
    ctx: egui::Context,
}

impl GuiPrompt {
    pub fn new(ctx: egui::Context) -> Self {
        Self { queue: Mutex::new(PromptQueue::default()), ctx }
    }

    fn queue(&self) -> MutexGuard<'_, PromptQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn next_confirmation(&self) -> Option<PendingConfirmation> {
        self.queue().confirmations.pop_front()
    }

    pub fn next_notification(&self) -> Option<Notification> {
        self.queue().notifications.pop_front()
    }
}

#[async_trait]
impl UserPrompt for GuiPrompt {
    async fn confirm(&self, message: &str) -> bool {
        let (responder, receiver) = oneshot::channel();
        self.queue()
            .confirmations
            .push_back(PendingConfirmation { message: message.to_string(), responder });
        self.ctx.request_repaint();

        receiver.await.unwrap_or(false)
    }

    fn notify(&self, notification: Notification) {
        warn!(title = %notification.title, "{}", notification.message);
        self.queue().notifications.push_back(notification);
        self.ctx.request_repaint();
    }
}
