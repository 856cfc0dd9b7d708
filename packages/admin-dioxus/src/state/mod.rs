//! Global state management

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Notice severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Transient notice (toast) queue. Silent calls simply never push here.
#[derive(Clone, Copy)]
pub struct NoticeState {
    notices: Signal<Vec<Notice>>,
    next_id: Signal<u64>,
}

const DISMISS_AFTER_MS: u32 = 5_000;

impl NoticeState {
    pub fn new() -> Self {
        Self {
            notices: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn list(&self) -> Vec<Notice> {
        self.notices.read().clone()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.with_mut(|notices| notices.retain(|n| n.id != id));
    }

    fn push(&mut self, kind: NoticeKind, message: String) {
        let id = *self.next_id.peek() + 1;
        self.next_id.set(id);
        self.notices
            .with_mut(|notices| notices.push(Notice { id, kind, message }));

        let mut notices = self.notices;
        spawn(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            notices.with_mut(|list| list.retain(|n| n.id != id));
        });
    }
}

/// Hook to access the notice queue.
pub fn use_notices() -> NoticeState {
    use_context::<NoticeState>()
}
