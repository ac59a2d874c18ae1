//! Application Context
//!
//! Shared signals provided via Leptos Context API: the transient notice bar
//! and the drag-and-drop signals of the card grid.

use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use deck_core::{CardId, DeckEvent};

/// How long a notice stays on screen
const NOTICE_MS: u32 = 4_000;

static NEXT_NOTICE_ID: AtomicU32 = AtomicU32::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Message currently shown in the notice bar - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Message currently shown in the notice bar - write
    set_notice: WriteSignal<Option<Notice>>,
    /// Card grid drag-and-drop state
    pub dnd: DndSignals<CardId>,
}

impl AppContext {
    pub fn new(notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>)) -> Self {
        Self {
            notice: notice.0,
            set_notice: notice.1,
            dnd: create_dnd_signals(),
        }
    }

    pub fn notify(&self, text: impl Into<String>) {
        self.show(NoticeKind::Info, text.into());
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    /// Surface the user-facing part of a deck event
    pub fn notify_event(&self, event: &DeckEvent) {
        if let Some(text) = event.notice() {
            match event {
                DeckEvent::PersistFailed(_) => self.notify_error(text),
                _ => self.notify(text),
            }
        }
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }

    fn show(&self, kind: NoticeKind, text: String) {
        let id = NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed);
        self.set_notice.set(Some(Notice { id, kind, text }));

        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            // Only clear the notice this call put up
            set_notice.update(|current| {
                if current.as_ref().map(|n| n.id) == Some(id) {
                    *current = None;
                }
            });
        });
    }
}
