use std::time::Duration;

use dioxus::prelude::*;
use onboard_core::model::Notice;

/// How long a toast stays up unless dismissed.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq)]
pub struct NoticeEntry {
    pub id: u64,
    pub notice: Notice,
}

/// Toast stack shared by every screen.
#[derive(Clone, Copy)]
pub struct Notices {
    entries: Signal<Vec<NoticeEntry>>,
    next_id: Signal<u64>,
}

impl Notices {
    pub fn push(&self, notice: Notice) {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);
        tracing::debug!(id, level = ?notice.level, message = %notice.message, "notice");
        let mut entries = self.entries;
        entries.write().push(NoticeEntry { id, notice });
    }

    pub fn dismiss(&self, id: u64) {
        let mut entries = self.entries;
        entries.write().retain(|entry| entry.id != id);
    }

    #[must_use]
    pub fn entries(&self) -> Vec<NoticeEntry> {
        self.entries.read().clone()
    }
}

/// Create the stack; call once near the root.
pub fn use_notices_provider() -> Notices {
    use_context_provider(|| Notices {
        entries: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

#[must_use]
pub fn use_notices() -> Notices {
    use_context::<Notices>()
}

#[component]
pub fn NoticeStack() -> Element {
    let notices = use_notices();
    let entries = notices.entries();

    rsx! {
        div { class: "notice-stack", role: "status",
            for entry in entries {
                NoticeToast { key: "{entry.id}", id: entry.id, notice: entry.notice }
            }
        }
    }
}

#[component]
fn NoticeToast(id: u64, notice: Notice) -> Element {
    let notices = use_notices();
    use_future(move || async move {
        tokio::time::sleep(NOTICE_TTL).await;
        notices.dismiss(id);
    });

    rsx! {
        div { class: notice.level.css_class(),
            span { "{notice.message}" }
            button {
                class: "notice__close",
                aria_label: "Dismiss",
                onclick: move |_| notices.dismiss(id),
                "×"
            }
        }
    }
}
