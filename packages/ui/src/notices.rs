use std::time::Duration;

use api::notice::NoticeQueue;
use api::NoticeLevel;
use dioxus::prelude::*;

use crate::browser::sleep;
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaXmark};
use crate::Icon;

const DISMISS_AFTER: Duration = Duration::from_secs(5);

pub fn use_notices() -> Signal<NoticeQueue> {
    use_context::<Signal<NoticeQueue>>()
}

/// Holds the notice queue and renders it as toasts over `children`.
#[component]
pub fn Toaster(children: Element) -> Element {
    let mut notices = use_context_provider(|| Signal::new(NoticeQueue::new()));
    // Every id below this already has its dismiss timer running.
    let mut armed = use_signal(|| 0u64);

    use_effect(move || {
        let queue = notices.read();
        let fresh = queue.pushed_since(*armed.peek());
        armed.set(queue.next_id());
        for id in fresh {
            spawn(async move {
                sleep(DISMISS_AFTER).await;
                notices.write().dismiss(id);
            });
        }
    });

    let entries = notices.read().entries().to_vec();

    rsx! {
        {children}

        div {
            class: "toaster",
            for (id, notice) in entries.into_iter() {
                div {
                    key: "{id}",
                    class: match notice.level {
                        NoticeLevel::Error => "toast toast--error",
                        NoticeLevel::Success => "toast toast--success",
                        NoticeLevel::Info => "toast",
                    },
                    span {
                        class: "toast-icon",
                        if notice.is_error() {
                            Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                        } else {
                            Icon { icon: FaCircleCheck, width: 16, height: 16 }
                        }
                    }
                    div {
                        class: "toast-body",
                        div { class: "toast-title", "{notice.title}" }
                        if !notice.description.is_empty() {
                            div { class: "toast-description", "{notice.description}" }
                        }
                    }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| {
                            notices.write().dismiss(id);
                        },
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
