//! Flash Bar Component
//!
//! Transient outcome notices above the tables. Success notices dismiss
//! themselves after a few seconds; errors stay until replaced.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One user-visible notice
#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub text: String,
    pub is_error: bool,
}

impl Flash {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

const FLASH_MS: u32 = 3000;

#[component]
pub fn FlashBar(
    flash: ReadSignal<Option<Flash>>,
    set_flash: WriteSignal<Option<Flash>>,
) -> impl IntoView {
    Effect::new(move |_| {
        let Some(current) = flash.get() else { return };
        if current.is_error {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(FLASH_MS).await;
            // Only clear if no newer notice replaced this one meanwhile
            set_flash.update(|slot| {
                if slot.as_ref() == Some(&current) {
                    *slot = None;
                }
            });
        });
    });

    view! {
        {move || flash.get().map(|notice| {
            let class = if notice.is_error { "flash-bar error" } else { "flash-bar" };
            view! { <div class=class>{notice.text}</div> }
        })}
    }
}
