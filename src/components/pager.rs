//! Pager Component
//!
//! Page switcher under the data tables, five rows per page.

use leptos::prelude::*;

use crate::rows;

#[component]
pub fn Pager(
    page: ReadSignal<usize>,
    set_page: WriteSignal<usize>,
    #[prop(into)] total: Signal<usize>,
) -> impl IntoView {
    let pages = move || rows::page_count(total.get(), rows::ROWS_PER_PAGE);

    // Clamp back when a refetch or filter change shrinks the collection
    Effect::new(move |_| {
        let last = pages().saturating_sub(1);
        if page.get() > last {
            set_page.set(last);
        }
    });

    view! {
        <div class="pager">
            <button
                class="pager-btn"
                disabled=move || page.get() == 0
                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
            >
                "‹"
            </button>
            <span class="pager-label">
                {move || format!("Halaman {} dari {}", page.get() + 1, pages())}
            </span>
            <button
                class="pager-btn"
                disabled=move || page.get() + 1 >= pages()
                on:click=move |_| set_page.update(|p| *p += 1)
            >
                "›"
            </button>
        </div>
    }
}
