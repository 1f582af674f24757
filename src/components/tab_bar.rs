//! Tab Bar Component
//!
//! Type filter tabs above the room table, with the add button on the
//! right. Tabs are derived from the fetched types, the all-tab first.

use leptos::prelude::*;

use crate::rows::TabOption;

#[component]
pub fn TabBar(
    #[prop(into)] tabs: Signal<Vec<TabOption>>,
    active: ReadSignal<String>,
    set_active: WriteSignal<String>,
    add_label: &'static str,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="tab-bar">
            <div class="tab-group">
                <For
                    each=move || tabs.get()
                    key=|tab| tab.value.clone()
                    children=move |tab| {
                        let value = tab.value.clone();
                        let click_value = tab.value.clone();
                        let is_active = move || active.get() == value;
                        view! {
                            <button
                                class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                                on:click=move |_| set_active.set(click_value.clone())
                            >
                                {tab.label}
                            </button>
                        }
                    }
                />
            </div>
            <button class="add-btn" on:click=move |_| on_add.run(())>
                {add_label}
            </button>
        </div>
    }
}
