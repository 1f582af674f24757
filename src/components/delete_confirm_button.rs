//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation with confirm/cancel actions. The
//! destructive call only goes out after the explicit second click.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a "Hapus" button initially. When clicked, swaps to the prompt
/// with Ya/Batal buttons; declining restores the plain button.
#[component]
pub fn DeleteConfirmButton(
    /// Question shown before the destructive call
    #[prop(into)] prompt: String,
    /// Callback to execute when the user confirms deletion
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "Hapus"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "Ya"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "Batal"
                </button>
            </span>
        </Show>
    }
}
