//! Complaint Form Modal
//!
//! Tenant complaint form: a title and a free-text description, posted to
//! the logged-in user's complaint list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::use_api;

use super::Modal;

fn validate_complaint(title: &str, description: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() || description.trim().is_empty() {
        return Err("Pastikan semua data terisi!");
    }
    Ok(())
}

#[component]
pub fn ComplaintFormModal(
    user_id: String,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let (title_text, set_title_text) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let title = title_text.get().trim().to_string();
        let body = description.get().trim().to_string();
        if let Err(message) = validate_complaint(&title, &body) {
            set_form_error.set(Some(message.to_string()));
            return;
        }
        set_form_error.set(None);
        set_submitting.set(true);
        let api = api.clone();
        let user = user_id.clone();
        spawn_local(async move {
            match api.add_complaint(&user, &title, &body).await {
                Ok(()) => on_saved.run(()),
                Err(err) => {
                    web_sys::console::error_1(&format!("[AJUAN] gagal mengirim: {err}").into());
                    set_form_error.set(Some(
                        err.user_message_or("Terjadi kesalahan saat mengirim ajuan."),
                    ));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Ajukan Keluhan" on_close=on_close>
            <form class="modal-form" on:submit=submit>
                {move || form_error.get().map(|message| view! {
                    <div class="form-error">{message}</div>
                })}

                <label class="form-label">"Perihal"</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder="Masukkan perihal"
                    prop:value=move || title_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title_text.set(input.value());
                    }
                />

                <label class="form-label">"Isi Ajuan"</label>
                <textarea
                    class="form-input"
                    placeholder="Masukkan isi ajuan"
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_description.set(input.value());
                    }
                ></textarea>

                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Mengirim..." } else { "Kirim" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_are_required() {
        assert!(validate_complaint("AC rusak", "AC kamar A1 tidak dingin").is_ok());
        assert!(validate_complaint("", "isi").is_err());
        assert!(validate_complaint("judul", "").is_err());
        assert!(validate_complaint("  ", "  ").is_err());
    }
}
