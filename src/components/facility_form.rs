//! Facility Form Modal
//!
//! Add form for facilities; a facility is just a name.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::use_api;

use super::Modal;

fn validate_facility(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Nama fasilitas harus diisi!");
    }
    Ok(())
}

#[component]
pub fn FacilityFormModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let (name, set_name) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let trimmed = name.get().trim().to_string();
        if let Err(message) = validate_facility(&trimmed) {
            set_form_error.set(Some(message.to_string()));
            return;
        }
        set_form_error.set(None);
        set_submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.add_facility(&trimmed).await {
                Ok(()) => on_saved.run(()),
                Err(err) => {
                    web_sys::console::error_1(&format!("[FASILITAS] gagal menyimpan: {err}").into());
                    set_form_error.set(Some(
                        err.user_message_or("Terjadi kesalahan saat menambahkan fasilitas."),
                    ));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Tambah Fasilitas" on_close=on_close>
            <form class="modal-form" on:submit=submit>
                {move || form_error.get().map(|message| view! {
                    <div class="form-error">{message}</div>
                })}

                <label class="form-label">"Nama Fasilitas"</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder="Masukkan nama fasilitas"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />

                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Menyimpan..." } else { "Tambah Fasilitas" }}
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
    fn facility_name_must_not_be_blank() {
        assert!(validate_facility("WiFi").is_ok());
        assert!(validate_facility("").is_err());
        assert!(validate_facility("   ").is_err());
    }
}
