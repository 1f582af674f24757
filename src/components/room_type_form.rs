//! Room Type Form Modal
//!
//! Add/edit form for room types. Facilities are picked by checkbox from
//! the fetched facility list; on submit the checked ids are resolved to
//! the names the backend expects.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{use_api, TypePayload};
use crate::models::{Facility, RoomType};

use super::Modal;

fn parse_cost(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

// Cost zero counts as missing, so a type can never be saved as free
fn validate_type(name: &str, description: &str, cost: Option<u64>) -> Result<(), &'static str> {
    let cost_ok = cost.is_some_and(|cost| cost > 0);
    if name.trim().is_empty() || description.trim().is_empty() || !cost_ok {
        return Err("Harap lengkapi semua data tipe kamar.");
    }
    Ok(())
}

/// Add/edit modal for one room type. Pass `room_type` to edit.
#[component]
pub fn RoomTypeFormModal(
    #[prop(optional)] room_type: Option<RoomType>,
    #[prop(into)] facilities: Signal<Vec<Facility>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let editing_id = room_type.as_ref().map(|t| t.id.clone());
    let is_edit = editing_id.is_some();
    let title = if is_edit { "Edit Tipe Kamar" } else { "Tambah Tipe Kamar" };

    let (name, set_name) = signal(
        room_type
            .as_ref()
            .map(|t| t.name.clone())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(
        room_type
            .as_ref()
            .map(|t| t.description.clone())
            .unwrap_or_default(),
    );
    let (cost_text, set_cost_text) = signal(
        room_type
            .as_ref()
            .map(|t| t.cost.to_string())
            .unwrap_or_default(),
    );
    // Checked state lives as ids; the embedded facility objects of an
    // edited type seed it.
    let (selected, set_selected) = signal(
        room_type
            .as_ref()
            .map(|t| t.facility.iter().map(|f| f.id.clone()).collect::<Vec<_>>())
            .unwrap_or_default(),
    );
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal(None::<String>);

    let submit_api = api.clone();
    let submit_id = editing_id.clone();
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let trimmed_name = name.get().trim().to_string();
        let trimmed_description = description.get().trim().to_string();
        let cost = parse_cost(&cost_text.get());
        if let Err(message) = validate_type(&trimmed_name, &trimmed_description, cost) {
            set_form_error.set(Some(message.to_string()));
            return;
        }
        let payload = TypePayload::from_selection(
            trimmed_name,
            trimmed_description,
            cost.unwrap_or_default(),
            &facilities.get(),
            &selected.get(),
        );
        set_form_error.set(None);
        set_submitting.set(true);
        let api = submit_api.clone();
        let id = submit_id.clone();
        spawn_local(async move {
            let result = match &id {
                Some(id) => api.update_type(id, &payload).await,
                None => api.add_type(&payload).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(err) => {
                    web_sys::console::error_1(&format!("[TIPE] gagal menyimpan: {err}").into());
                    let fallback = if id.is_some() {
                        "Terjadi kesalahan saat mengubah tipe kamar."
                    } else {
                        "Terjadi kesalahan saat menambahkan tipe kamar."
                    };
                    set_form_error.set(Some(err.user_message_or(fallback)));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="modal-form" on:submit=submit>
                {move || form_error.get().map(|message| view! {
                    <div class="form-error">{message}</div>
                })}

                <label class="form-label">"Nama Tipe Kamar"</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder="Masukkan nama tipe kamar"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />

                <label class="form-label">"Harga"</label>
                <input
                    type="number"
                    class="form-input"
                    placeholder="Masukkan harga sewa"
                    min="1"
                    prop:value=move || cost_text.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_cost_text.set(input.value());
                    }
                />

                <label class="form-label">"Fasilitas"</label>
                <div class="facility-picker">
                    <Show when=move || facilities.with(|f| f.is_empty())>
                        <span class="form-hint">"Belum ada fasilitas. Tambahkan dulu di Data Fasilitas."</span>
                    </Show>
                    <For
                        each=move || facilities.get()
                        key=|facility| facility.id.clone()
                        children=move |facility| {
                            let check_id = facility.id.clone();
                            let toggle_id = facility.id.clone();
                            view! {
                                <label class="facility-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.with(|ids| ids.contains(&check_id))
                                        on:change=move |_| set_selected.update(|ids| {
                                            if let Some(pos) = ids.iter().position(|id| *id == toggle_id) {
                                                ids.remove(pos);
                                            } else {
                                                ids.push(toggle_id.clone());
                                            }
                                        })
                                    />
                                    {facility.name}
                                </label>
                            }
                        }
                    />
                </div>

                <label class="form-label">"Deskripsi"</label>
                <textarea
                    class="form-input"
                    placeholder="Deskripsi singkat tipe kamar"
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
                        {move || {
                            if submitting.get() {
                                "Menyimpan..."
                            } else if is_edit {
                                "Simpan"
                            } else {
                                "Tambah Tipe Kamar"
                            }
                        }}
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
    fn cost_must_be_a_positive_number() {
        assert!(validate_type("Deluxe", "Kamar luas", parse_cost("1500000")).is_ok());
        assert!(validate_type("Deluxe", "Kamar luas", parse_cost("0")).is_err());
        assert!(validate_type("Deluxe", "Kamar luas", parse_cost("-5")).is_err());
        assert!(validate_type("Deluxe", "Kamar luas", parse_cost("abc")).is_err());
        assert!(validate_type("Deluxe", "Kamar luas", parse_cost("")).is_err());
    }

    #[test]
    fn name_and_description_are_required() {
        assert!(validate_type("", "Kamar luas", parse_cost("100")).is_err());
        assert!(validate_type("   ", "Kamar luas", parse_cost("100")).is_err());
        assert!(validate_type("Deluxe", "", parse_cost("100")).is_err());
    }

    #[test]
    fn cost_text_parses_with_surrounding_whitespace() {
        assert_eq!(parse_cost(" 900000 "), Some(900_000));
        assert_eq!(parse_cost("1.000"), None);
    }
}
