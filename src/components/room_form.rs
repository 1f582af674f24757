//! Room Form Modal
//!
//! Add/edit form for rooms. Both modes share the fields; edit mode keeps
//! the backend's existing images when no new file is picked. Submit sends
//! one multipart request with the text fields and every image's bytes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, use_api, RoomUpload};
use crate::models::{Room, RoomStatus, RoomType};

use super::Modal;

fn validate_room(upload: &RoomUpload, files_optional: bool) -> Result<(), &'static str> {
    let files_ok = files_optional || !upload.files.is_empty();
    if upload.name.trim().is_empty() || upload.type_id.is_empty() || !files_ok {
        return Err("Pastikan semua data terisi!");
    }
    Ok(())
}

/// Add/edit modal for one room. Pass `room` to edit, omit it to add.
#[component]
pub fn RoomFormModal(
    #[prop(optional)] room: Option<Room>,
    #[prop(into)] types: Signal<Vec<RoomType>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let editing_id = room.as_ref().map(|r| r.id.clone());
    let existing_images = room
        .as_ref()
        .map(|r| r.images.clone())
        .unwrap_or_default();
    let is_edit = editing_id.is_some();
    let title = if is_edit { "Edit Kamar" } else { "Tambah Kamar" };

    let (name, set_name) = signal(room.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let (type_id, set_type_id) = signal(
        room.as_ref()
            .and_then(|r| r.room_type.as_ref())
            .map(|t| t.id.clone())
            .unwrap_or_default(),
    );
    let (status, set_status) = signal(
        room.as_ref()
            .map(|r| r.status)
            .unwrap_or(RoomStatus::Available),
    );
    let (files, set_files) = signal(Vec::<api::UploadFile>::new());
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal(None::<String>);

    // Picked files are read into memory right away; submit only packs the
    // bytes it already has.
    let on_files_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let Some(list) = input.files() else { return };
        let picked: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        spawn_local(async move {
            let mut read = Vec::with_capacity(picked.len());
            for file in &picked {
                match api::read_upload(file).await {
                    Ok(upload) => read.push(upload),
                    Err(message) => {
                        web_sys::console::error_1(&format!("[KAMAR] {message}").into());
                        set_form_error.set(Some(message));
                        return;
                    }
                }
            }
            set_files.set(read);
        });
    };

    let submit_api = api.clone();
    let submit_id = editing_id.clone();
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let upload = RoomUpload {
            name: name.get().trim().to_string(),
            type_id: type_id.get(),
            status: status.get(),
            files: files.get(),
        };
        if let Err(message) = validate_room(&upload, is_edit) {
            set_form_error.set(Some(message.to_string()));
            return;
        }
        set_form_error.set(None);
        set_submitting.set(true);
        let api = submit_api.clone();
        let id = submit_id.clone();
        spawn_local(async move {
            let result = match &id {
                Some(id) => api.update_room(id, &upload).await,
                None => api.add_room(&upload).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(err) => {
                    web_sys::console::error_1(&format!("[KAMAR] gagal menyimpan: {err}").into());
                    let fallback = if id.is_some() {
                        "Terjadi kesalahan saat mengubah kamar."
                    } else {
                        "Terjadi kesalahan saat menambahkan kamar."
                    };
                    set_form_error.set(Some(err.user_message_or(fallback)));
                    set_submitting.set(false);
                }
            }
        });
    };

    let image_api = api.clone();

    view! {
        <Modal title=title on_close=on_close>
            <form class="modal-form" on:submit=submit>
                {move || form_error.get().map(|message| view! {
                    <div class="form-error">{message}</div>
                })}

                <label class="form-label">"Nama Kamar"</label>
                <input
                    type="text"
                    class="form-input"
                    placeholder="Masukkan nama kamar"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />

                <label class="form-label">"Tipe Kamar"</label>
                <select
                    class="form-input"
                    prop:value=move || type_id.get()
                    on:change=move |ev| set_type_id.set(event_target_value(&ev))
                >
                    <option value="">"Pilih tipe kamar"</option>
                    <For
                        each=move || types.get()
                        key=|room_type| room_type.id.clone()
                        children=move |room_type| {
                            view! {
                                <option value=room_type.id.clone()>{room_type.name}</option>
                            }
                        }
                    />
                </select>

                <label class="form-label">"Status Kamar"</label>
                <select
                    class="form-input"
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| {
                        if let Some(parsed) = RoomStatus::parse(&event_target_value(&ev)) {
                            set_status.set(parsed);
                        }
                    }
                >
                    <option value="available">"Tersedia"</option>
                    <option value="unavailable">"Tidak Tersedia"</option>
                </select>

                <label class="form-label">"Gambar Kamar"</label>
                {(!existing_images.is_empty()).then(|| view! {
                    <div class="current-images">
                        {existing_images.iter().map(|image| view! {
                            <img
                                class="image-thumb"
                                src=image_api.image_url(&image.url)
                                alt=image.filename.clone()
                            />
                        }).collect_view()}
                        <span class="form-hint">
                            "Biarkan kosong untuk mempertahankan gambar lama."
                        </span>
                    </div>
                })}
                <input
                    type="file"
                    class="form-input"
                    accept="image/*"
                    multiple
                    on:change=on_files_change
                />
                {move || {
                    let count = files.get().len();
                    (count > 0).then(|| view! {
                        <div class="form-hint">{format!("{count} berkas dipilih")}</div>
                    })
                }}

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
                                "Tambah Kamar"
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

    fn upload(name: &str, type_id: &str, file_count: usize) -> RoomUpload {
        RoomUpload {
            name: name.to_string(),
            type_id: type_id.to_string(),
            status: RoomStatus::Available,
            files: (0..file_count)
                .map(|i| api::UploadFile {
                    filename: format!("kamar-{i}.jpg"),
                    mime: "image/jpeg".to_string(),
                    bytes: vec![0xFF, 0xD8],
                })
                .collect(),
        }
    }

    #[test]
    fn add_requires_every_field_and_a_file() {
        assert!(validate_room(&upload("Kamar A1", "t1", 1), false).is_ok());
        assert!(validate_room(&upload("", "t1", 1), false).is_err());
        assert!(validate_room(&upload("   ", "t1", 1), false).is_err());
        assert!(validate_room(&upload("Kamar A1", "", 1), false).is_err());
        assert!(validate_room(&upload("Kamar A1", "t1", 0), false).is_err());
    }

    #[test]
    fn edit_keeps_old_images_when_no_file_is_picked() {
        assert!(validate_room(&upload("Kamar A1", "t1", 0), true).is_ok());
        assert!(validate_room(&upload("", "t1", 0), true).is_err());
    }
}
