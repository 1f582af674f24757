//! Room Type Screen
//!
//! Admin room type table. Types and the facility catalog are fetched in
//! one cycle; the facility catalog feeds the form's checkbox picker.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_fetch_cycle::create_fetch_cycle;

use crate::api::use_api;
use crate::models::{Facility, RoomType};
use crate::rows;

use super::{DeleteConfirmButton, Flash, FlashBar, Pager, RoomTypeFormModal};

#[component]
pub fn RoomTypeScreen() -> impl IntoView {
    let api = use_api();

    let (type_data, set_type_data) = signal(Vec::<RoomType>::new());
    let (facility_data, set_facility_data) = signal(Vec::<Facility>::new());
    let (flash, set_flash) = signal(None::<Flash>);
    let (add_open, set_add_open) = signal(false);
    let (editing, set_editing) = signal(None::<RoomType>);
    let (page, set_page) = signal(0usize);
    let cycle = create_fetch_cycle();

    let fetch_api = api.clone();
    Effect::new(move |_| {
        cycle.track();
        let api = fetch_api.clone();
        let ticket = cycle.begin();
        spawn_local(async move {
            match futures::try_join!(api.list_types(), api.list_facilities()) {
                Ok((types, facilities)) => {
                    ticket.commit(|| {
                        set_type_data.set(types);
                        set_facility_data.set(facilities);
                    });
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[TIPE] gagal memuat data: {err}").into());
                    if ticket.fail() {
                        set_flash.set(Some(Flash::error(
                            err.user_message_or("Gagal memuat data."),
                        )));
                    }
                }
            }
        });
    });

    let total = Signal::derive(move || type_data.with(|t| t.len()));
    let paged = move || rows::page_slice(&type_data.get(), page.get(), rows::ROWS_PER_PAGE);

    let delete_api = api.clone();
    let delete_type = Callback::new(move |id: String| {
        let api = delete_api.clone();
        spawn_local(async move {
            match api.delete_type(&id).await {
                Ok(()) => {
                    set_flash.set(Some(Flash::ok("Tipe kamar berhasil dihapus!")));
                    cycle.refresh();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[TIPE] gagal menghapus: {err}").into());
                    set_flash.set(Some(Flash::error(
                        err.user_message_or("Gagal menghapus tipe kamar."),
                    )));
                }
            }
        });
    });

    view! {
        <section class="screen">
            <div class="screen-header">
                <h1 class="screen-title">"Data Tipe Kamar"</h1>
                <button class="add-btn" on:click=move |_| set_add_open.set(true)>
                    "Tambah Tipe Kamar"
                </button>
            </div>
            <FlashBar flash=flash set_flash=set_flash />
            <Show when=move || cycle.phase().is_failed()>
                <button class="retry-btn" on:click=move |_| cycle.refresh()>
                    "Muat Ulang"
                </button>
            </Show>
            <Show when=move || cycle.is_loading() && type_data.with(|t| t.is_empty())>
                <div class="loading-note">"Loading..."</div>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Nama Tipe Kamar"</th>
                        <th>"Fasilitas"</th>
                        <th>"Deskripsi"</th>
                        <th>"Harga"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=paged
                        key=|room_type| room_type.id.clone()
                        children=move |room_type| {
                            let edit_type = room_type.clone();
                            let delete_id = room_type.id.clone();
                            let facility_text = rows::facility_names(&room_type);
                            let description_text =
                                rows::description_text(&room_type.description).to_string();
                            view! {
                                <tr>
                                    <td>{room_type.name.clone()}</td>
                                    <td>{facility_text}</td>
                                    <td>{description_text}</td>
                                    <td>{rows::format_cost(room_type.cost)}</td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| set_editing.set(Some(edit_type.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            prompt="Apakah Anda yakin ingin menghapus tipe kamar ini?"
                                            on_confirm=Callback::new(move |_| delete_type.run(delete_id.clone()))
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                    {move || (!cycle.is_loading() && type_data.with(|t| t.is_empty())).then(|| view! {
                        <tr>
                            <td colspan="5" class="empty-note">"Data tidak tersedia atau gagal dimuat."</td>
                        </tr>
                    })}
                </tbody>
            </table>
            <Pager page=page set_page=set_page total=total />

            <Show when=move || add_open.get()>
                <RoomTypeFormModal
                    facilities=facility_data
                    on_close=Callback::new(move |_| set_add_open.set(false))
                    on_saved=Callback::new(move |_| {
                        set_add_open.set(false);
                        set_flash.set(Some(Flash::ok("Tipe kamar berhasil ditambahkan!")));
                        cycle.refresh();
                    })
                />
            </Show>
            {move || editing.get().map(|room_type| view! {
                <RoomTypeFormModal
                    room_type=room_type
                    facilities=facility_data
                    on_close=Callback::new(move |_| set_editing.set(None))
                    on_saved=Callback::new(move |_| {
                        set_editing.set(None);
                        set_flash.set(Some(Flash::ok("Tipe kamar berhasil diperbarui!")));
                        cycle.refresh();
                    })
                />
            })}
        </section>
    }
}
