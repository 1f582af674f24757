//! Room Screen
//!
//! Admin room table. Rooms and their types are fetched together in one
//! cycle, filtered by type tabs, and mutated through the add/edit modals
//! and the inline delete confirmation. Every mutation refetches.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_fetch_cycle::create_fetch_cycle;

use crate::api::use_api;
use crate::models::{Room, RoomStatus, RoomType};
use crate::rows;

use super::{DeleteConfirmButton, Flash, FlashBar, Pager, RoomFormModal, TabBar};

#[component]
pub fn RoomScreen() -> impl IntoView {
    let api = use_api();

    let (room_data, set_room_data) = signal(Vec::<Room>::new());
    let (type_data, set_type_data) = signal(Vec::<RoomType>::new());
    let (active_tab, set_active_tab) = signal(rows::ALL_TAB.to_string());
    let (flash, set_flash) = signal(None::<Flash>);
    let (add_open, set_add_open) = signal(false);
    let (editing, set_editing) = signal(None::<Room>);
    let (page, set_page) = signal(0usize);
    let cycle = create_fetch_cycle();

    // Rooms and types land together or not at all; a reload keeps the old
    // rows on screen until the new cycle commits.
    let fetch_api = api.clone();
    Effect::new(move |_| {
        cycle.track();
        let api = fetch_api.clone();
        let ticket = cycle.begin();
        spawn_local(async move {
            match futures::try_join!(api.list_rooms(), api.list_types()) {
                Ok((rooms, types)) => {
                    let committed = ticket.commit(|| {
                        set_room_data.set(rooms);
                        set_type_data.set(types);
                    });
                    // A tab whose type was deleted falls back to "All"
                    if committed
                        && !rows::tab_exists(
                            &type_data.get_untracked(),
                            &active_tab.get_untracked(),
                        )
                    {
                        set_active_tab.set(rows::ALL_TAB.to_string());
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[KAMAR] gagal memuat data: {err}").into());
                    if ticket.fail() {
                        set_flash.set(Some(Flash::error(
                            err.user_message_or("Gagal memuat data."),
                        )));
                    }
                }
            }
        });
    });

    let tabs = Signal::derive(move || rows::type_tabs(&type_data.get()));
    let filtered = move || rows::filter_rooms(&room_data.get(), &active_tab.get());
    let total = Signal::derive(move || filtered().len());
    let paged = move || rows::page_slice(&filtered(), page.get(), rows::ROWS_PER_PAGE);

    let delete_api = api.clone();
    let delete_room = Callback::new(move |id: String| {
        let api = delete_api.clone();
        spawn_local(async move {
            match api.delete_room(&id).await {
                Ok(()) => {
                    set_flash.set(Some(Flash::ok("Kamar berhasil dihapus!")));
                    cycle.refresh();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[KAMAR] gagal menghapus: {err}").into());
                    set_flash.set(Some(Flash::error(
                        err.user_message_or("Gagal menghapus kamar."),
                    )));
                }
            }
        });
    });

    let row_api = api.clone();

    view! {
        <section class="screen">
            <h1 class="screen-title">"Data Kamar"</h1>
            <FlashBar flash=flash set_flash=set_flash />
            <Show when=move || cycle.phase().is_failed()>
                <button class="retry-btn" on:click=move |_| cycle.refresh()>
                    "Muat Ulang"
                </button>
            </Show>
            <TabBar
                tabs=tabs
                active=active_tab
                set_active=set_active_tab
                add_label="Tambah Kamar"
                on_add=Callback::new(move |_| set_add_open.set(true))
            />
            <Show when=move || cycle.is_loading() && room_data.with(|r| r.is_empty())>
                <div class="loading-note">"Loading data kamar..."</div>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Nama Kamar"</th>
                        <th>"Tipe Kamar"</th>
                        <th>"Status"</th>
                        <th>"Gambar"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=paged
                        key=|room| room.id.clone()
                        children=move |room| {
                            let edit_room = room.clone();
                            let delete_id = room.id.clone();
                            let images = room
                                .images
                                .iter()
                                .map(|image| (row_api.image_url(&image.url), room.name.clone()))
                                .collect::<Vec<_>>();
                            let type_name = room
                                .room_type
                                .as_ref()
                                .map(|t| t.name.clone())
                                .unwrap_or_else(|| "-".to_string());
                            let status_class = if room.status == RoomStatus::Available {
                                "status-badge available"
                            } else {
                                "status-badge unavailable"
                            };
                            view! {
                                <tr>
                                    <td>{room.name.clone()}</td>
                                    <td>{type_name}</td>
                                    <td>
                                        <span class=status_class>
                                            {rows::status_label(room.status)}
                                        </span>
                                    </td>
                                    <td class="image-cell">
                                        {images
                                            .into_iter()
                                            .map(|(src, alt)| view! {
                                                <img class="image-thumb" src=src alt=alt />
                                            })
                                            .collect_view()}
                                    </td>
                                    <td class="row-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| set_editing.set(Some(edit_room.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            prompt="Apakah Anda yakin ingin menghapus kamar ini?"
                                            on_confirm=Callback::new(move |_| delete_room.run(delete_id.clone()))
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Pager page=page set_page=set_page total=total />

            <Show when=move || add_open.get()>
                <RoomFormModal
                    types=type_data
                    on_close=Callback::new(move |_| set_add_open.set(false))
                    on_saved=Callback::new(move |_| {
                        set_add_open.set(false);
                        set_flash.set(Some(Flash::ok("Kamar berhasil ditambahkan!")));
                        cycle.refresh();
                    })
                />
            </Show>
            {move || editing.get().map(|room| view! {
                <RoomFormModal
                    room=room
                    types=type_data
                    on_close=Callback::new(move |_| set_editing.set(None))
                    on_saved=Callback::new(move |_| {
                        set_editing.set(None);
                        set_flash.set(Some(Flash::ok("Kamar berhasil diperbarui!")));
                        cycle.refresh();
                    })
                />
            })}
        </section>
    }
}
