//! Facility Screen
//!
//! Admin facility table: the single-resource fetch cycle, an add modal,
//! and inline delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_fetch_cycle::create_fetch_cycle;

use crate::api::use_api;
use crate::models::Facility;
use crate::rows;

use super::{DeleteConfirmButton, FacilityFormModal, Flash, FlashBar, Pager};

#[component]
pub fn FacilityScreen() -> impl IntoView {
    let api = use_api();

    let (facility_data, set_facility_data) = signal(Vec::<Facility>::new());
    let (flash, set_flash) = signal(None::<Flash>);
    let (add_open, set_add_open) = signal(false);
    let (page, set_page) = signal(0usize);
    let cycle = create_fetch_cycle();

    let fetch_api = api.clone();
    Effect::new(move |_| {
        cycle.track();
        let api = fetch_api.clone();
        let ticket = cycle.begin();
        spawn_local(async move {
            match api.list_facilities().await {
                Ok(facilities) => {
                    ticket.commit(|| set_facility_data.set(facilities));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FASILITAS] gagal memuat data: {err}").into());
                    if ticket.fail() {
                        set_flash.set(Some(Flash::error(
                            err.user_message_or("Gagal memuat data."),
                        )));
                    }
                }
            }
        });
    });

    let total = Signal::derive(move || facility_data.with(|f| f.len()));
    let paged = move || rows::page_slice(&facility_data.get(), page.get(), rows::ROWS_PER_PAGE);

    let delete_api = api.clone();
    let delete_facility = Callback::new(move |id: String| {
        let api = delete_api.clone();
        spawn_local(async move {
            match api.delete_facility(&id).await {
                Ok(()) => {
                    set_flash.set(Some(Flash::ok("Fasilitas berhasil dihapus!")));
                    cycle.refresh();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FASILITAS] gagal menghapus: {err}").into());
                    set_flash.set(Some(Flash::error(
                        err.user_message_or("Gagal menghapus fasilitas."),
                    )));
                }
            }
        });
    });

    view! {
        <section class="screen">
            <div class="screen-header">
                <h1 class="screen-title">"Fasilitas Kos"</h1>
                <button class="add-btn" on:click=move |_| set_add_open.set(true)>
                    "Tambah Fasilitas"
                </button>
            </div>
            <FlashBar flash=flash set_flash=set_flash />
            <Show when=move || cycle.phase().is_failed()>
                <button class="retry-btn" on:click=move |_| cycle.refresh()>
                    "Muat Ulang"
                </button>
            </Show>
            <Show when=move || cycle.is_loading() && facility_data.with(|f| f.is_empty())>
                <div class="loading-note">"Loading data..."</div>
            </Show>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Nama Fasilitas"</th>
                        <th>"Aksi"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=paged
                        key=|facility| facility.id.clone()
                        children=move |facility| {
                            let delete_id = facility.id.clone();
                            view! {
                                <tr>
                                    <td>{facility.name}</td>
                                    <td class="row-actions">
                                        <DeleteConfirmButton
                                            prompt="Apakah Anda yakin ingin menghapus fasilitas ini?"
                                            on_confirm=Callback::new(move |_| delete_facility.run(delete_id.clone()))
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
                <FacilityFormModal
                    on_close=Callback::new(move |_| set_add_open.set(false))
                    on_saved=Callback::new(move |_| {
                        set_add_open.set(false);
                        set_flash.set(Some(Flash::ok("Fasilitas berhasil ditambahkan!")));
                        cycle.refresh();
                    })
                />
            </Show>
        </section>
    }
}
