//! Complaint Screen
//!
//! Tenant complaint table scoped to the logged-in user, with the submit
//! modal on the same screen. Without a session the screen only shows the
//! login notice and never fetches.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_fetch_cycle::create_fetch_cycle;

use crate::api::use_api;
use crate::models::Complaint;
use crate::rows;
use crate::session;

use super::{ComplaintFormModal, Flash, FlashBar};

#[component]
pub fn ComplaintScreen() -> impl IntoView {
    let Some(user_id) = session::user_id() else {
        web_sys::console::error_1(&"[AJUAN] token tidak ditemukan".into());
        return view! {
            <section class="screen">
                <div class="auth-note">"Silakan login terlebih dahulu."</div>
            </section>
        }
        .into_any();
    };

    let api = use_api();

    let (complaint_data, set_complaint_data) = signal(Vec::<Complaint>::new());
    let (flash, set_flash) = signal(None::<Flash>);
    let (add_open, set_add_open) = signal(false);
    let cycle = create_fetch_cycle();

    let fetch_api = api.clone();
    let fetch_user = user_id.clone();
    Effect::new(move |_| {
        cycle.track();
        let api = fetch_api.clone();
        let user = fetch_user.clone();
        let ticket = cycle.begin();
        spawn_local(async move {
            match api.list_complaints(&user).await {
                Ok(complaints) => {
                    ticket.commit(|| set_complaint_data.set(complaints));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[AJUAN] gagal memuat data: {err}").into());
                    if ticket.fail() {
                        set_flash.set(Some(Flash::error(
                            err.user_message_or("Gagal mengambil data. Silakan coba lagi."),
                        )));
                    }
                }
            }
        });
    });

    let modal_user = user_id.clone();

    view! {
        <section class="screen">
            <div class="screen-header">
                <h1 class="screen-title">"List Ajuan"</h1>
                <button class="add-btn" on:click=move |_| set_add_open.set(true)>
                    "Tambahkan Keluhan"
                </button>
            </div>
            <FlashBar flash=flash set_flash=set_flash />
            <Show when=move || cycle.phase().is_failed()>
                <button class="retry-btn" on:click=move |_| cycle.refresh()>
                    "Muat Ulang"
                </button>
            </Show>
            {move || {
                if cycle.is_loading() {
                    view! { <div class="loading-note">"Loading data..."</div> }.into_any()
                } else if complaint_data.with(|c| c.is_empty()) {
                    view! {
                        <div class="placeholder">
                            <h2 class="placeholder-title">"Belum ada ajuan"</h2>
                            <p class="placeholder-text">"Silakan tambahkan ajuan baru."</p>
                            <button class="add-btn" on:click=move |_| set_add_open.set(true)>
                                "Tambah Ajuan"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Tanggal"</th>
                                    <th>"Perihal"</th>
                                    <th>"Isi Ajuan"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || complaint_data.get()
                                    key=|complaint| complaint.id.clone()
                                    children=move |complaint| {
                                        let badge_class = if complaint.status.is_done() {
                                            "status-badge done"
                                        } else {
                                            "status-badge waiting"
                                        };
                                        let date = rows::complaint_date(&complaint.created_at).to_string();
                                        view! {
                                            <tr>
                                                <td>{date}</td>
                                                <td>{complaint.title}</td>
                                                <td>{complaint.description}</td>
                                                <td>
                                                    <span class=badge_class>{complaint.status.as_str()}</span>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}

            <Show when=move || add_open.get()>
                <ComplaintFormModal
                    user_id=modal_user.clone()
                    on_close=Callback::new(move |_| set_add_open.set(false))
                    on_saved=Callback::new(move |_| {
                        set_add_open.set(false);
                        set_flash.set(Some(Flash::ok("Ajuan berhasil dikirim!")));
                        cycle.refresh();
                    })
                />
            </Show>
        </section>
    }
    .into_any()
}
