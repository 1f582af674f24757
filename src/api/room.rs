//! Room Endpoints
//!
//! Room listing, delete, and the multipart create/update flow. Image
//! bytes travel as repeated `files` parts next to the text fields.

use reqwest::multipart::{Form, Part};
use wasm_bindgen_futures::JsFuture;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Room, RoomStatus};

// ========================
// Upload Payloads
// ========================

/// One image read out of the browser file picker
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Read a picked `File` fully into memory
pub async fn read_upload(file: &web_sys::File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Gagal membaca berkas {}", file.name()))?;
    Ok(UploadFile {
        filename: file.name(),
        mime: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

/// Fields of the multipart room form
#[derive(Debug, Clone, PartialEq)]
pub struct RoomUpload {
    pub name: String,
    pub type_id: String,
    pub status: RoomStatus,
    pub files: Vec<UploadFile>,
}

fn room_form(upload: &RoomUpload) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("name", upload.name.clone())
        .text("type", upload.type_id.clone())
        .text("status", upload.status.as_str());
    for file in &upload.files {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.filename.clone());
        if !file.mime.is_empty() {
            part = part.mime_str(&file.mime).map_err(|_| {
                ApiError::Validation(format!("Jenis berkas tidak dikenali: {}", file.mime))
            })?;
        }
        form = form.part("files", part);
    }
    Ok(form)
}

// ========================
// Endpoints
// ========================

impl ApiClient {
    pub async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.get_list("room").await
    }

    pub async fn add_room(&self, upload: &RoomUpload) -> Result<(), ApiError> {
        self.post_multipart("room/add", room_form(upload)?).await
    }

    /// The backend keeps existing images when `files` is empty
    pub async fn update_room(&self, id: &str, upload: &RoomUpload) -> Result<(), ApiError> {
        self.put_multipart(&format!("room/update/{id}"), room_form(upload)?)
            .await
    }

    pub async fn delete_room(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("room/delete/{id}")).await
    }
}
