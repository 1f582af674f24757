//! Facility Endpoints
//!
//! Bindings for the facility resource.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Facility;

#[derive(Serialize)]
struct NewFacility<'a> {
    name: &'a str,
}

impl ApiClient {
    pub async fn list_facilities(&self) -> Result<Vec<Facility>, ApiError> {
        self.get_list("facility").await
    }

    pub async fn add_facility(&self, name: &str) -> Result<(), ApiError> {
        self.post_json("facility/add", &NewFacility { name }).await
    }

    pub async fn delete_facility(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("facility/delete/{id}")).await
    }
}
