//! Complaint Endpoints
//!
//! Complaints are scoped per tenant; the list and create paths carry the
//! logged-in user's id.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::Complaint;

#[derive(Serialize)]
struct NewComplaint<'a> {
    title: &'a str,
    description: &'a str,
}

impl ApiClient {
    pub async fn list_complaints(&self, user_id: &str) -> Result<Vec<Complaint>, ApiError> {
        self.get_list(&format!("complaint/{user_id}")).await
    }

    pub async fn add_complaint(
        &self,
        user_id: &str,
        title: &str,
        description: &str,
    ) -> Result<(), ApiError> {
        self.post_json(
            &format!("complaint/add/{user_id}"),
            &NewComplaint { title, description },
        )
        .await
    }
}
