//! Room Type Endpoints
//!
//! Bindings for the type resource. Types embed facility objects on read
//! but the write endpoints expect bare facility names.

use serde::Serialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Facility, RoomType};

// ========================
// Payloads
// ========================

/// Write payload shared by add and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypePayload {
    pub name: String,
    pub facility: Vec<String>,
    pub description: String,
    pub cost: u64,
}

impl TypePayload {
    /// Resolve the checked facility ids against the fetched facility list
    /// into the names the backend expects, keeping the list's order.
    pub fn from_selection(
        name: String,
        description: String,
        cost: u64,
        facilities: &[Facility],
        selected_ids: &[String],
    ) -> Self {
        let facility = facilities
            .iter()
            .filter(|facility| selected_ids.iter().any(|id| *id == facility.id))
            .map(|facility| facility.name.clone())
            .collect();
        Self {
            name,
            facility,
            description,
            cost,
        }
    }
}

// ========================
// Endpoints
// ========================

impl ApiClient {
    pub async fn list_types(&self) -> Result<Vec<RoomType>, ApiError> {
        self.get_list("type").await
    }

    pub async fn add_type(&self, payload: &TypePayload) -> Result<(), ApiError> {
        self.post_json("type/add", payload).await
    }

    pub async fn update_type(&self, id: &str, payload: &TypePayload) -> Result<(), ApiError> {
        self.put_json(&format!("type/update/{id}"), payload).await
    }

    pub async fn delete_type(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("type/delete/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facilities() -> Vec<Facility> {
        ["WiFi", "AC", "Lemari"]
            .iter()
            .enumerate()
            .map(|(i, name)| Facility {
                id: format!("f{i}"),
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn selection_maps_ids_to_names_in_list_order() {
        let payload = TypePayload::from_selection(
            "Deluxe".to_string(),
            "Kamar luas".to_string(),
            1_500_000,
            &facilities(),
            &["f2".to_string(), "f0".to_string()],
        );
        assert_eq!(payload.facility, vec!["WiFi", "Lemari"]);
    }

    #[test]
    fn unknown_ids_are_dropped() {
        let payload = TypePayload::from_selection(
            "Standard".to_string(),
            String::new(),
            900_000,
            &facilities(),
            &["f1".to_string(), "gone".to_string()],
        );
        assert_eq!(payload.facility, vec!["AC"]);
    }

    #[test]
    fn payload_serializes_names_not_ids() {
        let payload = TypePayload::from_selection(
            "Standard".to_string(),
            "Kamar hemat".to_string(),
            900_000,
            &facilities(),
            &["f0".to_string()],
        );
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Standard",
                "facility": ["WiFi"],
                "description": "Kamar hemat",
                "cost": 900_000
            })
        );
    }
}
