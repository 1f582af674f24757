//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Deserializer, Serialize};

/// Facility data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
}

/// Room type with its embedded facilities (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: u64,
    #[serde(default)]
    pub facility: Vec<Facility>,
}

/// Reduced room type reference embedded in rooms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTypeRef {
    pub id: String,
    pub name: String,
}

/// Room availability as transmitted on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Unavailable,
}

impl RoomStatus {
    /// Wire value, also used as the form field value
    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Unavailable => "unavailable",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(RoomStatus::Available),
            "unavailable" => Some(RoomStatus::Unavailable),
            _ => None,
        }
    }
}

/// Uploaded room image; `url` is relative to the backend's static base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomImage {
    pub url: String,
    #[serde(default)]
    pub filename: String,
}

/// Room data structure (matches backend)
///
/// Depending on the endpoint, the backend sends `type` either as a bare
/// object or as a singleton array. Both collapse to `Option<RoomTypeRef>`
/// at the parse boundary so only one shape exists past this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "type_ref_one_or_many")]
    pub room_type: Option<RoomTypeRef>,
    pub status: RoomStatus,
    #[serde(default)]
    pub images: Vec<RoomImage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeField {
    Many(Vec<RoomTypeRef>),
    One(RoomTypeRef),
}

fn type_ref_one_or_many<'de, D>(deserializer: D) -> Result<Option<RoomTypeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TypeField>::deserialize(deserializer)? {
        None => None,
        Some(TypeField::One(type_ref)) => Some(type_ref),
        Some(TypeField::Many(mut list)) => {
            if list.is_empty() {
                None
            } else {
                Some(list.remove(0))
            }
        }
    })
}

/// Complaint workflow state; wire values are already display-ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Selesai,
    Menunggu,
}

impl ComplaintStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::Selesai => "Selesai",
            ComplaintStatus::Menunggu => "Menunggu",
        }
    }

    pub fn is_done(self) -> bool {
        self == ComplaintStatus::Selesai
    }
}

/// Tenant complaint (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: ComplaintStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_type_arrives_as_object() {
        let room: Room = serde_json::from_str(
            r#"{
                "id": "r1",
                "name": "Kamar A1",
                "type": {"id": "t1", "name": "Standard"},
                "status": "available",
                "images": []
            }"#,
        )
        .unwrap();
        let type_ref = room.room_type.unwrap();
        assert_eq!(type_ref.id, "t1");
        assert_eq!(type_ref.name, "Standard");
    }

    #[test]
    fn room_type_arrives_as_singleton_array() {
        let room: Room = serde_json::from_str(
            r#"{
                "id": "r2",
                "name": "Kamar A2",
                "type": [{"id": "t2", "name": "Deluxe"}],
                "status": "unavailable"
            }"#,
        )
        .unwrap();
        assert_eq!(room.room_type.unwrap().name, "Deluxe");
        assert_eq!(room.status, RoomStatus::Unavailable);
    }

    #[test]
    fn room_type_absent_null_or_empty_is_none() {
        let absent: Room =
            serde_json::from_str(r#"{"id": "r3", "name": "A3", "status": "available"}"#).unwrap();
        let null: Room =
            serde_json::from_str(r#"{"id": "r4", "name": "A4", "type": null, "status": "available"}"#)
                .unwrap();
        let empty: Room =
            serde_json::from_str(r#"{"id": "r5", "name": "A5", "type": [], "status": "available"}"#)
                .unwrap();
        assert_eq!(absent.room_type, None);
        assert_eq!(null.room_type, None);
        assert_eq!(empty.room_type, None);
    }

    #[test]
    fn room_status_uses_lowercase_wire_values() {
        assert_eq!(
            serde_json::to_string(&RoomStatus::Available).unwrap(),
            r#""available""#
        );
        assert_eq!(RoomStatus::parse("unavailable"), Some(RoomStatus::Unavailable));
        assert_eq!(RoomStatus::parse("Available"), None);
    }

    #[test]
    fn room_type_fills_missing_fields_with_defaults() {
        let room_type: RoomType =
            serde_json::from_str(r#"{"id": "t1", "name": "Standard"}"#).unwrap();
        assert_eq!(room_type.description, "");
        assert_eq!(room_type.cost, 0);
        assert!(room_type.facility.is_empty());
    }

    #[test]
    fn complaint_reads_camel_case_timestamp() {
        let complaint: Complaint = serde_json::from_str(
            r#"{
                "id": "c1",
                "title": "AC rusak",
                "description": "AC kamar tidak dingin",
                "status": "Menunggu",
                "createdAt": "2024-05-01T10:30:00.000Z"
            }"#,
        )
        .unwrap();
        assert_eq!(complaint.created_at, "2024-05-01T10:30:00.000Z");
        assert!(!complaint.status.is_done());
    }
}
