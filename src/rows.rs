//! Row Derivation
//!
//! Pure helpers that turn fetched collections into what the tables show:
//! tab filtering, display formatting, pagination.

use crate::models::{Room, RoomStatus, RoomType};

/// Sentinel tab value showing every room regardless of type
pub const ALL_TAB: &str = "all";

/// Rows shown per table page
pub const ROWS_PER_PAGE: usize = 5;

/// One selectable filter tab
#[derive(Debug, Clone, PartialEq)]
pub struct TabOption {
    pub value: String,
    pub label: String,
}

/// Tab row: "All" first, then one tab per fetched room type
pub fn type_tabs(types: &[RoomType]) -> Vec<TabOption> {
    let mut tabs = vec![TabOption {
        value: ALL_TAB.to_string(),
        label: "All".to_string(),
    }];
    tabs.extend(types.iter().map(|room_type| TabOption {
        value: room_type.id.clone(),
        label: room_type.name.clone(),
    }));
    tabs
}

/// Whether `tab` still names a live filter after a refetch
pub fn tab_exists(types: &[RoomType], tab: &str) -> bool {
    tab == ALL_TAB || types.iter().any(|room_type| room_type.id == tab)
}

/// Rooms visible under the active tab. Rooms without a type only appear
/// under the all-tab.
pub fn filter_rooms(rooms: &[Room], tab: &str) -> Vec<Room> {
    if tab == ALL_TAB {
        return rooms.to_vec();
    }
    rooms
        .iter()
        .filter(|room| {
            room.room_type
                .as_ref()
                .is_some_and(|type_ref| type_ref.id == tab)
        })
        .cloned()
        .collect()
}

pub fn status_label(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "Tersedia",
        RoomStatus::Unavailable => "Tidak Tersedia",
    }
}

/// Facility column text: comma-joined names, or a fallback when empty
pub fn facility_names(room_type: &RoomType) -> String {
    if room_type.facility.is_empty() {
        return "Tidak ada fasilitas".to_string();
    }
    room_type
        .facility
        .iter()
        .map(|facility| facility.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Description column text with the fallback for empty descriptions
pub fn description_text(description: &str) -> &str {
    if description.is_empty() {
        "Tidak ada deskripsi"
    } else {
        description
    }
}

/// Rupiah with id-ID thousands grouping: 1500000 -> "Rp 1.500.000"
pub fn format_cost(cost: u64) -> String {
    let digits = cost.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

/// Date part of an ISO timestamp ("2024-05-01T10:30:00Z" -> "2024-05-01")
pub fn complaint_date(created_at: &str) -> &str {
    match created_at.split_once('T') {
        Some((date, _)) => date,
        None => created_at,
    }
}

pub fn page_count(total: usize, per_page: usize) -> usize {
    if total == 0 {
        1
    } else {
        total.div_ceil(per_page)
    }
}

/// Items on the given zero-based page
pub fn page_slice<T: Clone>(items: &[T], page: usize, per_page: usize) -> Vec<T> {
    items
        .iter()
        .skip(page * per_page)
        .take(per_page)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Facility, RoomTypeRef};

    fn room(id: &str, type_id: Option<&str>) -> Room {
        Room {
            id: id.to_string(),
            name: format!("Kamar {id}"),
            room_type: type_id.map(|tid| RoomTypeRef {
                id: tid.to_string(),
                name: format!("Tipe {tid}"),
            }),
            status: RoomStatus::Available,
            images: Vec::new(),
        }
    }

    fn room_type(id: &str, facilities: &[&str]) -> RoomType {
        RoomType {
            id: id.to_string(),
            name: format!("Tipe {id}"),
            description: String::new(),
            cost: 0,
            facility: facilities
                .iter()
                .enumerate()
                .map(|(i, name)| Facility {
                    id: format!("f{i}"),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn all_tab_keeps_every_room() {
        let rooms = vec![room("r1", Some("t1")), room("r2", None)];
        assert_eq!(filter_rooms(&rooms, ALL_TAB), rooms);
    }

    #[test]
    fn type_tab_keeps_only_matching_rooms() {
        let rooms = vec![
            room("r1", Some("t1")),
            room("r2", Some("t2")),
            room("r3", None),
        ];
        let filtered = filter_rooms(&rooms, "t1");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "r1");
    }

    #[test]
    fn filtering_is_idempotent() {
        let rooms = vec![room("r1", Some("t1")), room("r2", Some("t1"))];
        let once = filter_rooms(&rooms, "t1");
        let twice = filter_rooms(&once, "t1");
        assert_eq!(once, twice);
    }

    #[test]
    fn tabs_start_with_all_and_follow_fetch_order() {
        let tabs = type_tabs(&[room_type("t2", &[]), room_type("t1", &[])]);
        assert_eq!(tabs[0].value, ALL_TAB);
        assert_eq!(tabs[0].label, "All");
        assert_eq!(tabs[1].value, "t2");
        assert_eq!(tabs[2].value, "t1");
    }

    #[test]
    fn deleted_type_no_longer_exists_as_tab() {
        let types = vec![room_type("t1", &[])];
        assert!(tab_exists(&types, ALL_TAB));
        assert!(tab_exists(&types, "t1"));
        assert!(!tab_exists(&types, "t2"));
        assert!(tab_exists(&[], ALL_TAB));
    }

    #[test]
    fn facility_names_join_or_fall_back() {
        assert_eq!(
            facility_names(&room_type("t1", &["WiFi", "AC", "Kamar Mandi Dalam"])),
            "WiFi, AC, Kamar Mandi Dalam"
        );
        assert_eq!(facility_names(&room_type("t2", &[])), "Tidak ada fasilitas");
    }

    #[test]
    fn empty_description_falls_back() {
        assert_eq!(description_text("Kamar luas"), "Kamar luas");
        assert_eq!(description_text(""), "Tidak ada deskripsi");
    }

    #[test]
    fn cost_formats_with_dot_grouping() {
        assert_eq!(format_cost(0), "Rp 0");
        assert_eq!(format_cost(950), "Rp 950");
        assert_eq!(format_cost(1500), "Rp 1.500");
        assert_eq!(format_cost(1_000_000), "Rp 1.000.000");
        assert_eq!(format_cost(12_345_678), "Rp 12.345.678");
    }

    #[test]
    fn complaint_date_drops_time_part() {
        assert_eq!(complaint_date("2024-05-01T10:30:00.000Z"), "2024-05-01");
        assert_eq!(complaint_date("2024-05-01"), "2024-05-01");
        assert_eq!(complaint_date(""), "");
    }

    #[test]
    fn status_labels_are_indonesian() {
        assert_eq!(status_label(RoomStatus::Available), "Tersedia");
        assert_eq!(status_label(RoomStatus::Unavailable), "Tidak Tersedia");
    }

    #[test]
    fn pages_split_by_five() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(page_count(items.len(), ROWS_PER_PAGE), 3);
        assert_eq!(page_slice(&items, 0, ROWS_PER_PAGE), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 2, ROWS_PER_PAGE), vec![10, 11]);
        assert!(page_slice(&items, 3, ROWS_PER_PAGE).is_empty());
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        assert_eq!(page_count(0, ROWS_PER_PAGE), 1);
        assert_eq!(page_count(5, ROWS_PER_PAGE), 1);
        assert_eq!(page_count(6, ROWS_PER_PAGE), 2);
    }
}
