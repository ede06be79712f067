use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    #[serde(rename = "type")]
    pub surface_type: String,
    pub type_display: String,
    pub show_type: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lights {
    pub lights: String,
    pub lights_display: String,
    pub has_lights: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub part_of_town: Option<String>,
    pub display_multi_line: Option<String>,
    pub display_single_line: Option<String>,
    pub google_maps_url: Option<String>,
    pub google_maps_directions_url: Option<String>,
}

/// Venue an event is held at
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_id: i64,
    pub name: String,
    pub surface: Surface,
    pub lights: Lights,
    pub address: Address,
    pub visibility: String,
    pub visibility_display: String,
    pub comments: Option<String>,
}
