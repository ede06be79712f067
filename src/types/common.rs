use serde::{Deserialize, Serialize};

/// Sport or activity a team or season plays
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub activity_id: i64,
    pub name: String,
}

/// Photo URLs in the sizes the service renders
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePhoto {
    pub full_url: Option<String>,
    pub small_url: Option<String>,
    pub thumb_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub name: String,
    pub hex_code: String,
}

/// A named set of colors, e.g. a team's home uniform
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColorSwatch {
    pub title: Option<String>,
    pub label: Option<String>,
    pub color_count: i64,
    #[serde(default)]
    pub colors: Vec<Color>,
}

/// Role of a team member (player, sub, coach, ...)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberType {
    pub name: String,
    pub title: Option<String>,
    pub title_short: Option<String>,
    pub title_long_singular: Option<String>,
    pub title_long_plural: Option<String>,
    pub title_short_singular: Option<String>,
    pub title_short_plural: Option<String>,
    pub show_team_members_on_roster: Option<bool>,
    pub show_team_members_on_att_list: Option<bool>,
    pub show_title_on_att_list: Option<bool>,
}

/// What the calling user may do with an object
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserMetaInfo {
    pub is_team_admin: bool,
    pub show_on_dashboard: bool,
    pub can_edit: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub league_id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub website_url: Option<String>,
}

/// A status code paired with its display text
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusDisplay {
    pub status: String,
    pub status_display: String,
}
