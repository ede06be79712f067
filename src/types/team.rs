use crate::core::hydrate::{absent, Resource};
use crate::types::common::{Activity, ColorSwatch, ProfilePhoto, TeamMemberType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Team type (adult, youth, ...)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamType {
    pub name: String,
    pub title: String,
}

/// Manager or captain reference
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email_address: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamColorSwatches {
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub home: Option<ColorSwatch>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub away: Option<ColorSwatch>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub alternate: Option<ColorSwatch>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MiscOptions {
    pub show_record: bool,
    pub attendance_list_separate_genders: Option<bool>,
    pub attendance_list_male_label: Option<String>,
    pub attendance_list_female_label: Option<String>,
    pub attendance_list_other_gender_label: Option<String>,
    pub hide_genders: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamOptions {
    pub misc: MiscOptions,
}

/// The calling user's profile on this team
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamUserProfile {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub display_name: String,
    pub email_address: Option<String>,
    pub gender: Option<String>,
    pub gender_display: Option<String>,
    pub shirt_number: Option<String>,
    pub shirt_size: Option<String>,
    pub pants_size: Option<String>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub profile_photo: Option<ProfilePhoto>,
    #[serde(default)]
    pub options: Vec<Value>,
    pub is_team_admin: bool,
    #[serde(rename = "birthDate_month")]
    pub birth_date_month: Option<u32>,
    #[serde(rename = "birthDate_day")]
    pub birth_date_day: Option<u32>,
    #[serde(rename = "birthDate_year")]
    pub birth_date_year: Option<i32>,
}

/// The calling user's membership of this team
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMeta {
    pub team_member_type: TeamMemberType,
    pub is_hidden_by_user: bool,
    pub show_on_dashboard: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: i64,
    pub name: String,
    pub short_name: Option<String>,
    #[serde(rename = "type")]
    pub team_type: TeamType,
    pub activity: Activity,
    pub timezone_id: String,
    pub city: Option<String>,
    pub state_province: Option<String>,
    pub state_province_abbrev: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub location_display_short: Option<String>,
    pub location_display_long: Option<String>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub team_photo: Option<ProfilePhoto>,
    /// `None` when no color swatch is defined
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub color_swatches: Option<TeamColorSwatches>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub options: Option<TeamOptions>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub user_profile_info: Option<TeamUserProfile>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub meta: Option<TeamMeta>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub manager_user: Option<TeamMember>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub captain_user: Option<TeamMember>,
    pub date_created_utc: Option<String>,
    pub date_last_updated_utc: Option<String>,
}

impl Resource for Team {
    const PRESENCE_FIELD: &'static str = "teamId";
}
