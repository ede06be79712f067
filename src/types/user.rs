use crate::core::hydrate::{absent, Resource};
use crate::types::common::{ProfilePhoto, TeamMemberType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Invitation state of a roster member
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub status: String,
    pub guid: String,
    pub date_sent_local: Option<String>,
    pub date_last_updated_local: Option<String>,
    pub date_sent_utc: Option<String>,
    pub date_last_updated_utc: Option<String>,
}

/// Team membership details attached to a user read through a team
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserTeamMeta {
    pub team_member_type: TeamMemberType,
    pub notes: Option<String>,
    pub is_team_admin: Option<bool>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub invite: Option<Invite>,
    #[serde(default)]
    pub options: Vec<Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedTeamMeta {
    pub team_member_type: TeamMemberType,
    #[serde(default)]
    pub options: Vec<Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedTeam {
    pub team_id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub profile_photo: Option<ProfilePhoto>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub meta: Option<LinkedTeamMeta>,
}

/// An account linked to another (e.g. a parent managing a child's account)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedUser {
    pub from_user_id: i64,
    pub to_user_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub display_name: String,
    pub is_active: bool,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub profile_photo: Option<ProfilePhoto>,
    #[serde(default)]
    pub teams: Vec<LinkedTeam>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedUsers {
    #[serde(default)]
    pub linked_to: Vec<LinkedUser>,
    #[serde(default)]
    pub linked_by: Vec<LinkedUser>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub display_name: String,
    pub gender: Option<String>,
    pub gender_display: Option<String>,
    #[serde(rename = "birthDate_month")]
    pub birth_date_month: Option<u32>,
    #[serde(rename = "birthDate_day")]
    pub birth_date_day: Option<u32>,
    #[serde(rename = "birthDate_year")]
    pub birth_date_year: Option<i32>,
    pub shirt_number: Option<String>,
    pub shirt_size: Option<String>,
    pub pants_size: Option<String>,
    /// Only populated for the user the token belongs to
    #[serde(default)]
    pub options: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub profile_photo: Option<ProfilePhoto>,
    /// Present when the user was read through a team (roster, attendance list)
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub team_meta: Option<UserTeamMeta>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub linked_users: Option<LinkedUsers>,
    pub date_created_utc: Option<String>,
    pub date_last_updated_utc: Option<String>,
    pub date_last_sign_in_utc: Option<String>,
}

impl Resource for User {
    const PRESENCE_FIELD: &'static str = "userId";
}
