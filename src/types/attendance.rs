use crate::core::hydrate::Resource;
use crate::types::common::{StatusDisplay, TeamMemberType};
use crate::types::user::User;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    #[serde(default)]
    pub by_gender: HashMap<String, i64>,
    #[serde(default)]
    pub by_type: HashMap<String, i64>,
    pub total: i64,
}

/// Head count for one RSVP status
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCount {
    pub status: String,
    pub counts: StatusCounts,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenderInfo {
    pub gender: String,
    pub gender_display: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMisc {
    #[serde(rename = "genderLabel_male")]
    pub gender_label_male: String,
    #[serde(rename = "genderLabel_female")]
    pub gender_label_female: String,
    #[serde(rename = "genderLabel_other")]
    pub gender_label_other: Option<String>,
    pub group_by: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMeta {
    #[serde(default)]
    pub team_member_types: Vec<TeamMemberType>,
    #[serde(default)]
    pub genders: Vec<GenderInfo>,
    #[serde(default)]
    pub rsvp_statuses: Vec<StatusDisplay>,
    pub misc: AttendanceMisc,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GenderUserIds {
    #[serde(default)]
    pub m: Vec<i64>,
    #[serde(default)]
    pub f: Vec<i64>,
}

/// User ids for one status, grouped several ways
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserIdGroups {
    #[serde(default)]
    pub by_gender: GenderUserIds,
    /// Keyed by team member type name
    #[serde(default)]
    pub by_type: HashMap<String, Vec<i64>>,
    #[serde(default)]
    pub all: Vec<i64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserIdsByStatus {
    pub status: String,
    pub user_ids: UserIdGroups,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRsvpInfo {
    pub status: String,
    pub status_display: String,
    pub comments: Option<String>,
    #[serde(rename = "canRSVP")]
    pub can_rsvp: bool,
    pub has_responded: bool,
    pub addl_male: i64,
    pub addl_female: i64,
    pub addl_display: Option<String>,
    pub date_created_local: Option<String>,
    pub date_last_updated_local: Option<String>,
    pub date_created_utc: Option<String>,
    pub date_last_updated_utc: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUser {
    pub user: User,
    pub rsvp_info: AttendanceRsvpInfo,
}

/// Members of an event's team and their RSVP statuses
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceList {
    #[serde(default)]
    pub counts_by_status: Vec<AttendanceCount>,
    pub meta: AttendanceMeta,
    #[serde(default)]
    pub user_ids_by_status: Vec<UserIdsByStatus>,
    #[serde(default)]
    pub users: Vec<AttendanceUser>,
}

impl Resource for AttendanceList {
    const PRESENCE_FIELD: &'static str = "meta";
}
