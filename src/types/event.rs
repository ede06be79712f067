use crate::core::hydrate::{absent, Resource};
use crate::types::common::{ColorSwatch, StatusDisplay, TeamMemberType, UserMetaInfo};
use crate::types::location::Location;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Team an event belongs to
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventTeam {
    pub team_id: i64,
    pub name: String,
}

/// Score and outcome, including the second game of a double-header (`dh_*`)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventResult {
    pub score_entered: bool,
    pub outcome: Option<String>,
    pub is_win: bool,
    pub is_tie: bool,
    pub is_loss: bool,
    pub score_display: Option<String>,
    pub dh_score_entered: bool,
    pub dh_outcome: Option<String>,
    pub dh_is_win: bool,
    pub dh_is_tie: bool,
    pub dh_is_loss: bool,
    pub dh_score_display: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeInfo {
    pub timezone_id: String,
    pub start_date_local: String,
    pub start_time_local: Option<String>,
    pub start_date_time_local: String,
    pub start_date_local_display: Option<String>,
    pub start_time_local_display: Option<String>,
    pub start_date_time_local_display: Option<String>,
    pub start_date_time_utc: String,
    #[serde(rename = "startTimeTBD")]
    pub start_time_tbd: bool,
    pub end_date_local: Option<String>,
    pub end_time_local: Option<String>,
    pub end_date_time_local: Option<String>,
    pub end_date_local_display: Option<String>,
    pub end_time_local_display: Option<String>,
    pub end_date_time_local_display: Option<String>,
    pub end_date_time_utc: Option<String>,
    #[serde(rename = "endTimeTBD")]
    pub end_time_tbd: bool,
    pub in_past: bool,
    pub in_future: bool,
}

/// Shirt colors for the event's own team and its opponent
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShirtColors {
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub team1: Option<ColorSwatch>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub team2: Option<ColorSwatch>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RsvpDetails {
    #[serde(rename = "allowRSVP")]
    pub allow_rsvp: bool,
    pub allow_rsvp_removal: bool,
    pub allow_extra_players: bool,
    #[serde(default)]
    pub allowed_statuses: Vec<String>,
    #[serde(default)]
    pub allowed_statuses_display: Vec<StatusDisplay>,
    pub status: Option<String>,
    pub status_display: Option<String>,
    pub status_display_short: Option<String>,
    pub addl_male: i64,
    pub addl_male_display: Option<String>,
    pub addl_female: i64,
    pub addl_female_display: Option<String>,
    pub comments: Option<String>,
}

/// One member's RSVP for an event
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RsvpInstance {
    pub user_id: i64,
    pub display_name: String,
    pub team_member_type: TeamMemberType,
    pub rsvp_details: RsvpDetails,
}

/// An event in a team's schedule
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: i64,
    pub team: EventTeam,
    pub season_id: Option<i64>,
    pub season_name: Option<String>,
    pub event_type: String,
    pub event_type_display: String,
    pub status: String,
    pub status_display: String,
    pub person_noun_singular: Option<String>,
    pub person_noun_plural: Option<String>,
    pub title: String,
    pub title_full: Option<String>,
    pub title_label: Option<String>,
    pub home_away: Option<String>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub result: Option<EventResult>,
    /// Only populated when RSVP information was requested
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub rsvp_instances: Option<Vec<RsvpInstance>>,
    pub comments: Option<String>,
    #[serde(default)]
    pub options: Vec<Value>,
    pub one_line_display: Option<String>,
    pub one_line_display_short: Option<String>,
    pub male_gender_display: Option<String>,
    pub female_gender_display: Option<String>,
    pub other_gender_display: Option<String>,
    pub date_time_info: DateTimeInfo,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub shirt_colors: Option<ShirtColors>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub user_meta_info: Option<UserMetaInfo>,
    pub date_created_utc: String,
    pub date_last_updated_utc: String,
}

impl Resource for Event {
    const PRESENCE_FIELD: &'static str = "eventId";
}

/// Acknowledgement from `Event_SaveRSVP`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveRsvpResponse {
    pub rsvp_saved: bool,
    pub status_code: String,
}

impl Resource for SaveRsvpResponse {
    const PRESENCE_FIELD: &'static str = "statusCode";
}
