//! Optional arguments for the remote procedures, one struct per call shape.
//! Every field left as `None` is simply not transmitted.

use crate::core::kernel::RequestParams;
use chrono::NaiveDateTime;
use std::fmt;

/// RSVP answer accepted by `Event_SaveRSVP`
///
/// The service maps a status the team does not allow onto its next best fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RsvpStatus {
    Yes,
    Maybe,
    Available,
    No,
    NoResponse,
}

impl RsvpStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Maybe => "maybe",
            Self::Available => "available",
            Self::No => "no",
            Self::NoResponse => "noresponse",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

fn put_sort(params: &mut RequestParams, sort_by: Option<&String>, direction: Option<SortDirection>) {
    params.insert_opt("sortBy", sort_by);
    params.insert_opt("sortDirection", direction.map(SortDirection::as_str));
}

fn put_window(
    params: &mut RequestParams,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) {
    params.insert_opt("startDateTime", start);
    params.insert_opt("endDateTime", end);
}

/// `Event_Get`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub include_rsvp_info: Option<bool>,
}

impl EventQuery {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("includeRSVPInfo", self.include_rsvp_info);
    }
}

/// `Event_SaveRSVP`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveRsvpOptions {
    /// Additional male guests
    pub addl_male: Option<u32>,
    /// Additional female guests
    pub addl_female: Option<u32>,
    pub comments: Option<String>,
    /// Answer on behalf of a linked user
    pub rsvp_as_user_id: Option<i64>,
}

impl SaveRsvpOptions {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("addlMale", self.addl_male);
        params.insert_opt("addlFemale", self.addl_female);
        params.insert_opt("comments", self.comments.as_ref());
        params.insert_opt("rsvpAsUserId", self.rsvp_as_user_id);
    }
}

/// `Message_Get`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageQuery {
    pub load_comments: Option<bool>,
}

impl MessageQuery {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("loadComments", self.load_comments);
    }
}

/// `Message_Save`: setting `message_id` edits an existing message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSaveOptions {
    pub message_id: Option<i64>,
    pub is_pinned: Option<bool>,
    pub send_notifications: Option<bool>,
    pub is_hidden: Option<bool>,
    pub allow_comments: Option<bool>,
}

impl MessageSaveOptions {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("messageId", self.message_id);
        params.insert_opt("isPinned", self.is_pinned);
        params.insert_opt("sendNotifications", self.send_notifications);
        params.insert_opt("isHidden", self.is_hidden);
        params.insert_opt("allowComments", self.allow_comments);
    }
}

/// `Team_GetEvents`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamEventsQuery {
    pub season_id: Option<i64>,
    pub offset: Option<u32>,
    pub qty: Option<u32>,
    /// Named filter understood by the service, e.g. `past` or `future`
    pub filter: Option<String>,
    pub start_date_time: Option<NaiveDateTime>,
    pub end_date_time: Option<NaiveDateTime>,
}

impl TeamEventsQuery {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("seasonId", self.season_id);
        params.insert_opt("offset", self.offset);
        params.insert_opt("qty", self.qty);
        params.insert_opt("filter", self.filter.as_ref());
        put_window(params, self.start_date_time, self.end_date_time);
    }
}

/// `Team_GetMessages`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMessagesQuery {
    pub message_id: Option<i64>,
    pub offset: Option<u32>,
    pub qty: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl TeamMessagesQuery {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("messageId", self.message_id);
        params.insert_opt("offset", self.offset);
        params.insert_opt("qty", self.qty);
        put_sort(params, self.sort_by.as_ref(), self.sort_direction);
    }
}

/// `Team_GetRoster`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterQuery {
    /// Restrict the roster to one member
    pub user_id: Option<i64>,
    pub include_inactive: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl RosterQuery {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("userId", self.user_id);
        params.insert_opt("includeInactive", self.include_inactive);
        put_sort(params, self.sort_by.as_ref(), self.sort_direction);
    }
}

/// `User_GetNextTeamEvent`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NextEventQuery {
    pub team_id: Option<i64>,
    pub dashboard_teams_only: Option<bool>,
}

impl NextEventQuery {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("teamId", self.team_id);
        params.insert_opt("dashboardTeamsOnly", self.dashboard_teams_only);
    }
}

/// `User_GetTeamEvents`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserEventsQuery {
    pub start_date_time: Option<NaiveDateTime>,
    pub end_date_time: Option<NaiveDateTime>,
    pub team_id: Option<i64>,
    pub dashboard_teams_only: Option<bool>,
}

impl UserEventsQuery {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        put_window(params, self.start_date_time, self.end_date_time);
        params.insert_opt("teamId", self.team_id);
        params.insert_opt("dashboardTeamsOnly", self.dashboard_teams_only);
    }
}

/// `User_GetTeamMessages`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMessagesQuery {
    pub team_id: Option<i64>,
    pub offset: Option<u32>,
    pub qty: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub dashboard_teams_only: Option<bool>,
}

impl UserMessagesQuery {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("teamId", self.team_id);
        params.insert_opt("offset", self.offset);
        params.insert_opt("qty", self.qty);
        put_sort(params, self.sort_by.as_ref(), self.sort_direction);
        params.insert_opt("dashboardTeamsOnly", self.dashboard_teams_only);
    }
}

/// `User_GetTeams`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTeamsQuery {
    pub dashboard_teams_only: Option<bool>,
}

impl UserTeamsQuery {
    pub(crate) fn write_to(&self, params: &mut RequestParams) {
        params.insert_opt("dashboardTeamsOnly", self.dashboard_teams_only);
    }
}
