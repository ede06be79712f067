use super::queries::{EventQuery, RsvpStatus, SaveRsvpOptions};
use super::{Access, TeamCowboy};
use crate::core::errors::TeamCowboyError;
use crate::core::kernel::{RequestKind, RequestParams, RestClient};
use crate::types::{AttendanceList, Event, SaveRsvpResponse};
use tracing::instrument;

fn event_params(team_id: i64, event_id: i64) -> RequestParams {
    RequestParams::new()
        .with("teamId", team_id)
        .with("eventId", event_id)
}

impl<R: RestClient> TeamCowboy<R> {
    #[instrument(skip(self))]
    pub async fn event_get(
        &self,
        team_id: i64,
        event_id: i64,
        query: &EventQuery,
    ) -> Result<Option<Event>, TeamCowboyError> {
        let mut params = event_params(team_id, event_id);
        query.write_to(&mut params);
        self.fetch_one(RequestKind::Get, "Event_Get", params, Access::User)
            .await
    }

    /// Team members grouped by RSVP status, with counts per status
    #[instrument(skip(self))]
    pub async fn event_get_attendance_list(
        &self,
        team_id: i64,
        event_id: i64,
    ) -> Result<Option<AttendanceList>, TeamCowboyError> {
        self.fetch_one(
            RequestKind::Get,
            "Event_GetAttendanceList",
            event_params(team_id, event_id),
            Access::User,
        )
        .await
    }

    /// Save the user's RSVP for an event
    ///
    /// Additional guests are ignored when the event does not allow them.
    #[instrument(skip(self))]
    pub async fn event_save_rsvp(
        &self,
        team_id: i64,
        event_id: i64,
        status: RsvpStatus,
        options: &SaveRsvpOptions,
    ) -> Result<Option<SaveRsvpResponse>, TeamCowboyError> {
        let mut params = event_params(team_id, event_id).with("status", status.as_str());
        options.write_to(&mut params);
        self.fetch_one(RequestKind::Post, "Event_SaveRSVP", params, Access::User)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::core::kernel::{CallOutcome, METHOD_KEY};
    use serde_json::json;

    #[tokio::test]
    async fn test_event_get_sends_ids_and_flag() {
        let client = client(vec![CallOutcome::Success(json!({}))]);
        let event = client
            .event_get(
                208,
                1950161,
                &EventQuery {
                    include_rsvp_info: Some(false),
                },
            )
            .await
            .unwrap();
        assert!(event.is_none());

        let call = client.rest().last_call();
        assert_eq!(call.kind, RequestKind::Get);
        assert_eq!(call.param("teamId").as_deref(), Some("208"));
        assert_eq!(call.param("eventId").as_deref(), Some("1950161"));
        assert_eq!(call.param("includeRSVPInfo").as_deref(), Some("false"));
    }

    #[tokio::test]
    async fn test_save_rsvp_posts_status_and_options() {
        let client = client(vec![CallOutcome::Success(
            json!({"rsvpSaved": true, "statusCode": "success"}),
        )]);
        let saved = client
            .event_save_rsvp(
                208,
                1950162,
                RsvpStatus::Yes,
                &SaveRsvpOptions {
                    addl_male: Some(1),
                    comments: Some("Running late".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(saved.is_some());

        let call = client.rest().last_call();
        assert_eq!(call.kind, RequestKind::Post);
        assert_eq!(call.param(METHOD_KEY).as_deref(), Some("Event_SaveRSVP"));
        assert_eq!(call.param("status").as_deref(), Some("yes"));
        assert_eq!(call.param("addlMale").as_deref(), Some("1"));
        assert_eq!(call.param("comments").as_deref(), Some("Running late"));
        assert!(!call.params.contains("addlFemale"));
    }

    #[tokio::test]
    async fn test_attendance_list_not_found_is_none() {
        let client = client(vec![not_found()]);
        let list = client.event_get_attendance_list(208, 1).await.unwrap();
        assert!(list.is_none());
    }
}
