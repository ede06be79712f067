use super::queries::{NextEventQuery, UserEventsQuery, UserMessagesQuery, UserTeamsQuery};
use super::{Access, TeamCowboy};
use crate::core::errors::TeamCowboyError;
use crate::core::kernel::{RequestKind, RequestParams, RestClient};
use crate::types::{Event, Message, Team, User};
use tracing::instrument;

impl<R: RestClient> TeamCowboy<R> {
    /// The user the token belongs to
    #[instrument(skip(self))]
    pub async fn user_get(&self) -> Result<Option<User>, TeamCowboyError> {
        self.fetch_one(RequestKind::Get, "User_Get", RequestParams::new(), Access::User)
            .await
    }

    /// `None` when the user has no upcoming event
    #[instrument(skip(self))]
    pub async fn user_get_next_team_event(
        &self,
        query: &NextEventQuery,
    ) -> Result<Option<Event>, TeamCowboyError> {
        let mut params = RequestParams::new();
        query.write_to(&mut params);
        self.fetch_one(
            RequestKind::Get,
            "User_GetNextTeamEvent",
            params,
            Access::User,
        )
        .await
    }

    /// Events across all of the user's teams
    #[instrument(skip(self))]
    pub async fn user_get_team_events(
        &self,
        query: &UserEventsQuery,
    ) -> Result<Option<Vec<Event>>, TeamCowboyError> {
        let mut params = RequestParams::new();
        query.write_to(&mut params);
        self.fetch_list(RequestKind::Get, "User_GetTeamEvents", params, Access::User)
            .await
    }

    #[instrument(skip(self))]
    pub async fn user_get_team_messages(
        &self,
        query: &UserMessagesQuery,
    ) -> Result<Option<Vec<Message>>, TeamCowboyError> {
        let mut params = RequestParams::new();
        query.write_to(&mut params);
        self.fetch_list(
            RequestKind::Get,
            "User_GetTeamMessages",
            params,
            Access::User,
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn user_get_teams(
        &self,
        query: &UserTeamsQuery,
    ) -> Result<Option<Vec<Team>>, TeamCowboyError> {
        let mut params = RequestParams::new();
        query.write_to(&mut params);
        self.fetch_list(RequestKind::Get, "User_GetTeams", params, Access::User)
            .await
    }
}
