use super::queries::{RosterQuery, TeamEventsQuery, TeamMessagesQuery};
use super::{Access, TeamCowboy};
use crate::core::errors::TeamCowboyError;
use crate::core::kernel::{RequestKind, RequestParams, RestClient};
use crate::types::{Event, Message, Season, Team, User};
use tracing::instrument;

fn team_params(team_id: i64) -> RequestParams {
    RequestParams::new().with("teamId", team_id)
}

impl<R: RestClient> TeamCowboy<R> {
    #[instrument(skip(self))]
    pub async fn team_get(&self, team_id: i64) -> Result<Option<Team>, TeamCowboyError> {
        self.fetch_one(RequestKind::Get, "Team_Get", team_params(team_id), Access::User)
            .await
    }

    #[instrument(skip(self))]
    pub async fn team_get_events(
        &self,
        team_id: i64,
        query: &TeamEventsQuery,
    ) -> Result<Option<Vec<Event>>, TeamCowboyError> {
        let mut params = team_params(team_id);
        query.write_to(&mut params);
        self.fetch_list(RequestKind::Get, "Team_GetEvents", params, Access::User)
            .await
    }

    #[instrument(skip(self))]
    pub async fn team_get_messages(
        &self,
        team_id: i64,
        query: &TeamMessagesQuery,
    ) -> Result<Option<Vec<Message>>, TeamCowboyError> {
        let mut params = team_params(team_id);
        query.write_to(&mut params);
        self.fetch_list(RequestKind::Get, "Team_GetMessages", params, Access::User)
            .await
    }

    #[instrument(skip(self))]
    pub async fn team_get_roster(
        &self,
        team_id: i64,
        query: &RosterQuery,
    ) -> Result<Option<Vec<User>>, TeamCowboyError> {
        let mut params = team_params(team_id);
        query.write_to(&mut params);
        self.fetch_list(RequestKind::Get, "Team_GetRoster", params, Access::User)
            .await
    }

    #[instrument(skip(self))]
    pub async fn team_get_seasons(
        &self,
        team_id: i64,
    ) -> Result<Option<Vec<Season>>, TeamCowboyError> {
        self.fetch_list(
            RequestKind::Get,
            "Team_GetSeasons",
            team_params(team_id),
            Access::User,
        )
        .await
    }
}
