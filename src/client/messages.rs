use super::queries::{MessageQuery, MessageSaveOptions};
use super::{Access, TeamCowboy};
use crate::core::errors::TeamCowboyError;
use crate::core::kernel::{RequestKind, RequestParams, RestClient};
use crate::types::{Message, MessageComment};
use tracing::instrument;

fn message_params(team_id: i64, message_id: i64) -> RequestParams {
    RequestParams::new()
        .with("teamId", team_id)
        .with("messageId", message_id)
}

impl<R: RestClient> TeamCowboy<R> {
    #[instrument(skip(self))]
    pub async fn message_get(
        &self,
        team_id: i64,
        message_id: i64,
        query: &MessageQuery,
    ) -> Result<Option<Message>, TeamCowboyError> {
        let mut params = message_params(team_id, message_id);
        query.write_to(&mut params);
        self.fetch_one(RequestKind::Get, "Message_Get", params, Access::User)
            .await
    }

    /// Returns `true` when the service confirmed the deletion
    #[instrument(skip(self))]
    pub async fn message_delete(
        &self,
        team_id: i64,
        message_id: i64,
    ) -> Result<bool, TeamCowboyError> {
        self.fetch_flag(
            RequestKind::Post,
            "Message_Delete",
            message_params(team_id, message_id),
            Access::User,
        )
        .await
    }

    /// Create a message, or edit one when `options.message_id` is set
    #[instrument(skip(self, body))]
    pub async fn message_save(
        &self,
        team_id: i64,
        title: &str,
        body: &str,
        options: &MessageSaveOptions,
    ) -> Result<Option<Message>, TeamCowboyError> {
        let mut params = RequestParams::new()
            .with("teamId", team_id)
            .with("title", title)
            .with("body", body);
        options.write_to(&mut params);
        self.fetch_one(RequestKind::Post, "Message_Save", params, Access::User)
            .await
    }

    #[instrument(skip(self))]
    pub async fn message_comment_delete(
        &self,
        team_id: i64,
        message_id: i64,
        comment_id: i64,
    ) -> Result<bool, TeamCowboyError> {
        let params = message_params(team_id, message_id).with("commentId", comment_id);
        self.fetch_flag(
            RequestKind::Post,
            "MessageComment_Delete",
            params,
            Access::User,
        )
        .await
    }

    #[instrument(skip(self, comment))]
    pub async fn message_comment_add(
        &self,
        team_id: i64,
        message_id: i64,
        comment: &str,
    ) -> Result<Option<MessageComment>, TeamCowboyError> {
        let params = message_params(team_id, message_id).with("comment", comment);
        self.fetch_one(
            RequestKind::Post,
            "MessageComment_Add",
            params,
            Access::User,
        )
        .await
    }
}
