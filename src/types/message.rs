use crate::core::hydrate::{absent, Resource};
use crate::types::common::{ProfilePhoto, UserMetaInfo};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageTeam {
    pub team_id: i64,
    pub name: String,
}

/// Author of a message or comment
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostedBy {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub gender: Option<String>,
    pub gender_display: Option<String>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub profile_photo: Option<ProfilePhoto>,
    pub full_url: Option<String>,
    pub thumb_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageComment {
    pub comment_id: i64,
    pub message_id: i64,
    pub team_id: i64,
    pub timezone_id: Option<String>,
    pub comment: Option<String>,
    pub posted_by: PostedBy,
    pub date_created_local: Option<String>,
    pub date_last_updated_local: Option<String>,
    pub date_created_utc: Option<String>,
    pub date_last_updated_utc: Option<String>,
}

impl Resource for MessageComment {
    const PRESENCE_FIELD: &'static str = "commentId";
}

/// A team message board post
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_id: i64,
    pub title: String,
    pub body_html: Option<String>,
    pub body_text: Option<String>,
    pub is_pinned: bool,
    pub allow_comments: bool,
    pub comment_count: i64,
    pub team: MessageTeam,
    pub posted_by: PostedBy,
    /// Only populated when comments were requested
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub comments: Option<Vec<MessageComment>>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub user_meta_info: Option<UserMetaInfo>,
    pub date_created_local: Option<String>,
    pub date_last_updated_local: Option<String>,
    pub date_created_utc: Option<String>,
    pub date_last_updated_utc: Option<String>,
}

impl Resource for Message {
    const PRESENCE_FIELD: &'static str = "messageId";
}
