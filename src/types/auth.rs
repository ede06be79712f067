use crate::core::hydrate::Resource;
use serde::{Deserialize, Serialize};

/// Session obtained from `Auth_GetUserToken`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: i64,
    pub token: String,
}

impl Resource for AuthUser {
    const PRESENCE_FIELD: &'static str = "token";
}

/// Echo returned by the `Test_*` connectivity methods
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestResponse {
    pub hello_world: String,
}

impl Resource for TestResponse {
    const PRESENCE_FIELD: &'static str = "helloWorld";
}
