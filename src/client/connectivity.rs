use super::{Access, TeamCowboy};
use crate::core::errors::TeamCowboyError;
use crate::core::kernel::{RequestKind, RequestParams, RestClient};
use crate::types::TestResponse;
use tracing::instrument;

fn test_params(test_param: Option<&str>) -> RequestParams {
    let mut params = RequestParams::new();
    params.insert_opt("testParam", test_param);
    params
}

impl<R: RestClient> TeamCowboy<R> {
    /// Signed GET round trip; the service echoes `testParam` back
    #[instrument(skip(self))]
    pub async fn test_get_request(
        &self,
        test_param: Option<&str>,
    ) -> Result<Option<TestResponse>, TeamCowboyError> {
        self.fetch_one(
            RequestKind::Get,
            "Test_GetRequest",
            test_params(test_param),
            Access::Public,
        )
        .await
    }

    /// Signed POST round trip; the service echoes `testParam` back
    #[instrument(skip(self))]
    pub async fn test_post_request(
        &self,
        test_param: Option<&str>,
    ) -> Result<Option<TestResponse>, TeamCowboyError> {
        self.fetch_one(
            RequestKind::Post,
            "Test_PostRequest",
            test_params(test_param),
            Access::Public,
        )
        .await
    }
}
