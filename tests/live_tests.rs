//! Calls against the real service. Set `RUN_LIVE_TESTS=true` and provide
//! `TEAMCOWBOY_PRIVATE_KEY`, `TEAMCOWBOY_PUBLIC_KEY`, `TEAMCOWBOY_USERNAME`
//! and `TEAMCOWBOY_PASSWORD` to run them.

use std::env;
use std::time::Duration;
use teamcowboy::client::{TeamEventsQuery, UserTeamsQuery};
use teamcowboy::{ClientConfig, TeamCowboy};
use tokio::time::timeout;

fn should_run_live_tests() -> bool {
    env::var("RUN_LIVE_TESTS").unwrap_or_default() == "true"
}

async fn live_client() -> Option<TeamCowboy> {
    if !should_run_live_tests() {
        println!("⚠️ Skipping live test (RUN_LIVE_TESTS != true)");
        return None;
    }
    let config = ClientConfig::from_env("TEAMCOWBOY").expect("TEAMCOWBOY_* credentials");
    Some(TeamCowboy::connect(config).await.expect("login"))
}

#[cfg(test)]
mod live_tests {
    use super::*;

    #[tokio::test]
    async fn test_live_round_trips() {
        let Some(client) = live_client().await else {
            return;
        };

        let get = client.test_get_request(Some("Hello")).await.unwrap();
        assert_eq!(get.map(|r| r.hello_world), Some("Hello".to_string()));

        let post = client.test_post_request(Some("Hello")).await.unwrap();
        assert_eq!(post.map(|r| r.hello_world), Some("Hello".to_string()));
    }

    #[tokio::test]
    async fn test_live_user_and_teams() {
        let Some(client) = live_client().await else {
            return;
        };

        let user = client.user_get().await.unwrap();
        assert!(user.is_some());

        let teams = timeout(
            Duration::from_secs(30),
            client.user_get_teams(&UserTeamsQuery::default()),
        )
        .await
        .expect("timed out")
        .unwrap()
        .unwrap_or_default();
        println!("✅ Found {} teams", teams.len());

        if let Some(team) = teams.first() {
            let events = client
                .team_get_events(team.team_id, &TeamEventsQuery::default())
                .await
                .unwrap();
            println!(
                "✅ {} has {} events",
                team.name,
                events.map_or(0, |e| e.len())
            );
        }
    }
}
