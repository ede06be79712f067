use teamcowboy::client::UserTeamsQuery;
use teamcowboy::{ClientConfig, TeamCowboy};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Reads TEAMCOWBOY_PRIVATE_KEY, TEAMCOWBOY_PUBLIC_KEY and, optionally,
    // TEAMCOWBOY_USERNAME / TEAMCOWBOY_PASSWORD (from .env when present)
    #[cfg(feature = "env-file")]
    let config = ClientConfig::from_env_file("TEAMCOWBOY")?;
    #[cfg(not(feature = "env-file"))]
    let config = ClientConfig::from_env("TEAMCOWBOY")?;
    let client = TeamCowboy::connect(config).await?;

    println!("Sending signed test request...");
    match client.test_get_request(Some("Hello from Rust")).await? {
        Some(echo) => println!("Service echoed: {}", echo.hello_world),
        None => println!("Test request was rejected"),
    }

    if !client.has_user_token() {
        println!("No user credentials configured; skipping team listing");
        return Ok(());
    }

    match client.user_get_teams(&UserTeamsQuery::default()).await? {
        Some(teams) => {
            println!("Found {} teams", teams.len());
            for team in &teams {
                println!(
                    "Team: {} ({}), {}",
                    team.name,
                    team.team_id,
                    team.activity.name
                );
            }
        }
        None => println!("Team listing was rejected"),
    }

    Ok(())
}
