use crate::core::hydrate::{absent, Resource};
use crate::types::common::{Activity, League};
use serde::{Deserialize, Serialize};

/// A schedule season for a team
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub season_id: i64,
    pub team_id: i64,
    pub name: String,
    pub start_date_local: Option<String>,
    pub start_date_utc: Option<String>,
    pub start_date_in_future: bool,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub activity: Option<Activity>,
    #[serde(default, deserialize_with = "absent::deserialize")]
    pub league: Option<League>,
    pub league_division: Option<String>,
}

impl Resource for Season {
    const PRESENCE_FIELD: &'static str = "seasonId";
}
