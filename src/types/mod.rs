//! Typed objects hydrated from response payloads. Field names follow the
//! service's camelCase wire format.

pub mod attendance;
pub mod auth;
pub mod common;
pub mod event;
pub mod location;
pub mod message;
pub mod season;
pub mod team;
pub mod user;

pub use attendance::{
    AttendanceCount, AttendanceList, AttendanceMeta, AttendanceMisc, AttendanceRsvpInfo,
    AttendanceUser, GenderInfo, GenderUserIds, StatusCounts, UserIdGroups, UserIdsByStatus,
};
pub use auth::{AuthUser, TestResponse};
pub use common::{
    Activity, Color, ColorSwatch, League, ProfilePhoto, StatusDisplay, TeamMemberType,
    UserMetaInfo,
};
pub use event::{
    DateTimeInfo, Event, EventResult, EventTeam, RsvpDetails, RsvpInstance, SaveRsvpResponse,
    ShirtColors,
};
pub use location::{Address, Lights, Location, Surface};
pub use message::{Message, MessageComment, MessageTeam, PostedBy};
pub use season::Season;
pub use team::{
    MiscOptions, Team, TeamColorSwatches, TeamMember, TeamMeta, TeamOptions, TeamType,
    TeamUserProfile,
};
pub use user::{Invite, LinkedTeam, LinkedTeamMeta, LinkedUser, LinkedUsers, User, UserTeamMeta};
