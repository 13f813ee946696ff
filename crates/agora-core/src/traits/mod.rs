mod gateways;

pub use gateways::{
    ActivityEvent, ActivityGateway, ActivityKind, CommentGateway, CommentPage, GatewayResult,
    IssueGateway, ReactionGateway, SpecialIssueSet, VoteGateway, VoteOutcome, VoteSummary,
};
