//! End-to-end scenarios over the mock backend

use std::collections::HashMap;
use std::time::Duration;

use agora_core::{ReactionKind, Stance, TargetRef, VoteSnapshot, VoteTally};
use agora_service::{CreateCommentRequest, CreateReplyRequest, UpdateCommentRequest};
use anyhow::Result;

use integration_tests::fixtures;
use integration_tests::helpers::TestHarness;

#[tokio::test]
async fn reaction_round_trip_confirms_optimistic_state() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (10, 2), (0, 0));

    let snapshot = harness
        .reactions()
        .toggle(TargetRef::debate(1), ReactionKind::Like)
        .await?;

    assert_eq!(snapshot.counts.like, 11);
    assert_eq!(snapshot.counts.dislike, 2);
    assert_eq!(snapshot.mine, Some(ReactionKind::Like));

    let local = harness.reaction_state(1);
    assert_eq!(local.counts.like, 11);
    assert_eq!(local.mine, Some(ReactionKind::Like));
    Ok(())
}

#[tokio::test]
async fn reaction_rollback_restores_pre_click_state() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (10, 2), (0, 0));

    harness.backend.fail_next();
    let err = harness
        .reactions()
        .toggle(TargetRef::debate(1), ReactionKind::Like)
        .await
        .unwrap_err();
    assert!(err.is_remote());

    let local = harness.reaction_state(1);
    assert_eq!(local.counts.like, 10);
    assert_eq!(local.mine, None);
    Ok(())
}

#[tokio::test]
async fn like_and_dislike_stay_mutually_exclusive() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (5, 3), (0, 0));
    let target = TargetRef::debate(1);

    harness.reactions().toggle(target, ReactionKind::Like).await?;
    let state = harness.reaction_state(1);
    assert_eq!(state.mine, Some(ReactionKind::Like));
    assert!(harness.reactions().is_blocked(target, ReactionKind::Dislike));

    // Switching sides clears the previous reaction in one step
    harness
        .reactions()
        .toggle(target, ReactionKind::Dislike)
        .await?;
    let state = harness.reaction_state(1);
    assert_eq!(state.mine, Some(ReactionKind::Dislike));
    assert_eq!(state.counts.like, 5);
    assert_eq!(state.counts.dislike, 4);
    Ok(())
}

#[tokio::test]
async fn toggling_twice_is_a_net_no_op() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (10, 2), (0, 0));
    let target = TargetRef::debate(1);

    harness.reactions().toggle(target, ReactionKind::Happy).await?;
    harness.reactions().toggle(target, ReactionKind::Happy).await?;

    let state = harness.reaction_state(1);
    assert_eq!(state.counts.happy, 0);
    assert_eq!(state.counts.like, 10);
    assert_eq!(state.mine, None);
    Ok(())
}

#[tokio::test]
async fn comment_reactions_work_through_the_same_path() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (0, 0));
    harness.backend.seed_comments(1, fixtures::comments(1, 3));
    harness.comments().load_page(1, 1).await?;

    let target = TargetRef::comment(3);
    let snapshot = harness
        .reactions()
        .toggle(target, ReactionKind::Like)
        .await?;
    assert_eq!(snapshot.counts.like, 1);

    let cached = harness
        .ctx
        .comments()
        .find_comment(3)
        .expect("comment cached");
    assert_eq!(cached.reactions.mine, Some(ReactionKind::Like));
    Ok(())
}

#[tokio::test]
async fn vote_cast_and_withdraw() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (3, 1));

    let snapshot = harness.votes().toggle(1, Stance::Pro).await?;
    assert_eq!(snapshot.tally, VoteTally::new(4, 1));
    assert_eq!(snapshot.ballot, Some(Stance::Pro));
    assert_eq!(snapshot.tally.ratio().agree, 80);

    let snapshot = harness.votes().toggle(1, Stance::Pro).await?;
    assert_eq!(snapshot.tally, VoteTally::new(3, 1));
    assert_eq!(snapshot.ballot, None);
    assert_eq!(snapshot.tally.ratio().agree, 75);
    Ok(())
}

#[tokio::test]
async fn voting_the_other_side_is_rejected_before_dispatch() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (3, 1));

    harness.votes().toggle(1, Stance::Pro).await?;
    let err = harness.votes().toggle(1, Stance::Con).await.unwrap_err();
    assert_eq!(err.error_code(), "CONFLICT");

    // Local state is untouched by the rejected click
    let state = harness.vote_state(1);
    assert_eq!(state.tally, VoteTally::new(4, 1));
    assert_eq!(state.ballot, Some(Stance::Pro));

    // Withdraw-then-cast is the sanctioned way to switch sides
    harness.switch_vote(1, Stance::Con).await?;
    let state = harness.vote_state(1);
    assert_eq!(state.tally, VoteTally::new(3, 2));
    assert_eq!(state.ballot, Some(Stance::Con));
    Ok(())
}

#[tokio::test]
async fn vote_response_with_percentages_updates_country_stats() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (3, 1));

    let mut map = HashMap::new();
    map.insert("KR".to_string(), 60.0);
    map.insert("US".to_string(), 40.0);
    harness
        .backend
        .seed_vote(1, VoteSnapshot::new(VoteTally::new(3, 1), None), Some(map));

    harness.votes().toggle(1, Stance::Pro).await?;

    let debate = harness.ctx.debates().get(1).expect("debate hydrated");
    assert_eq!(debate.country_stats.len(), 2);
    assert_eq!(debate.country_stats[0].code, "KR");
    // 60% of 5 ballots
    assert_eq!(debate.country_stats[0].count, 3);
    Ok(())
}

#[tokio::test]
async fn vote_response_without_percentages_triggers_followup_refresh() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (3, 1));

    let mut map = HashMap::new();
    map.insert("KR".to_string(), 100.0);
    harness
        .backend
        .seed_vote(1, VoteSnapshot::new(VoteTally::new(3, 1), None), Some(map));
    harness.backend.set_include_nation_percent(false);

    harness.votes().toggle(1, Stance::Pro).await?;
    assert!(harness.ctx.debates().get(1).unwrap().country_stats.is_empty());

    // The fire-and-forget summary fetch lands shortly after
    tokio::time::sleep(Duration::from_millis(50)).await;
    let debate = harness.ctx.debates().get(1).unwrap();
    assert_eq!(debate.country_stats.len(), 1);
    assert_eq!(debate.country_stats[0].code, "KR");
    Ok(())
}

#[tokio::test]
async fn vote_rollback_restores_tally_and_ballot() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (3, 1));

    harness.backend.fail_next();
    let err = harness.votes().toggle(1, Stance::Con).await.unwrap_err();
    assert!(err.is_remote());

    let state = harness.vote_state(1);
    assert_eq!(state.tally, VoteTally::new(3, 1));
    assert_eq!(state.ballot, None);
    Ok(())
}

#[tokio::test]
async fn loading_a_new_page_replaces_the_previous_one() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (0, 0));
    harness.backend.seed_comments(1, fixtures::comments(1, 25));

    let first = harness.comments().load_page(1, 1).await?;
    assert_eq!(first.total, 25);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.items[0].id, 25);

    let second = harness.comments().load_page(1, 2).await?;
    assert_eq!(second.page, 2);
    assert_eq!(second.items[0].id, 15);

    // Page 1 rows are gone from the cache
    assert!(harness.ctx.comments().find_comment(25).is_none());
    assert!(harness.ctx.comments().find_comment(15).is_some());
    Ok(())
}

#[tokio::test]
async fn comment_create_confirms_the_placeholder() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (0, 0));
    harness.backend.seed_comments(1, fixtures::comments(1, 2));
    harness.comments().load_page(1, 1).await?;

    let request = CreateCommentRequest {
        content: "fresh take".to_string(),
        stance: Some(Stance::Pro),
    };
    let created = harness.comments().create(1, &request).await?;
    assert!(created.id > 0);

    let page = harness.ctx.comments().page(1).expect("page cached");
    assert_eq!(page.items[0].id, created.id);
    assert!(!page.items[0].is_pending());
    assert_eq!(page.total, 3);
    assert_eq!(harness.ctx.debates().get(1).unwrap().comment_count, 3);
    Ok(())
}

#[tokio::test]
async fn failed_comment_create_discards_the_placeholder() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (0, 0));
    harness.backend.seed_comments(1, fixtures::comments(1, 2));
    harness.comments().load_page(1, 1).await?;

    harness.backend.fail_next();
    let request = CreateCommentRequest {
        content: "doomed".to_string(),
        stance: None,
    };
    assert!(harness.comments().create(1, &request).await.is_err());

    let page = harness.ctx.comments().page(1).expect("page cached");
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|c| !c.is_pending()));
    Ok(())
}

#[tokio::test]
async fn empty_comment_never_reaches_the_backend() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (0, 0));

    let request = CreateCommentRequest {
        content: "  ".to_string(),
        stance: None,
    };
    let err = harness.comments().create(1, &request).await.unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    Ok(())
}

#[tokio::test]
async fn failed_edit_rolls_back_content() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (0, 0));
    harness.backend.seed_comments(1, fixtures::comments(1, 2));
    harness.comments().load_page(1, 1).await?;

    harness.backend.fail_next();
    let request = UpdateCommentRequest {
        content: "rewritten".to_string(),
    };
    assert!(harness.comments().edit(2, &request).await.is_err());

    let cached = harness.ctx.comments().find_comment(2).unwrap();
    assert_eq!(cached.content, "comment 2");
    assert!(!cached.is_edited());
    Ok(())
}

#[tokio::test]
async fn deleting_a_comment_cascades() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (0, 0));
    harness.backend.seed_comments(1, fixtures::comments(1, 2));
    harness
        .backend
        .seed_replies(2, vec![fixtures::reply(21, 2, "r1"), fixtures::reply(22, 2, "r2")]);

    harness.comments().load_page(1, 1).await?;
    harness.comments().load_replies(2).await?;
    assert_eq!(harness.ctx.comments().replies(2).unwrap().len(), 2);

    harness.comments().delete(2).await?;

    assert!(harness.ctx.comments().find_comment(2).is_none());
    assert!(harness.ctx.comments().replies(2).is_none());
    assert_eq!(harness.ctx.comments().page(1).unwrap().total, 1);
    assert_eq!(harness.ctx.debates().get(1).unwrap().comment_count, 1);
    Ok(())
}

#[tokio::test]
async fn reply_lifecycle() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (0, 0));
    harness.backend.seed_comments(1, fixtures::comments(1, 1));
    harness.comments().load_page(1, 1).await?;
    harness.comments().load_replies(1).await?;

    let request = CreateReplyRequest {
        content: "me too".to_string(),
    };
    let reply = harness.comments().create_reply(1, &request).await?;

    assert_eq!(harness.ctx.comments().replies(1).unwrap()[0].id, reply.id);
    assert_eq!(harness.ctx.comments().find_comment(1).unwrap().reply_count, 1);

    harness.comments().delete_reply(reply.id).await?;
    assert!(harness.ctx.comments().replies(1).unwrap().is_empty());
    assert_eq!(harness.ctx.comments().find_comment(1).unwrap().reply_count, 0);
    Ok(())
}

#[tokio::test]
async fn issue_slots_load_through_the_aggregate_call() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.backend.seed_issues(fixtures::issue_set());

    harness.issues().load_all().await;

    let today = harness.ctx.issues().today();
    assert!(!today.loading);
    assert_eq!(today.data.unwrap().len(), 2);
    assert_eq!(
        harness.ctx.issues().hot().data.unwrap().unwrap().title,
        "hot"
    );
    assert!(harness.ctx.issues().balanced().error.is_none());
    Ok(())
}

#[tokio::test]
async fn failed_aggregate_load_flags_every_slot() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.backend.seed_issues(fixtures::issue_set());

    harness.backend.fail_next();
    harness.issues().load_all().await;

    assert!(harness.ctx.issues().today().error.is_some());
    assert!(harness.ctx.issues().hot().error.is_some());
    assert!(harness.ctx.issues().balanced().error.is_some());

    // Individual loads recover independently
    harness.issues().load_each().await;
    assert!(harness.ctx.issues().today().error.is_none());
    assert!(harness.ctx.issues().hot().error.is_none());
    assert!(harness.ctx.issues().balanced().error.is_none());
    Ok(())
}

#[tokio::test]
async fn activity_events_carry_the_client_id() -> Result<()> {
    let harness = TestHarness::new()?;

    harness.activity().record_click("/debate/1", "vote-pro");
    harness.activity().record_navigation("/home");
    tokio::time::sleep(Duration::from_millis(50)).await;

    let events = harness.backend.recorded_events();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| e.client_id == harness.session.client_id()));
    Ok(())
}

#[tokio::test]
async fn vote_summary_hydrates_local_state() -> Result<()> {
    let harness = TestHarness::new()?;
    harness.seed_simple_debate(1, (0, 0), (0, 0));

    let mut map = HashMap::new();
    map.insert("JP".to_string(), 100.0);
    harness.backend.seed_vote(
        1,
        VoteSnapshot::new(VoteTally::new(7, 3), Some(Stance::Con)),
        Some(map),
    );

    let snapshot = harness.votes().refresh_summary(1).await?;
    assert_eq!(snapshot.tally, VoteTally::new(7, 3));
    assert_eq!(snapshot.ballot, Some(Stance::Con));

    let debate = harness.ctx.debates().get(1).unwrap();
    assert_eq!(debate.vote.tally, VoteTally::new(7, 3));
    assert_eq!(debate.country_stats[0].name, "Japan");
    Ok(())
}
