//! In-memory mock backend
//!
//! One struct implements every gateway trait against mock tables, the way
//! the product runs before the real backend exists. The mock is
//! authoritative: a reaction or vote click is applied to the stored state
//! and the resulting aggregate is returned, so reconciliation paths see
//! realistic server responses. `fail_next` makes the next call fail with a
//! transport error, which is how tests drive the rollback paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use agora_core::{
    ActivityEvent, ActivityGateway, Comment, CommentDraft, CommentGateway, CommentPage,
    DomainError, GatewayResult, IssueGateway, ReactionGateway, ReactionKind, ReactionSnapshot,
    Reply, SpecialIssue, SpecialIssueSet, Stance, TargetRef, VoteGateway, VoteOutcome,
    VoteSnapshot, VoteSummary,
};

#[derive(Debug, Default)]
struct MockState {
    reactions: HashMap<TargetRef, ReactionSnapshot>,
    votes: HashMap<i64, VoteSnapshot>,
    nation_percent: HashMap<i64, HashMap<String, f64>>,
    /// Comments per debate, newest first
    comments: HashMap<i64, Vec<Comment>>,
    /// Replies per comment, newest first
    replies: HashMap<i64, Vec<Reply>>,
    issues: SpecialIssueSet,
    events: Vec<ActivityEvent>,
    fail_next: bool,
    /// Whether vote responses carry the country percentage map
    include_nation_percent: bool,
}

/// In-memory implementation of every gateway trait
pub struct MockBackend {
    state: Mutex<MockState>,
    next_id: AtomicI64,
    user_id: i64,
    user_name: String,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Create an empty mock backend
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                include_nation_percent: true,
                ..MockState::default()
            }),
            next_id: AtomicI64::new(1000),
            user_id: 1,
            user_name: "tester".to_string(),
        }
    }

    /// Use a specific identity for rows created through this backend
    #[must_use]
    pub fn with_user(mut self, user_id: i64, user_name: impl Into<String>) -> Self {
        self.user_id = user_id;
        self.user_name = user_name.into();
        self
    }

    // === Seeding ===

    /// Seed a target's reaction state
    pub fn seed_reactions(&self, target: TargetRef, snapshot: ReactionSnapshot) {
        self.state.lock().reactions.insert(target, snapshot);
    }

    /// Seed a debate's vote state and optional country percentages
    pub fn seed_vote(
        &self,
        debate_id: i64,
        snapshot: VoteSnapshot,
        nation_percent: Option<HashMap<String, f64>>,
    ) {
        let mut state = self.state.lock();
        state.votes.insert(debate_id, snapshot);
        if let Some(map) = nation_percent {
            state.nation_percent.insert(debate_id, map);
        }
    }

    /// Seed a debate's comment list (newest first)
    pub fn seed_comments(&self, debate_id: i64, comments: Vec<Comment>) {
        self.state.lock().comments.insert(debate_id, comments);
    }

    /// Seed a comment's reply list (newest first)
    pub fn seed_replies(&self, comment_id: i64, replies: Vec<Reply>) {
        self.state.lock().replies.insert(comment_id, replies);
    }

    /// Seed the special issue slots
    pub fn seed_issues(&self, issues: SpecialIssueSet) {
        self.state.lock().issues = issues;
    }

    // === Behavior switches ===

    /// Make the next gateway call fail with a transport error
    pub fn fail_next(&self) {
        self.state.lock().fail_next = true;
    }

    /// Control whether vote responses carry the country percentage map
    pub fn set_include_nation_percent(&self, include: bool) {
        self.state.lock().include_nation_percent = include;
    }

    // === Inspection ===

    /// Events recorded through the activity gateway
    #[must_use]
    pub fn recorded_events(&self) -> Vec<ActivityEvent> {
        self.state.lock().events.clone()
    }

    fn check_failure(state: &mut MockState) -> GatewayResult<()> {
        if state.fail_next {
            state.fail_next = false;
            return Err(DomainError::Transport("injected failure".to_string()));
        }
        Ok(())
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl ReactionGateway for MockBackend {
    async fn send(&self, target: TargetRef, kind: ReactionKind) -> GatewayResult<ReactionSnapshot> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        let current = state.reactions.entry(target).or_default();
        let (next, _) = current.toggle(kind);
        *current = next;
        Ok(next)
    }
}

#[async_trait]
impl VoteGateway for MockBackend {
    async fn cast(&self, debate_id: i64, stance: Stance) -> GatewayResult<VoteOutcome> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        let current = state.votes.entry(debate_id).or_default();
        let (next, _) = current.toggle(stance)?;
        *current = next;
        let total_votes = next.tally.total();

        let nation_percent = if state.include_nation_percent {
            state.nation_percent.get(&debate_id).cloned()
        } else {
            None
        };

        Ok(VoteOutcome {
            total_votes,
            nation_percent,
        })
    }

    async fn summary(&self, debate_id: i64) -> GatewayResult<VoteSummary> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        let snapshot = state.votes.get(&debate_id).copied().unwrap_or_default();
        Ok(VoteSummary {
            tally: snapshot.tally,
            ballot: snapshot.ballot,
            nation_percent: state
                .nation_percent
                .get(&debate_id)
                .cloned()
                .unwrap_or_default(),
        })
    }
}

#[async_trait]
impl CommentGateway for MockBackend {
    async fn list(&self, debate_id: i64, page: u32, size: u32) -> GatewayResult<CommentPage> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        let all = state.comments.get(&debate_id).cloned().unwrap_or_default();
        let total = all.len() as u64;
        let size = size.max(1);
        let total_pages = total.div_ceil(u64::from(size)) as u32;
        let page = page.max(1);

        let start = ((page - 1) * size) as usize;
        let items = all.into_iter().skip(start).take(size as usize).collect();

        Ok(CommentPage {
            items,
            total,
            total_pages,
            page,
        })
    }

    async fn create(&self, debate_id: i64, draft: &CommentDraft) -> GatewayResult<Comment> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        let comment = Comment::new(
            self.allocate_id(),
            debate_id,
            self.user_id,
            self.user_name.clone(),
            draft.content.clone(),
            draft.stance,
        );
        state
            .comments
            .entry(debate_id)
            .or_default()
            .insert(0, comment.clone());
        Ok(comment)
    }

    async fn update(&self, comment_id: i64, content: &str) -> GatewayResult<Comment> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        for list in state.comments.values_mut() {
            if let Some(comment) = list.iter_mut().find(|c| c.id == comment_id) {
                comment.edit(content.to_string());
                return Ok(comment.clone());
            }
        }
        Err(DomainError::CommentNotFound(comment_id))
    }

    async fn delete(&self, comment_id: i64) -> GatewayResult<()> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        let state = &mut *state;
        for list in state.comments.values_mut() {
            if let Some(pos) = list.iter().position(|c| c.id == comment_id) {
                list.remove(pos);
                state.replies.remove(&comment_id);
                return Ok(());
            }
        }
        Err(DomainError::CommentNotFound(comment_id))
    }

    async fn list_replies(&self, comment_id: i64) -> GatewayResult<Vec<Reply>> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        Ok(state.replies.get(&comment_id).cloned().unwrap_or_default())
    }

    async fn create_reply(&self, comment_id: i64, content: &str) -> GatewayResult<Reply> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        let reply = Reply::new(
            self.allocate_id(),
            comment_id,
            self.user_id,
            self.user_name.clone(),
            content.to_string(),
        );
        state
            .replies
            .entry(comment_id)
            .or_default()
            .insert(0, reply.clone());

        for list in state.comments.values_mut() {
            if let Some(parent) = list.iter_mut().find(|c| c.id == comment_id) {
                parent.reply_count = parent.reply_count.saturating_add(1);
                break;
            }
        }
        Ok(reply)
    }

    async fn update_reply(&self, reply_id: i64, content: &str) -> GatewayResult<Reply> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        for list in state.replies.values_mut() {
            if let Some(reply) = list.iter_mut().find(|r| r.id == reply_id) {
                reply.edit(content.to_string());
                return Ok(reply.clone());
            }
        }
        Err(DomainError::ReplyNotFound(reply_id))
    }

    async fn delete_reply(&self, reply_id: i64) -> GatewayResult<()> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;

        for list in state.replies.values_mut() {
            if let Some(pos) = list.iter().position(|r| r.id == reply_id) {
                list.remove(pos);
                return Ok(());
            }
        }
        Err(DomainError::ReplyNotFound(reply_id))
    }
}

#[async_trait]
impl IssueGateway for MockBackend {
    async fn home(&self) -> GatewayResult<SpecialIssueSet> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;
        Ok(state.issues.clone())
    }

    async fn today(&self) -> GatewayResult<Vec<SpecialIssue>> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;
        Ok(state.issues.today.clone())
    }

    async fn hot(&self) -> GatewayResult<Option<SpecialIssue>> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;
        Ok(state.issues.hot.clone())
    }

    async fn balanced(&self) -> GatewayResult<Option<SpecialIssue>> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;
        Ok(state.issues.balanced.clone())
    }
}

#[async_trait]
impl ActivityGateway for MockBackend {
    async fn record(&self, event: &ActivityEvent) -> GatewayResult<()> {
        let mut state = self.state.lock();
        Self::check_failure(&mut state)?;
        state.events.push(event.clone());
        Ok(())
    }
}
