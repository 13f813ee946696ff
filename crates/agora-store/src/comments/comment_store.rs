//! Paginated comment/reply cache
//!
//! Holds one page of comments per debate (a new page fetch replaces the
//! previous page wholesale, never merges) and lazily loaded reply lists
//! keyed by comment id. Optimistic placeholders live at the head of the
//! page until confirmed or discarded. Reaction writes on comments and
//! replies are sequence-checked like debate-level writes.

use std::collections::HashMap;

use agora_core::{Comment, CommentPage, ReactionSnapshot, Reply, TargetKind, TargetRef};
use parking_lot::RwLock;

use crate::sequence::SequenceMap;

/// One cached page of comments plus its pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentPageState {
    pub items: Vec<Comment>,
    pub total: u64,
    pub total_pages: u32,
    pub page: u32,
}

#[derive(Debug, Default)]
struct CommentState {
    /// Current page per debate
    pages: HashMap<i64, CommentPageState>,
    /// Loaded reply lists per comment
    replies: HashMap<i64, Vec<Reply>>,
}

/// Store of cached comment pages and reply lists
#[derive(Debug, Default)]
pub struct CommentStore {
    inner: RwLock<CommentState>,
    seq: SequenceMap,
}

impl CommentStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Pages ===

    /// Replace a debate's cached page wholesale
    pub fn replace_page(&self, debate_id: i64, page: CommentPage) {
        tracing::debug!(
            debate_id,
            page = page.page,
            items = page.items.len(),
            "Replaced comment page"
        );
        self.inner.write().pages.insert(
            debate_id,
            CommentPageState {
                items: page.items,
                total: page.total,
                total_pages: page.total_pages,
                page: page.page,
            },
        );
    }

    /// The cached page for a debate, if one was loaded
    #[must_use]
    pub fn page(&self, debate_id: i64) -> Option<CommentPageState> {
        self.inner.read().pages.get(&debate_id).cloned()
    }

    // === Comments ===

    /// Insert an optimistic placeholder at the head of the page
    pub fn insert_pending(&self, comment: Comment) {
        let mut inner = self.inner.write();
        let page = inner.pages.entry(comment.debate_id).or_default();
        page.items.insert(0, comment);
        page.total += 1;
    }

    /// Replace a placeholder with the authoritative row
    ///
    /// Returns `false` when the placeholder is no longer cached.
    pub fn confirm_pending(&self, debate_id: i64, temp_id: i64, authoritative: Comment) -> bool {
        let mut inner = self.inner.write();
        let Some(page) = inner.pages.get_mut(&debate_id) else {
            return false;
        };
        match page.items.iter_mut().find(|c| c.id == temp_id) {
            Some(slot) => {
                *slot = authoritative;
                true
            }
            None => false,
        }
    }

    /// Drop a placeholder whose remote call failed
    pub fn discard_pending(&self, debate_id: i64, temp_id: i64) {
        let mut inner = self.inner.write();
        if let Some(page) = inner.pages.get_mut(&debate_id) {
            let before = page.items.len();
            page.items.retain(|c| c.id != temp_id);
            if page.items.len() < before {
                page.total = page.total.saturating_sub(1);
            }
        }
    }

    /// Find a cached comment by id
    #[must_use]
    pub fn find_comment(&self, comment_id: i64) -> Option<Comment> {
        let inner = self.inner.read();
        inner
            .pages
            .values()
            .flat_map(|page| page.items.iter())
            .find(|c| c.id == comment_id)
            .cloned()
    }

    /// Replace a cached comment row by id
    pub fn apply_comment(&self, comment: Comment) -> bool {
        let mut inner = self.inner.write();
        for page in inner.pages.values_mut() {
            if let Some(slot) = page.items.iter_mut().find(|c| c.id == comment.id) {
                *slot = comment;
                return true;
            }
        }
        false
    }

    /// Optimistically edit a comment's content
    ///
    /// Returns the pre-edit row for rollback, or `None` when unknown.
    pub fn edit_comment(&self, comment_id: i64, content: &str) -> Option<Comment> {
        let mut inner = self.inner.write();
        for page in inner.pages.values_mut() {
            if let Some(slot) = page.items.iter_mut().find(|c| c.id == comment_id) {
                let previous = slot.clone();
                slot.edit(content.to_string());
                return Some(previous);
            }
        }
        None
    }

    /// Remove a comment and cascade-remove its cached replies
    ///
    /// Returns the removed row. Decrements the page total.
    pub fn remove_comment(&self, comment_id: i64) -> Option<Comment> {
        let mut inner = self.inner.write();
        let mut removed = None;
        for page in inner.pages.values_mut() {
            if let Some(pos) = page.items.iter().position(|c| c.id == comment_id) {
                removed = Some(page.items.remove(pos));
                page.total = page.total.saturating_sub(1);
                break;
            }
        }
        if removed.is_some() {
            inner.replies.remove(&comment_id);
            tracing::debug!(comment_id, "Removed comment and cascaded cached replies");
        }
        removed
    }

    // === Replies ===

    /// Replace a comment's loaded reply list
    pub fn replace_replies(&self, comment_id: i64, replies: Vec<Reply>) {
        self.inner.write().replies.insert(comment_id, replies);
    }

    /// The loaded reply list for a comment, if any
    #[must_use]
    pub fn replies(&self, comment_id: i64) -> Option<Vec<Reply>> {
        self.inner.read().replies.get(&comment_id).cloned()
    }

    /// Insert a confirmed reply at the head of its comment's list and bump
    /// the parent's reply count
    pub fn insert_reply(&self, reply: Reply) {
        let mut inner = self.inner.write();
        let comment_id = reply.comment_id;
        inner.replies.entry(comment_id).or_default().insert(0, reply);
        for page in inner.pages.values_mut() {
            if let Some(parent) = page.items.iter_mut().find(|c| c.id == comment_id) {
                parent.reply_count = parent.reply_count.saturating_add(1);
                break;
            }
        }
    }

    /// Replace a cached reply row by id
    pub fn apply_reply(&self, reply: Reply) -> bool {
        let mut inner = self.inner.write();
        for list in inner.replies.values_mut() {
            if let Some(slot) = list.iter_mut().find(|r| r.id == reply.id) {
                *slot = reply;
                return true;
            }
        }
        false
    }

    /// Optimistically edit a reply's content
    ///
    /// Returns the pre-edit row for rollback, or `None` when unknown.
    pub fn edit_reply(&self, reply_id: i64, content: &str) -> Option<Reply> {
        let mut inner = self.inner.write();
        for list in inner.replies.values_mut() {
            if let Some(slot) = list.iter_mut().find(|r| r.id == reply_id) {
                let previous = slot.clone();
                slot.edit(content.to_string());
                return Some(previous);
            }
        }
        None
    }

    /// Remove a reply, scanning every loaded list, and decrement the
    /// parent's reply count
    pub fn remove_reply(&self, reply_id: i64) -> Option<Reply> {
        let mut inner = self.inner.write();
        let mut removed = None;
        for list in inner.replies.values_mut() {
            if let Some(pos) = list.iter().position(|r| r.id == reply_id) {
                removed = Some(list.remove(pos));
                break;
            }
        }
        if let Some(reply) = &removed {
            let comment_id = reply.comment_id;
            for page in inner.pages.values_mut() {
                if let Some(parent) = page.items.iter_mut().find(|c| c.id == comment_id) {
                    parent.reply_count = parent.reply_count.saturating_sub(1);
                    break;
                }
            }
        }
        removed
    }

    // === Reactions ===

    /// Take a sequence ticket for a reaction mutation on a comment or reply
    pub fn issue_reaction_seq(&self, target: TargetRef) -> u64 {
        self.seq.issue(target)
    }

    /// The target's current reaction snapshot
    #[must_use]
    pub fn reaction_snapshot(&self, target: TargetRef) -> Option<ReactionSnapshot> {
        let inner = self.inner.read();
        match target.kind {
            TargetKind::Comment => inner
                .pages
                .values()
                .flat_map(|page| page.items.iter())
                .find(|c| c.id == target.id)
                .map(|c| c.reactions),
            TargetKind::Reply => inner
                .replies
                .values()
                .flat_map(|list| list.iter())
                .find(|r| r.id == target.id)
                .map(|r| r.reactions),
            TargetKind::Debate => None,
        }
    }

    /// Write a reaction snapshot, rejecting stale tickets
    pub fn apply_reactions(&self, target: TargetRef, snapshot: ReactionSnapshot, seq: u64) -> bool {
        let mut inner = self.inner.write();

        let slot = match target.kind {
            TargetKind::Comment => inner
                .pages
                .values_mut()
                .flat_map(|page| page.items.iter_mut())
                .find(|c| c.id == target.id)
                .map(|c| &mut c.reactions),
            TargetKind::Reply => inner
                .replies
                .values_mut()
                .flat_map(|list| list.iter_mut())
                .find(|r| r.id == target.id)
                .map(|r| &mut r.reactions),
            TargetKind::Debate => None,
        };

        let Some(slot) = slot else {
            return false;
        };
        if !self.seq.try_commit(target, seq) {
            tracing::debug!(target = %target, seq, "Discarded stale reaction write");
            return false;
        }
        *slot = snapshot;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::ReactionKind;

    fn comment(id: i64, debate_id: i64) -> Comment {
        Comment::new(id, debate_id, 100, "writer".into(), format!("c{id}"), None)
    }

    fn reply(id: i64, comment_id: i64) -> Reply {
        Reply::new(id, comment_id, 100, "writer".into(), format!("r{id}"))
    }

    fn page_of(debate_id: i64, ids: &[i64], total: u64, page: u32) -> CommentPage {
        CommentPage {
            items: ids.iter().map(|&id| comment(id, debate_id)).collect(),
            total,
            total_pages: 3,
            page,
        }
    }

    #[test]
    fn test_page_replacement_discards_previous_page() {
        let store = CommentStore::new();
        store.replace_page(1, page_of(1, &[1, 2, 3], 25, 1));
        store.replace_page(1, page_of(1, &[4, 5], 25, 2));

        let state = store.page(1).unwrap();
        assert_eq!(state.page, 2);
        assert_eq!(
            state.items.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![4, 5]
        );
        assert!(store.find_comment(1).is_none());
    }

    #[test]
    fn test_pending_placeholder_lifecycle() {
        let store = CommentStore::new();
        store.replace_page(1, page_of(1, &[1], 1, 1));

        store.insert_pending(comment(-1, 1));
        let state = store.page(1).unwrap();
        assert_eq!(state.items[0].id, -1);
        assert_eq!(state.total, 2);

        assert!(store.confirm_pending(1, -1, comment(9, 1)));
        let state = store.page(1).unwrap();
        assert_eq!(state.items[0].id, 9);
        assert_eq!(state.total, 2);
    }

    #[test]
    fn test_discard_pending_restores_total() {
        let store = CommentStore::new();
        store.replace_page(1, page_of(1, &[1], 1, 1));
        store.insert_pending(comment(-1, 1));

        store.discard_pending(1, -1);
        let state = store.page(1).unwrap();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total, 1);
    }

    #[test]
    fn test_remove_comment_cascades_replies() {
        let store = CommentStore::new();
        store.replace_page(1, page_of(1, &[5, 6], 2, 1));
        store.replace_replies(5, vec![reply(51, 5), reply(52, 5)]);

        let removed = store.remove_comment(5).unwrap();
        assert_eq!(removed.id, 5);
        assert!(store.replies(5).is_none());
        assert_eq!(store.page(1).unwrap().total, 1);
    }

    #[test]
    fn test_remove_reply_decrements_parent_count() {
        let store = CommentStore::new();
        store.replace_page(1, page_of(1, &[5], 1, 1));
        store.insert_reply(reply(51, 5));
        store.insert_reply(reply(52, 5));
        assert_eq!(store.find_comment(5).unwrap().reply_count, 2);

        let removed = store.remove_reply(51).unwrap();
        assert_eq!(removed.id, 51);
        assert_eq!(store.find_comment(5).unwrap().reply_count, 1);
        assert_eq!(store.replies(5).unwrap().len(), 1);
    }

    #[test]
    fn test_edit_comment_returns_previous_row() {
        let store = CommentStore::new();
        store.replace_page(1, page_of(1, &[5], 1, 1));

        let previous = store.edit_comment(5, "edited").unwrap();
        assert_eq!(previous.content, "c5");
        let current = store.find_comment(5).unwrap();
        assert_eq!(current.content, "edited");
        assert!(current.is_edited());
    }

    #[test]
    fn test_reaction_write_on_reply_checks_sequence() {
        let store = CommentStore::new();
        store.replace_page(1, page_of(1, &[5], 1, 1));
        store.replace_replies(5, vec![reply(51, 5)]);

        let target = TargetRef::reply(51);
        let first = store.issue_reaction_seq(target);
        let second = store.issue_reaction_seq(target);

        let mut snap = ReactionSnapshot::default();
        snap.counts.bump(ReactionKind::Like);
        snap.mine = Some(ReactionKind::Like);
        assert!(store.apply_reactions(target, snap, second));
        assert!(!store.apply_reactions(target, ReactionSnapshot::default(), first));
        assert_eq!(
            store.reaction_snapshot(target).unwrap().mine,
            Some(ReactionKind::Like)
        );
    }
}
