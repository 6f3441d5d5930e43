// ============================================================================
// Forum Core - Vote Entity
// File: crates/forum-core/src/domain/vote.rs
// Description: Vote targets, signed vote values and the toggle/switch policy
// ============================================================================

use forum_shared::{CommentId, PostId};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Kind of content a vote can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Post,
    Comment,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Post => "post",
            TargetKind::Comment => "comment",
        }
    }

    /// Exact, case-sensitive parse of the wire name.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "post" => Ok(TargetKind::Post),
            "comment" => Ok(TargetKind::Comment),
            other => Err(DomainError::InvalidTarget(format!("unknown target kind '{}'", other))),
        }
    }
}

/// The post or comment a vote applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRef {
    Post(PostId),
    Comment(CommentId),
}

impl TargetRef {
    /// Validate raw request fields into a target.
    pub fn parse(kind: &str, id: i64) -> Result<Self, DomainError> {
        Self::new(TargetKind::parse(kind)?, id)
    }

    pub fn new(kind: TargetKind, id: i64) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::InvalidTarget(format!(
                "{} id must be positive, got {}",
                kind.as_str(),
                id
            )));
        }
        Ok(match kind {
            TargetKind::Post => TargetRef::Post(id),
            TargetKind::Comment => TargetRef::Comment(id),
        })
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            TargetRef::Post(_) => TargetKind::Post,
            TargetRef::Comment(_) => TargetKind::Comment,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            TargetRef::Post(id) | TargetRef::Comment(id) => *id,
        }
    }

    /// `(post_id, comment_id)` column pair; exactly one side is populated.
    pub fn columns(&self) -> (Option<PostId>, Option<CommentId>) {
        match self {
            TargetRef::Post(id) => (Some(*id), None),
            TargetRef::Comment(id) => (None, Some(*id)),
        }
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind().as_str(), self.id())
    }
}

/// Signed vote: like (+1) or dislike (-1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteValue {
    Like,
    Dislike,
}

impl VoteValue {
    pub fn as_i64(&self) -> i64 {
        match self {
            VoteValue::Like => 1,
            VoteValue::Dislike => -1,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            VoteValue::Like => VoteValue::Dislike,
            VoteValue::Dislike => VoteValue::Like,
        }
    }
}

impl TryFrom<i64> for VoteValue {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VoteValue::Like),
            -1 => Ok(VoteValue::Dislike),
            other => Err(DomainError::InvalidVoteValue(other)),
        }
    }
}

impl Serialize for VoteValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

/// Write the ledger performs for a requested vote, given the voter's
/// existing vote on the same target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    Insert,
    Delete,
    Update,
}

impl VoteTransition {
    pub fn decide(existing: Option<VoteValue>, requested: VoteValue) -> Self {
        match existing {
            None => VoteTransition::Insert,
            Some(current) if current == requested => VoteTransition::Delete,
            Some(_) => VoteTransition::Update,
        }
    }

    pub fn outcome(&self, requested: VoteValue) -> VoteOutcome {
        match self {
            VoteTransition::Insert => VoteOutcome::Applied(requested),
            VoteTransition::Delete => VoteOutcome::Removed,
            VoteTransition::Update => VoteOutcome::Switched(requested),
        }
    }
}

/// Result of applying a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Applied(VoteValue),
    Removed,
    Switched(VoteValue),
}

impl VoteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteOutcome::Applied(_) => "applied",
            VoteOutcome::Removed => "removed",
            VoteOutcome::Switched(_) => "switched",
        }
    }

    /// Vote the voter holds on the target after this outcome.
    pub fn current(&self) -> Option<VoteValue> {
        match self {
            VoteOutcome::Applied(value) | VoteOutcome::Switched(value) => Some(*value),
            VoteOutcome::Removed => None,
        }
    }
}

/// Like/dislike totals for one target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteCounts {
    pub likes: u64,
    pub dislikes: u64,
}
