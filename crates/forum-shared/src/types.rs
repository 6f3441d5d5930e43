//! Common types

/// Row id of a registered user.
pub type UserId = i64;

/// Row id of a forum post.
pub type PostId = i64;

/// Row id of a comment under a post.
pub type CommentId = i64;
