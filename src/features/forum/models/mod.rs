mod forum_post;

pub use forum_post::{CreateForumPost, ForumPost};
