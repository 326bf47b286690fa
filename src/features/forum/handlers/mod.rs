pub mod post_handler;

pub use post_handler::{
    __path_disposition_post, __path_list_pending_posts, __path_list_posts, __path_submit_post,
    disposition_post, list_pending_posts, list_posts, submit_post, ForumState,
};
