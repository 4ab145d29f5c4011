//! DocBase Models - Typed values exchanged with the DocBase API.
//!
//! Response entities (`Post`, `Tag`, `User`, ...) are decoded from the
//! server's JSON; request types (`CreatePostRequest`, `UpdatePostRequest`)
//! are built by callers and validated before anything is sent.

pub mod models;
pub mod requests;

// Re-export key types
pub use models::attachment::Attachment;
pub use models::comment::Comment;
pub use models::group::Group;
pub use models::post::Post;
pub use models::scope::Scope;
pub use models::tag::Tag;
pub use models::user::User;
pub use requests::{CreatePostRequest, UpdatePostRequest};
