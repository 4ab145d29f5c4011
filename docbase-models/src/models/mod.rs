//! Entity model definitions.

pub mod attachment;
pub mod comment;
pub mod group;
pub mod post;
pub mod scope;
pub mod tag;
pub mod user;
