//! Medium Domain Layer
//!
//! Records and trait boundaries describing the content platform that the
//! statistics tools read from. Nothing in this crate talks to the network;
//! transports implement [`ContentPlatform`] in other crates.
//!
//! ## Key Concepts
//!
//! - **User**: an author account, addressed by username or opaque id
//! - **Article**: a published story with engagement counters (claps, responses, voters)
//! - **Publication**: a collection of articles, addressed by id or slug
//! - **Tag**: a topic label with article and author counts
//! - **Content format**: the rendering requested for an article body

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod error;
pub mod format;
pub mod publication;
pub mod tag;
pub mod traits;
pub mod user;

// Re-exports for convenience
pub use article::ArticleInfo;
pub use error::PlatformError;
pub use format::ContentFormat;
pub use publication::PublicationInfo;
pub use tag::TagInfo;
pub use traits::ContentPlatform;
pub use user::UserInfo;
