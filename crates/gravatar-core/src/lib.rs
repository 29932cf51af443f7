pub mod domain;
pub mod error;
pub mod render;
pub mod url;

pub use domain::*;
pub use error::CoreError;
pub use render::{
    build, process, AttributeSink, AvatarAttributes, AvatarImage, TagContext, TagOutput,
};
pub use url::{avatar_url, AvatarUrl};
