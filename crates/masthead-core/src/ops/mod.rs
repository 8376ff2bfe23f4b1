pub mod article_ops;
pub mod author_ops;
pub mod magazine_ops;
pub mod registry;

pub use registry::Registry;
