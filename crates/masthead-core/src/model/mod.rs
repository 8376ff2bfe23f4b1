pub mod article;
pub mod author;
pub mod magazine;

pub use article::Article;
pub use author::Author;
pub use magazine::Magazine;
