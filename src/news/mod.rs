pub mod http;
pub mod service;
pub mod types;

pub use http::HttpNewsService;
pub use service::{NewsError, NewsService};
pub use types::RawArticle;
