pub mod client;
pub mod error;
pub mod extract;
pub mod page;
pub mod types;

pub use client::PageClient;
pub use error::ScraperError;
pub use extract::extract;
pub use page::Page;
pub use types::ScrapedRecord;
