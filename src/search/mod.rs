pub mod fetcher;
pub mod pagination;
pub mod state;
pub mod summary;

pub const PAGE_SIZE: u32 = 10;
