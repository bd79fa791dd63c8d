pub mod district;
pub mod feed;
