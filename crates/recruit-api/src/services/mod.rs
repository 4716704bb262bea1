pub mod uploader;

pub use uploader::StoragePortfolioUploader;
