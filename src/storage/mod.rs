pub mod minio;
pub mod tables;
pub mod writer;

pub use minio::MinioUploader;
pub use tables::{businesses_batch, photos_batch, reviews_batch};
pub use writer::TableWriter;
