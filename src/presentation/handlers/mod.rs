mod download;
pub mod generate;
mod health;
mod landing;

pub use download::download_handler;
pub use generate::{generate_handler, ErrorResponse, GenerateResponse, DOWNLOAD_LINK};
pub use health::health_handler;
pub use landing::landing_handler;
