pub mod admin;
pub mod contact;
pub mod error;
pub mod events;
pub mod gallery;
pub mod root;
pub mod seed;
pub mod status;

pub use error::AppError;
