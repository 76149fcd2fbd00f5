pub mod auth_modal;
pub mod landing;
