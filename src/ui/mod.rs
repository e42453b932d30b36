pub mod contrast;
pub mod filters;
pub mod gallery;
pub mod modal;
