pub mod address;
pub mod admin;
pub mod auth;
pub mod bootstrap_admin;
pub mod cache;
pub mod country;
pub mod platform;
pub mod preview;
pub mod scholarship;
pub mod school;
pub mod school_type;
pub mod taxonomy;
pub mod upload;
