pub mod address;
pub mod admin;
pub mod auth;
pub mod country;
pub mod platform;
pub mod scholarship;
pub mod school;
pub mod school_type;
pub mod taxonomy;
pub mod upload;
