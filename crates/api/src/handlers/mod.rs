pub mod application;
pub mod auth;
pub mod company;
pub mod debug;
pub mod project;
pub mod seed;
pub mod webhooks;
