pub mod install;
pub mod strategy;
pub mod sw_client;
