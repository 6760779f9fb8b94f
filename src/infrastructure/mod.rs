//! Infrastructure layer - Store, HTTP clients and screen controllers

pub mod catalog;
pub mod logging;
pub mod login;
pub mod preferences;
pub mod registration;
pub mod storage;
pub mod user;
