pub mod application;
pub mod domain;
pub mod dto;
pub mod error;
pub mod service;
