pub mod service;
pub mod transfer;
pub mod viewmodel;
