//! Application service modules.

pub mod directory_service;
