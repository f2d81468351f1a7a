pub mod catalog_import;
pub mod repository;
pub mod service;
