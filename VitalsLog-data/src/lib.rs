// VitalsLog Data
// This crate handles storage of logged health entries

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
