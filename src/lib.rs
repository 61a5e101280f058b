pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod state;

#[cfg(test)]
mod testing;
