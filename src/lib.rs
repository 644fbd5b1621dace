//! Igreja Unida - website of the 1ª Igreja Unida de Inácio Monteiro
//!
//! This library provides the server-rendered site on top of the headless
//! content store.

pub mod api;
pub mod cache;
pub mod config;
pub mod content;
pub mod models;
pub mod services;
pub mod theme;
