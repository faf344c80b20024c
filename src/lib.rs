//! Outputs viewer: browse and preview released output files.
//!
//! A Leptos client-side app mounted into a server-rendered page. The
//! framework-free pipeline lives in [`core`] and [`models`]; [`components`]
//! and [`app`] wire it to the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
