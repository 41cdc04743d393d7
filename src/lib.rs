//! Valoruf - client-side pipeline for a daily UF series API
//!
//! This library implements the query-construction, transport,
//! response-normalization, and rendering pipeline behind the `valoruf`
//! command-line tool. The backend it talks to serves one numeric value per
//! calendar date under a fixed `/api/uf` base path.

pub mod cli;
pub mod client;
pub mod config;
pub mod query;
pub mod series;
pub mod view;
