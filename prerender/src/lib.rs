//! Static export of the d56 landing pages.
//!
//! Both editions are rendered with Yew's server renderer and written out as
//! standalone HTML documents, together with a not-found page and a JSON
//! manifest of what was written.

pub mod config;
pub mod document;
pub mod export;
pub mod render;
