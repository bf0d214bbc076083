//! Legal document analysis backend.
//!
//! Accepts legal documents as raw text or uploaded files, delegates the
//! heavy lifting to managed cloud AI services (Gemini, Document AI,
//! Natural Language, Translation, Text-to-Speech), and republishes their
//! outputs as structured JSON over HTTP.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
