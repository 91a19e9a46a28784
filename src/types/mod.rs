//! Type definitions for the Groq API.

pub mod chat;
