//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the two screens,
//! following ShadCN-UI design principles. Pages are rendered to full HTML
//! documents; the fragment endpoints render individual components for HTMX
//! to swap in.
//!
//! # Structure
//!
//! - [`app`]: HTML shell and page assembly
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Chat screen components
//! - [`lookup`]: Vehicle lookup screen components

pub mod app;
pub mod chat;
pub mod components;
pub mod lookup;
