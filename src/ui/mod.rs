//! User interface components and views.
//!
//! This module contains all TUI rendering logic, including views for the
//! different screens and reusable UI components.

pub mod components;
pub mod theme;
pub mod views;
