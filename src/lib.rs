//! Edition state core for a calm news reader.
//!
//! The crate owns the reading session (stories, progress, saved list and
//! reader settings) and exposes it through [`store::EditionStore`]. Screens
//! dispatch [`edition::EditionIntent`]s and re-render from snapshots; side
//! effects such as speech or notification scheduling are reported as
//! [`effects::Effect`]s for outside collaborators.

pub mod command;
pub mod config;
pub mod controller;
pub mod edition;
pub mod effects;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod render;
pub mod store;
