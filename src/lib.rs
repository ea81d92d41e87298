//! concertina: collapsible two-level lists rendered as one flat list.
//!
//! A [`tree::TreeModel`] holds parent sections and their leaf children. The
//! [`controller::FlattenedListController`] maps flat row indices onto that tree,
//! drives expand/collapse under an [`policy::ExpansionPolicy`], and emits
//! [`delta::Delta`] batches that keep a renderer's rows in step.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod controller;
pub mod delta;
pub mod error;
pub mod input;
pub mod policy;
pub mod tree;
pub mod ui;
