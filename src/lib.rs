//! Aurora Narrative — deterministic strategy, product and campaign
//! narratives.
//!
//! A prompt and a mode are hashed into a seed; every slot of the output
//! (lens, tone, insights, roadmap, call to action) is then filled by a
//! scoped selection from fixed phrase banks, so the same input always
//! yields the same narrative.

pub mod api;
pub mod core;
pub mod schema;
