//! Store architecture primitives.
//!
//! This module provides the base traits for unidirectional data flow
//! between the presentation layer and the expense core.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Presentation
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of the tracked data
//! - **Action**: User actions dispatched by the presentation layer
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Owning handle that serializes dispatches and hands out
//!   state snapshots

mod action;
mod handle;
mod reducer;
mod state;

pub use action::Action;
pub use handle::Store;
pub use reducer::Reducer;
pub use state::StoreState;
