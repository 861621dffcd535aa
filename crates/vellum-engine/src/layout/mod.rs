//! # Block Layout
//!
//! The per-block vertical spacing plan shared by both rendering surfaces
//! (the flowing rich-text view and the per-block view tree).
//!
//! - **`groups`**: folds the flat node stream into renderable units, the
//!   one place list runs are grouped.
//! - **`spacing`**: the proximity table — gap size communicates grouping;
//!   small gaps bind related content, large gaps separate groups.
//!
//! Everything here is pure: same input, same plan, no shared state.

pub mod groups;
pub mod spacing;

pub use groups::{ContentGroup, ListGroup, group_blocks};
pub use spacing::{assign_gaps, gap_before};
