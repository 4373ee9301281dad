#![forbid(unsafe_code)]

//! Free-floating panels with edge snapping and reversible half-splits.
//!
//! Drag a panel near a screen edge or another panel's edge and a half-rect
//! preview arms; releasing commits the split, and picking a snapped panel
//! back up reverses it. The host toolkit delivers pointer events and renders
//! the panel list; all layout decisions live in [`SnapLayout`] and the pure
//! [`resolve_snap`] function.

pub mod snap_layout;

pub use snap_layout::{
    Panel, PanelId, SnapDecision, SnapLayout, SnapLayoutOptions, SnapSide, resolve_snap,
};
