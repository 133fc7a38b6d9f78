//! Core state engine for the apparel design canvas. Pure element model,
//! hit-testing, drag gesture machine, and frame building; no rendering
//! backend and no network IO. Hosts feed pointer and panel events in and
//! replay the returned actions and display lists however they like.
//!
//! | module | contents |
//! |---|---|
//! | [`consts`] | canvas geometry, spawn defaults, hit-test slop |
//! | [`catalog`] | product/fabric/style/patch option lists and active choices |
//! | [`doc`] | canvas elements, their wire shape, the append-ordered list |
//! | [`text`] | text width measurement seam |
//! | [`hit`] | pointer-to-element hit-testing |
//! | [`input`] | tabs, selection, preview flag, drag state machine |
//! | [`editor`] | the session engine: events in, actions out |
//! | [`render`] | full-frame display list builder |

pub mod catalog;
pub mod consts;
pub mod doc;
pub mod editor;
pub mod hit;
pub mod input;
pub mod render;
pub mod text;
