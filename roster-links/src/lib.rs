//! Server-side pagination link renderer.
//!
//! Where the full collection lives server-side, navigation is plain links
//! instead of client state: each link carries the whole query string of the
//! incoming request with only the `page` parameter swapped out. This crate
//! captures the request's parameters once per render, derives one stable URL
//! per target page, and produces the prev/number/gap/next markup in the same
//! navigational shape as the client-side control in `roster-view` (current
//! page highlighted and non-interactive, missing edges disabled, everything
//! else preserved verbatim).
//!
//! Which page numbers appear, and where runs are elided into gaps, is decided
//! by the caller; this crate only renders the slot sequence it is given.

pub mod error;
pub mod params;
pub mod renderer;

pub use error::LinkError;
pub use params::{ROUTING_KEYS, RequestParameters};
pub use renderer::{LinkRenderer, Slot};
