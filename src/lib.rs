//! Headline statistics for the TechPotato Softwares site, revealed with an
//! eased count-up the first time they come into view.
//!
//! The library is host-agnostic: [`reveal`] is the animation core,
//! [`content`] the typed content document, [`visibility`] and [`carousel`]
//! the small pieces of view state around them. The `plugin` binary hosts
//! them on Stream Deck keys.

pub mod carousel;
pub mod content;
pub mod reveal;
pub mod visibility;
