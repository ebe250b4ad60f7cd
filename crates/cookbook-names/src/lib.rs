//! Recipe name normalization.
//!
//! Turns free-form handwritten names such as `"hamburger-Bun_"` into a
//! canonical display form (`"Hamburger Bun"`). The normalizer is pure and has
//! no knowledge of the entry store.
//!
//! # Modules
//!
//! - [`error`] — Error type for normalization failures
//! - [`normalize`] — The [`normalize`](normalize::normalize) function

pub mod error;
pub mod normalize;

pub use error::{NameError, Result};
pub use normalize::{is_separator, normalize};
