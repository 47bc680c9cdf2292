//! # Matter Icons
//!
//! Material Symbols font-family lookup.
//!
//! Symbol glyphs come from one of three variable font families. Whether a
//! glyph is drawn filled is selected through the `FILL` variation axis, so
//! every (family, filled) pair maps to one derived font descriptor. The
//! descriptors are built on first use and shared afterward.
//!
//! ## Usage
//!
//! ```
//! use matter_icons::{SymbolFamily, SymbolFontCache};
//!
//! let font = SymbolFontCache::global().get(SymbolFamily::Rounded, true);
//! assert_eq!(font.name, "Material Symbols Rounded");
//! assert_eq!(font.variation, "'FILL' 1");
//! ```

mod cache;
mod family;

pub use cache::SymbolFontCache;
pub use family::{SymbolFamily, SymbolFont};
