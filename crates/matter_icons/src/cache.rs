//! Process-wide symbol font cache

use crate::family::{SymbolFamily, SymbolFont};
use rustc_hash::FxHashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Global cache instance
static SYMBOL_FONTS: OnceLock<SymbolFontCache> = OnceLock::new();

type FontKey = (SymbolFamily, bool);

/// Memoized symbol font descriptors keyed by (family, filled).
///
/// Concurrent first lookups of the same key may each build a descriptor,
/// but only the first one stored is ever handed out.
#[derive(Default)]
pub struct SymbolFontCache {
    fonts: RwLock<FxHashMap<FontKey, Arc<SymbolFont>>>,
}

impl SymbolFontCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache
    pub fn global() -> &'static SymbolFontCache {
        SYMBOL_FONTS.get_or_init(SymbolFontCache::new)
    }

    /// Get the font for a family and fill state, building it on first use
    pub fn get(&self, family: SymbolFamily, filled: bool) -> Arc<SymbolFont> {
        let key = (family, filled);

        // Descriptors are immutable once built, so a poisoned lock still
        // holds valid entries
        if let Some(font) = self
            .fonts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(font);
        }

        let font = Arc::new(SymbolFont::new(family, filled));
        let mut fonts = self.fonts.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(fonts.entry(key).or_insert_with(|| {
            tracing::debug!(?family, filled, "cached symbol font {}", font.name);
            font
        }))
    }

    pub fn len(&self) -> usize {
        self.fonts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached descriptors; handles already given out stay valid
    pub fn clear(&self) {
        self.fonts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
