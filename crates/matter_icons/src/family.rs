//! Symbol font families

/// Material Symbols style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymbolFamily {
    #[default]
    Outlined,
    Rounded,
    Sharp,
}

impl SymbolFamily {
    pub fn all() -> &'static [SymbolFamily] {
        &[
            SymbolFamily::Outlined,
            SymbolFamily::Rounded,
            SymbolFamily::Sharp,
        ]
    }

    /// Installed font family name
    pub fn family_name(&self) -> &'static str {
        match self {
            SymbolFamily::Outlined => "Material Symbols Outlined",
            SymbolFamily::Rounded => "Material Symbols Rounded",
            SymbolFamily::Sharp => "Material Symbols Sharp",
        }
    }
}

/// Font descriptor for one family in one fill state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolFont {
    pub family: SymbolFamily,
    pub filled: bool,
    /// Family name passed to the text system
    pub name: String,
    /// OpenType variation settings, e.g. `'FILL' 1`
    pub variation: String,
}

impl SymbolFont {
    pub fn new(family: SymbolFamily, filled: bool) -> Self {
        Self {
            family,
            filled,
            name: family.family_name().to_string(),
            variation: format!("'FILL' {}", u8::from(filled)),
        }
    }
}
