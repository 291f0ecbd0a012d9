use std::fmt;
use std::str::FromStr;

/// Annotation category of an interval store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Promoter,
    Exon,
    Intron,
    Enhancer,
}

impl Category {
    /// Categories in the order they are tried. A promoter hit wins over an exon hit and so on.
    pub const PRIORITY: [Category; 4] = [
        Category::Promoter,
        Category::Exon,
        Category::Intron,
        Category::Enhancer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Promoter => "promoter",
            Category::Exon => "exon",
            Category::Intron => "intron",
            Category::Enhancer => "enhancer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "promoter" => Ok(Self::Promoter),
            "exon" => Ok(Self::Exon),
            "intron" => Ok(Self::Intron),
            "enhancer" => Ok(Self::Enhancer),
            _ => Err(format!("unknown category {}", s)),
        }
    }
}
