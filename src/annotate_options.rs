use crate::gene_model::GeneModelFormat;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// SelectionMode decides how the best interval within a category is chosen.
#[derive(Eq, PartialEq, Debug, Clone, Copy, ValueEnum, Default)]
pub enum SelectionMode {
    /// Walk overlapping intervals in start order and stop at the first one that is not closer.
    #[default]
    #[value(name = "greedy")]
    Greedy,

    /// Consider every overlapping interval and keep the one with the smallest midpoint distance.
    #[value(name = "nearest")]
    Nearest,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Greedy => write!(f, "greedy"),
            SelectionMode::Nearest => write!(f, "nearest"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

/// Largest accepted promoter or enhancer range. Longer than any chromosome.
pub const MAX_RANGE: u64 = u32::MAX as u64;

/// Error returned by [`AnnotateOptions::validate`].
#[derive(Debug, PartialEq, Eq)]
pub enum OptionsError {
    RangeTooLarge { name: &'static str, range: u64 },
    EnhancerNotLargerThanPromoter { promoter: u64, enhancer: u64 },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptionsError::RangeTooLarge { name, range } => write!(
                f,
                "{} range ({}) must not be larger than {}",
                name, range, MAX_RANGE
            ),
            OptionsError::EnhancerNotLargerThanPromoter { promoter, enhancer } => write!(
                f,
                "enhancer range ({}) must be larger than promoter range ({}) if not set to zero",
                enhancer, promoter
            ),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Options for building the annotation index and choosing matches.
///
/// # Examples
///
/// ```
/// use bedanno::annotate_options::{AnnotateOptions, SelectionMode};
/// use bedanno::gene_model::GeneModelFormat;
///
/// let options = AnnotateOptions::builder()
///     .format(GeneModelFormat::RefGene)
///     .promoter_range(2000)
///     .enhancer_range(10000)
///     .selection(SelectionMode::Nearest)
///     .build();
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateOptions {
    pub format: GeneModelFormat,
    /// half-width of the promoter window around the TSS.
    pub promoter_range: u64,
    /// half-width of the enhancer window around the TSS. 0 disables enhancers.
    pub enhancer_range: u64,
    /// label intervals with the name2 (gene name) column instead of the transcript name.
    pub use_name2: bool,
    pub selection: SelectionMode,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        AnnotateOptionsBuilder::new().build()
    }
}

impl AnnotateOptions {
    /// Create a new builder for AnnotateOptions
    pub fn builder() -> AnnotateOptionsBuilder {
        AnnotateOptionsBuilder::new()
    }

    /// Check the ranges before any file is read.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (name, range) in [
            ("promoter", self.promoter_range),
            ("enhancer", self.enhancer_range),
        ] {
            if range > MAX_RANGE {
                return Err(OptionsError::RangeTooLarge { name, range });
            }
        }
        if self.enhancer_range != 0 && self.enhancer_range <= self.promoter_range {
            return Err(OptionsError::EnhancerNotLargerThanPromoter {
                promoter: self.promoter_range,
                enhancer: self.enhancer_range,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn enhancers_enabled(&self) -> bool {
        self.enhancer_range != 0 && self.enhancer_range > self.promoter_range
    }
}

/// Builder for AnnotateOptions.
pub struct AnnotateOptionsBuilder {
    format: GeneModelFormat,
    promoter_range: u64,
    enhancer_range: u64,
    use_name2: bool,
    selection: SelectionMode,
}

impl Default for AnnotateOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotateOptionsBuilder {
    /// Create a new AnnotateOptionsBuilder with default values
    pub fn new() -> Self {
        Self {
            format: GeneModelFormat::GenePredExt,
            promoter_range: 3000,
            enhancer_range: 0,
            use_name2: false,
            selection: SelectionMode::Greedy,
        }
    }

    pub fn format(mut self, format: GeneModelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn promoter_range(mut self, range: u64) -> Self {
        self.promoter_range = range;
        self
    }

    pub fn enhancer_range(mut self, range: u64) -> Self {
        self.enhancer_range = range;
        self
    }

    pub fn use_name2(mut self, use_name2: bool) -> Self {
        self.use_name2 = use_name2;
        self
    }

    pub fn selection(mut self, selection: SelectionMode) -> Self {
        self.selection = selection;
        self
    }

    /// Build the AnnotateOptions. Call `validate` on the result before use.
    pub fn build(self) -> AnnotateOptions {
        AnnotateOptions {
            format: self.format,
            promoter_range: self.promoter_range,
            enhancer_range: self.enhancer_range,
            use_name2: self.use_name2,
            selection: self.selection,
        }
    }
}
