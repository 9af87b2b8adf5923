use strum::{Display, EnumString, VariantArray};

/// How hard a level is meant to be. Carried with the level, no effect on the rules.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// First steps.
    #[default]
    Starter,
    /// Easy.
    Junior,
    /// Moderate.
    Expert,
    /// Hard.
    Master,
    /// Hardest.
    Wizard,
}
