//! Game policy as data: combo patterns, the rule table, and its loader.
//!
//! The engine never hardcodes payouts, thresholds, or penalties. Games
//! configure them through a [`RuleTable`], built in code via
//! [`RuleTable::standard()`] or loaded from JSON via [`loader`].

pub mod loader;
pub mod pattern;
pub mod table;

pub use pattern::ComboPattern;
pub use table::{
    ComboDefinition, CommandEffects, DealRule, DeckRule, DiamondRules, EmptyHandRule,
    HoardingRule, JackpotRule, KingEffects, PlayerLimits, RuleTable, VictoryRule,
};
