//! Rule table loading.
//!
//! Tables ship as JSON documents (see `RuleTable`'s serde layout; the
//! combo list uses the short field names `count`/`steps`/`draw`/`discard`/
//! `king_doubles`). Loading funnels every document through
//! [`RuleTable::validate`], so a table that parses but breaks an invariant
//! is rejected the same way as malformed JSON: with
//! [`GameError::InvalidConfig`].

use std::io::Read;

use super::table::RuleTable;
use crate::error::GameError;

/// Parse and validate a rule table from a JSON string.
pub fn from_json_str(json: &str) -> Result<RuleTable, GameError> {
    let table: RuleTable = serde_json::from_str(json)
        .map_err(|e| GameError::invalid_config(format!("malformed rule table: {e}")))?;
    table.validate()?;
    Ok(table)
}

/// Parse and validate a rule table from a reader (file, socket, etc.).
pub fn from_reader<R: Read>(mut reader: R) -> Result<RuleTable, GameError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|e| GameError::invalid_config(format!("unreadable rule table: {e}")))?;
    from_json_str(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::pattern::ComboPattern;

    #[test]
    fn test_standard_round_trips() {
        let table = RuleTable::standard();
        let json = serde_json::to_string_pretty(&table).unwrap();

        let loaded = from_json_str(&json).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_handwritten_document() {
        let json = r#"{
            "players": { "min": 2, "max": 4 },
            "victory": { "goal_steps": 15, "floor_steps": 0 },
            "deal": { "initial_hand": 5, "draws_per_turn": 1 },
            "deck": { "double_deck_at": 4, "keep_top_discard_on_reshuffle": true },
            "combos": [
                { "id": "two_blacks", "pattern": "two_blacks", "count": 2,
                  "steps": 2, "draw": 0, "discard": 0, "king_doubles": true }
            ],
            "kings": { "black_steps": -2, "heart_steps": 2, "diamond_draw": 2 },
            "diamonds": {
                "swap_limit_per_turn": 1,
                "command": { "black_steps": -1, "heart_steps": 1, "early_diamond_draw": 1 },
                "jackpot": { "threshold": 4, "reward_steps": 5 },
                "hoarding": { "active_from_round": 3, "step_delta": -1,
                              "refill": 6, "discard_owned_public": true }
            },
            "empty_hand": { "step_delta": -1, "refill": 6 }
        }"#;

        let table = from_json_str(json).unwrap();

        assert_eq!(table.victory.goal_steps, 15);
        assert_eq!(table.deal.initial_hand, 5);
        assert!(table.deck.keep_top_discard_on_reshuffle);
        assert_eq!(table.combos.len(), 1);
        assert_eq!(table.combos[0].pattern, ComboPattern::TwoBlacks);
        assert_eq!(table.combos[0].steps_delta, 2);
        assert_eq!(table.diamonds.jackpot.threshold, 4);
        assert_eq!(table.diamonds.hoarding.active_from_round, 3);
    }

    #[test]
    fn test_malformed_json_is_invalid_config() {
        let err = from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { .. }));
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_unknown_pattern_is_invalid_config() {
        let mut json = serde_json::to_value(RuleTable::standard()).unwrap();
        json["combos"][0]["pattern"] = serde_json::json!("five_kings");

        let err = from_json_str(&json.to_string()).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { .. }));
    }

    #[test]
    fn test_invalid_table_rejected_after_parse() {
        let mut json = serde_json::to_value(RuleTable::standard()).unwrap();
        // Arity mismatch: two_blacks with count 3.
        json["combos"][7]["count"] = serde_json::json!(3);

        let err = from_json_str(&json.to_string()).unwrap_err();
        assert!(err.to_string().contains("does not match pattern arity"));
    }

    #[test]
    fn test_from_reader() {
        let table = RuleTable::standard();
        let json = serde_json::to_string(&table).unwrap();

        let loaded = from_reader(json.as_bytes()).unwrap();
        assert_eq!(loaded, table);
    }
}
