use std::fmt::Display;

use glam::Vec2;
use serde::Serialize;
use serde_json::json;

use scilab_engine::{
    known_compounds, lewis_dots, periodic_table, validate_bond, AtomId, ElementCategory, GameMode,
    LabConfig, LabError, LabSession, SessionSnapshot,
};

/// Owns one lab session and answers every call with a JSON string.
///
/// The wasm exports in `lib.rs` keep a `LabRunner` in a `thread_local!`,
/// because wasm-bindgen cannot hand a borrowed session across calls. Kept
/// free of wasm types so it runs under a native `cargo test`.
pub struct LabRunner {
    session: LabSession,
}

/// Mutation result: what happened, then the full state to re-render.
#[derive(Serialize)]
struct Reply<'a, T: Serialize> {
    outcome: T,
    state: SessionSnapshot<'a>,
}

impl LabRunner {
    pub fn new(config: LabConfig) -> Self {
        Self {
            session: LabSession::with_config(config),
        }
    }

    /// Build from a JSON config. An empty string means defaults.
    pub fn from_config_json(json: &str) -> Result<Self, LabError> {
        let config = if json.trim().is_empty() {
            LabConfig::default()
        } else {
            LabConfig::from_json(json)?
        };
        Ok(Self::new(config))
    }

    pub fn session(&self) -> &LabSession {
        &self.session
    }

    // ---- Session mutations ----

    pub fn set_mode(&mut self, mode: &str) -> String {
        match GameMode::parse(mode) {
            Some(mode) => {
                self.session.set_mode(mode);
                self.snapshot()
            }
            None => error_json(LabError::UnknownMode(mode.to_string())),
        }
    }

    pub fn drop_atom(&mut self, symbol: &str, x: f32, y: f32) -> String {
        match self.session.drop_atom(symbol, Vec2::new(x, y)) {
            Ok(outcome) => self.reply(outcome),
            Err(e) => error_json(e),
        }
    }

    pub fn move_atom(&mut self, id: u32, x: f32, y: f32) -> String {
        match self.session.move_atom(AtomId(id), Vec2::new(x, y)) {
            Ok(solved) => self.reply(solved),
            Err(e) => error_json(e),
        }
    }

    pub fn remove_atom(&mut self, id: u32) -> String {
        match self.session.remove_atom(AtomId(id)) {
            Ok(()) => self.snapshot(),
            Err(e) => error_json(e),
        }
    }

    pub fn clear(&mut self) -> String {
        self.session.clear_sandbox();
        self.snapshot()
    }

    pub fn submit_answer(&mut self) -> String {
        match self.session.submit_answer() {
            Ok(outcome) => self.reply(outcome),
            Err(e) => error_json(e),
        }
    }

    pub fn select_challenge(&mut self, level: u32) -> String {
        match self.session.select_challenge(level) {
            Ok(_) => self.snapshot(),
            Err(e) => error_json(e),
        }
    }

    pub fn snapshot(&self) -> String {
        to_json(&self.session.snapshot())
    }

    fn reply<T: Serialize>(&self, outcome: T) -> String {
        to_json(&Reply {
            outcome,
            state: self.session.snapshot(),
        })
    }
}

// ---- Catalog queries (no session needed) ----

pub fn elements() -> String {
    to_json(&periodic_table().all())
}

pub fn grid() -> String {
    to_json(&periodic_table().grid())
}

/// Search by name, symbol or atomic number. An empty `category` means any.
pub fn search(term: &str, category: &str) -> String {
    let filter = if category.is_empty() {
        None
    } else {
        match ElementCategory::parse(category) {
            Some(c) => Some(c),
            None => return error_json(format!("unknown element category: {category:?}")),
        }
    };
    to_json(&periodic_table().search(term, filter))
}

/// Known-compound metadata, or `null`.
pub fn compound(formula: &str) -> String {
    to_json(&known_compounds().lookup(formula))
}

pub fn validate(a: &str, b: &str) -> String {
    let table = periodic_table();
    match (table.lookup(a), table.lookup(b)) {
        (Some(a), Some(b)) => to_json(&validate_bond(a, b)),
        (None, _) => error_json(LabError::UnknownElement(a.to_string())),
        (_, None) => error_json(LabError::UnknownElement(b.to_string())),
    }
}

pub fn lewis(symbol: &str) -> String {
    match periodic_table().lookup(symbol) {
        Some(element) => to_json(&lewis_dots(element)),
        None => error_json(LabError::UnknownElement(symbol.to_string())),
    }
}

// ---- JSON helpers ----

pub fn error_json(err: impl Display) -> String {
    json!({ "error": err.to_string() }).to_string()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("failed to serialize reply: {e}");
        error_json(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn empty_config_means_defaults() {
        let runner = LabRunner::from_config_json("").unwrap();
        assert_eq!(runner.session().config(), &LabConfig::default());
        assert!(LabRunner::from_config_json("{not json").is_err());
    }

    #[test]
    fn drop_returns_outcome_and_state() {
        let mut runner = LabRunner::new(LabConfig::default());
        runner.drop_atom("Na", 0.0, 0.0);
        let reply = parse(&runner.drop_atom("Cl", 50.0, 0.0));
        assert_eq!(reply["outcome"]["outcome"], "placed");
        assert_eq!(reply["outcome"]["id"], 2);
        assert_eq!(reply["state"]["formula"], "NaCl");
        assert_eq!(reply["state"]["bonds"][0]["type"], "ionic");
        assert_eq!(reply["state"]["feedback"]["severity"], "success");
    }

    #[test]
    fn errors_are_json() {
        let mut runner = LabRunner::new(LabConfig::default());
        assert_eq!(
            parse(&runner.drop_atom("Zz", 0.0, 0.0))["error"],
            "unknown element symbol: \"Zz\""
        );
        assert_eq!(parse(&runner.remove_atom(3))["error"], "no placed atom with id atom-3");
        assert_eq!(parse(&runner.set_mode("arcade"))["error"], "unknown game mode: \"arcade\"");
        assert_eq!(parse(&runner.submit_answer())["error"], "no active quiz challenge");
        assert_eq!(parse(&runner.select_challenge(0))["error"], "no quiz challenge at level 0");
    }

    #[test]
    fn quiz_round_trip() {
        let mut runner = LabRunner::new(LabConfig::default());
        assert_eq!(parse(&runner.set_mode("quiz"))["currentChallenge"]["targetFormula"], "H2");

        let reply = parse(&runner.submit_answer());
        assert_eq!(reply["outcome"]["outcome"], "empty");
        assert_eq!(reply["state"]["attempts"], 1);

        runner.drop_atom("H", 0.0, 0.0);
        let reply = parse(&runner.drop_atom("H", 30.0, 0.0));
        assert_eq!(reply["outcome"]["outcome"], "solved");
        assert_eq!(reply["outcome"]["solved"]["points"], 150);
        assert_eq!(reply["state"]["progress"]["completed"], 1);
    }

    #[test]
    fn move_reports_no_solve_in_free_play() {
        let mut runner = LabRunner::new(LabConfig::default());
        runner.drop_atom("C", 0.0, 0.0);
        runner.drop_atom("O", 300.0, 0.0);
        let reply = parse(&runner.move_atom(2, 40.0, 0.0));
        assert!(reply["outcome"].is_null());
        assert_eq!(reply["state"]["atoms"][1]["id"], 2);
        assert_eq!(reply["state"]["bondSummary"]["covalent"], 1);
    }

    #[test]
    fn catalog_queries() {
        assert_eq!(parse(&elements()).as_array().unwrap().len(), 118);
        assert_eq!(parse(&grid()).as_array().unwrap().len(), 118);

        let found = parse(&search("chlor", ""));
        assert_eq!(found[0]["symbol"], "Cl");
        assert!(parse(&search("x", "plasma"))["error"].is_string());

        assert_eq!(parse(&compound("H2O"))["name"], "Water");
        assert!(parse(&compound("H9")).is_null());

        assert_eq!(parse(&validate("H", "He"))["valid"], false);
        assert_eq!(parse(&validate("H", "O"))["valid"], true);
        assert!(parse(&validate("H", "Qq"))["error"].is_string());

        let dots = parse(&lewis("N"));
        assert_eq!(dots.as_array().unwrap().len(), 8);
        assert_eq!(dots[4]["filled"], true);
        assert_eq!(dots[5]["filled"], false);
    }
}
