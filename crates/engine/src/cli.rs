//! Command-line interface.
//!
//! Every command reads one actor document (JSON) from a file, or from
//! stdin when the path is `-` or omitted, and writes JSON to stdout.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use add2e_domain::{Ability, SaveCategory};

use crate::App;

/// AD&D 2nd Edition character sheet tools
#[derive(Debug, Parser)]
#[command(name = "add2e")]
#[command(about = "Recompute AD&D 2e character sheets and roll against them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rules configuration file (JSON); environment variables override it
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recompute derived statistics and print the updated document
    Recompute {
        /// Actor document, `-` for stdin
        input: Option<PathBuf>,
    },

    /// Roll against the actor's derived statistics
    #[command(subcommand)]
    Roll(RollCommand),
}

#[derive(Debug, Subcommand)]
pub enum RollCommand {
    /// d20 attack roll against THAC0
    Attack {
        input: Option<PathBuf>,
    },

    /// d20 saving throw (paralyze, poison, breath, magical, spell)
    Save {
        category: SaveCategory,
        input: Option<PathBuf>,
    },

    /// d20 ability check (str, dex, con, int, wis, cha)
    Ability {
        ability: Ability,
        input: Option<PathBuf>,
    },

    /// Attack with a weapon item and roll its damage
    Weapon {
        /// Item name (case-insensitive)
        item: String,
        input: Option<PathBuf>,
    },
}

impl Command {
    /// Run the command against `app`, reading stdin only when no input
    /// file is given.
    pub fn execute(self, app: &App, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
        match self {
            Command::Recompute { input } => {
                let json = read_input(input, stdin)?;
                let result = app.use_cases.character_sheet.recompute(&json)?;
                write_json(out, &result.document)
            }
            Command::Roll(roll) => roll.execute(app, stdin, out),
        }
    }
}

impl RollCommand {
    fn execute(self, app: &App, stdin: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
        let rolls = &app.use_cases.rolls;
        match self {
            RollCommand::Attack { input } => {
                let json = read_input(input, stdin)?;
                write_json(out, &rolls.attack(&json)?)
            }
            RollCommand::Save { category, input } => {
                let json = read_input(input, stdin)?;
                write_json(out, &rolls.saving_throw(&json, category)?)
            }
            RollCommand::Ability { ability, input } => {
                let json = read_input(input, stdin)?;
                write_json(out, &rolls.ability_check(&json, ability)?)
            }
            RollCommand::Weapon { item, input } => {
                let json = read_input(input, stdin)?;
                write_json(out, &rolls.weapon_attack(&json, &item)?)
            }
        }
    }
}

fn read_input(path: Option<PathBuf>, stdin: &mut dyn Read) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read actor document {}", path.display())),
        _ => {
            let mut json = String::new();
            stdin
                .read_to_string(&mut json)
                .context("Failed to read actor document from stdin")?;
            Ok(json)
        }
    }
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::random::FixedRandom;
    use add2e_domain::RulesConfig;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn app() -> App {
        App::new(RulesConfig::default(), Arc::new(FixedRandom(11)))
    }

    fn run(args: &[&str], stdin: &str) -> Result<Value> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        cli.command.execute(&app(), &mut stdin.as_bytes(), &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    fn cleric() -> String {
        json!({
            "name": "Brother Oswin",
            "system": {
                "abilities": {"wis": {"value": 17}},
                "details": {"class": "cleric", "level": 5}
            },
            "items": [{"name": "Mace", "type": "weapon", "system": {"damage": "1d6+1"}}]
        })
        .to_string()
    }

    #[test]
    fn recompute_reads_stdin() {
        let output = run(&["add2e", "recompute"], &cleric()).expect("recompute runs");
        assert_eq!(output["system"]["combat"]["thac0"]["value"], 18);
        assert_eq!(output["system"]["abilityMods"]["wis"], 2);
        assert_eq!(output["name"], "Brother Oswin");
    }

    #[test]
    fn recompute_reads_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("oswin.json");
        std::fs::write(&path, cleric()).expect("write document");

        let output = run(
            &["add2e", "recompute", path.to_str().expect("utf-8 path")],
            "",
        )
        .expect("recompute runs");
        assert_eq!(output["system"]["saves"]["paralyze"]["value"], 13);
    }

    #[test]
    fn roll_commands() {
        let attack = run(&["add2e", "roll", "attack", "-"], &cleric()).expect("attack runs");
        assert_eq!(attack["hitsAc"], 7);

        let save = run(&["add2e", "roll", "save", "spell"], &cleric()).expect("save runs");
        assert_eq!(save["target"], 16);
        assert_eq!(save["success"], true);

        let check = run(&["add2e", "roll", "ability", "wis"], &cleric()).expect("check runs");
        assert_eq!(check["total"], 13);

        let weapon = run(&["add2e", "roll", "weapon", "mace"], &cleric()).expect("weapon runs");
        assert_eq!(weapon["damage"]["total"], 7);
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["add2e", "roll", "save", "luck"]).is_err());
        assert!(Cli::try_parse_from(["add2e", "roll", "ability", "charm"]).is_err());
    }

    #[test]
    fn global_config_flag_parses() {
        let cli = Cli::try_parse_from(["add2e", "recompute", "--config", "rules.json"])
            .expect("arguments parse");
        assert_eq!(cli.config, Some(PathBuf::from("rules.json")));
    }

    #[test]
    fn missing_input_file_errors() {
        let error = run(&["add2e", "recompute", "/nonexistent/actor.json"], "")
            .expect_err("missing file fails");
        assert!(error.to_string().contains("Failed to read actor document"));
    }
}
