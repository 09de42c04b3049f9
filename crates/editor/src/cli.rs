//! `trainercard` subcommands.
//!
//! Every command opens the stored card, runs, and lets the session persist
//! whatever changed. Output goes to the given writer so commands can be
//! driven from tests.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use trainercard_domain::{parse_int_lenient, DerivedStats, Edit, HpInput, Stat, TrainerCard};

use crate::application::TrainerCardSession;
use crate::ports::StorageProvider;

pub const USAGE: &str = "Usage: trainercard <command>

Commands:
  show [--json]             Print the card with its derived values
  export [path]             Write the card to a JSON file
  import <path>             Replace the card with a JSON file
  reset                     Go back to the default card
  set-stat <stat> <value>   Change an attribute (saude, ataque, defesa, ...)
  set-level <value>         Change the trainer level
  set-hp <value>            Change current HP; accepts arithmetic such as 64-12";

/// Run one command against an open session.
pub fn run<S, I, W>(session: &mut TrainerCardSession<S>, args: I, out: &mut W) -> Result<()>
where
    S: StorageProvider,
    I: IntoIterator<Item = String>,
    W: Write,
{
    let mut args = args.into_iter();
    match args.next().as_deref() {
        Some("show") => match args.next().as_deref() {
            Some("--json") => show_json(session, out),
            Some(flag) => bail!("Unknown show option: {flag}"),
            None => show(session.card(), session.derived(), out),
        },
        Some("export") => export(session, args.next().map(PathBuf::from), out),
        Some("import") => {
            let path = args.next().context("import needs a file path")?;
            import(session, Path::new(&path), out)
        }
        Some("reset") => {
            session.reset();
            writeln!(out, "Trainer card reset to defaults")?;
            Ok(())
        }
        Some("set-stat") => {
            let stat = args.next().context("set-stat needs a stat name")?;
            let stat = Stat::from_str(&stat)?;
            let value = parse_int_lenient(&args.next().context("set-stat needs a value")?);
            session.apply(Edit::SetStat { stat, value })?;
            let line = session
                .derived()
                .stats
                .iter()
                .find(|line| line.stat == stat)
                .context("derived stats are missing an attribute")?;
            writeln!(out, "{}: {} ({:+})", stat.display_name(), line.value, line.modifier)?;
            Ok(())
        }
        Some("set-level") => {
            let value = parse_int_lenient(&args.next().context("set-level needs a value")?);
            session.apply(Edit::SetLevel(value))?;
            writeln!(out, "Level {}", session.card().level())?;
            Ok(())
        }
        Some("set-hp") => {
            let input = args.next().context("set-hp needs a value")?;
            let outcome = session.apply(Edit::SetCurrentHp(HpInput::Expression(input)))?;
            writeln!(
                out,
                "HP {}/{}",
                session.card().hp_current(),
                session.derived().hp_ceiling
            )?;
            if outcome.hp_repaired {
                writeln!(out, "(capped at the HP ceiling)")?;
            }
            Ok(())
        }
        Some(cmd) => bail!("Unknown command: {cmd}\n\n{USAGE}"),
        None => bail!(USAGE),
    }
}

fn show<W: Write>(card: &TrainerCard, derived: &DerivedStats, out: &mut W) -> Result<()> {
    let name = if card.character_name.trim().is_empty() {
        "(unnamed)"
    } else {
        card.character_name.as_str()
    };
    writeln!(out, "{name} - level {}", card.level())?;
    writeln!(out, "HP {}/{}", card.hp_current(), derived.hp_ceiling)?;

    writeln!(out)?;
    for line in &derived.stats {
        let flag = if line.over_cap { "  !" } else { "" };
        writeln!(
            out,
            "{:<18} {:>3} ({:+}){flag}",
            line.stat.display_name(),
            line.value,
            line.modifier
        )?;
    }

    writeln!(out)?;
    let ev = derived.evasions;
    writeln!(
        out,
        "Evasion   physical {} / special {} / speed {}",
        ev.physical, ev.special, ev.speed
    )?;
    let mv = derived.movement;
    writeln!(out, "Movement  land {} / swim {} / dive {}", mv.land, mv.swim, mv.dive)?;
    writeln!(
        out,
        "Points    {}/{}   Talents {}/{}   Stat cap {}",
        derived.spent_points,
        derived.point_budget,
        derived.talent_count,
        derived.talent_ceiling,
        derived.stat_cap
    )?;

    writeln!(out)?;
    for skill in &derived.skills {
        writeln!(out, "{:<24} {}", skill.name, skill.total)?;
    }

    let advisories = derived.advisories();
    if !advisories.is_empty() {
        writeln!(out)?;
        for advisory in advisories {
            writeln!(out, "warning: {advisory}")?;
        }
    }
    Ok(())
}

fn show_json<S: StorageProvider, W: Write>(session: &TrainerCardSession<S>, out: &mut W) -> Result<()> {
    let summary = serde_json::json!({
        "card": session.card(),
        "derived": session.derived(),
    });
    let text = serde_json::to_string_pretty(&summary).context("serializing card summary")?;
    writeln!(out, "{text}")?;
    Ok(())
}

fn export<S: StorageProvider, W: Write>(
    session: &TrainerCardSession<S>,
    path: Option<PathBuf>,
    out: &mut W,
) -> Result<()> {
    let sheet = session.export().context("serializing trainer card")?;
    let path = match path {
        Some(path) if path.is_dir() => path.join(&sheet.file_name),
        Some(path) => path,
        None => PathBuf::from(&sheet.file_name),
    };
    fs::write(&path, sheet.contents)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "Trainer card exported");
    writeln!(out, "Exported to {}", path.display())?;
    Ok(())
}

fn import<S: StorageProvider, W: Write>(
    session: &mut TrainerCardSession<S>,
    path: &Path,
    out: &mut W,
) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    session.import(&raw)?;
    writeln!(out, "Imported {}", session.card().character_name)?;
    Ok(())
}
