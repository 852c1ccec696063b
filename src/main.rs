//! tcsh-dealias: print a tcsh command line after alias substitution.
//!
//! Usage: `tcsh-dealias <alias-table>|-noalias <cmd args ...>`
//!
//! The alias table is the output of tcsh's `alias` builtin. The remaining
//! arguments are joined into the command line to expand. Nothing is executed.

use tcsh_dealias::config::{Config, expand_path};
use tcsh_dealias::{AliasTable, Expander, logging, parse::text};

/// First argument meaning "no alias table".
const NO_ALIAS: &str = "-noalias";

fn usage(program: &str) {
    eprintln!();
    eprintln!("Take a tcsh alias table and a tcsh command and print the command after");
    eprintln!("alias substitution. The alias table can be created from within tcsh by:");
    eprintln!("  alias > alias.txt");
    eprintln!();
    eprintln!("usage: {program} <alias-table>|{NO_ALIAS} <cmd args ...>");
    eprintln!("       {program} --dump-config");
}

/// Load the alias table named on the command line. An unreadable file is
/// reported and treated as an empty table.
fn load_aliases(source: &str) -> AliasTable {
    if source == NO_ALIAS {
        return AliasTable::new();
    }
    let path = expand_path(source);
    match AliasTable::load(&path) {
        Ok(table) => table,
        Err(e) => {
            log::warn!("Unable to open file {source}: {e}");
            AliasTable::new()
        }
    }
}

/// Join the command words, then drop one pair of enclosing double quotes.
fn command_line(words: &[String]) -> String {
    let joined = text::trim(&words.join(" "));
    text::strip_enclosing(&joined, '"', '"')
}

// ─── Entry point ─────────────────────────────────────

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("tcsh-dealias", String::as_str);

    let Some(source) = args.get(1) else {
        usage(program);
        return;
    };

    let config = Config::load();

    if source == "--dump-config" {
        match config.to_toml() {
            Ok(toml) => print!("{toml}"),
            Err(e) => eprintln!("tcsh-dealias: cannot render config: {e}"),
        }
        return;
    }

    logging::init(&config.logging);

    let aliases = load_aliases(source);
    let command = command_line(&args[2..]);

    let expander = Expander::from_config(&aliases, &config.expansion);
    log::debug!(
        "expanding {command:?} with {} aliases, depth ceiling {}",
        aliases.len(),
        expander.max_depth()
    );
    println!("{}", expander.expand_line(&command));
}
