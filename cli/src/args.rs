//! Command-line parsing.
//!
//! Pattern: wordup [options] <command> [arguments...]
//!
//! Options may appear anywhere; everything after `--` is positional.

use std::path::PathBuf;

use wordup_core::Encoding;

use crate::error::CliError;

/// Usage text printed for `--help` and on usage errors.
pub const USAGE: &str = "\
Correct Horse Battery Staple-style passphrase generator

Usage:
  wordup [options] gen [--size=N] [ENCODING ...]
  wordup [options] expand <encoding> <text>
  wordup [options] encode <encoding> <words>...

  Where base64, base85 and hex are alternative encodings.
  Arguments after `--` are never read as options.

Options:
  -b N --size=N             Size in bits
  -f FILE --wordlist=FILE   Location of specific word list
  -d SEP --separator=SEP    Use this instead of space
  --json                    Print machine-readable output
  -h --help                 Show this text
  --version                 Show the version
";

/// What to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate a random passphrase, optionally showing its encodings.
    Gen {
        /// Encodings to show the passphrase in.
        encodings: Vec<Encoding>,
    },
    /// Turn encoded text back into words.
    Expand {
        /// Encoding of `text`.
        encoding: Encoding,
        /// The encoded integer.
        text: String,
    },
    /// Show given words in one encoding.
    Encode {
        /// Encoding to show.
        encoding: Encoding,
        /// The words, whitespace-split across arguments.
        words: Vec<String>,
    },
    /// Print usage.
    Help,
    /// Print the version.
    Version,
}

impl Command {
    /// Subcommand name, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Gen { .. } => "gen",
            Command::Expand { .. } => "expand",
            Command::Encode { .. } => "encode",
            Command::Help => "help",
            Command::Version => "version",
        }
    }

    /// Number of words or encodings the command was given.
    pub fn arguments(&self) -> usize {
        match self {
            Command::Gen { encodings } => encodings.len(),
            Command::Expand { .. } => 1,
            Command::Encode { words, .. } => words.len(),
            Command::Help | Command::Version => 0,
        }
    }
}

/// Flag values that override configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// `-b` / `--size`
    pub size: Option<u32>,
    /// `-f` / `--wordlist`
    pub wordlist: Option<PathBuf>,
    /// `-d` / `--separator`
    pub separator: Option<String>,
    /// `--json`
    pub json: bool,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The command to run.
    pub command: Command,
    /// Flags given alongside it.
    pub options: Options,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    let mut options = Options::default();
    let mut positionals: Vec<String> = Vec::new();
    let mut help = false;
    let mut version = false;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--" {
            positionals.extend_from_slice(&args[i + 1..]);
            break;
        }

        // Base85 text may start with '-'.
        if awaits_text(&positionals) {
            positionals.push(arg.clone());
            i += 1;
            continue;
        }

        if let Some(flag) = arg.strip_prefix("--") {
            let (name, inline) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (flag, None),
            };
            match name {
                "help" | "version" | "json" if inline.is_some() => {
                    return Err(CliError::Usage(format!("option '--{}' takes no value", name)));
                }
                "help" => help = true,
                "version" => version = true,
                "json" => options.json = true,
                "size" | "wordlist" | "separator" => {
                    let value = match inline {
                        Some(value) => value,
                        None => take_value(args, &mut i, arg)?,
                    };
                    set_option(&mut options, name, value)?;
                }
                _ => return Err(CliError::Usage(format!("unknown option '{}'", arg))),
            }
        } else if arg.len() >= 2 && arg.starts_with('-') {
            let mut chars = arg[1..].chars();
            let short = chars.next();
            let attached = chars.as_str();
            let name = match short {
                Some('h') => {
                    help = true;
                    i += 1;
                    continue;
                }
                Some('b') => "size",
                Some('f') => "wordlist",
                Some('d') => "separator",
                _ => return Err(CliError::Usage(format!("unknown option '{}'", arg))),
            };
            let value = if attached.is_empty() {
                take_value(args, &mut i, arg)?
            } else {
                attached.to_string()
            };
            set_option(&mut options, name, value)?;
        } else {
            positionals.push(arg.clone());
        }

        i += 1;
    }

    let command = if help {
        Command::Help
    } else if version {
        Command::Version
    } else {
        parse_command(&positionals)?
    };

    Ok(Invocation { command, options })
}

/// True when the next argument is the `<text>` of `expand`.
fn awaits_text(positionals: &[String]) -> bool {
    matches!(positionals, [command, _encoding] if command == "expand")
}

fn take_value(args: &[String], i: &mut usize, flag: &str) -> Result<String, CliError> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| CliError::Usage(format!("option '{}' needs a value", flag)))
}

fn set_option(options: &mut Options, name: &str, value: String) -> Result<(), CliError> {
    match name {
        "size" => {
            let bits = value
                .parse()
                .map_err(|_| CliError::Usage(format!("size must be a whole number of bits, got '{}'", value)))?;
            options.size = Some(bits);
        }
        "wordlist" => options.wordlist = Some(PathBuf::from(value)),
        _ => options.separator = Some(value),
    }
    Ok(())
}

fn parse_command(positionals: &[String]) -> Result<Command, CliError> {
    let Some((name, rest)) = positionals.split_first() else {
        return Ok(Command::Help);
    };

    match name.as_str() {
        "gen" => {
            let encodings = rest
                .iter()
                .map(|e| e.parse::<Encoding>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Command::Gen { encodings })
        }
        "expand" => match rest {
            [encoding, text] => Ok(Command::Expand {
                encoding: encoding.parse()?,
                text: text.clone(),
            }),
            _ => Err(CliError::Usage(
                "expand takes exactly <encoding> <text>".into(),
            )),
        },
        "encode" => {
            let Some((encoding, words)) = rest.split_first() else {
                return Err(CliError::Usage("encode needs <encoding> <words>...".into()));
            };
            let words: Vec<String> = words
                .iter()
                .flat_map(|w| w.split_whitespace())
                .map(str::to_owned)
                .collect();
            if words.is_empty() {
                return Err(CliError::Usage("encode needs at least one word".into()));
            }
            Ok(Command::Encode {
                encoding: encoding.parse()?,
                words,
            })
        }
        "help" => Ok(Command::Help),
        "version" => Ok(Command::Version),
        other => Err(CliError::Usage(format!("unknown command '{}'", other))),
    }
}
