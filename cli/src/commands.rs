//! Command handlers.
//!
//! Random generation uses a plain codec, so every bit of every word counts
//! toward the entropy budget. Encoding and expanding use the checksummed
//! codec, so mistyped or corrupted numbers are caught on the way back.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};
use wordup_core::{format_table, Encoding, LengthParity, Rendering, WordCodec, WordList};

use crate::args::{Command, Invocation, Options, USAGE};
use crate::config::Config;
use crate::error::CliError;
use crate::trace::TracingHook;

/// A phrase rendered in one or more encodings.
#[derive(Debug, Serialize)]
struct Shown {
    wordlist: String,
    fingerprint: String,
    renderings: Vec<Rendering>,
}

#[derive(Debug, Serialize)]
struct Generated<'a> {
    passphrase: String,
    words: &'a [&'a str],
    bits: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    shown: Option<Shown>,
}

#[derive(Debug, Serialize)]
struct Expanded<'a> {
    words: &'a [&'a str],
}

/// Run a parsed invocation, writing results to `out`.
pub fn run<W: Write>(invocation: &Invocation, config: &Config, out: &mut W) -> Result<(), CliError> {
    let config = apply_options(config, &invocation.options);
    let json = invocation.options.json;
    debug!(
        command = invocation.command.name(),
        arguments = invocation.command.arguments(),
        wordlist = ?config.wordlist,
        bits = config.bits,
        json,
        "Running command"
    );

    match &invocation.command {
        Command::Help => out.write_all(USAGE.as_bytes())?,
        Command::Version => writeln!(out, "wordup {}", env!("CARGO_PKG_VERSION"))?,
        Command::Gen { encodings } => generate(&config, encodings, json, out)?,
        Command::Expand { encoding, text } => expand(&config, *encoding, text, json, out)?,
        Command::Encode { encoding, words } => encode(&config, *encoding, words, json, out)?,
    }
    Ok(())
}

/// Flags take precedence over configuration.
fn apply_options(config: &Config, options: &Options) -> Config {
    Config {
        wordlist: options.wordlist.clone().or_else(|| config.wordlist.clone()),
        bits: options.size.unwrap_or(config.bits),
        separator: options
            .separator
            .clone()
            .unwrap_or_else(|| config.separator.clone()),
    }
}

fn checksummed(list: WordList) -> Result<WordCodec, CliError> {
    Ok(WordCodec::builder(list)
        .checksum(LengthParity)
        .diagnostics(TracingHook)
        .build()?)
}

fn show<S: AsRef<str>>(list: WordList, words: &[S], encodings: &[Encoding]) -> Result<Shown, CliError> {
    let wordlist = list.to_string();
    let fingerprint = list.fingerprint();
    let renderings = checksummed(list)?.show(words, encodings)?;
    Ok(Shown {
        wordlist,
        fingerprint,
        renderings,
    })
}

fn write_shown<W: Write>(out: &mut W, shown: &Shown) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "For {}", shown.wordlist)?;
    out.write_all(format_table(&shown.renderings).as_bytes())?;
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn generate<W: Write>(
    config: &Config,
    encodings: &[Encoding],
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let list = config.load_wordlist()?;
    let plain = WordCodec::builder(list.clone())
        .diagnostics(TracingHook)
        .build()?;
    let words = plain.generate(config.bits)?;
    info!(words = words.len(), bits = config.bits, "Generated passphrase");

    let shown = if encodings.is_empty() {
        None
    } else {
        Some(show(list, &words, encodings)?)
    };
    let passphrase = words.join(config.separator.as_str());

    if json {
        return write_json(
            out,
            &Generated {
                passphrase,
                words: &words,
                bits: config.bits,
                shown,
            },
        );
    }

    writeln!(out, "{}", passphrase)?;
    if let Some(shown) = &shown {
        write_shown(out, shown)?;
    }
    Ok(())
}

fn expand<W: Write>(
    config: &Config,
    encoding: Encoding,
    text: &str,
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let codec = checksummed(config.load_wordlist()?)?;
    let number = encoding.decode(text)?;
    let words = codec.decode(&number)?;

    if json {
        return write_json(out, &Expanded { words: &words });
    }
    writeln!(out, "{}", words.join(" "))?;
    Ok(())
}

fn encode<W: Write>(
    config: &Config,
    encoding: Encoding,
    words: &[String],
    json: bool,
    out: &mut W,
) -> Result<(), CliError> {
    let shown = show(config.load_wordlist()?, words, &[encoding])?;
    if json {
        return write_json(out, &shown);
    }
    write_shown(out, &shown)
}
