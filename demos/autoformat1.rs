//!
//! Replays some keystrokes into a few masked fields
//! and prints the state after each one.
//!

use rat_autoformat::{AutoFormatState, MaskConfig};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy)]
enum Key {
    Char(char),
    Paste(&'static str),
    Backspace,
    Delete,
    Left,
    Home,
}

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut phone = AutoFormatState::from_config(&MaskConfig::new("(###) ###-####"));
    replay(
        "phone",
        &mut phone,
        &[
            Key::Char('5'),
            Key::Char('5'),
            Key::Char('5'),
            Key::Char('1'),
            Key::Char('2'),
            Key::Backspace,
            Key::Backspace,
            Key::Backspace,
            Key::Paste("1234567"),
            Key::Paste("99"),
        ],
    );

    let mut date = AutoFormatState::from_config(
        &MaskConfig::new("__.__.____").placeholder(MaskConfig::parse_placeholder(Some("_"))),
    );
    replay(
        "date",
        &mut date,
        &[
            Key::Paste("24122024"),
            Key::Home,
            Key::Delete,
            Key::Char('1'),
            Key::Left,
        ],
    );

    let mut plain = AutoFormatState::new();
    replay("plain", &mut plain, &[Key::Paste("no mask"), Key::Backspace]);

    Ok(())
}

fn replay(name: &str, state: &mut AutoFormatState, keys: &[Key]) {
    println!("{} {:?}", name, state.mask());
    for key in keys {
        let changed = match *key {
            Key::Char(c) => state.insert_char(c),
            Key::Paste(s) => state.insert_str(s),
            Key::Backspace => state.delete_prev_char(),
            Key::Delete => state.delete_next_char(),
            Key::Left => state.set_cursor(state.cursor().saturating_sub(1), false),
            Key::Home => state.set_cursor(0, false),
        };
        println!(
            "    {:<14} {:<16} {:<12} cursor={:<3} changed={:<5} complete={}",
            format!("{:?}", key),
            format!("{:?}", state.text()),
            format!("{:?}", state.unformatted_text()),
            state.cursor(),
            changed,
            state.is_complete()
        );
    }
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("autoformat.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
