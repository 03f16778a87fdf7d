use clap::Parser;
use keyosk_core::{direction_for_locale, scan_code_for_slot, KeyValue, ShiftState};
use klc_tools::load_layout;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Dump the parsed tables of a .klc layout file", long_about = None)]
struct Args {
    /// Input .klc file path
    input: PathBuf,

    /// Also dump dead-key follower maps in full
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let layout = load_layout(&args.input)?;

    println!("Locale:    {}", layout.locale_name);
    println!("Direction: {:?}", direction_for_locale(&layout.locale_name));

    println!("\nShift-state columns:");
    for (name, state) in [
        ("default", ShiftState::Default),
        ("shift", ShiftState::Shift),
        ("ctrl", ShiftState::Ctrl),
        ("altgrp", ShiftState::AltGrp),
        ("ctrl+shift", ShiftState::CtrlShift),
        ("shift+altgrp", ShiftState::ShiftAltGrp),
    ] {
        match layout.shift_states.column(state) {
            Some(column) => println!("  {name:<13} column {column}"),
            None => println!("  {name:<13} (unsupported)"),
        }
    }

    println!("\nDead keys: {}", layout.dead_keys.len());
    if args.verbose {
        let mut codes: Vec<_> = layout.dead_keys.keys().collect();
        codes.sort();
        for code in codes {
            println!("  {code:04x}:");
            let mut pairs: Vec<_> = layout.dead_keys[code].iter().collect();
            pairs.sort();
            for (follower, composed) in pairs {
                println!("    {follower:04x} -> {composed:04x}");
            }
        }
    }

    println!("Ligatures: {}", layout.ligatures.len());
    if args.verbose {
        let mut names: Vec<_> = layout.ligatures.keys().collect();
        names.sort();
        for name in names {
            let codes: Vec<String> = layout.ligatures[name]
                .iter()
                .map(|c| format!("{c:04x}"))
                .collect();
            println!("  {name}: {}", codes.join(" "));
        }
    }

    println!("\nKey table:");
    println!("  slot  scan  default      shift        altgrp       shift+altgrp");
    for (slot, entry) in layout.key_slots.iter().enumerate() {
        println!(
            "  {:>4}  {:>4}  {:<12} {:<12} {:<12} {:<12}",
            slot,
            scan_code_for_slot(slot),
            render(&entry.default),
            render(&entry.shift),
            render(&entry.altgrp),
            render(&entry.shift_altgrp),
        );
    }

    Ok(())
}

fn render(value: &KeyValue) -> String {
    match value {
        KeyValue::Empty => "-".to_string(),
        KeyValue::Single(code) => format!("{:?}", value_text(&[*code])),
        KeyValue::DeadKey(code) => format!("{:?}@", value_text(&[*code])),
        KeyValue::Sequence(codes) => format!("{:?}", value_text(codes)),
        KeyValue::Literal(text) => format!("{text:?}"),
    }
}

fn value_text(codes: &[u16]) -> String {
    codes
        .iter()
        .filter_map(|&c| char::from_u32(u32::from(c)))
        .collect()
}
