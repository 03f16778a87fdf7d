use clap::Parser;
use keyosk_core::KeyOutput;
use klc_tools::session_for_file;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replay a key sequence against a .klc layout and print the emitted text",
    long_about = None
)]
struct Args {
    /// Input .klc file path
    input: PathBuf,

    /// Key identifiers to press in order: characters (`a`), control names
    /// (`shift`, `caps lock`, `alt grp`, `backspace`, `space`, ...)
    keys: Vec<String>,

    /// Print the per-press outcome as well as the final buffer
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut session = session_for_file(&args.input)?;

    for key in &args.keys {
        let output = session.handle_key(key)?;
        if args.verbose {
            describe(key, &output);
        }
    }

    println!("{}", session.buffer_text());
    Ok(())
}

fn describe(key: &str, output: &KeyOutput) {
    match output {
        KeyOutput::None => eprintln!("{key:>12}: (no effect)"),
        KeyOutput::Insert(text) => eprintln!("{key:>12}: insert {text:?}"),
        KeyOutput::Delete => eprintln!("{key:>12}: delete"),
        KeyOutput::Rejected => eprintln!("{key:>12}: rejected by field constraints"),
        KeyOutput::DeadKeyPending(code) => eprintln!("{key:>12}: dead key {code:#06x} pending"),
        KeyOutput::TableChanged => eprintln!("{key:>12}: table changed"),
        KeyOutput::LanguageChanged(index) => eprintln!("{key:>12}: language -> {index}"),
    }
}
