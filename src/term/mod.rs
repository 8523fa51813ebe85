extern crate ansi_term;
extern crate clap;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use simple::error;
use simple::lang::{Error, Line};
use simple::mach::{Compiler, Event, Image, Runtime, MAX_CYCLES};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Compile and run programs written in Simple.
/// Without a FILE an interactive session is started.
#[derive(Parser, Debug)]
#[command(name = "simple", version)]
struct Args {
    /// Simple source file, or an SML image with --execute
    file: Option<PathBuf>,

    /// Compile only; print the symbol table and listing then write the SML image
    #[arg(short, long)]
    compile: bool,

    /// Load and run an SML image instead of compiling source
    #[arg(short = 'x', long, conflicts_with = "compile")]
    execute: bool,

    /// Where --compile writes the image. Defaults to FILE with an .sml extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the registers and memory after the program stops
    #[arg(long)]
    dump: bool,

    /// Print every executed instruction to stderr
    #[arg(long)]
    trace: bool,

    /// Halt after this many instructions
    #[arg(long, default_value_t = MAX_CYCLES)]
    max_cycles: usize,
}

pub fn main() {
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let result = match &args.file {
        Some(path) => run_file(&args, path, interrupted),
        None => main_loop(&args, interrupted),
    };
    if let Err(error) = result {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn run_file(args: &Args, path: &Path, interrupted: Arc<AtomicBool>) -> Result<(), Error> {
    let text = std::fs::read_to_string(path)?;
    if args.execute {
        let image = Image::from_sml(&text)?;
        return execute(args, &image, interrupted);
    }
    let mut compiler = Compiler::new();
    let image = compiler.compile(&text)?;
    if args.compile {
        print!("SYMBOLS:\n{}", compiler.symbols());
        print!("LISTING:\n{}", compiler.listing());
        let output = match &args.output {
            Some(output) => output.clone(),
            None => path.with_extension("sml"),
        };
        std::fs::write(&output, image.to_sml())?;
        println!("Wrote {}", output.display());
        return Ok(());
    }
    execute(args, &image, interrupted)
}

fn execute(args: &Args, image: &Image, interrupted: Arc<AtomicBool>) -> Result<(), Error> {
    let mut runtime = Runtime::with_cycle_limit(args.max_cycles);
    runtime.set_trace(args.trace);
    runtime.load(image);
    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let outcome = loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Running => {}
            Event::Print(s) => stdout.write_all(s.as_bytes())?,
            Event::Trace(s) => eprint!("{}", s),
            Event::Input(prompt) => {
                stdout.write_all(prompt.as_bytes())?;
                stdout.flush()?;
                let mut line = String::new();
                if stdin.read_line(&mut line)? == 0 {
                    runtime.interrupt();
                } else {
                    runtime.enter(&line);
                }
            }
            Event::Error(error) => break Err(error),
            Event::Stopped => break Ok(()),
        }
    };
    stdout.flush()?;
    if args.dump {
        print!("\n{}", runtime.registers());
        print!("\nMEMORY:\n{}", runtime.memory().grid());
    }
    outcome
}

const HELP: &str = "\
  10 print x    add or replace line 10
  10            delete line 10
  run           compile and run the program
  list          show the program
  listing       show the symbol table and compiled SML
  new           erase the program
  quit          leave";

fn main_loop(args: &Args, interrupted: Arc<AtomicBool>) -> Result<(), Error> {
    let mut runtime = Runtime::with_cycle_limit(args.max_cycles);
    runtime.set_trace(args.trace);
    let mut source: BTreeMap<u16, Line> = BTreeMap::new();
    let command = Interface::new("Simple")?;
    command.set_prompt("> ")?;
    let input = Interface::new("Input")?;
    input.set_report_signal(Signal::Interrupt, true);
    command.write_fmt(format_args!("Simple\nType help for commands.\n"))?;

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Stopped => {
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                command.add_history_unique(string.clone());
                match enter(&command, &mut runtime, &mut source, &string) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(error) => command.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?,
                }
            }
            Event::Input(prompt) => {
                input.set_prompt(&prompt)?;
                match input.read_line()? {
                    ReadResult::Input(string) => runtime.enter(&string),
                    ReadResult::Signal(Signal::Interrupt) => {
                        input.set_buffer("")?;
                        input.lock_reader().cancel_read_line()?;
                        runtime.interrupt();
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Trace(s) => {
                command.write_fmt(format_args!("{}", Style::new().dimmed().paint(s)))?;
            }
        }
    }
    Ok(())
}

/// Returns false when the session should end.
fn enter<T: Terminal>(
    command: &Interface<T>,
    runtime: &mut Runtime,
    source: &mut BTreeMap<u16, Line>,
    string: &str,
) -> Result<bool, Error> {
    let line = Line::new(string);
    if let Some(number) = line.number() {
        if line.is_empty() {
            source.remove(&number);
        } else {
            line.ast()?;
            source.insert(number, line);
        }
        return Ok(true);
    }
    match string.trim().to_ascii_lowercase().as_str() {
        "" => {}
        "run" => {
            let image = Compiler::new().compile(&program_text(source))?;
            runtime.load(&image);
        }
        "list" => {
            for line in source.values() {
                command.write_fmt(format_args!("{}\n", line))?;
            }
        }
        "listing" => {
            let mut compiler = Compiler::new();
            compiler.compile(&program_text(source))?;
            command.write_fmt(format_args!(
                "SYMBOLS:\n{}LISTING:\n{}",
                compiler.symbols(),
                compiler.listing()
            ))?;
        }
        "new" | "clear" => source.clear(),
        "help" => command.write_fmt(format_args!("{}\n", HELP))?,
        "quit" | "exit" => return Ok(false),
        _ => return Err(error!(SyntaxError; "UNKNOWN COMMAND; TRY help")),
    }
    Ok(true)
}

fn program_text(source: &BTreeMap<u16, Line>) -> String {
    source
        .values()
        .map(|line| format!("{}\n", line))
        .collect()
}
