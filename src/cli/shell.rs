use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use crate::cli::output::{write_database, write_match, write_nucleotide_counts, write_profile};
use crate::session::{Command, Session, SessionError};

#[derive(Args)]
pub struct ShellArgs {
    /// Database to load before the first prompt
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// DNA sample to load before the first prompt
    #[arg(long)]
    pub dna: Option<PathBuf>,

    /// Do not print the command prompt (for piped input)
    #[arg(long)]
    pub no_prompt: bool,
}

/// Execute shell subcommand
///
/// # Errors
///
/// Returns an error only if reading stdin or writing stdout fails; command
/// failures are reported inline and the loop continues.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ShellArgs) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut shell = Shell::new(stdout.lock(), !args.no_prompt);
    shell.greet()?;

    if let Some(path) = &args.database {
        shell.execute(Command::LoadDatabase(path.display().to_string()))?;
    }
    if let Some(path) = &args.dna {
        shell.execute(Command::LoadDna(path.display().to_string()))?;
    }

    shell.run(io::stdin().lock())?;
    Ok(())
}

pub const PROMPT: &str = "Enter command or # to exit: ";

/// Line-oriented command interpreter over a [`Session`]
pub struct Shell<W: Write> {
    session: Session,
    out: W,
    prompt: bool,
}

impl<W: Write> Shell<W> {
    pub fn new(out: W, prompt: bool) -> Self {
        Self {
            session: Session::new(),
            out,
            prompt,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Print the welcome banner
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing output fails.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to the DNA Profiling Application.")
    }

    /// Read commands until `#` or end of input
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading input or writing output fails.
    pub fn run(&mut self, input: impl BufRead) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(self.out, "{PROMPT}")?;
                self.out.flush()?;
            }

            let Some(line) = lines.next().transpose()? else {
                break;
            };

            if !self.execute(Command::parse(&line))? {
                break;
            }
        }

        self.out.flush()
    }

    /// Run a single command. Returns `false` when the shell should exit.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing output fails.
    pub fn execute(&mut self, command: Command) -> io::Result<bool> {
        debug!("Command: {command:?}");

        match command {
            Command::Exit => return Ok(false),
            Command::Empty => {}
            Command::LoadDatabase(file) => {
                writeln!(self.out, "Loading database...")?;
                if let Err(e) = self.session.load_database(Path::new(&file)) {
                    self.report_load_error(&file, &e)?;
                }
            }
            Command::LoadDna(file) => {
                writeln!(self.out, "Loading DNA...")?;
                if let Err(e) = self.session.load_sample(Path::new(&file)) {
                    self.report_load_error(&file, &e)?;
                }
            }
            Command::Display => self.display()?,
            Command::Process => self.process()?,
            Command::Search => self.search()?,
            Command::CountNucleotides => self.count_nucleotides()?,
            Command::Unknown(word) => writeln!(self.out, "Unknown command: '{word}'")?,
        }

        Ok(true)
    }

    fn report_load_error(&mut self, file: &str, err: &SessionError) -> io::Result<()> {
        debug!("Load of '{file}' failed: {err}");
        if err.is_unopenable() {
            writeln!(self.out, "Error: unable to open '{file}'")
        } else {
            writeln!(self.out, "Error: {err}")
        }
    }

    fn display(&mut self) -> io::Result<()> {
        match self.session.database() {
            Some(db) => {
                writeln!(self.out, "Database loaded: ")?;
                write_database(&mut self.out, db)?;
            }
            None => writeln!(self.out, "No database loaded.")?,
        }

        match self.session.sample() {
            Some(sample) => {
                writeln!(self.out, "DNA loaded: ")?;
                writeln!(self.out, "{sample}")?;
                writeln!(self.out)?;
            }
            None => writeln!(self.out, "No DNA loaded.")?,
        }

        match (self.session.database(), self.session.profile()) {
            (Some(db), Some(profile)) => {
                writeln!(self.out, "DNA processed, STR counts:")?;
                write_profile(&mut self.out, db.patterns(), profile)
            }
            _ => writeln!(self.out, "No DNA has been processed."),
        }
    }

    fn process(&mut self) -> io::Result<()> {
        if let Err(e) = self.session.ensure_inputs() {
            return writeln!(self.out, "{e}");
        }

        writeln!(self.out, "Processing DNA...")?;
        if let Err(e) = self.session.process() {
            writeln!(self.out, "Error: {e}")?;
        }
        Ok(())
    }

    fn search(&mut self) -> io::Result<()> {
        match self.session.search() {
            Ok(result) => {
                writeln!(self.out, "Searching database...")?;
                write_match(&mut self.out, result.as_ref())
            }
            Err(e @ (SessionError::NoDatabase | SessionError::NoSample | SessionError::NoProfile)) => {
                writeln!(self.out, "{e}")
            }
            Err(e) => {
                writeln!(self.out, "Searching database...")?;
                writeln!(self.out, "Error: {e}")
            }
        }
    }

    fn count_nucleotides(&mut self) -> io::Result<()> {
        match self.session.count_nucleotides() {
            Ok(counts) => {
                writeln!(self.out, "Counting nucleotides...")?;
                write_nucleotide_counts(&mut self.out, &counts)
            }
            Err(e) => writeln!(self.out, "{e}"),
        }
    }
}
