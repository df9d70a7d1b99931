//! Interactive read-eval-print loop
//!
//! Reads one command per line, prints its result and offers to store any
//! non-empty result set. Errors are reported and the loop carries on; only
//! `e` or end of input ends the session.

use crate::{
    core::{Command, Dispatcher, Exporter, RowSet, report},
    error::Result,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Menu printed before every prompt
pub const USAGE: &str = "
What would you like to do?

d                          - demo: list every student's name
vs <student_id>            - view subjects taken by a student
la <firstname> <surname>   - lookup address for a given firstname and surname
lr <student_id>            - list reviews for a given student_id
lc <teacher_id>            - list all courses taught by teacher_id
lnc                        - list all students who haven't completed their course
lf                         - list all students who have completed their course and achieved 30 or below
e                          - exit this program

Type your option here: ";

const STORE_PROMPT: &str = "Y/[N]? : ";
const FILENAME_PROMPT: &str = "Specify filename. Must end in .xml or .json: ";

/// One console session over a dispatcher
pub struct Session<R, W> {
    dispatcher: Dispatcher,
    exporter: Exporter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(dispatcher: Dispatcher, exporter: Exporter, input: R, output: W) -> Self {
        Self {
            dispatcher,
            exporter,
            input,
            output,
        }
    }

    /// Run until `e` or end of input
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the data querying app!")?;

        loop {
            writeln!(self.output)?;
            let Some(line) = self.prompt(USAGE)? else {
                debug!("Input closed");
                writeln!(self.output, "\nProgram exited successfully!")?;
                break;
            };
            writeln!(self.output)?;

            let command = match self.dispatcher.decode(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            if command == Command::Exit {
                writeln!(self.output, "Program exited successfully!")?;
                break;
            }

            self.handle(&command)?;
        }

        Ok(())
    }

    /// Release the database handle
    pub fn finish(self) -> Result<()> {
        info!("Closing session");
        self.dispatcher.into_store().close()
    }

    fn handle(&mut self, command: &Command) -> Result<()> {
        let rows = match self.dispatcher.execute(command) {
            Ok(rows) => rows,
            Err(e) => {
                writeln!(self.output, "{e}")?;
                RowSet::default()
            }
        };

        if rows.is_empty() {
            writeln!(self.output, "{}", report::empty_message(command))?;
            return Ok(());
        }

        for line in report::render(command, &rows) {
            writeln!(self.output, "{line}")?;
        }

        self.offer_to_store(&rows)
    }

    fn offer_to_store(&mut self, rows: &RowSet) -> Result<()> {
        loop {
            writeln!(self.output, "\nWould you like to store this result?\n")?;
            let Some(choice) = self.prompt(STORE_PROMPT)? else {
                return Ok(());
            };

            match choice.to_lowercase().as_str() {
                "y" | "yes" => break,
                "" | "n" | "no" => return Ok(()),
                _ => writeln!(self.output, "\nInvalid choice")?,
            }
        }

        let Some(filename) = self.prompt(FILENAME_PROMPT)? else {
            return Ok(());
        };

        match self.exporter.export(filename.as_str(), rows) {
            Ok(format) => {
                debug!("Stored result as {format}");
                writeln!(self.output, "\nThe results have been saved to {filename}")?;
            }
            Err(e) => writeln!(self.output, "\n{e}")?,
        }

        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of ending the session.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
