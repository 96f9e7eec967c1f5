//! Line-oriented prompt reading.

use crate::error::{ShellError, ShellResult};
use crate::menu::Menu;
use figureboard_core::{FigureId, LineThickness, LineType, Point};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Reads typed values from an input stream, writing prompts to an output stream.
///
/// Every value is read from its own line. End of input surfaces as
/// [`ShellError::InputClosed`].
pub struct Prompter<R, W> {
    input: R,
    output: W,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: Vec::new(),
        }
    }

    /// Writer the prompts go to.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read one trimmed line. Invalid UTF-8 is replaced rather than rejected,
    /// so a garbage line fails to parse instead of ending the session.
    fn read_line(&mut self) -> ShellResult<String> {
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(ShellError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&self.buf).trim().to_string())
    }

    /// Prompt until the line parses as `T`.
    pub fn ask<T: FromStr>(&mut self, prompt: &str) -> ShellResult<T> {
        loop {
            write!(self.output, "{}", prompt)?;
            let line = self.read_line()?;
            match line.parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    log::debug!("Rejected input {:?}", line);
                    writeln!(self.output, "Invalid number, try again.")?;
                }
            }
        }
    }

    /// Read a menu selection. Unparseable input yields `None`.
    pub fn read_selection(&mut self) -> ShellResult<Option<u32>> {
        Ok(self.read_line()?.parse().ok())
    }

    pub fn read_point(&mut self) -> ShellResult<Point> {
        writeln!(self.output, "Enter x and y coordinates:")?;
        let x = self.ask("x: ")?;
        let y = self.ask("y: ")?;
        Ok(Point::new(x, y))
    }

    pub fn read_figure_id(&mut self) -> ShellResult<FigureId> {
        self.ask("Enter figure id: ")
    }

    pub fn read_line_type(&mut self) -> ShellResult<LineType> {
        self.read_choice(&Menu::render_line_types(), LineType::from_choice)
    }

    pub fn read_line_thickness(&mut self) -> ShellResult<LineThickness> {
        self.read_choice(&Menu::render_thicknesses(), LineThickness::from_choice)
    }

    /// Show a numbered sub-menu until the answer maps to a value.
    fn read_choice<T>(&mut self, menu: &str, map: impl Fn(u32) -> Option<T>) -> ShellResult<T> {
        loop {
            let choice: u32 = self.ask(menu)?;
            match map(choice) {
                Some(value) => return Ok(value),
                None => {
                    log::debug!("Rejected choice {}", choice);
                    writeln!(self.output, "Invalid choice, try again.")?;
                }
            }
        }
    }
}
