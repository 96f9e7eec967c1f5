//! Interactive command loop.

use crate::config::AppConfig;
use crate::error::{ShellError, ShellResult};
use crate::menu::{Menu, MenuCommand};
use crate::prompt::Prompter;
use figureboard_core::{FigureId, FigureRegistry};
use std::io::{BufRead, Write};

/// Why the command loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user picked the exit command.
    Requested,
    /// The input stream ended.
    InputClosed,
}

/// Outcome of a single command.
enum Flow {
    Continue,
    Exit,
}

/// Console shell owning the figure registry for the session.
pub struct Shell<R, W> {
    registry: FigureRegistry,
    prompter: Prompter<R, W>,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Self {
            registry: FigureRegistry::new(),
            prompter: Prompter::new(input, output),
            config,
        }
    }

    pub fn registry(&self) -> &FigureRegistry {
        &self.registry
    }

    pub fn into_output(self) -> W {
        self.prompter.into_inner().1
    }

    /// Run commands until exit or end of input.
    pub fn run(&mut self) -> ShellResult<ExitReason> {
        if !self.config.title.is_empty() {
            writeln!(self.prompter.output(), "{}\n", self.config.title)?;
        }

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(ExitReason::Requested),
                Err(ShellError::InputClosed) => {
                    log::info!("Input closed, leaving with {} figures", self.registry.len());
                    return Ok(ExitReason::InputClosed);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Read and execute one menu selection.
    fn step(&mut self) -> ShellResult<Flow> {
        if self.config.show_menu {
            write!(self.prompter.output(), "{}", Menu::render())?;
        }
        let selection = self.prompter.read_selection()?;
        writeln!(self.prompter.output())?;

        match selection.and_then(MenuCommand::from_selection) {
            Some(command) => {
                if let Flow::Exit = self.execute(command)? {
                    return Ok(Flow::Exit);
                }
            }
            None => {
                log::debug!("Unknown selection {:?}", selection);
                writeln!(self.prompter.output(), "Unknown command, try again.")?;
            }
        }

        writeln!(self.prompter.output())?;
        Ok(Flow::Continue)
    }

    fn execute(&mut self, command: MenuCommand) -> ShellResult<Flow> {
        match command {
            MenuCommand::Exit => return Ok(Flow::Exit),
            MenuCommand::Add(kind) => {
                let position = self.prompter.read_point()?;
                let id = self.registry.insert(kind, position);
                writeln!(self.prompter.output(), "Added {} with id {}", kind, id)?;
            }
            MenuCommand::SetLineType => {
                let id = self.prompter.read_figure_id()?;
                if self.registry.contains(id) {
                    let line_type = self.prompter.read_line_type()?;
                    if let Some(description) = self.registry.set_line_type(id, line_type) {
                        writeln!(self.prompter.output(), "{}", description)?;
                    }
                } else {
                    self.missing(id)?;
                }
            }
            MenuCommand::SetLineThickness => {
                let id = self.prompter.read_figure_id()?;
                if self.registry.contains(id) {
                    let thickness = self.prompter.read_line_thickness()?;
                    if let Some(description) = self.registry.set_line_thickness(id, thickness) {
                        writeln!(self.prompter.output(), "{}", description)?;
                    }
                } else {
                    self.missing(id)?;
                }
            }
            MenuCommand::PrintFigure => {
                let id = self.prompter.read_figure_id()?;
                match self.registry.describe(id) {
                    Some(description) => writeln!(self.prompter.output(), "{}", description)?,
                    None => self.missing(id)?,
                }
            }
            MenuCommand::PrintAll => match self.registry.describe_all() {
                Some(descriptions) => {
                    for description in descriptions {
                        writeln!(self.prompter.output(), "{}", description)?;
                    }
                }
                None => writeln!(self.prompter.output(), "No figures yet!")?,
            },
            MenuCommand::RemoveFigure => {
                let id = self.prompter.read_figure_id()?;
                if self.registry.remove(id).is_none() {
                    self.missing(id)?;
                }
            }
            MenuCommand::RemoveAll => self.registry.clear(),
        }
        Ok(Flow::Continue)
    }

    /// Unknown ids are silent unless `report_missing` is set.
    fn missing(&mut self, id: FigureId) -> ShellResult<()> {
        log::debug!("Figure {} not found", id);
        if self.config.report_missing {
            writeln!(self.prompter.output(), "Figure {} not found.", id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figureboard_core::{FigureKind, LineThickness, LineType, Point};
    use std::io::Cursor;

    fn quiet_config() -> AppConfig {
        AppConfig {
            title: String::new(),
            show_menu: false,
            report_missing: false,
        }
    }

    fn run_with(input: &str, config: AppConfig) -> (ExitReason, FigureRegistry, String) {
        let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config);
        let reason = shell.run().unwrap();
        let registry = shell.registry().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (reason, registry, output)
    }

    #[test]
    fn test_exit_command() {
        let (reason, registry, _) = run_with("1\n2\n0\n0\n", quiet_config());
        assert_eq!(reason, ExitReason::Requested);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_end_of_input_terminates() {
        let (reason, _, _) = run_with("", quiet_config());
        assert_eq!(reason, ExitReason::InputClosed);

        // Input ending halfway through a prompt.
        let (reason, registry, _) = run_with("2\n5\n", quiet_config());
        assert_eq!(reason, ExitReason::InputClosed);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_and_print() {
        let (_, registry, output) = run_with("2\n3\n-4\n8\n0\n1\n", quiet_config());
        assert_eq!(registry.len(), 1);
        assert!(output.contains("Added Circle with id 0"));
        assert!(output.contains("Circle: [id 0; x 3; y -4; Solid; Normal]"));
    }

    #[test]
    fn test_add_each_kind() {
        let (_, registry, _) = run_with("2\n0\n0\n3\n1\n1\n4\n2\n2\n5\n3\n3\n", quiet_config());
        let kinds: Vec<_> = (0..4)
            .map(|id| registry.get(id).map(|f| f.kind()))
            .collect();
        assert_eq!(
            kinds,
            FigureKind::ALL.iter().copied().map(Some).collect::<Vec<_>>()
        );
        assert_eq!(registry.get(3).map(|f| f.position()), Some(Point::new(3, 3)));
    }

    #[test]
    fn test_set_line_type_and_thickness() {
        let input = "5\n1\n2\n6\n0\n3\n7\n0\n1\n";
        let (_, registry, output) = run_with(input, quiet_config());
        let figure = registry.get(0).unwrap();
        assert_eq!(figure.line_type(), LineType::Dotted);
        assert_eq!(figure.line_thickness(), LineThickness::Thin);
        assert!(output.contains("Star: [id 0; x 1; y 2; Dotted; Normal]"));
        assert!(output.contains("Star: [id 0; x 1; y 2; Dotted; Thin]"));
    }

    #[test]
    fn test_out_of_range_choice_reprompts() {
        let (_, registry, output) = run_with("2\n0\n0\n6\n0\n9\n2\n", quiet_config());
        assert!(output.contains("Invalid choice, try again."));
        assert_eq!(registry.get(0).map(|f| f.line_type()), Some(LineType::Dashed));
    }

    #[test]
    fn test_missing_id_is_silent_by_default() {
        // The choice prompt is skipped for unknown ids.
        let (_, registry, output) = run_with("6\n4\n7\n4\n8\n4\n10\n4\n", quiet_config());
        assert!(registry.is_empty());
        assert!(!output.contains("not found"));
        assert!(!output.contains("Enter line type:"));
        assert!(!output.contains("Enter line thickness:"));
    }

    #[test]
    fn test_missing_id_reported_when_enabled() {
        let config = AppConfig {
            report_missing: true,
            ..quiet_config()
        };
        let (_, _, output) = run_with("8\n4\n", config);
        assert!(output.contains("Figure 4 not found."));
    }

    #[test]
    fn test_print_all_empty() {
        let (_, _, output) = run_with("9\n", quiet_config());
        assert!(output.contains("No figures yet!"));
    }

    #[test]
    fn test_remove_and_clear() {
        let input = "2\n0\n0\n3\n0\n0\n10\n0\n8\n0\n9\n11\n9\n";
        let (_, registry, output) = run_with(input, quiet_config());
        assert!(registry.is_empty());
        assert_eq!(registry.next_id(), 2);
        assert!(!output.contains("Circle: [id 0"));
        assert!(output.contains("Square: [id 1; x 0; y 0; Solid; Normal]"));
        assert!(output.contains("No figures yet!"));
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let input = b"2\n3\n-4\n\xff\xfe\n9\n1\n".to_vec();
        let mut shell = Shell::new(Cursor::new(input), Vec::new(), quiet_config());
        let reason = shell.run().unwrap();
        assert_eq!(reason, ExitReason::Requested);
        assert_eq!(shell.registry().len(), 1);

        let output = String::from_utf8(shell.into_output()).unwrap();
        assert!(output.contains("Unknown command, try again."));
        assert!(output.contains("Circle: [id 0; x 3; y -4; Solid; Normal]"));
    }

    #[test]
    fn test_unknown_command() {
        let (_, registry, output) = run_with("12\nhello\n0\n", quiet_config());
        assert!(registry.is_empty());
        assert_eq!(output.matches("Unknown command, try again.").count(), 3);
    }

    #[test]
    fn test_banner_and_menu() {
        let (_, _, output) = run_with("1\n", AppConfig::default());
        assert!(output.starts_with("Figureboard\n\nEnter a command:\n\t1. Exit\n"));
    }
}
