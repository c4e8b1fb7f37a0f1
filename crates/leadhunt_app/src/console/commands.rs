use leadhunt_core::Msg;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  role <text>                 set the target role
  industry <text>             set the industry
  launch [<role> | <industry>] start a hunt (optionally setting both inputs)
  export                      write the current leads to leads_<date>.csv
  show                        redraw the dashboard
  help                        show this list
  quit                        exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Messages for the controller, applied in order.
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`; type `help` for the list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parses one console line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "role" => Command::Dispatch(vec![Msg::RoleChanged(rest.to_string())]),
        "industry" => Command::Dispatch(vec![Msg::IndustryChanged(rest.to_string())]),
        "launch" | "hunt" => {
            if rest.is_empty() {
                Command::Dispatch(vec![Msg::LaunchClicked])
            } else {
                let (role, industry) = rest
                    .split_once('|')
                    .ok_or(CommandError::Usage("launch <role> | <industry>"))?;
                Command::Dispatch(vec![
                    Msg::RoleChanged(role.trim().to_string()),
                    Msg::IndustryChanged(industry.trim().to_string()),
                    Msg::LaunchClicked,
                ])
            }
        }
        "export" | "csv" => Command::Dispatch(vec![Msg::ExportClicked]),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
