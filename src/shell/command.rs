use std::str::FromStr;

/// A line entered at the shell prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Show the command list
    Help,
    /// List the groups, marking the selected one
    Groups,
    /// List the tools under the current filter
    List,
    /// Filter by a group
    Select(String),
    /// Clear the group filter
    All,
    /// Add a tool; empty fields mean "ask interactively"
    Add(Vec<(String, String)>),
    /// Add the sample draft
    Example,
    /// Rename a group
    Rename { from: String, to: String },
    /// Delete a group (asks for confirmation)
    Delete(String),
    /// Open a tool in the detail view
    View(String),
    /// Toggle the detail view's info panel
    Info,
    /// Reset the detail view camera
    Reset,
    /// Send the detail view fullscreen
    Fullscreen,
    /// Close the detail view
    Close,
    /// Leave the shell
    Quit,
}

pub const HELP: &str = "\
commands:
  groups                      list groups
  list                        list tools in the selected group
  select <group>              filter by group
  all                         clear the group filter
  add [key=value ...]         add a tool (keys: name, group, description, poster, model)
  example                     add the sample tool
  rename <group> <new-name>   rename a group
  delete <group>              delete a group (tools move to \"Ungrouped\")
  view <id|name>              open a tool in the 3D viewer
  info                        toggle the info panel
  reset                       reset the viewer camera
  fullscreen                  request fullscreen
  close                       close the viewer
  quit                        leave the shell
arguments containing spaces can be double-quoted";

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words = split_words(line)?;
        let Some((head, args)) = words.split_first() else {
            anyhow::bail!("empty command");
        };

        let cmd = match (head.to_lowercase().as_str(), args) {
            ("help" | "?", []) => Self::Help,
            ("groups", []) => Self::Groups,
            ("list" | "ls", []) => Self::List,
            ("select", [group]) => Self::Select(group.clone()),
            ("all", []) => Self::All,
            ("add", fields) => Self::Add(parse_fields(fields)?),
            ("example", []) => Self::Example,
            ("rename", [from, to]) => Self::Rename {
                from: from.clone(),
                to: to.clone(),
            },
            ("delete" | "rm", [group]) => Self::Delete(group.clone()),
            ("view" | "open", [tool]) => Self::View(tool.clone()),
            ("info", []) => Self::Info,
            ("reset", []) => Self::Reset,
            ("fullscreen", []) => Self::Fullscreen,
            ("close", []) => Self::Close,
            ("quit" | "exit", []) => Self::Quit,
            (
                "help" | "?" | "groups" | "list" | "ls" | "select" | "all" | "example" | "rename"
                | "delete" | "rm" | "view" | "open" | "info" | "reset" | "fullscreen" | "close"
                | "quit" | "exit",
                _,
            ) => anyhow::bail!("wrong number of arguments for '{}' (try 'help')", head),
            _ => anyhow::bail!("unknown command '{}' (try 'help')", head),
        };

        Ok(cmd)
    }
}

fn parse_fields(args: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| {
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("expected key=value, got '{}'", arg))?;
            Ok((key.to_lowercase(), value.to_string()))
        })
        .collect()
}

/// Split a line on whitespace, keeping double-quoted runs together
fn split_words(line: &str) -> anyhow::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        anyhow::bail!("unterminated quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
