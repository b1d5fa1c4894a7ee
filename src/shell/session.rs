use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use super::{HELP, ShellCommand};
use crate::catalog::{ALL_GROUPS, CatalogStore, DeleteOutcome, RenameOutcome, ToolDraft};
use crate::config::ViewerSettings;
use crate::error::CatalogError;
use crate::viewer::{DetailView, ViewerSurface};

/// Form fields asked for by an interactive `add`, in order
const FORM_FIELDS: &[(&str, &str)] = &[
    ("name", "Name*"),
    ("group", "Group*"),
    ("description", "Description"),
    ("poster", "Poster URL*"),
    ("model", "Model URL* (.glb, under 10MB)"),
];

const MODEL_READY: &str = "model ready · drag to rotate · scroll to zoom · auto-rotate";

/// Interactive session over a catalog.
///
/// Reads commands from `input`, writes results to `output`. Catalog errors
/// are reported inline and the session keeps going; only I/O errors end it.
pub struct Shell<R, W> {
    store: CatalogStore,
    surface: Arc<dyn ViewerSurface>,
    settings: ViewerSettings,
    detail: Option<DetailView>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        store: CatalogStore,
        surface: Arc<dyn ViewerSurface>,
        settings: ViewerSettings,
        input: R,
        output: W,
    ) -> Self {
        Self {
            store,
            surface,
            settings,
            detail: None,
            input,
            output,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Read and execute commands until `quit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "{} tools loaded. Type 'help' for commands.",
            self.store.len()
        )?;

        while let Some(line) = self.prompt("> ")? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let cmd = match line.parse::<ShellCommand>() {
                Ok(cmd) => cmd,
                Err(e) => {
                    writeln!(self.output, "error: {}", e)?;
                    continue;
                }
            };

            if !self.execute(cmd).await? {
                break;
            }
        }

        if let Some(view) = self.detail.take() {
            view.close();
        }
        Ok(())
    }

    /// Execute one command. Returns false when the session should end.
    pub async fn execute(&mut self, cmd: ShellCommand) -> Result<bool> {
        debug!(?cmd, "shell command");
        self.poll_detail().await?;

        match cmd {
            ShellCommand::Help => writeln!(self.output, "{}", HELP)?,
            ShellCommand::Groups => self.print_groups()?,
            ShellCommand::List => self.print_tools()?,
            ShellCommand::Select(group) => {
                self.store.select_group(group);
                self.print_tools()?;
            }
            ShellCommand::All => {
                self.store.select_group(ALL_GROUPS);
                self.print_tools()?;
            }
            ShellCommand::Add(fields) => self.add(fields)?,
            ShellCommand::Example => self.submit(ToolDraft::example())?,
            ShellCommand::Rename { from, to } => self.rename(&from, &to)?,
            ShellCommand::Delete(group) => self.delete(&group)?,
            ShellCommand::View(needle) => self.view(&needle).await?,
            ShellCommand::Info => self.toggle_info()?,
            ShellCommand::Reset => match self.detail.as_ref() {
                Some(view) => {
                    view.reset_camera();
                    writeln!(self.output, "camera reset")?;
                }
                None => self.no_view()?,
            },
            ShellCommand::Fullscreen => match self.detail.as_ref() {
                Some(view) => {
                    view.request_fullscreen();
                    writeln!(self.output, "fullscreen requested")?;
                }
                None => self.no_view()?,
            },
            ShellCommand::Close => self.close()?,
            ShellCommand::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn print_groups(&mut self) -> Result<()> {
        for group in self.store.list_groups() {
            let count = self.store.group_count(&group);
            let marker = if group == self.store.selected_group() {
                "*"
            } else {
                " "
            };
            writeln!(self.output, "{} {} ({})", marker, group, count)?;
        }
        Ok(())
    }

    fn print_tools(&mut self) -> Result<()> {
        let tools = self.store.filtered_tools();
        let selected = self.store.selected_group();

        if selected == ALL_GROUPS {
            writeln!(self.output, "{} tools", tools.len())?;
        } else {
            writeln!(self.output, "{} tools · group: {}", tools.len(), selected)?;
        }

        if tools.is_empty() {
            writeln!(self.output, "no tools in this group")?;
        }
        for tool in tools {
            writeln!(self.output, "{}", tool)?;
        }
        Ok(())
    }

    fn add(&mut self, fields: Vec<(String, String)>) -> Result<()> {
        let mut draft = ToolDraft::default();

        if fields.is_empty() {
            let groups = self.store.existing_groups();
            if !groups.is_empty() {
                writeln!(self.output, "existing groups: {}", groups.join(", "))?;
            }
            for (key, label) in FORM_FIELDS {
                let Some(value) = self.prompt(&format!("{}: ", label))? else {
                    writeln!(self.output, "add cancelled")?;
                    return Ok(());
                };
                draft.set_field(key, value.trim());
            }
        } else {
            for (key, value) in fields {
                if !draft.set_field(&key, value) {
                    writeln!(self.output, "error: unknown field '{}'", key)?;
                    return Ok(());
                }
            }
        }

        self.submit(draft)
    }

    fn submit(&mut self, draft: ToolDraft) -> Result<()> {
        match self.store.add_tool(draft) {
            Ok(tool) => writeln!(self.output, "added {} ({})", tool.name, tool.id)?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        match self.store.rename_group(from, to) {
            Ok(RenameOutcome::Renamed { moved }) => {
                self.sync_detail();
                writeln!(
                    self.output,
                    "renamed group \"{}\" to \"{}\" ({} tools)",
                    from,
                    to.trim(),
                    moved
                )?;
            }
            Ok(RenameOutcome::Unchanged) => writeln!(self.output, "nothing to rename")?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn delete(&mut self, group: &str) -> Result<()> {
        let Self {
            store,
            input,
            output,
            ..
        } = self;
        let outcome = store.delete_group(group, |prompt| ask(input, output, prompt));

        match outcome {
            DeleteOutcome::Deleted { moved } => {
                self.sync_detail();
                writeln!(
                    self.output,
                    "deleted group \"{}\" ({} tools moved)",
                    group, moved
                )?;
            }
            DeleteOutcome::Cancelled => writeln!(self.output, "cancelled")?,
            DeleteOutcome::Ignored => {
                writeln!(self.output, "group \"{}\" cannot be deleted", group)?
            }
        }
        Ok(())
    }

    async fn view(&mut self, needle: &str) -> Result<()> {
        let Some(tool) = self.store.find_tool(needle).cloned() else {
            return self.report(&CatalogError::ToolNotFound(needle.to_string()));
        };

        // Unmount the previous model before mounting the next one
        if let Some(previous) = self.detail.take() {
            previous.close();
        }
        self.store.select_tool(Some(tool.clone()));

        let view =
            match DetailView::open(tool, Arc::clone(&self.surface), &self.settings).await {
                Ok(view) => view,
                Err(e) => {
                    self.store.select_tool(None);
                    return self.report(&e);
                }
            };

        writeln!(self.output, "{}", view.tool().name)?;
        if view.is_loading() {
            writeln!(self.output, "loading 3D model...")?;
        } else {
            writeln!(self.output, "{}", MODEL_READY)?;
        }
        if let Some(panel) = view.info_panel() {
            writeln!(self.output, "{}", panel)?;
        }

        self.detail = Some(view);
        Ok(())
    }

    /// Pick up a load signal that arrived since the last command.
    ///
    /// The view never blocks on the surface, so a model that never loads
    /// leaves the session usable.
    async fn poll_detail(&mut self) -> Result<()> {
        let Some(view) = self.detail.as_mut() else {
            return Ok(());
        };
        if !view.is_loading() {
            return Ok(());
        }

        // Let a surface task that is ready to signal run first
        tokio::task::yield_now().await;
        view.poll_events();
        if !view.is_loading() {
            writeln!(self.output, "{}", MODEL_READY)?;
        }
        Ok(())
    }

    fn toggle_info(&mut self) -> Result<()> {
        let Some(view) = self.detail.as_mut() else {
            return self.no_view();
        };

        view.toggle_info();
        match view.info_panel() {
            Some(panel) => writeln!(self.output, "{}", panel)?,
            None => writeln!(self.output, "info panel hidden")?,
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        match self.detail.take() {
            Some(view) => {
                view.close();
                self.store.select_tool(None);
                writeln!(self.output, "closed")?;
            }
            None => writeln!(self.output, "no tool open")?,
        }
        Ok(())
    }

    fn no_view(&mut self) -> Result<()> {
        writeln!(self.output, "no tool open (use 'view <id>')")?;
        Ok(())
    }

    fn sync_detail(&mut self) {
        if let (Some(view), Some(tool)) = (self.detail.as_mut(), self.store.selected_tool()) {
            view.refresh_tool(tool);
        }
    }

    fn report(&mut self, err: &CatalogError) -> Result<()> {
        writeln!(self.output, "error: {}", err)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        read_line(&mut self.input)
    }
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// y/N confirmation; anything but yes (including unreadable input) cancels
fn ask(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> bool {
    if write!(output, "{} [y/N] ", prompt)
        .and_then(|_| output.flush())
        .is_err()
    {
        return false;
    }
    match read_line(input) {
        Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Ok(None) => false,
        Err(e) => {
            warn!(error = %e, "failed to read confirmation");
            false
        }
    }
}
