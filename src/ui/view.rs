use std::fmt::{self, Display};

use crate::{
    api::Alias,
    ui::{ContainerList, ContainerModel, ContainerStatus},
};

pub const HEADING: &str = "Running containers:";

/// What the list looks like, derived from the model and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub heading: &'static str,
    pub loading: bool,
    pub error: Option<String>,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub key: Alias,
    /// `alias:state`
    pub title: String,
    /// Editor contents, one env entry per line.
    pub text: String,
    pub status: ContainerStatus,
    pub editable: bool,
    pub save_enabled: bool,
    pub error: Option<String>,
}

pub fn render(list: &ContainerList) -> ListView {
    ListView {
        heading: HEADING,
        loading: list.is_loading(),
        error: list.error().map(ToString::to_string),
        rows: list.containers().iter().map(render_row).collect(),
    }
}

pub fn render_row(container: &ContainerModel) -> RowView {
    RowView {
        key: container.alias().clone(),
        title: format!("{}:{}", container.alias(), container.state()),
        text: container.text(),
        status: container.status(),
        editable: container.is_editable(),
        save_enabled: container.can_save(),
        error: container.failure().map(ToString::to_string),
    }
}

impl Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerStatus::Clean => write!(f, "clean"),
            ContainerStatus::Dirty => write!(f, "modified"),
            ContainerStatus::Saving => write!(f, "saving"),
            ContainerStatus::Failed => write!(f, "save failed"),
        }
    }
}

impl Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        if let Some(error) = &self.error {
            writeln!(f, "  ! {error}")?;
        }
        if self.rows.is_empty() && self.loading {
            writeln!(f, "  loading...")?;
        }
        for row in &self.rows {
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

impl Display for RowView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let save = match (self.editable, self.save_enabled) {
            (false, _) => "read-only",
            (true, true) => "[Save]",
            (true, false) => "(Save)",
        };
        writeln!(f, "{}  {save}", self.title)?;
        if self.status != ContainerStatus::Clean {
            writeln!(f, "  status: {}", self.status)?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "  ! {error}")?;
        }
        for line in self.text.split('\n') {
            writeln!(f, "    {line}")?;
        }
        Ok(())
    }
}
