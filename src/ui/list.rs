use std::collections::HashSet;

use tracing::{info, warn};

use crate::{
    api::{Alias, ContainerRecord},
    ui::{ContainerModel, Effect, Event, Failure},
};

/// The list of running containers, keyed by alias.
///
/// State only changes through [`ContainerList::update`]; every request the
/// list needs is returned as an [`Effect`] for the driver to perform.
#[derive(Debug, Clone, Default)]
pub struct ContainerList {
    containers: Vec<ContainerModel>,
    loading: bool,
    error: Option<Failure>,
}

impl ContainerList {
    /// Creates an empty list together with its initial fetch.
    pub fn init() -> (Self, Effect) {
        let list = Self {
            loading: true,
            ..Self::default()
        };
        (list, Effect::FetchList)
    }

    pub fn containers(&self) -> &[ContainerModel] {
        &self.containers
    }

    pub fn get(&self, alias: &Alias) -> Option<&ContainerModel> {
        self.containers.iter().find(|c| c.alias() == alias)
    }

    fn get_mut(&mut self, alias: &Alias) -> Option<&mut ContainerModel> {
        self.containers.iter_mut().find(|c| c.alias() == alias)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Failure of the most recent fetch, cleared by the next successful one.
    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    pub fn update(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Refresh => {
                self.loading = true;
                Some(Effect::FetchList)
            }
            Event::ListLoaded(records) => {
                self.reconcile(records);
                None
            }
            Event::ListFailed(failure) => {
                warn!(%failure, "failed to fetch containers");
                self.loading = false;
                self.error = Some(failure);
                None
            }
            Event::EnvEdited { alias, text } => {
                if let Some(container) = self.get_mut(&alias) {
                    container.edit(&text);
                }
                None
            }
            Event::EnvReplaced { alias, env } => {
                if let Some(container) = self.get_mut(&alias) {
                    container.set_draft(env);
                }
                None
            }
            Event::SaveClicked { alias } => {
                let env = self.get_mut(&alias)?.begin_save()?;
                info!(%alias, "saving environment");
                Some(Effect::PutEnv { alias, env })
            }
            Event::SaveFinished { alias, result } => {
                let saved = result.is_ok();
                match &result {
                    Ok(()) => info!(%alias, "environment saved"),
                    Err(failure) => warn!(%alias, %failure, "failed to save environment"),
                }
                if let Some(container) = self.get_mut(&alias) {
                    container.finish_save(result);
                }
                saved.then(|| {
                    self.loading = true;
                    Effect::FetchList
                })
            }
        }
    }

    /// Replaces the whole list. An incoming record replaces any unsaved or
    /// in-flight draft for its alias; later duplicates of an alias are dropped.
    fn reconcile(&mut self, records: Vec<ContainerRecord>) {
        let mut seen = HashSet::new();
        let mut containers = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.alias.clone()) {
                warn!(alias = %record.alias, "dropping duplicate alias from container list");
                continue;
            }
            containers.push(ContainerModel::new(record));
        }
        info!(count = containers.len(), "container list loaded");
        self.containers = containers;
        self.loading = false;
        self.error = None;
    }
}
