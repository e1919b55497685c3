use tracing::debug;

use crate::{
    api::Alias,
    cli::ConfigService,
    ui::{ContainerList, Effect, Event, Failure, ListView, render},
};

/// Result of [`Console::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The draft matches the snapshot, or the row cannot be saved.
    Unchanged,
    Failed(Failure),
}

/// Single-threaded driver: owns the model, performs its effects against a
/// [`ConfigService`] and feeds every outcome back before taking the next event.
pub struct Console<S> {
    service: S,
    list: ContainerList,
    last_save: Option<Result<(), Failure>>,
}

impl<S: ConfigService> Console<S> {
    /// Builds the model and runs its initial fetch.
    pub fn start(service: S) -> Self {
        let (list, effect) = ContainerList::init();
        let mut console = Self {
            service,
            list,
            last_save: None,
        };
        console.run(Some(effect));
        console
    }

    pub fn list(&self) -> &ContainerList {
        &self.list
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn view(&self) -> ListView {
        render(&self.list)
    }

    pub fn dispatch(&mut self, event: Event) {
        let effect = self.list.update(event);
        self.run(effect);
    }

    fn run(&mut self, mut effect: Option<Effect>) {
        while let Some(next) = effect {
            let event = self.perform(next);
            effect = self.list.update(event);
        }
    }

    fn perform(&mut self, effect: Effect) -> Event {
        debug!(?effect, "performing");
        match effect {
            Effect::FetchList => match self.service.list_containers() {
                Ok(records) => Event::ListLoaded(records),
                Err(err) => Event::ListFailed(Failure::from(&err)),
            },
            Effect::PutEnv { alias, env } => {
                let result = self
                    .service
                    .update_env(&alias, &env)
                    .map_err(|err| Failure::from(&err));
                self.last_save = Some(result.clone());
                Event::SaveFinished { alias, result }
            }
        }
    }

    /// Re-fetches the whole list.
    pub fn refresh(&mut self) -> Result<(), Failure> {
        self.dispatch(Event::Refresh);
        match self.list.error() {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    pub fn edit(&mut self, alias: &Alias, text: impl Into<String>) {
        self.dispatch(Event::EnvEdited {
            alias: alias.clone(),
            text: text.into(),
        });
    }

    /// Saves the draft of `alias`. On success the list has been refreshed by
    /// the time this returns.
    pub fn save(&mut self, alias: &Alias) -> SaveOutcome {
        self.last_save = None;
        self.dispatch(Event::SaveClicked {
            alias: alias.clone(),
        });
        match self.last_save.take() {
            None => SaveOutcome::Unchanged,
            Some(Ok(())) => SaveOutcome::Saved,
            Some(Err(failure)) => SaveOutcome::Failed(failure),
        }
    }
}
