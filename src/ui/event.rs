use crate::{
    api::{Alias, ContainerRecord},
    ui::Failure,
};

/// Everything that can change the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Someone asked for the whole list to be fetched again.
    Refresh,
    ListLoaded(Vec<ContainerRecord>),
    ListFailed(Failure),
    /// The text of one container's env editor changed.
    EnvEdited { alias: Alias, text: String },
    /// One container's draft was replaced wholesale, e.g. by `set`/`unset`.
    EnvReplaced { alias: Alias, env: Vec<String> },
    SaveClicked { alias: Alias },
    SaveFinished {
        alias: Alias,
        result: Result<(), Failure>,
    },
}

/// Work the model asks its driver to perform. Its outcome comes back as an
/// [`Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET /config`, answered with `ListLoaded` or `ListFailed`.
    FetchList,
    /// `PUT /config/{alias}/`, answered with `SaveFinished`.
    PutEnv { alias: Alias, env: Vec<String> },
}
