use crate::{
    api::{Alias, ContainerRecord},
    ui::{
        Failure,
        draft::{env_text, parse_env_text},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saving,
    Failed(Failure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStatus {
    /// Draft equals the snapshot.
    Clean,
    /// Draft differs from the snapshot and is not being saved.
    Dirty,
    /// An update request is in flight.
    Saving,
    /// The last update request failed; the draft is kept.
    Failed,
}

/// One container row: the snapshot received from the service and the local
/// draft of its env.
#[derive(Debug, Clone)]
pub struct ContainerModel {
    snapshot: ContainerRecord,
    draft: Vec<String>,
    save: SaveState,
}

impl ContainerModel {
    pub fn new(snapshot: ContainerRecord) -> Self {
        let draft = snapshot.env.clone();
        Self {
            snapshot,
            draft,
            save: SaveState::Idle,
        }
    }

    pub fn alias(&self) -> &Alias {
        &self.snapshot.alias
    }

    pub fn state(&self) -> &str {
        &self.snapshot.state
    }

    pub fn draft(&self) -> &[String] {
        &self.draft
    }

    /// The draft as shown in the editor.
    pub fn text(&self) -> String {
        env_text(&self.draft)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match &self.save {
            SaveState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.snapshot.alias.is_addressable()
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.snapshot.env
    }

    pub fn is_saving(&self) -> bool {
        self.save == SaveState::Saving
    }

    pub fn status(&self) -> ContainerStatus {
        match self.save {
            SaveState::Saving => ContainerStatus::Saving,
            SaveState::Failed(_) => ContainerStatus::Failed,
            SaveState::Idle if self.is_dirty() => ContainerStatus::Dirty,
            SaveState::Idle => ContainerStatus::Clean,
        }
    }

    pub fn can_save(&self) -> bool {
        self.is_editable() && self.is_dirty() && !self.is_saving()
    }

    /// Replaces the draft with the lines of `text`.
    pub fn edit(&mut self, text: &str) {
        self.set_draft(parse_env_text(text));
    }

    pub fn set_draft(&mut self, env: Vec<String>) {
        if self.is_editable() {
            self.draft = env;
        }
    }

    /// Moves to `Saving` and returns the env to send, or `None` when there is
    /// nothing to save or a save is already in flight.
    pub fn begin_save(&mut self) -> Option<Vec<String>> {
        if !self.can_save() {
            return None;
        }
        self.save = SaveState::Saving;
        Some(self.draft.clone())
    }

    /// Records the outcome of the in-flight save. Ignored when no save is in
    /// flight, which happens when a refresh replaced this row meanwhile.
    pub fn finish_save(&mut self, result: Result<(), Failure>) {
        if !self.is_saving() {
            return;
        }
        self.save = match result {
            Ok(()) => SaveState::Idle,
            Err(failure) => SaveState::Failed(failure),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MISSING_ALIAS;

    fn web() -> ContainerModel {
        ContainerModel::new(ContainerRecord {
            alias: "web".into(),
            state: "running".into(),
            env: vec!["X=1".into()],
        })
    }

    #[test]
    fn starts_clean_with_save_disabled() {
        let c = web();
        assert_eq!(c.status(), ContainerStatus::Clean);
        assert!(!c.can_save());
        assert_eq!(c.text(), "X=1");
    }

    #[test]
    fn edit_makes_dirty() {
        let mut c = web();
        c.edit("X=1\nY=2");
        assert_eq!(c.draft(), ["X=1", "Y=2"]);
        assert_eq!(c.status(), ContainerStatus::Dirty);
        assert!(c.can_save());
    }

    #[test]
    fn reverting_the_text_is_clean_again() {
        let mut c = web();
        c.edit("X=2");
        c.edit("X=1");
        assert_eq!(c.status(), ContainerStatus::Clean);
        assert!(!c.can_save());
    }

    #[test]
    fn saving_blocks_a_second_save() {
        let mut c = web();
        c.edit("X=2");
        assert_eq!(c.begin_save(), Some(vec!["X=2".to_string()]));
        assert_eq!(c.status(), ContainerStatus::Saving);
        assert_eq!(c.begin_save(), None);
    }

    #[test]
    fn failed_save_keeps_draft_and_reenables_save() {
        let mut c = web();
        c.edit("X=2");
        c.begin_save();
        c.finish_save(Err(Failure::network("connection refused")));
        assert_eq!(c.status(), ContainerStatus::Failed);
        assert_eq!(c.draft(), ["X=2"]);
        assert!(c.can_save());
        assert_eq!(c.failure().unwrap().message, "connection refused");

        c.begin_save();
        assert!(c.failure().is_none());
    }

    #[test]
    fn finish_without_save_in_flight_is_ignored() {
        let mut c = web();
        c.finish_save(Err(Failure::server("late")));
        assert_eq!(c.status(), ContainerStatus::Clean);
    }

    #[test]
    fn placeholder_alias_is_read_only() {
        let mut c = ContainerModel::new(ContainerRecord {
            alias: MISSING_ALIAS.into(),
            state: "exited".into(),
            env: vec![],
        });
        c.edit("A=1");
        assert!(c.draft().is_empty());
        assert!(!c.can_save());
        assert_eq!(c.begin_save(), None);
    }
}
