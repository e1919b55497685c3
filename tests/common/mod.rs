#![allow(dead_code)]

use std::cell::RefCell;

use daas_env::{
    api::{Alias, ApiError, ContainerRecord},
    cli::{ClientError, ClientResult, ConfigService},
};
use reqwest::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Put { alias: Alias, env: Vec<String> },
}

/// In-memory config service. Successful updates are applied to the stored
/// records with empty entries dropped, the way the real service stores them.
#[derive(Default)]
pub struct FakeService {
    pub records: RefCell<Vec<ContainerRecord>>,
    pub calls: RefCell<Vec<Call>>,
    pub list_status: RefCell<Option<StatusCode>>,
    pub put_status: RefCell<Option<StatusCode>>,
}

impl FakeService {
    pub fn with(records: Vec<ContainerRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls().iter().filter(|c| **c == Call::List).count()
    }

    pub fn puts(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Put { .. }))
            .collect()
    }
}

fn failure(status: StatusCode) -> ClientError {
    ClientError::Server {
        status: status.as_u16(),
        error: ApiError::from_status(status),
    }
}

impl ConfigService for FakeService {
    fn list_containers(&self) -> ClientResult<Vec<ContainerRecord>> {
        self.calls.borrow_mut().push(Call::List);
        if let Some(status) = *self.list_status.borrow() {
            return Err(failure(status));
        }
        Ok(self.records.borrow().clone())
    }

    fn update_env(&self, alias: &Alias, env: &[String]) -> ClientResult<()> {
        self.calls.borrow_mut().push(Call::Put {
            alias: alias.clone(),
            env: env.to_vec(),
        });
        if let Some(status) = *self.put_status.borrow() {
            return Err(failure(status));
        }
        let mut records = self.records.borrow_mut();
        let record = records
            .iter_mut()
            .find(|r| &r.alias == alias)
            .ok_or_else(|| failure(StatusCode::NOT_FOUND))?;
        record.env = env.iter().filter(|e| !e.is_empty()).cloned().collect();
        Ok(())
    }
}

pub fn record(alias: &str, state: &str, env: &[&str]) -> ContainerRecord {
    ContainerRecord {
        alias: alias.into(),
        state: state.into(),
        env: env.iter().map(|s| s.to_string()).collect(),
    }
}
