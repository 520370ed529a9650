pub mod arena;
pub mod queries;
pub mod seed;

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;
use tracing::info;

use kindred_types::models::{Admin, Donation, HealthContent, Partner, Resource, Volunteer};

use crate::arena::Arena;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },
    #[error("store lock poisoned")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// One arena per entity type.
#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) admins: Arena<Admin>,
    pub(crate) volunteers: Arena<Volunteer>,
    pub(crate) donations: Arena<Donation>,
    pub(crate) partners: Arena<Partner>,
    pub(crate) resources: Arena<Resource>,
    pub(crate) health_content: Arena<HealthContent>,
}

/// In-memory record store. Lives for the lifetime of the process; every
/// operation takes the lock once, so id assignment and the insert it belongs
/// to are never observed separately.
pub struct Store {
    tables: Mutex<Tables>,
}

impl Store {
    /// Store pre-populated with the demonstration resources and partner.
    pub fn new() -> Self {
        let mut tables = Tables::default();
        seed::run(&mut tables);
        info!("Store initialised with seed data");
        Self {
            tables: Mutex::new(tables),
        }
    }

    /// Store with no rows at all.
    pub fn empty() -> Self {
        Self {
            tables: Mutex::new(Tables::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| StoreError::Poisoned)
    }

    pub(crate) fn with_tables<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> T,
    {
        let tables = self.lock()?;
        Ok(f(&tables))
    }

    pub(crate) fn with_tables_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T>,
    {
        let mut tables = self.lock()?;
        f(&mut tables)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
