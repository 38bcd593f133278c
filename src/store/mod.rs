//! In-memory fake store
//!
//! A persistence surrogate for tests: heterogeneous tables keyed by record
//! type, staged `add` + explicit `save`, lookups by key, and predicate
//! queries via plain iterators. One store is created per fixture and
//! discarded with it; nothing is shared between invocations.

use std::any::{Any, TypeId};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Deref;
use std::sync::{Mutex, RwLock};

/// A storable row with a typed identity
pub trait Record: Clone + Send + Sync + 'static {
    type Key: Copy + Ord + Eq + Hash + Debug + Send + Sync + 'static;

    fn key(&self) -> Self::Key;
}

struct Table<R: Record> {
    rows: BTreeMap<R::Key, R>,
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

type Tables = HashMap<TypeId, Box<dyn Any + Send + Sync>>;
type Commit = Box<dyn FnOnce(&mut Tables) + Send + Sync>;

/// In-memory data store scoped to one test invocation.
///
/// `add` stages a row; `save` commits everything staged so far. A committed
/// row replaces any earlier row with the same key, so re-saving the same
/// value is idempotent by identity.
#[derive(Default)]
pub struct FakeStore {
    committed: RwLock<Tables>,
    staged: Mutex<Vec<Commit>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a row for the next `save`. Chainable: `store.add(row).save()`.
    pub fn add<R: Record>(&self, row: R) -> &Self {
        tracing::debug!(
            record = std::any::type_name::<R>(),
            key = ?row.key(),
            "staging row"
        );
        self.staged.lock().unwrap().push(Box::new(move |tables| {
            let table = tables
                .entry(TypeId::of::<R>())
                .or_insert_with(|| Box::<Table<R>>::default());
            let table = table
                .downcast_mut::<Table<R>>()
                .expect("table registered under its record type");
            table.rows.insert(row.key(), row);
        }));
        self
    }

    /// Commit all staged rows
    pub fn save(&self) {
        let staged: Vec<Commit> = std::mem::take(&mut *self.staged.lock().unwrap());
        if staged.is_empty() {
            return;
        }
        tracing::debug!(rows = staged.len(), "committing staged rows");
        let mut tables = self.committed.write().unwrap();
        for commit in staged {
            commit(&mut tables);
        }
    }

    /// Replace a committed row in place. Returns false when no row with the
    /// same key exists.
    pub fn update<R: Record>(&self, row: R) -> bool {
        let mut tables = self.committed.write().unwrap();
        match tables
            .get_mut(&TypeId::of::<R>())
            .and_then(|t| t.downcast_mut::<Table<R>>())
        {
            Some(table) if table.rows.contains_key(&row.key()) => {
                table.rows.insert(row.key(), row);
                true
            }
            _ => false,
        }
    }

    pub fn find<R: Record>(&self, key: R::Key) -> Option<R> {
        let tables = self.committed.read().unwrap();
        tables
            .get(&TypeId::of::<R>())
            .and_then(|t| t.downcast_ref::<Table<R>>())
            .and_then(|t| t.rows.get(&key).cloned())
    }

    /// All committed rows of a record type, in key order
    pub fn query<R: Record>(&self) -> Vec<R> {
        let tables = self.committed.read().unwrap();
        tables
            .get(&TypeId::of::<R>())
            .and_then(|t| t.downcast_ref::<Table<R>>())
            .map(|t| t.rows.values().cloned().collect())
            .unwrap_or_default()
    }

    pub fn count<R: Record>(&self) -> usize {
        let tables = self.committed.read().unwrap();
        tables
            .get(&TypeId::of::<R>())
            .and_then(|t| t.downcast_ref::<Table<R>>())
            .map(|t| t.rows.len())
            .unwrap_or(0)
    }

    /// Open a scope whose staged mutations commit when it is dropped
    pub fn scope(&self) -> Scope<'_> {
        Scope { store: self }
    }
}

/// RAII commit scope: everything staged through it is saved at scope exit
pub struct Scope<'a> {
    store: &'a FakeStore,
}

impl Deref for Scope<'_> {
    type Target = FakeStore;

    fn deref(&self) -> &Self::Target {
        self.store
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.store.save();
    }
}
