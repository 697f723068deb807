use spool_core::{CommandKind, RowLabeled, RowNames, RowsAffected, Value};
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

/// Lifecycle event counts of one store, snapshotted for assertions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Native connection establishments, initial connect included.
    pub opens: u64,
    /// Native connection closes. No-op closes are not counted.
    pub closes: u64,
    /// Commands built from a spec.
    pub commands: u64,
    /// Cursors started.
    pub cursors: u64,
    /// Cursors released.
    pub cursor_drops: u64,
    /// Rows handed out across all cursors.
    pub rows_served: u64,
}

#[derive(Debug, Clone)]
pub(crate) enum Script {
    Rows {
        rows: Vec<RowLabeled>,
        then_fail: Option<String>,
    },
    Affected(RowsAffected),
    Fail(String),
}

/// Backing state of one named in-memory database.
#[derive(Debug, Default)]
pub(crate) struct Store {
    scripts: HashMap<(CommandKind, String), Script>,
    pub(crate) counters: Counters,
    pub(crate) last_parameters: Vec<(String, Value)>,
}

impl Store {
    pub(crate) fn install(&mut self, kind: CommandKind, text: &str, script: Script) {
        self.scripts.insert((kind, text.into()), script);
    }

    pub(crate) fn script(&self, kind: CommandKind, text: &str) -> Option<Script> {
        self.scripts.get(&(kind, text.into())).cloned()
    }
}

pub(crate) type SharedStore = Arc<Mutex<Store>>;

static REGISTRY: LazyLock<Mutex<HashMap<String, SharedStore>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Register a fresh store under `name`, replacing any previous one.
pub(crate) fn register(name: &str) -> SharedStore {
    let store = SharedStore::default();
    lock(&REGISTRY).insert(name.into(), store.clone());
    store
}

pub(crate) fn find(name: &str) -> Option<SharedStore> {
    lock(&REGISTRY).get(name).cloned()
}

/// Handle to a named in-memory database: scripts results, reads counters.
///
/// Connections reach the same store through `memdb://<name>` descriptors.
pub struct MemDatabase {
    name: String,
    store: SharedStore,
}

impl MemDatabase {
    /// Create (or reset) the named database.
    pub fn create(name: impl Into<String>) -> Self {
        let name = name.into();
        let store = register(&name);
        Self { name, store }
    }

    pub fn descriptor(&self) -> String {
        format!("memdb://{}", self.name)
    }

    /// Install a result set for the given command text.
    pub fn script_rows(&self, kind: CommandKind, text: &str, labels: &[&str], rows: Vec<Vec<Value>>) {
        self.install_rows(kind, text, labels, rows, None);
    }

    /// Install a result set that fails after its last row, to exercise
    /// mid-iteration driver errors.
    pub fn script_rows_then_fail(
        &self,
        kind: CommandKind,
        text: &str,
        labels: &[&str],
        rows: Vec<Vec<Value>>,
        message: impl Into<String>,
    ) {
        self.install_rows(kind, text, labels, rows, Some(message.into()));
    }

    /// Install an affected-row count for the given command text.
    pub fn script_affected(&self, kind: CommandKind, text: &str, rows_affected: u64) {
        lock(&self.store).install(
            kind,
            text,
            Script::Affected(RowsAffected {
                rows_affected,
                last_affected_id: None,
            }),
        );
    }

    /// Make the given command text fail at execution.
    pub fn script_failure(&self, kind: CommandKind, text: &str, message: impl Into<String>) {
        lock(&self.store).install(kind, text, Script::Fail(message.into()));
    }

    pub fn counters(&self) -> Counters {
        lock(&self.store).counters
    }

    /// Parameters bound by the most recent command, in binding order.
    pub fn last_parameters(&self) -> Vec<(String, Value)> {
        lock(&self.store).last_parameters.clone()
    }

    fn install_rows(
        &self,
        kind: CommandKind,
        text: &str,
        labels: &[&str],
        rows: Vec<Vec<Value>>,
        then_fail: Option<String>,
    ) {
        let labels: RowNames = labels.iter().map(|label| label.to_string()).collect();
        let rows = rows
            .into_iter()
            .map(|values| {
                assert_eq!(
                    values.len(),
                    labels.len(),
                    "Scripted row width must match the label count",
                );
                RowLabeled::new(labels.clone(), values.into_boxed_slice())
            })
            .collect();
        lock(&self.store).install(kind, text, Script::Rows { rows, then_fail });
    }
}
