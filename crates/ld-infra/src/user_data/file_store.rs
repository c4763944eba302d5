//! File-based user data store
//!
//! Keeps the goal and every weight entry in one JSON document under the app
//! data directory, with an in-memory copy serving reads.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use ld_core::ports::{DataProviderPort, UserDataEvent, UserDataWriterPort};
use ld_core::{WeightEntry, WeightLossGoal};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::fs::atomic_write;

pub const DEFAULT_USER_DATA_FILE: &str = "user_data.json";

const SUBSCRIBER_BUFFER: usize = 16;

/// On-disk shape of the user data file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct UserDataDocument {
    #[serde(default)]
    goal: Option<WeightLossGoal>,
    #[serde(default)]
    entries: Vec<WeightEntry>,
}

#[derive(Debug, Default, Clone)]
struct UserData {
    goal: Option<WeightLossGoal>,
    entries: BTreeMap<NaiveDate, WeightEntry>,
}

impl UserData {
    fn from_document(document: UserDataDocument) -> Self {
        let mut entries = BTreeMap::new();
        for entry in document.entries {
            if let Some(previous) = entries.insert(entry.date(), entry) {
                warn!(
                    date = %previous.date(),
                    "Duplicate weight entry in data file, keeping the later one"
                );
            }
        }

        Self {
            goal: document.goal,
            entries,
        }
    }

    fn to_document(&self) -> UserDataDocument {
        UserDataDocument {
            goal: self.goal.clone(),
            entries: self.entries.values().cloned().collect(),
        }
    }
}

pub struct FileUserDataStore {
    path: PathBuf,
    data: RwLock<UserData>,
    initialized: AtomicBool,
    subscribers: Mutex<Vec<mpsc::Sender<UserDataEvent>>>,
}

impl FileUserDataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: RwLock::new(UserData::default()),
            initialized: AtomicBool::new(false),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Store at `base_dir/user_data.json`.
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_USER_DATA_FILE))
    }

    /// Load the data file into memory and announce `Initialized`.
    ///
    /// A missing or empty file is an empty data set.
    pub async fn initialize(&self) -> Result<()> {
        let document = self.read_document().await?;
        let loaded = UserData::from_document(document);

        info!(
            path = %self.path.display(),
            entries = loaded.entries.len(),
            has_goal = loaded.goal.is_some(),
            "User data loaded"
        );

        *self.data.write().await = loaded;
        self.initialized.store(true, Ordering::SeqCst);
        self.notify(UserDataEvent::Initialized);
        Ok(())
    }

    async fn read_document(&self) -> Result<UserDataDocument> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(UserDataDocument::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read user data failed: {}", self.path.display()))
            }
        };

        if content.trim().is_empty() {
            return Ok(UserDataDocument::default());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("parse user data failed: {}", self.path.display()))
    }

    /// Apply `change` to a copy of the data, persist it, then swap it in.
    ///
    /// The in-memory copy only changes once the file write succeeded.
    async fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut UserData),
    {
        {
            let mut data = self.data.write().await;
            let mut next = data.clone();
            change(&mut next);

            let content = serde_json::to_string_pretty(&next.to_document())
                .context("serialize user data failed")?;
            atomic_write(&self.path, &content).await?;

            *data = next;
        }

        self.notify(UserDataEvent::Updated);
        Ok(())
    }

    fn notify(&self, event: UserDataEvent) {
        let mut subscribers = match self.subscribers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        subscribers.retain(|tx| match tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!(?event, "Subscriber lagging, dropping user data event");
                true
            }
            Err(TrySendError::Closed(_)) => false,
        });

        debug!(?event, subscribers = subscribers.len(), "User data event sent");
    }
}

#[async_trait]
impl DataProviderPort for FileUserDataStore {
    async fn get_weight_entry_for_date(&self, date: NaiveDate) -> Result<Option<WeightEntry>> {
        Ok(self.data.read().await.entries.get(&date).cloned())
    }

    async fn get_goal(&self) -> Result<Option<WeightLossGoal>> {
        Ok(self.data.read().await.goal.clone())
    }

    fn has_been_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    async fn subscribe_updates(&self) -> Result<mpsc::Receiver<UserDataEvent>> {
        let (tx, rx) = mpsc::channel(SUBSCRIBER_BUFFER);
        match self.subscribers.lock() {
            Ok(mut subscribers) => subscribers.push(tx),
            Err(poisoned) => poisoned.into_inner().push(tx),
        }
        Ok(rx)
    }
}

#[async_trait]
impl UserDataWriterPort for FileUserDataStore {
    async fn save_weight_entry(&self, entry: &WeightEntry) -> Result<()> {
        let entry = entry.clone();
        self.update(move |data| {
            data.entries.insert(entry.date(), entry);
        })
        .await
    }

    async fn set_goal(&self, goal: &WeightLossGoal) -> Result<()> {
        let goal = goal.clone();
        self.update(move |data| {
            data.goal = Some(goal);
        })
        .await
    }
}
