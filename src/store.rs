use crate::rank::UsageCounts;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Flat persisted mapping. `keywords: None` means "not set", in which case
/// callers fall back to the built-in catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreData {
    pub is_enabled: bool,
    pub included_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<IndexMap<String, Vec<String>>>,
    pub selection_counts: UsageCounts,
}

impl Default for StoreData {
    fn default() -> Self {
        StoreData {
            is_enabled: true,
            included_urls: vec![
                "midjourney.com".to_string(),
                "alpha.midjourney.com".to_string(),
            ],
            keywords: None,
            selection_counts: UsageCounts::new(),
        }
    }
}

/// Change notification payloads; full-value replacement, no merge.
#[derive(Debug, Clone)]
pub enum StoreChange {
    Enabled(bool),
    Keywords(IndexMap<String, Vec<String>>),
    Counts(UsageCounts),
}

/// JSON-file-backed key-value store shared by the UI loop and the change
/// subscription. Setters update memory synchronously, notify subscribers,
/// and persist on a background thread; persistence failures are logged and
/// otherwise ignored.
#[derive(Clone)]
pub struct Store {
    path: PathBuf,
    state: Arc<RwLock<StoreData>>,
    tx: broadcast::Sender<StoreChange>,
}

impl Store {
    /// Open the store at `path`. A missing file is a normal first run; an
    /// unreadable or unparseable one degrades to the disabled defaults, so
    /// a broken store can never arm the suggester.
    pub fn open(path: PathBuf) -> Store {
        let data = match std::fs::read_to_string(&path) {
            Ok(raw) => parse_store(&raw).unwrap_or_else(|e| {
                log::warn!("store {}: {e}; suggestions disabled", path.display());
                StoreData {
                    is_enabled: false,
                    ..StoreData::default()
                }
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
            Err(e) => {
                log::warn!("store {}: {e}; suggestions disabled", path.display());
                StoreData {
                    is_enabled: false,
                    ..StoreData::default()
                }
            }
        };
        let (tx, _) = broadcast::channel(16);
        Store {
            path,
            state: Arc::new(RwLock::new(data)),
            tx,
        }
    }

    pub fn default_path() -> PathBuf {
        match std::env::var("HOME") {
            Ok(home) if !home.is_empty() => Path::new(&home).join(".quill.json"),
            _ => PathBuf::from(".quill.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> StoreData {
        self.state.read().expect("store lock poisoned").clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.tx.subscribe()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.state.write().expect("store lock poisoned").is_enabled = enabled;
        let _ = self.tx.send(StoreChange::Enabled(enabled));
        self.persist();
    }

    pub fn set_keywords(&self, keywords: IndexMap<String, Vec<String>>) {
        self.state.write().expect("store lock poisoned").keywords = Some(keywords.clone());
        let _ = self.tx.send(StoreChange::Keywords(keywords));
        self.persist();
    }

    pub fn set_counts(&self, counts: UsageCounts) {
        self.state.write().expect("store lock poisoned").selection_counts = counts.clone();
        let _ = self.tx.send(StoreChange::Counts(counts));
        self.persist();
    }

    /// Bump the usage counter for `text` (created at 1 when absent) and
    /// broadcast the replaced table. Returns the new count.
    pub fn record_selection(&self, text: &str) -> u64 {
        let counts = {
            let mut state = self.state.write().expect("store lock poisoned");
            let entry = state.selection_counts.entry(text.to_string()).or_insert(0);
            *entry += 1;
            state.selection_counts.clone()
        };
        let n = counts.get(text).copied().unwrap_or(0);
        let _ = self.tx.send(StoreChange::Counts(counts));
        self.persist();
        n
    }

    // Fire-and-forget write; the store state is already current, so a lost
    // write only costs durability, never consistency within the session.
    fn persist(&self) {
        let path = self.path.clone();
        let data = self.data();
        std::thread::spawn(move || {
            if let Err(e) = write_store(&path, &data) {
                log::error!("store {}: {e}", path.display());
            }
        });
    }

    /// Synchronous write, for shutdown paths and tests.
    pub fn persist_blocking(&self) -> Result<(), String> {
        write_store(&self.path, &self.data())
    }
}

fn write_store(path: &Path, data: &StoreData) -> Result<(), String> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("failed to serialize store: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("failed to write store: {e}"))
}

/// Parse the store file, coercing malformed entries instead of erroring:
/// a non-object root is an error, but a non-array option list becomes an
/// empty list and non-string members are skipped.
pub fn parse_store(raw: &str) -> Result<StoreData, String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| format!("failed to parse store JSON: {e}"))?;
    let obj = value
        .as_object()
        .ok_or_else(|| "store root is not an object".to_string())?;

    let defaults = StoreData::default();
    let is_enabled = obj
        .get("isEnabled")
        .and_then(|v| v.as_bool())
        .unwrap_or(defaults.is_enabled);
    let included_urls = obj
        .get("includedUrls")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|x| x.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or(defaults.included_urls);
    let keywords = obj.get("keywords").and_then(|v| v.as_object()).map(|map| {
        let mut out = IndexMap::with_capacity(map.len());
        for (k, v) in map {
            let options = v
                .as_array()
                .map(|arr| {
                    arr.iter()
                        .filter_map(|x| x.as_str().map(|s| s.to_string()))
                        .collect()
                })
                .unwrap_or_default();
            out.insert(k.clone(), options);
        }
        out
    });
    let selection_counts = obj
        .get("selectionCounts")
        .and_then(|v| v.as_object())
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_u64().map(|n| (k.clone(), n)))
                .collect()
        })
        .unwrap_or_default();

    Ok(StoreData {
        is_enabled,
        included_urls,
        keywords,
        selection_counts,
    })
}

/// Hostname allowlist check: `host` matches an entry when it equals the
/// entry's domain part or is a subdomain of it. A leading `www.` on the
/// host is ignored.
pub fn site_allowed(host: &str, included_urls: &[String]) -> bool {
    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    included_urls.iter().any(|u| {
        let domain = u.split('/').next().unwrap_or("").to_lowercase();
        !domain.is_empty() && (host == domain || host.ends_with(&format!(".{domain}")))
    })
}
