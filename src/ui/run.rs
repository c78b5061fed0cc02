use crate::catalog::{default_catalog, Catalog};
use crate::store::{site_allowed, Store, StoreChange};
use crate::ui::model::{initial_model, Model};
use bubbletea_rs::{
    command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel, Program,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tokio::sync::Mutex as TokioMutex;

// Message injected into the program loop when the store broadcasts a change.
struct StoreChangeMsg(StoreChange);

// TeaModel::init takes no arguments, so the model built by `run` is handed
// over through this slot.
struct Bootstrap {
    model: Model,
    rx: broadcast::Receiver<StoreChange>,
}

static BOOTSTRAP: Lazy<Mutex<Option<Bootstrap>>> = Lazy::new(|| Mutex::new(None));

/// Assemble the initial model from the store. A host that fails the
/// allowlist check, or a disabled store, degrades to feature-inactive: the
/// field still edits, the dropdown never opens.
pub fn build_model(store: &Store, host: Option<&str>) -> Model {
    let data = store.data();
    let site_ok = match host {
        Some(h) => site_allowed(h, &data.included_urls),
        None => true,
    };
    let enabled = data.is_enabled && site_ok;
    let catalog = match data.keywords {
        Some(map) => Catalog::new(map),
        None => default_catalog(),
    };
    let mut m = initial_model(catalog, data.selection_counts, enabled);
    m.store = Some(store.clone());
    m
}

// Re-armed after every delivery so the subscription lives as long as the
// program does. Lagged receivers just skip to the newest state; every
// change is a full-value replacement, so nothing is lost.
fn wait_for_change(rx: Arc<TokioMutex<broadcast::Receiver<StoreChange>>>) -> Cmd {
    Box::pin(async move {
        loop {
            let res = rx.lock().await.recv().await;
            match res {
                Ok(change) => {
                    return Some(
                        Box::new(StoreChangeMsg(change)) as bubbletea_rs::event::Msg
                    )
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    })
}

struct TeaAdapter {
    inner: Model,
    rx: Arc<TokioMutex<broadcast::Receiver<StoreChange>>>,
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let boot = BOOTSTRAP.lock().ok().and_then(|mut slot| slot.take());
        let (model, rx) = match boot {
            Some(b) => (b.model, b.rx),
            None => {
                // run() was not used; come up inert rather than panic
                let (tx, rx) = broadcast::channel(1);
                drop(tx);
                (
                    initial_model(default_catalog(), Default::default(), false),
                    rx,
                )
            }
        };
        let mut adapter = TeaAdapter {
            inner: model,
            rx: Arc::new(TokioMutex::new(rx)),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(crate::ui::Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        let cmd = wait_for_change(adapter.rx.clone());
        (adapter, Some(cmd))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(sc) = msg.downcast_ref::<StoreChangeMsg>() {
            match &sc.0 {
                StoreChange::Enabled(b) => self.inner.update(crate::ui::Msg::EnabledChanged(*b)),
                StoreChange::Keywords(k) => {
                    self.inner.update(crate::ui::Msg::CatalogReplaced(k.clone()))
                }
                StoreChange::Counts(c) => {
                    self.inner.update(crate::ui::Msg::CountsReplaced(c.clone()))
                }
            }
            return Some(wait_for_change(self.rx.clone()));
        }

        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            // Normalize and handle global quit keys first for reliability across terminals:
            match &km.key {
                KeyCode::Esc => {
                    if !(self.inner.enabled && self.inner.is_open()) {
                        return Some(bubbletea_rs::quit());
                    }
                    self.inner.update(crate::ui::Msg::KeyEsc);
                    return None;
                }
                KeyCode::Char(ch) => {
                    if *ch == '\u{1b}' {
                        if !(self.inner.enabled && self.inner.is_open()) {
                            return Some(bubbletea_rs::quit());
                        }
                        self.inner.update(crate::ui::Msg::KeyEsc);
                        return None;
                    }
                    if *ch == '\u{03}' {
                        // Ctrl-C delivered as ETX
                        return Some(bubbletea_rs::quit());
                    }
                    if km.modifiers.contains(KeyModifiers::CONTROL) && (*ch == 'c' || *ch == 'C') {
                        return Some(bubbletea_rs::quit());
                    }
                }
                _ => {}
            }

            match &km.key {
                KeyCode::Enter => {
                    self.inner.update(crate::ui::Msg::KeyEnter);
                    if self.inner.submitted.is_some() {
                        return Some(bubbletea_rs::quit());
                    }
                }
                KeyCode::Backspace => self.inner.update(crate::ui::Msg::KeyBackspace),
                KeyCode::Delete => self.inner.update(crate::ui::Msg::KeyDelete),
                KeyCode::Left => self.inner.update(crate::ui::Msg::KeyLeft),
                KeyCode::Right => self.inner.update(crate::ui::Msg::KeyRight),
                KeyCode::Home => self.inner.update(crate::ui::Msg::KeyHome),
                KeyCode::End => self.inner.update(crate::ui::Msg::KeyEnd),
                KeyCode::Up => self.inner.update(crate::ui::Msg::KeyUp),
                KeyCode::Down => self.inner.update(crate::ui::Msg::KeyDown),
                KeyCode::Tab => self.inner.update(crate::ui::Msg::KeyTab),
                KeyCode::BackTab => self.inner.update(crate::ui::Msg::KeyShiftTab),
                KeyCode::Esc => { /* handled above */ }
                KeyCode::Char(ch) => {
                    if km.modifiers.contains(KeyModifiers::CONTROL) {
                        match ch {
                            'n' | 'N' => self.inner.update(crate::ui::Msg::KeyDown),
                            'p' | 'P' => self.inner.update(crate::ui::Msg::KeyUp),
                            _ => {}
                        }
                    } else {
                        self.inner.update(crate::ui::Msg::Rune(*ch));
                    }
                }
                _ => {}
            }
            return None;
        }

        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(crate::ui::Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
            return None;
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Run the interactive program against `store`. Returns the submitted
/// prompt, or None when the user quit without submitting.
pub async fn run(store: Store, host: Option<String>) -> Result<Option<String>, String> {
    let model = build_model(&store, host.as_deref());
    let rx = store.subscribe();
    if let Ok(mut slot) = BOOTSTRAP.lock() {
        *slot = Some(Bootstrap { model, rx });
    }

    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true);
    let program = builder
        .build()
        .map_err(|e| format!("failed to build program: {e:?}"))?;
    let final_adapter = program
        .run()
        .await
        .map_err(|e| format!("program error: {e:?}"))?;
    Ok(final_adapter.inner.submitted.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn store_in(dir: &tempfile::TempDir) -> Store {
        Store::open(dir.path().join("store.json"))
    }

    #[test]
    fn build_model_uses_defaults_when_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let m = build_model(&store_in(&dir), None);
        assert!(m.enabled);
        assert!(m.catalog.contains("color"));
        assert!(m.store.is_some());
    }

    #[test]
    fn build_model_prefers_stored_keywords() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut kw = IndexMap::new();
        kw.insert("era".to_string(), vec!["medieval".to_string()]);
        store.set_keywords(kw);
        let m = build_model(&store, None);
        assert!(m.catalog.contains("era"));
        assert!(!m.catalog.contains("color"));
    }

    #[test]
    fn allowlisted_host_keeps_the_feature_armed() {
        let dir = tempfile::tempdir().unwrap();
        let m = build_model(&store_in(&dir), Some("alpha.midjourney.com"));
        assert!(m.enabled);
    }

    #[test]
    fn unlisted_host_degrades_to_inactive() {
        let dir = tempfile::tempdir().unwrap();
        let m = build_model(&store_in(&dir), Some("example.com"));
        assert!(!m.enabled, "feature must fail closed off the allowlist");
    }

    #[test]
    fn disabled_store_wins_over_allowed_host() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_enabled(false);
        let m = build_model(&store, Some("midjourney.com"));
        assert!(!m.enabled);
    }

    #[test]
    fn stored_counts_seed_the_model() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.record_selection("red");
        let m = build_model(&store, None);
        assert_eq!(m.counts.get("red").copied(), Some(1));
    }
}
