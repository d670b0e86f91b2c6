//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_marvel;

use async_trait::async_trait;
use charinfo::marvel::{CharacterRecord, CharacterService, ComicSummary, MarvelError};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::oneshot;

/// Scenario A record: no description, no image, no comics.
pub fn three_d_man() -> CharacterRecord {
    CharacterRecord {
        id: 1011334,
        name: "3-D Man".to_string(),
        description: String::new(),
        thumbnail_url: "http://i.annihil.us/u/prod/marvel/i/mg/b/40/image_not_available.jpg"
            .to_string(),
        homepage_url: "http://marvel.com/characters/74/3-d_man".to_string(),
        wiki_url: "http://marvel.com/universe/3-D_Man_(Chandler)".to_string(),
        comics: vec![],
    }
}

/// Scenario B record: description, image and two comics.
pub fn a_bomb() -> CharacterRecord {
    CharacterRecord {
        id: 1011335,
        name: "A-Bomb".to_string(),
        description: "Rick Jones has been Hulk's best bud since day one.".to_string(),
        thumbnail_url: "http://i.annihil.us/u/prod/marvel/i/mg/3/20/standard.jpg".to_string(),
        homepage_url: "http://marvel.com/characters/76/a-bomb".to_string(),
        wiki_url: "http://marvel.com/universe/A-Bomb".to_string(),
        comics: vec![
            ComicSummary {
                name: "AVX".to_string(),
            },
            ComicSummary {
                name: "Hulk".to_string(),
            },
        ],
    }
}

/// A record with `count` comics named `Comic #00`, `Comic #01`, ...
pub fn prolific(count: usize) -> CharacterRecord {
    CharacterRecord {
        id: 1009610,
        name: "Spider-Man".to_string(),
        comics: (0..count)
            .map(|i| ComicSummary {
                name: format!("Comic #{:02}", i),
            })
            .collect(),
        ..a_bomb()
    }
}

/// Releases a held response.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn release(self) {
        let _ = self.0.send(());
    }
}

enum Outcome {
    Record(CharacterRecord),
    Fail,
}

struct Step {
    outcome: Outcome,
    gate: Option<oneshot::Receiver<()>>,
}

/// Scripted `CharacterService`.
///
/// Responses are queued per id and consumed in order. An id with nothing
/// queued fails with `NotFound`.
#[derive(Default)]
pub struct MockService {
    steps: Mutex<HashMap<u32, VecDeque<Step>>>,
    calls: Mutex<Vec<u32>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, id: u32, record: CharacterRecord) {
        self.push(id, Outcome::Record(record), None);
    }

    pub fn fail(&self, id: u32) {
        self.push(id, Outcome::Fail, None);
    }

    /// Queue a record that is only returned after the gate is released.
    pub fn respond_when_released(&self, id: u32, record: CharacterRecord) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(id, Outcome::Record(record), Some(rx));
        Gate(tx)
    }

    /// Queue a failure that only happens after the gate is released.
    pub fn fail_when_released(&self, id: u32) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(id, Outcome::Fail, Some(rx));
        Gate(tx)
    }

    /// Ids passed to `fetch_by_id`, in call order.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().clone()
    }

    fn push(&self, id: u32, outcome: Outcome, gate: Option<oneshot::Receiver<()>>) {
        self.steps
            .lock()
            .entry(id)
            .or_default()
            .push_back(Step { outcome, gate });
    }

    fn next_step(&self, id: u32) -> Option<Step> {
        self.calls.lock().push(id);
        self.steps.lock().get_mut(&id).and_then(|q| q.pop_front())
    }
}

#[async_trait]
impl CharacterService for MockService {
    async fn fetch_by_id(&self, id: u32) -> Result<CharacterRecord, MarvelError> {
        let Some(step) = self.next_step(id) else {
            return Err(MarvelError::NotFound { id });
        };

        if let Some(gate) = step.gate {
            let _ = gate.await;
        }

        match step.outcome {
            Outcome::Record(record) => Ok(record),
            Outcome::Fail => Err(MarvelError::Status {
                status: 500,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
