// src/app/posters.rs
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use eframe::egui::{self as eg, TextureHandle};
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use super::cache::PosterCache;
use crate::config::AppConfig;

pub const MAX_DONE_PER_FRAME: usize = 12;
pub const MAX_UPLOADS_PER_FRAME: usize = 4;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PosterState {
    Pending, // queued or downloading
    Cached,  // file on disk, waiting for upload
    Ready,   // texture uploaded
    Failed,  // permanent; painted as an empty poster
}

/// Resolves an image reference to a decodable file on disk. Runs on worker threads.
pub trait PosterSource: Send + Sync {
    fn fetch(&self, reference: &str) -> Result<PathBuf, String>;
}

pub struct HttpPosterSource {
    client: Client,
    cache: PosterCache,
    max_width: u32,
    quality: u8,
}

impl HttpPosterSource {
    pub fn new(cfg: &AppConfig) -> Result<Self, String> {
        let cache = PosterCache::open(&cfg.cache_dir)?;
        let max_age = Duration::from_secs(cfg.poster_retention_days.saturating_mul(SECS_PER_DAY));
        match cache.prune_older_than(max_age) {
            Ok(n) if n > 0 => info!("pruned {n} stale posters"),
            Ok(_) => {}
            Err(e) => warn!("poster cache prune failed: {e}"),
        }

        let client = Client::builder()
            .user_agent("cinescope/posters")
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .default_headers({
                use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
                let mut h = HeaderMap::new();
                h.insert(
                    ACCEPT,
                    HeaderValue::from_static("image/avif,image/webp,image/*;q=0.8,*/*;q=0.5"),
                );
                h
            })
            .build()
            .map_err(|e| format!("http client: {e}"))?;

        Ok(Self {
            client,
            cache,
            max_width: cfg.poster_max_width,
            quality: cfg.poster_quality,
        })
    }
}

pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

impl PosterSource for HttpPosterSource {
    fn fetch(&self, reference: &str) -> Result<PathBuf, String> {
        if !is_remote(reference) {
            let p = PathBuf::from(reference);
            return if p.is_file() {
                Ok(p)
            } else {
                Err(format!("no such image {reference}"))
            };
        }

        let key = PosterCache::key_for(reference);
        if let Some(found) = self.cache.find(&key) {
            return Ok(found);
        }

        let bytes = self
            .client
            .get(reference)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .map_err(|e| format!("GET {reference}: {e}"))?;

        self.cache
            .store_bytes(&key, &bytes, self.max_width, self.quality)
    }
}

struct PosterDone {
    reference: String,
    result: Result<PathBuf, String>,
}

#[derive(Default)]
struct PosterSlot {
    state: Option<PosterState>,
    path: Option<PathBuf>,
    tex: Option<TextureHandle>,
}

/// Background poster pipeline: workers fetch, the UI thread drains and uploads.
pub struct PosterLoader {
    work_tx: Sender<String>,
    done_rx: Receiver<PosterDone>,
    slots: HashMap<String, PosterSlot>,
}

impl PosterLoader {
    pub fn spawn(source: Arc<dyn PosterSource>, workers: usize) -> Self {
        let (work_tx, work_rx) = mpsc::channel::<String>();
        let (done_tx, done_rx) = mpsc::channel::<PosterDone>();
        let work_rx = Arc::new(Mutex::new(work_rx));

        for n in 0..workers.max(1) {
            let work_rx = Arc::clone(&work_rx);
            let done_tx = done_tx.clone();
            let source = Arc::clone(&source);
            let spawned = std::thread::Builder::new()
                .name(format!("poster-{n}"))
                .spawn(move || loop {
                    let job = {
                        let Ok(rx) = work_rx.lock() else { break };
                        rx.recv()
                    };
                    let Ok(reference) = job else { break };
                    let result = source.fetch(&reference);
                    if done_tx.send(PosterDone { reference, result }).is_err() {
                        break;
                    }
                });
            if let Err(e) = spawned {
                warn!("failed to start poster worker {n}: {e}");
            }
        }

        Self {
            work_tx,
            done_rx,
            slots: HashMap::new(),
        }
    }

    /// Queue a reference once. Later calls for the same reference are ignored.
    pub fn request(&mut self, reference: &str) {
        if self.slots.contains_key(reference) {
            return;
        }
        let state = if self.work_tx.send(reference.to_string()).is_ok() {
            PosterState::Pending
        } else {
            PosterState::Failed
        };
        self.slots.insert(
            reference.to_string(),
            PosterSlot {
                state: Some(state),
                ..Default::default()
            },
        );
    }

    /// Drain finished jobs. Returns how many were handled.
    pub fn poll(&mut self) -> usize {
        let mut drained = 0usize;
        while drained < MAX_DONE_PER_FRAME {
            let msg = match self.done_rx.try_recv() {
                Ok(msg) => msg,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            };
            drained += 1;
            let slot = self.slots.entry(msg.reference.clone()).or_default();
            match msg.result {
                Ok(path) => {
                    debug!("poster cached: {}", msg.reference);
                    slot.path = Some(path);
                    slot.state = Some(PosterState::Cached);
                }
                Err(e) => {
                    warn!("poster failed: {} ({e})", msg.reference);
                    slot.state = Some(PosterState::Failed);
                }
            }
        }
        drained
    }

    /// Upload up to `budget` cached posters to the GPU. (UI thread only)
    pub fn upload_ready(&mut self, ctx: &eg::Context, budget: usize) -> usize {
        let mut uploaded = 0usize;
        for (reference, slot) in self.slots.iter_mut() {
            if uploaded >= budget {
                break;
            }
            if slot.state != Some(PosterState::Cached) {
                continue;
            }
            let Some(path) = slot.path.as_ref() else {
                slot.state = Some(PosterState::Failed);
                continue;
            };
            match crate::app::gfx::load_texture_from_path(ctx, path, reference) {
                Ok(tex) => {
                    slot.tex = Some(tex);
                    slot.state = Some(PosterState::Ready);
                    uploaded += 1;
                }
                Err(e) => {
                    warn!("poster upload failed: {reference} ({e})");
                    slot.state = Some(PosterState::Failed);
                }
            }
        }
        uploaded
    }

    pub fn state(&self, reference: &str) -> Option<PosterState> {
        self.slots.get(reference).and_then(|s| s.state)
    }

    pub fn texture(&self, reference: &str) -> Option<&TextureHandle> {
        self.slots.get(reference).and_then(|s| s.tex.as_ref())
    }

    pub fn in_flight(&self) -> usize {
        self.slots
            .values()
            .filter(|s| matches!(s.state, Some(PosterState::Pending | PosterState::Cached)))
            .count()
    }
}
