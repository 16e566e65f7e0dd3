use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::system::collector::Collector;
use crate::system::process::ProcessSample;

/// Everything the main loop reacts to, fanned into one channel: terminal
/// input, the refresh timer, and sampler results.
#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize,
    Batch(Vec<ProcessSample>),
    BatchFailed(String),
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    _task: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();

        let task_tx = tx.clone();
        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_rate);

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                let mapped = match evt {
                                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                                    CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                                    _ => None,
                                };
                                if let Some(e) = mapped
                                    && task_tx.send(e).is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(_)) => break,
                            None => break,
                        }
                    }
                    _ = tick_interval.tick() => {
                        if task_tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { tx, rx, _task: task }
    }

    /// A handle for posting events from outside the terminal reader, used
    /// by the sampler to deliver batch results.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Detached task that owns the collector and answers refresh requests by
/// posting `Batch`/`BatchFailed` onto the event channel. Enumerating
/// hundreds of processes is blocking work, so it runs off the event loop;
/// a result arriving after quit is simply never consumed.
pub struct Sampler {
    requests: mpsc::Sender<()>,
}

impl Sampler {
    pub fn spawn(events: mpsc::UnboundedSender<Event>) -> Self {
        let (req_tx, mut req_rx) = mpsc::channel::<()>(1);

        tokio::task::spawn_blocking(move || {
            let mut collector = Collector::new();
            while req_rx.blocking_recv().is_some() {
                let event = match collector.sample() {
                    Ok(batch) => Event::Batch(batch),
                    Err(err) => Event::BatchFailed(err.to_string()),
                };
                if events.send(event).is_err() {
                    break;
                }
            }
        });

        Self { requests: req_tx }
    }

    /// Non-blocking: if a fetch is already in flight the request is
    /// dropped and that cycle's refresh is skipped. Key handling never
    /// waits on enumeration.
    pub fn request(&self) {
        let _ = self.requests.try_send(());
    }
}
