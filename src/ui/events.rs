use crossterm::event::{self, Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::quiz::QuizSet;
use crate::session::LoadTicket;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// Terminal was resized; the next draw picks up the new size.
    Resize,
    /// Countdown tick, tagged with the ticker generation so ticks from a
    /// stopped ticker can be ignored.
    CountdownTick { generation: u64 },
    /// Fetch finished. Tagged with the ticket it was issued under.
    QuizFetched {
        ticket: LoadTicket,
        result: Result<QuizSet, String>,
    },
    /// SIGTERM received.
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let term_flag = Arc::new(AtomicBool::new(false));
            if let Err(err) =
                signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&term_flag))
            {
                tracing::warn!(error = %err, "Failed to register SIGTERM handler");
            }

            let mut last_tick = Instant::now();
            loop {
                if term_flag.load(Ordering::Relaxed) {
                    let _ = event_tx.send(AppEvent::Shutdown);
                    break;
                }

                // Short poll timeout so the signal flag is checked often
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)).is_ok(),
                        Ok(Event::Resize(_, _)) => event_tx.send(AppEvent::Resize).is_ok(),
                        Ok(_) => true,
                        Err(err) => {
                            tracing::error!(error = %err, "Failed to read terminal event");
                            false
                        }
                    },
                    Ok(false) => true,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        false
                    }
                };
                if !forwarded {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
