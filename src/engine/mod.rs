mod availability;
mod conflict;
mod error;
mod mutations;
mod queries;
mod store;

pub use availability::available_rooms;
pub use error::EngineError;
pub use store::HotelStore;

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tokio::sync::{RwLock, mpsc, oneshot};

use crate::model::*;
use crate::wal::Wal;

pub type SharedHotelState = Arc<RwLock<HotelState>>;

// ── Group-commit WAL channel ─────────────────────────────

struct WalAppend {
    event: Event,
    response: oneshot::Sender<io::Result<()>>,
}

/// Background task that owns the WAL and batches appends for group commit.
/// 1. Block until the first append arrives.
/// 2. Buffer it (no fsync).
/// 3. Drain all immediately available appends (the batch window).
/// 4. Single flush_sync for the whole batch.
/// 5. Respond to all senders.
async fn wal_writer_loop(mut wal: Wal, mut rx: mpsc::Receiver<WalAppend>) {
    while let Some(first) = rx.recv().await {
        let mut batch = vec![(first.event, first.response)];
        while let Ok(next) = rx.try_recv() {
            batch.push((next.event, next.response));
        }

        metrics::histogram!(crate::observability::WAL_FLUSH_BATCH_SIZE)
            .record(batch.len() as f64);
        let flush_start = std::time::Instant::now();
        let result = flush_batch(&mut wal, &batch);
        metrics::histogram!(crate::observability::WAL_FLUSH_DURATION_SECONDS)
            .record(flush_start.elapsed().as_secs_f64());
        respond_batch(batch, &result);
    }
}

fn flush_batch(
    wal: &mut Wal,
    batch: &[(Event, oneshot::Sender<io::Result<()>>)],
) -> io::Result<()> {
    let mut append_err: Option<io::Error> = None;
    for (event, _) in batch {
        if let Err(e) = wal.append_buffered(event) {
            append_err = Some(e);
            break;
        }
    }
    // Always flush — even on append error — so partially buffered bytes
    // don't leak into the next batch (callers were told this batch failed).
    let flush_err = wal.flush_sync().err();
    if let Some(e) = append_err {
        return Err(e);
    }
    if let Some(e) = flush_err {
        return Err(e);
    }
    Ok(())
}

fn respond_batch(batch: Vec<(Event, oneshot::Sender<io::Result<()>>)>, result: &io::Result<()>) {
    for (_, tx) in batch {
        let r = match result {
            Ok(()) => Ok(()),
            Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
        };
        let _ = tx.send(r);
    }
}

/// The room-availability and booking-consistency engine. One instance
/// per backing store, shared across callers behind an `Arc`.
///
/// Hotels live behind per-hotel `RwLock`s; the booking transaction is
/// the only writer of occupancy state and holds the hotel's write lock
/// across conflict check, WAL append, and marker insert.
pub struct Engine {
    hotels: DashMap<HotelId, SharedHotelState>,
    bookings: DashMap<BookingId, Booking>,
    /// Last assigned ids; allocation is fetch_add + 1, so ids start at 1.
    hotel_seq: AtomicU64,
    booking_seq: AtomicU64,
    /// `None` for the ephemeral (memory) backend.
    wal_tx: Option<mpsc::Sender<WalAppend>>,
}

impl Engine {
    /// Open a durable engine: replay the WAL at `wal_path`, then start
    /// the background group-commit writer. Must run inside a Tokio
    /// runtime.
    pub fn open(wal_path: &Path) -> io::Result<Self> {
        let events = Wal::replay(wal_path)?;
        let wal = Wal::open(wal_path)?;
        let (wal_tx, wal_rx) = mpsc::channel(4096);
        tokio::spawn(wal_writer_loop(wal, wal_rx));

        let engine = Self {
            hotels: DashMap::new(),
            bookings: DashMap::new(),
            hotel_seq: AtomicU64::new(0),
            booking_seq: AtomicU64::new(0),
            wal_tx: Some(wal_tx),
        };
        for event in &events {
            engine.apply_replayed(event);
        }
        tracing::debug!(events = events.len(), "wal replay complete");
        Ok(engine)
    }

    /// A volatile engine with identical semantics and no WAL: the
    /// `memory` backend.
    pub fn ephemeral() -> Self {
        Self {
            hotels: DashMap::new(),
            bookings: DashMap::new(),
            hotel_seq: AtomicU64::new(0),
            booking_seq: AtomicU64::new(0),
            wal_tx: None,
        }
    }

    /// Apply one replayed event. Replay is single-threaded and we own
    /// every Arc, so try_write always succeeds instantly.
    fn apply_replayed(&self, event: &Event) {
        match event {
            Event::HotelCreated { id, name, rooms } => {
                let mut room_map = BTreeMap::new();
                for spec in rooms {
                    room_map.insert(spec.number, RoomState::new(spec.number, spec.capacity));
                }
                self.hotels.insert(
                    *id,
                    Arc::new(RwLock::new(HotelState::new(*id, name.clone(), room_map))),
                );
                self.hotel_seq.fetch_max(*id, Ordering::Relaxed);
            }
            Event::BookingCreated {
                id,
                hotel_id,
                room_number,
                range,
            } => {
                if let Some(entry) = self.hotels.get(hotel_id) {
                    let hotel = entry.value().clone();
                    let mut guard = hotel.try_write().expect("replay: uncontended write");
                    if let Some(room) = guard.room_mut(*room_number) {
                        // Only committed, conflict-free bookings reach the WAL
                        let _ = room.occupy(range);
                    }
                }
                self.bookings.insert(
                    *id,
                    Booking {
                        id: *id,
                        hotel_id: *hotel_id,
                        room_number: *room_number,
                        range: *range,
                    },
                );
                self.booking_seq.fetch_max(*id, Ordering::Relaxed);
            }
        }
    }

    /// Write an event through the background group-commit writer. The
    /// ephemeral backend commits to nothing and returns immediately.
    async fn wal_append(&self, event: &Event) -> Result<(), EngineError> {
        let Some(tx) = &self.wal_tx else {
            return Ok(());
        };
        let (resp_tx, resp_rx) = oneshot::channel();
        tx.send(WalAppend {
            event: event.clone(),
            response: resp_tx,
        })
        .await
        .map_err(|_| EngineError::WalError("WAL writer shut down".into()))?;
        resp_rx
            .await
            .map_err(|_| EngineError::WalError("WAL writer dropped response".into()))?
            .map_err(|e| EngineError::WalError(e.to_string()))
    }

    fn get_hotel(&self, id: HotelId) -> Option<SharedHotelState> {
        self.hotels.get(&id).map(|e| e.value().clone())
    }
}
