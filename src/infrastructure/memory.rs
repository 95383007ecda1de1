use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::core::{
    Booking, BookingError, BookingId, BookingRepository, BookingRequest, RoomNumber,
};
use crate::domain::{DataAccessError, Entity, IdSequence};

/// メモリ上の予約リポジトリ
///
/// プロセスが終了すると内容は失われる。
/// 登録は書き込みロックの中で検証から挿入までを行う。
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    table: RwLock<BookingTable>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default)]
struct BookingTable {
    bookings: Vec<Booking>,
    slots: HashMap<(RoomNumber, NaiveDate), BookingId>,
    ids: IdSequence,
}

impl BookingTable {
    fn validate(&self, requests: &[BookingRequest]) -> Result<(), BookingError> {
        let mut batch = HashSet::with_capacity(requests.len());
        for request in requests {
            let slot = request.slot();
            if self.slots.contains_key(&slot) || !batch.insert(slot) {
                let (room_number, date) = slot;
                return Err(BookingError::Conflict { room_number, date });
            }
        }
        Ok(())
    }

    fn insert_all(&mut self, requests: Vec<BookingRequest>) -> Result<(), DataAccessError> {
        let mut ids = self.ids.clone();
        let mut created = Vec::with_capacity(requests.len());
        for request in requests {
            created.push(Booking::create(ids.generate()?, request));
        }
        self.ids = ids;
        for booking in created {
            debug!("{}を登録: {}", Booking::ENTITY_NAME, booking.id());
            self.slots.insert(booking.slot(), booking.id());
            self.bookings.push(booking);
        }
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn find_all(&self) -> Result<Vec<Booking>, DataAccessError> {
        Ok(self.table.read().await.bookings.clone())
    }

    async fn create_all(&self, requests: Vec<BookingRequest>) -> Result<Vec<Booking>, BookingError> {
        let mut table = self.table.write().await;
        if let Err(e) = table.validate(&requests) {
            warn!("予約を拒否しました: {}", e);
            return Err(e);
        }
        let count = requests.len();
        table.insert_all(requests)?;
        info!("予約を{}件登録しました (合計{}件)", count, table.bookings.len());
        Ok(table.bookings.clone())
    }
}
