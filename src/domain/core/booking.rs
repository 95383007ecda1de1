use async_trait::async_trait;
use chrono::NaiveDate;
use derive_more::{Deref, Display, Error, From};

use crate::domain::{DataAccessError, Entity, Id};

use super::{Customer, Room, RoomNumber};

/// 予約リポジトリ
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// 全ての予約を登録順に取得する
    async fn find_all(&self) -> Result<Vec<Booking>, DataAccessError>;
    /// 予約をまとめて登録し、登録後の全ての予約を返す
    ///
    /// 一件でも同じ部屋・同じ日付の予約と重なる場合は一件も登録しない。
    async fn create_all(&self, requests: Vec<BookingRequest>) -> Result<Vec<Booking>, BookingError>;
}

/// 予約ID
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, From, Deref, Default)]
pub struct BookingId(u64);

impl Id for BookingId {
    type Inner = u64;
}

/// 予約の申し込み
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    customer: Customer,
    room: Room,
    date: NaiveDate,
}

impl BookingRequest {
    pub fn new(customer: Customer, room: Room, date: NaiveDate) -> Self {
        Self {
            customer,
            room,
            date,
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// 重複判定に使う部屋番号と日付の組
    pub fn slot(&self) -> (RoomNumber, NaiveDate) {
        (self.room.number(), self.date)
    }
}

/// 予約エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    id: BookingId,
    request: BookingRequest,
}

impl Booking {
    pub fn create(id: BookingId, request: BookingRequest) -> Self {
        Self { id, request }
    }

    pub fn customer(&self) -> &Customer {
        self.request.customer()
    }

    pub fn room(&self) -> &Room {
        self.request.room()
    }

    pub fn date(&self) -> NaiveDate {
        self.request.date()
    }

    pub fn slot(&self) -> (RoomNumber, NaiveDate) {
        self.request.slot()
    }
}

impl Entity for Booking {
    type Id = BookingId;

    const ENTITY_NAME: &'static str = "booking";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// 予約エラー
#[derive(Error, Display, Debug)]
pub enum BookingError {
    /// 同じ部屋が同じ日付に予約済みです
    #[display(fmt = "La chambre {} n'est pas disponible le {}.", room_number, date)]
    Conflict {
        room_number: RoomNumber,
        date: NaiveDate,
    },
    /// データアクセスエラー
    #[display(fmt = "Data access error: {}", _0)]
    DataAccess(#[error(source)] DataAccessError),
}

impl From<DataAccessError> for BookingError {
    fn from(value: DataAccessError) -> Self {
        BookingError::DataAccess(value)
    }
}
