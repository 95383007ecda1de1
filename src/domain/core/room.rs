use std::ops::RangeInclusive;

use derive_more::{Deref, Display, Error};

/// 部屋番号 (1から9まで)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deref)]
pub struct RoomNumber(u8);

impl RoomNumber {
    pub const RANGE: RangeInclusive<i64> = 1..=9;
}

impl TryFrom<i64> for RoomNumber {
    type Error = RoomError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match Self::RANGE.contains(&value) {
            true => u8::try_from(value)
                .map(RoomNumber)
                .map_err(|_| RoomError::OutOfRange),
            false => Err(RoomError::OutOfRange),
        }
    }
}

/// 部屋
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    number: RoomNumber,
    name: Option<String>,
    description: Option<String>,
}

impl Room {
    pub fn new(number: RoomNumber, name: Option<String>, description: Option<String>) -> Self {
        Self {
            number,
            name,
            description,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// 部屋エラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum RoomError {
    /// 部屋番号が範囲外です
    #[display(fmt = "Room number must be between 1 and 9")]
    OutOfRange,
}
