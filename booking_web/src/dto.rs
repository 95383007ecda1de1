use booking::domain::{
    core::{Booking, BookingRequest, Customer, CustomerError, Room, RoomNumber},
    Entity,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::error::{ApiError, FieldError};

/// POST /booking の要素
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingBody {
    /// Nom du client
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    /// Téléphone du client
    pub phone: String,
    /// Email du client
    #[validate(email(message = "Value is not a valid email address"))]
    pub email: String,
    /// Numéro de chambre entre 1 et 9
    #[validate(range(min = 1, max = 9, message = "Room number must be between 1 and 9"))]
    #[schema(minimum = 1, maximum = 9)]
    pub room_number: i64,
    /// Libellé de la chambre
    pub room_name: Option<String>,
    /// Description de la chambre
    pub description: Option<String>,
    /// Date de réservation (YYYY-MM-DD)
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date, example = "2024-05-01")]
    pub booking_date: NaiveDate,
}

impl BookingBody {
    fn into_request(self, index: usize) -> Result<BookingRequest, Vec<FieldError>> {
        self.validate()
            .map_err(|errors| field_errors(index, &errors))?;
        let room_number = RoomNumber::try_from(self.room_number)
            .map_err(|e| vec![FieldError::at(index, "roomNumber", e.to_string(), "range")])?;
        let customer = Customer::create(self.name, self.phone, self.email).map_err(|e| {
            let (field, kind) = match e {
                CustomerError::NameIsEmpty => ("name", "length"),
                CustomerError::InvalidEmail => ("email", "email"),
            };
            vec![FieldError::at(index, field, e.to_string(), kind)]
        })?;
        let room = Room::new(room_number, self.room_name, self.description);
        Ok(BookingRequest::new(customer, room, self.booking_date))
    }
}

/// 入力を検証して予約の申し込みに変換する
///
/// エラーは全要素分をまとめて返す。
pub fn into_requests(bodies: Vec<BookingBody>) -> Result<Vec<BookingRequest>, ApiError> {
    let mut requests = Vec::with_capacity(bodies.len());
    let mut errors = Vec::new();
    for (index, body) in bodies.into_iter().enumerate() {
        match body.into_request(index) {
            Ok(request) => requests.push(request),
            Err(mut e) => errors.append(&mut e),
        }
    }
    match errors.is_empty() {
        true => Ok(requests),
        false => Err(ApiError::Validation(errors)),
    }
}

fn field_errors(index: usize, errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields = errors.field_errors().into_iter().collect::<Vec<_>>();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));
    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = wire_name(&field).to_owned();
            errs.iter().map(move |e| {
                let msg = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                FieldError::at(index, &field, msg, e.code.to_string())
            })
        })
        .collect()
}

fn wire_name(field: &str) -> &str {
    match field {
        "room_number" => "roomNumber",
        "room_name" => "roomName",
        "booking_date" => "bookingDate",
        other => other,
    }
}

/// 予約のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    /// Identifiant interne de la réservation
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub room_number: u8,
    pub room_name: Option<String>,
    pub description: Option<String>,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date, example = "2024-05-01")]
    pub booking_date: NaiveDate,
}

impl From<&Booking> for BookingResponse {
    fn from(value: &Booking) -> Self {
        let customer = value.customer();
        let room = value.room();
        Self {
            id: *value.id(),
            name: customer.name().to_owned(),
            phone: customer.phone().to_owned(),
            email: customer.email().to_owned(),
            room_number: *room.number(),
            room_name: room.name().map(str::to_owned),
            description: room.description().map(str::to_owned),
            booking_date: value.date(),
        }
    }
}

/// `YYYY-MM-DD` 固定の日付表現
///
/// chronoの `FromStr` は `2024-5-1` や5桁の年も受け付けるため、桁と区切りを先に確認する。
mod iso_date {
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if !is_iso_date(&value) {
            return Err(D::Error::custom(format!(
                "invalid date `{}`, expected YYYY-MM-DD",
                value
            )));
        }
        NaiveDate::parse_from_str(&value, FORMAT).map_err(D::Error::custom)
    }

    fn is_iso_date(value: &str) -> bool {
        value.len() == 10
            && value.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            })
    }
}

#[cfg(test)]
mod tests {
    use booking::domain::core::BookingId;
    use serde_json::json;

    use super::*;
    use crate::error::Loc;

    fn body(value: serde_json::Value) -> BookingBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_into_requests() {
        let requests = into_requests(vec![body(json!({
            "name": "A",
            "phone": "1",
            "email": "a@x.com",
            "roomNumber": 3,
            "roomName": "Suite",
            "bookingDate": "2024-05-01",
        }))])
        .unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(*requests[0].room().number(), 3);
        assert_eq!(requests[0].room().name(), Some("Suite"));
        assert_eq!(requests[0].room().description(), None);
        assert_eq!(requests[0].date().to_string(), "2024-05-01");
    }

    #[test]
    fn test_into_requests_reports_every_item() {
        let valid = json!({
            "name": "A", "phone": "1", "email": "a@x.com",
            "roomNumber": 1, "bookingDate": "2024-05-01",
        });
        let invalid = json!({
            "name": "", "phone": "1", "email": "not-an-email",
            "roomNumber": 10, "bookingDate": "2024-05-01",
        });
        let errors = match into_requests(vec![body(valid), body(invalid)]) {
            Err(ApiError::Validation(errors)) => errors,
            other => panic!("unexpected result: {:?}", other),
        };
        let fields = errors
            .iter()
            .map(|e| e.loc.clone())
            .collect::<Vec<_>>();
        assert_eq!(errors.len(), 3);
        for field in ["name", "email", "roomNumber"] {
            assert!(fields.contains(&vec![Loc::from("body"), Loc::Index(1), Loc::from(field)]));
        }
    }

    #[test]
    fn test_whitespace_name_accepted() {
        let requests = into_requests(vec![body(json!({
            "name": "   ", "phone": "1", "email": "a@x.com",
            "roomNumber": 2, "bookingDate": "2024-05-01",
        }))])
        .unwrap();
        assert_eq!(requests[0].customer().name(), "   ");
    }

    #[test]
    fn test_undotted_email_domain_reported_as_email() {
        let result = into_requests(vec![body(json!({
            "name": "A", "phone": "1", "email": "a@x",
            "roomNumber": 2, "bookingDate": "2024-05-01",
        }))]);
        match result {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(
                    errors[0],
                    FieldError::at(0, "email", "Value is not a valid email address", "email")
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_booking_date_must_be_iso() {
        for date in ["2024-5-1", " 2024-05-03", "+10000-01-01", "2024-02-30", "2024/05/01"] {
            let value = json!({
                "name": "A", "phone": "1", "email": "a@x.com",
                "roomNumber": 2, "bookingDate": date,
            });
            assert!(serde_json::from_value::<BookingBody>(value).is_err(), "{date}");
        }
    }

    #[test]
    fn test_booking_date_early_year_is_zero_padded() {
        let request = into_requests(vec![body(json!({
            "name": "A", "phone": "1", "email": "a@x.com",
            "roomNumber": 2, "bookingDate": "0999-01-31",
        }))])
        .unwrap()
        .remove(0);
        let booking = Booking::create(BookingId::from(1), request);
        let value = serde_json::to_value(BookingResponse::from(&booking)).unwrap();
        assert_eq!(value["bookingDate"], json!("0999-01-31"));
    }

    #[test]
    fn test_booking_response_json() {
        let request = into_requests(vec![body(json!({
            "name": "A", "phone": "1", "email": "a@x.com",
            "roomNumber": 3, "bookingDate": "2024-05-01",
        }))])
        .unwrap()
        .remove(0);
        let booking = Booking::create(BookingId::from(1), request);
        assert_eq!(
            serde_json::to_value(BookingResponse::from(&booking)).unwrap(),
            json!({
                "id": 1,
                "name": "A",
                "phone": "1",
                "email": "a@x.com",
                "roomNumber": 3,
                "roomName": null,
                "description": null,
                "bookingDate": "2024-05-01",
            })
        );
    }
}
