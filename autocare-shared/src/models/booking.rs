//! Models served by the booking backend.
//!
//! The booking service is a separate deployment from the account backend and
//! uses `snake_case` field names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A physical service center (`GET /centers/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceCenter {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
}

/// A bookable service (`GET /services/`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceOffering {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Expected duration of the service.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    /// List price.
    #[serde(default)]
    pub price: Option<f64>,
}

/// One start time in an availability listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Start time as `HH:MM`.
    pub time: String,
    /// Whether the slot can still be booked.
    pub available: bool,
}

/// Response of `GET /availability/{center}/{date}/{service}/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityResponse {
    /// Day the slots belong to.
    pub date: NaiveDate,
    /// Slots in chronological order.
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

impl AvailabilityResponse {
    /// Slots that can still be booked.
    pub fn open_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|slot| slot.available)
    }
}

/// Kind of vehicle brought in for service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Four-door passenger car.
    Sedan,
    /// Compact car with a rear hatch.
    Hatchback,
    /// Sport utility vehicle.
    Suv,
    /// Pickup or light truck.
    Truck,
    /// Passenger or cargo van.
    Van,
    /// Two-wheeler.
    Motorcycle,
}

impl VehicleType {
    /// Wire value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Hatchback => "hatchback",
            Self::Suv => "suv",
            Self::Truck => "truck",
            Self::Van => "van",
            Self::Motorcycle => "motorcycle",
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Hatchback => "Hatchback",
            Self::Suv => "SUV",
            Self::Truck => "Truck",
            Self::Van => "Van",
            Self::Motorcycle => "Motorcycle",
        }
    }

    /// Parse a wire value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sedan" => Some(Self::Sedan),
            "hatchback" => Some(Self::Hatchback),
            "suv" => Some(Self::Suv),
            "truck" => Some(Self::Truck),
            "van" => Some(Self::Van),
            "motorcycle" => Some(Self::Motorcycle),
            _ => None,
        }
    }
}

/// Body of `POST /bookings/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    /// Service center id.
    pub center: i64,
    /// Service id.
    pub service: i64,
    /// Day of the appointment.
    pub date: NaiveDate,
    /// Start time as `HH:MM`, taken from the availability listing.
    pub time_slot: String,
    /// Kind of vehicle.
    pub vehicle_type: VehicleType,
    /// Registration plate.
    pub license_plate: String,
}

/// Lifecycle of a booking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting confirmation by the center.
    Pending,
    /// Accepted by the center.
    Confirmed,
    /// Service carried out.
    Completed,
    /// Cancelled by either side.
    Cancelled,
}

impl BookingStatus {
    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A booking as listed by `GET /bookings/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    /// Backend identifier.
    pub id: i64,
    /// Service center id.
    pub center: i64,
    /// Service center name, when the backend expands it.
    #[serde(default)]
    pub center_name: Option<String>,
    /// Service id.
    pub service: i64,
    /// Service name, when the backend expands it.
    #[serde(default)]
    pub service_name: Option<String>,
    /// Day of the appointment.
    pub date: NaiveDate,
    /// Start time as `HH:MM`.
    pub time_slot: String,
    /// Kind of vehicle.
    pub vehicle_type: VehicleType,
    /// Registration plate.
    pub license_plate: String,
    /// Current status.
    pub status: BookingStatus,
    /// Owner of the booking; only present in staff listings.
    #[serde(default)]
    pub customer_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn availability_filters_open_slots() {
        let availability: AvailabilityResponse = serde_json::from_str(
            r#"{"date":"2026-03-02","slots":[
                {"time":"09:00","available":true},
                {"time":"10:00","available":false},
                {"time":"11:00","available":true}
            ]}"#,
        )
        .unwrap();
        let open: Vec<_> = availability.open_slots().map(|slot| slot.time.as_str()).collect();
        assert_eq!(open, ["09:00", "11:00"]);
        assert_eq!(
            availability.date,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
    }

    #[test]
    fn availability_without_slots_is_empty() {
        let availability: AvailabilityResponse =
            serde_json::from_str(r#"{"date":"2026-03-02"}"#).unwrap();
        assert_eq!(availability.open_slots().count(), 0);
    }

    #[test]
    fn booking_request_wire_format() {
        let request = BookingRequest {
            center: 3,
            service: 5,
            date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            time_slot: "14:30".into(),
            vehicle_type: VehicleType::Suv,
            license_plate: "AB-123-CD".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["date"], "2026-11-02");
        assert_eq!(json["vehicle_type"], "suv");
        assert_eq!(json["time_slot"], "14:30");
    }

    #[test]
    fn vehicle_type_parse_matches_wire_value() {
        for vehicle in VehicleType::iter() {
            assert_eq!(VehicleType::parse(vehicle.as_str()), Some(vehicle));
        }
        assert_eq!(VehicleType::parse("tank"), None);
    }

    #[test]
    fn booking_parses_optional_expansions() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":9,"center":1,"service":2,"date":"2026-05-01","time_slot":"08:00",
                "vehicle_type":"van","license_plate":"XYZ1","status":"confirmed",
                "center_name":"Downtown"}"#,
        )
        .unwrap();
        assert_eq!(booking.center_name.as_deref(), Some("Downtown"));
        assert!(booking.service_name.is_none());
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.status.label(), "Confirmed");
    }
}
