//! Request and response bodies exchanged with the AutoCare backends.

pub mod auth;
pub mod booking;
pub mod errors;
pub mod user;

pub use auth::{
    AuthResponse, ChangePasswordRequest, CreateEmployeeRequest, LoginRequest, RegisterRequest,
    UpdateProfileRequest,
};
pub use booking::{
    AvailabilityResponse, Booking, BookingRequest, BookingStatus, ServiceCenter, ServiceOffering,
    TimeSlot, VehicleType,
};
pub use errors::ErrorResponse;
pub use user::{Role, UserRecord};
