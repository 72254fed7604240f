pub(crate) mod alert;
pub(crate) mod booking_table;
pub(crate) mod form_field;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod role_badge;
pub(crate) mod user_dropdown;

pub use alert::{Alert, AlertKind};
pub use booking_table::BookingTable;
pub use form_field::FormField;
pub use loading::Loading;
pub use role_badge::RoleBadge;
