mod about;
mod admin;
mod booking;
mod contact;
mod customer;
mod employee;
mod forbidden;
mod home;
pub mod login;
mod not_found;
mod profile;
mod register;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use booking::BookingPage;
pub use contact::ContactPage;
pub use customer::CustomerPage;
pub use employee::EmployeePage;
pub use forbidden::ForbiddenPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;

use crate::validation::FieldErrors;
use yew::{Callback, UseStateHandle};

/// Input callback that writes one field of a form held in state and drops
/// that field's error.
pub(crate) fn field_setter<F>(
    form: &UseStateHandle<F>,
    errors: &UseStateHandle<FieldErrors>,
    field: &'static str,
    apply: fn(&mut F, String),
) -> Callback<String>
where
    F: Clone + 'static,
{
    let form = form.clone();
    let errors = errors.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
        if errors.contains(field) {
            let mut cleared = (*errors).clone();
            cleared.clear(field);
            errors.set(cleared);
        }
    })
}
