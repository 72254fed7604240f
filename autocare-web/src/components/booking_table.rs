use shared::models::{Booking, BookingStatus};
use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct BookingTableProps {
    pub bookings: Vec<Booking>,
    /// Adds a customer column for staff views.
    #[prop_or_default]
    pub show_customer: bool,
}

fn status_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "badge-warning",
        BookingStatus::Confirmed => "badge-info",
        BookingStatus::Completed => "badge-success",
        BookingStatus::Cancelled => "badge-ghost",
    }
}

#[function_component(BookingTable)]
pub fn booking_table(props: &BookingTableProps) -> Html {
    if props.bookings.is_empty() {
        return html! { <p class="text-base-content/70">{"No bookings yet."}</p> };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Time"}</th>
                        <th>{"Center"}</th>
                        <th>{"Service"}</th>
                        <th>{"Vehicle"}</th>
                        if props.show_customer {
                            <th>{"Customer"}</th>
                        }
                        <th>{"Status"}</th>
                    </tr>
                </thead>
                <tbody>
                { for props.bookings.iter().map(|booking| html! {
                    <tr key={booking.id}>
                        <td>{ booking.date.format("%Y-%m-%d").to_string() }</td>
                        <td>{ &booking.time_slot }</td>
                        <td>{ booking.center_name.clone().unwrap_or_else(|| format!("#{}", booking.center)) }</td>
                        <td>{ booking.service_name.clone().unwrap_or_else(|| format!("#{}", booking.service)) }</td>
                        <td>{ format!("{} · {}", booking.vehicle_type.label(), booking.license_plate) }</td>
                        if props.show_customer {
                            <td>{ booking.customer_email.clone().unwrap_or_default() }</td>
                        }
                        <td>
                            <span class={classes!("badge", status_class(booking.status))}>
                                { booking.status.label() }
                            </span>
                        </td>
                    </tr>
                }) }
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::VehicleType;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn booking() -> Booking {
        Booking {
            id: 5,
            center: 1,
            center_name: Some("Downtown".into()),
            service: 2,
            service_name: None,
            date: NaiveDate::from_ymd_opt(2026, 11, 2).unwrap(),
            time_slot: "09:00".into(),
            vehicle_type: VehicleType::Suv,
            license_plate: "AB123".into(),
            status: BookingStatus::Confirmed,
            customer_email: Some("ada@example.com".into()),
        }
    }

    #[wasm_bindgen_test]
    async fn renders_rows_with_fallback_names() {
        let rendered = yew::ServerRenderer::<BookingTable>::with_props(|| BookingTableProps {
            bookings: vec![booking()],
            show_customer: false,
        })
        .render()
        .await;
        assert!(rendered.contains("Downtown"));
        assert!(rendered.contains("#2"));
        assert!(rendered.contains("Confirmed"));
        assert!(!rendered.contains("ada@example.com"));
    }

    #[wasm_bindgen_test]
    async fn staff_view_shows_customer() {
        let rendered = yew::ServerRenderer::<BookingTable>::with_props(|| BookingTableProps {
            bookings: vec![booking()],
            show_customer: true,
        })
        .render()
        .await;
        assert!(rendered.contains("ada@example.com"));
    }
}
