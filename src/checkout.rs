//! Stand-in for the order-placement flow: its only job is to mint an order
//! reference (done by the app shell) and hand the user off to the
//! confirmation screen with that reference in the navigation payload.

use iced::widget::{button, column, row, text};
use iced::Element;

use crate::app::Message;
use crate::route::Route;

pub fn view(product: &str) -> Element<'static, Message> {
    column![
        text("Checkout").size(24),
        text(format!("In your cart: {}", product)).size(16),
        row![
            button("Place Order").on_press(Message::PlaceOrder),
            button("Keep Shopping").on_press(Message::Navigate(Route::Catalog)),
        ]
        .spacing(10),
    ]
    .spacing(20)
    .padding(30)
    .into()
}
