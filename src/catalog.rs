//! Product listing, the "continue shopping" destination.

use iced::widget::{button, column, row, text};
use iced::{Element, Length};

use crate::app::Message;
use crate::route::Route;

/// Fixed in-memory catalog; there is no backend in this app.
pub const PRODUCTS: [(&str, &str); 4] = [
    ("Walnut desk organizer", "$34.00"),
    ("Brass desk lamp", "$59.00"),
    ("Linen notebook, A5", "$12.50"),
    ("Felt mouse pad", "$18.00"),
];

pub fn view() -> Element<'static, Message> {
    let listing = column(PRODUCTS.iter().map(|(name, price)| {
        row![
            text(*name).size(16).width(Length::FillPortion(3)),
            text(*price).size(16).width(Length::FillPortion(1)),
            button("Buy").on_press(Message::Navigate(Route::Checkout {
                product: (*name).to_string(),
            })),
        ]
        .spacing(10)
        .into()
    }))
    .spacing(10);

    column![text("Products").size(24), listing]
        .spacing(20)
        .padding(30)
        .into()
}
