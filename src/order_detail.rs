//! Stand-in for the backend-served order detail page: it only echoes the
//! reference it was routed with.

use iced::widget::{button, column, text};
use iced::Element;

use crate::app::Message;
use crate::route::Route;

pub fn view(order_id: &str) -> Element<'static, Message> {
    column![
        text(format!("Order #{}", order_id)).size(24),
        text("Your order has been received and is being prepared.").size(16),
        button("Back to Products").on_press(Message::Navigate(Route::Catalog)),
    ]
    .spacing(20)
    .padding(30)
    .into()
}
