use iced::widget::{button, column, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::route::Route;

pub fn view() -> Element<'static, Message> {
    column![
        text("Welcome to the Storefront").size(24),
        text("Everything for your desk, delivered.").size(16),
        button("Browse Products").on_press(Message::Navigate(Route::Catalog)),
    ]
    .spacing(20)
    .padding(30)
    .align_x(Alignment::Center)
    .into()
}
