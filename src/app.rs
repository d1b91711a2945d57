//! Central state holder: the current screen, the message set, and the
//! router that swaps screens when a navigation request comes in.

use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};
use tracing::debug;

use crate::order_success::OrderRef;
use crate::route::Route;
use crate::{catalog, checkout, home, order_detail, order_success};

#[derive(Debug)]
pub enum Screen {
    Home,
    Catalog,
    Checkout { product: String },
    OrderDetail { order_id: String },
    OrderSuccess { order: OrderRef },
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A screen asked the router for a transition.
    Navigate(Route),
    /// Checkout confirmed; mint a reference and hand off to the
    /// confirmation screen.
    PlaceOrder,
}

pub struct Storefront {
    screen: Screen,
    next_order: u32,
}

impl Storefront {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            next_order: 1001,
        }
    }

    pub fn title(&self) -> String {
        let page = match &self.screen {
            Screen::Home => "Home".to_string(),
            Screen::Catalog => "Products".to_string(),
            Screen::Checkout { .. } => "Checkout".to_string(),
            Screen::OrderDetail { order_id } => format!("Order #{}", order_id),
            Screen::OrderSuccess { .. } => "Order Placed".to_string(),
        };
        format!("Storefront - {}", page)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Navigate(route) => self.go_to(route),
            Message::PlaceOrder => {
                let order_id = format!("ORD-{}", self.next_order);
                self.next_order += 1;
                self.go_to(Route::OrderSuccess {
                    order_id: Some(order_id),
                });
            }
        }
    }

    /// The router. Builds the destination screen's state from the route's
    /// payload; the payload is consumed here and exists nowhere else.
    fn go_to(&mut self, route: Route) {
        debug!(path = %route.path(), "route transition");
        self.screen = match route {
            Route::Home => Screen::Home,
            Route::Catalog => Screen::Catalog,
            Route::Checkout { product } => Screen::Checkout { product },
            Route::OrderDetail(order_id) => Screen::OrderDetail { order_id },
            Route::OrderSuccess { order_id } => Screen::OrderSuccess {
                order: OrderRef::from_payload(order_id),
            },
        };
    }

    pub fn view(&self) -> Element<Message> {
        let nav_bar = row![
            self.nav_button("Home", Route::Home),
            self.nav_button("Products", Route::Catalog),
        ]
        .spacing(5)
        .padding([10, 20]);

        let content = match &self.screen {
            Screen::Home => home::view(),
            Screen::Catalog => catalog::view(),
            Screen::Checkout { product } => checkout::view(product),
            Screen::OrderDetail { order_id } => order_detail::view(order_id),
            Screen::OrderSuccess { order } => order_success::view(order),
        };

        container(column![nav_bar, content].spacing(10))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn nav_button<'a>(&self, label: &'a str, route: Route) -> Element<'a, Message> {
        let is_active = matches!(
            (&self.screen, &route),
            (Screen::Home, Route::Home) | (Screen::Catalog, Route::Catalog)
        );
        button(text(label).size(if is_active { 16 } else { 14 }))
            .on_press(Message::Navigate(route))
            .into()
    }
}
