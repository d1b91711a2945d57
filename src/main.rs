mod app;
mod catalog;
mod checkout;
mod home;
mod order_detail;
mod order_success;
mod route;

use app::Storefront;
use iced::Theme;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    iced::application(Storefront::title, Storefront::update, Storefront::view)
        .theme(|_| Theme::Light)
        .run_with(|| (Storefront::new(), iced::Task::none()))
}
