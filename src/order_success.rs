//! Order confirmation screen, shown after checkout hands the user off here.
//!
//! The whole screen is a function of one input: the order reference carried
//! by the navigation payload. Render content is computed as plain data first
//! (`summary`, `NOTICES`, `actions`) and turned into widgets last, so the
//! with-reference and without-reference modes stay enumerable and testable.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::route::Route;

/// The optional order reference, as an explicit two-state input rather than
/// an `Option` checked ad hoc inside the render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRef {
    Reference(String),
    NoReference,
}

impl OrderRef {
    /// Reads the one-shot navigation payload. A missing value and an empty
    /// string are the same normal, non-error state: the user gets the
    /// generic confirmation with no detail link.
    pub fn from_payload(payload: Option<String>) -> Self {
        match payload {
            Some(id) if !id.is_empty() => OrderRef::Reference(id),
            _ => OrderRef::NoReference,
        }
    }
}

/// Fixed informational notices, always shown.
pub const NOTICES: [&str; 3] = [
    "A confirmation email with your order details is on its way.",
    "Our team will contact you shortly to confirm delivery.",
    "Estimated delivery: 3-5 business days.",
];

const TITLE: &str = "Order Placed Successfully!";

/// Confirmation sentence; names the reference when one was supplied.
pub fn summary(order: &OrderRef) -> String {
    match order {
        OrderRef::Reference(id) => {
            format!("Thank you for your purchase. Your order #{} has been placed.", id)
        }
        OrderRef::NoReference => "Thank you for your purchase.".to_string(),
    }
}

/// A navigation affordance: a label and the route it requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub target: Route,
}

/// The screen's actions, in display order. The detail action exists exactly
/// when a reference does; continue-shopping and go-home are always present.
pub fn actions(order: &OrderRef) -> Vec<Action> {
    let mut actions = Vec::new();
    if let OrderRef::Reference(id) = order {
        actions.push(Action {
            label: "View Order Details",
            target: Route::OrderDetail(id.clone()),
        });
    }
    actions.push(Action {
        label: "Continue Shopping",
        target: Route::Catalog,
    });
    actions.push(Action {
        label: "Go to Home",
        target: Route::Home,
    });
    actions
}

pub fn view(order: &OrderRef) -> Element<'static, Message> {
    let action_row = row(actions(order).into_iter().map(|action| {
        button(action.label)
            .on_press(Message::Navigate(action.target))
            .into()
    }))
    .spacing(10);

    let notices = column(NOTICES.iter().map(|notice| text(*notice).size(14).into())).spacing(5);

    container(
        column![
            text("✓").size(48),
            text(TITLE).size(24),
            text(summary(order)).size(16),
            notices,
            action_row,
        ]
        .spacing(20)
        .padding(30)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(order: &OrderRef) -> Vec<&'static str> {
        actions(order).into_iter().map(|a| a.label).collect()
    }

    #[test]
    fn reference_shows_clause_and_detail_action_together() {
        let order = OrderRef::Reference("A-77".to_string());
        assert!(summary(&order).contains("#A-77"));
        assert_eq!(
            labels(&order),
            vec!["View Order Details", "Continue Shopping", "Go to Home"]
        );
    }

    #[test]
    fn no_reference_omits_clause_and_detail_action_together() {
        let order = OrderRef::NoReference;
        assert!(!summary(&order).contains('#'));
        assert_eq!(labels(&order), vec!["Continue Shopping", "Go to Home"]);
    }

    #[test]
    fn shared_actions_target_fixed_paths_regardless_of_input() {
        for order in [OrderRef::Reference("9".to_string()), OrderRef::NoReference] {
            let actions = actions(&order);
            let shopping = actions
                .iter()
                .find(|a| a.label == "Continue Shopping")
                .unwrap();
            let home = actions.iter().find(|a| a.label == "Go to Home").unwrap();
            assert_eq!(shopping.target.path(), "/products");
            assert_eq!(home.target.path(), "/");
        }
    }

    #[test]
    fn detail_action_targets_the_supplied_reference() {
        let order = OrderRef::Reference("12345".to_string());
        let actions = actions(&order);
        let detail = actions
            .iter()
            .find(|a| a.label == "View Order Details")
            .unwrap();
        assert_eq!(detail.target, Route::OrderDetail("12345".to_string()));
        assert_eq!(detail.target.path(), "/orders/12345");
    }

    #[test]
    fn scenario_order_12345() {
        let order = OrderRef::from_payload(Some("12345".to_string()));
        assert!(summary(&order).contains("#12345"));
        assert_eq!(actions(&order).len(), 3);
    }

    #[test]
    fn scenario_missing_payload() {
        let order = OrderRef::from_payload(None);
        assert_eq!(order, OrderRef::NoReference);
        assert!(!summary(&order).contains('#'));
        assert_eq!(actions(&order).len(), 2);
    }

    #[test]
    fn scenario_empty_payload_behaves_like_missing() {
        let empty = OrderRef::from_payload(Some(String::new()));
        assert_eq!(empty, OrderRef::NoReference);
        assert_eq!(summary(&empty), summary(&OrderRef::NoReference));
        assert_eq!(actions(&empty), actions(&OrderRef::NoReference));
    }

    #[test]
    fn rendering_is_repeatable_and_does_not_alter_the_reference() {
        let order = OrderRef::Reference("ORD-1001".to_string());
        assert_eq!(summary(&order), summary(&order));
        assert_eq!(actions(&order), actions(&order));
        assert_eq!(order, OrderRef::Reference("ORD-1001".to_string()));
    }

    #[test]
    fn notices_are_exactly_three_fixed_lines() {
        assert_eq!(NOTICES.len(), 3);
        assert!(NOTICES[0].contains("email"));
        assert!(NOTICES[1].contains("contact"));
        assert!(NOTICES[2].contains("delivery"));
    }
}
