use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use super::commands::MenuAction;

/// The fixed five-button trading menu. Stateless; rebuilt on every render.
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("💰 Deposit", MenuAction::Deposit.as_code()),
            InlineKeyboardButton::callback("📈 Trade", MenuAction::Trade.as_code()),
        ],
        vec![InlineKeyboardButton::callback(
            "🤖 Start/Stop Auto-Trading",
            MenuAction::ToggleTrade.as_code(),
        )],
        vec![
            InlineKeyboardButton::callback("🏦 Withdraw", MenuAction::Withdraw.as_code()),
            InlineKeyboardButton::callback("📊 Status", MenuAction::Status.as_code()),
        ],
    ])
}
