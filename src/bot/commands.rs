use std::sync::Arc;

use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use crate::bot::keyboards;
use crate::bot::BotState;
use crate::session::ConversationState;
use crate::trading::simulation;
use crate::wallet;

const MENU_PROMPT: &str = "Choose an option:";

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot & show the trading menu")]
    Start,
    #[command(description = "Show this help message")]
    Help,
}

/// One variant per menu button. The closed set makes the dispatch below
/// exhaustive; anything else arriving as callback data is logged and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Deposit,
    Trade,
    ToggleTrade,
    Withdraw,
    Status,
}

impl MenuAction {
    pub fn as_code(self) -> &'static str {
        match self {
            MenuAction::Deposit => "deposit",
            MenuAction::Trade => "trade",
            MenuAction::ToggleTrade => "toggle_trade",
            MenuAction::Withdraw => "withdraw",
            MenuAction::Status => "status",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "deposit" => Some(MenuAction::Deposit),
            "trade" => Some(MenuAction::Trade),
            "toggle_trade" => Some(MenuAction::ToggleTrade),
            "withdraw" => Some(MenuAction::Withdraw),
            "status" => Some(MenuAction::Status),
            _ => None,
        }
    }
}

/// Builds the dispatcher and runs it until shutdown. Unexpected handler
/// errors hit the logging error handler and the update is dropped; there is
/// no retry policy.
pub async fn run_bot(bot: Bot, state: Arc<BotState>) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .default_handler(|update| async move {
            warn!("Unhandled update: {:?}", update);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error while handling update",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

pub async fn command_handler(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    info!("Received command {:?} from chat {}", cmd, chat_id);

    match cmd {
        Command::Start => {
            let welcome = "🤖 *Welcome to ETH Demo Trader*\n\n\
                This bot simulates a trading account — no real funds ever move.\n\n\
                Pick an option below to get started.";
            bot.send_message(chat_id, welcome)
                .parse_mode(ParseMode::Markdown)
                .reply_markup(keyboards::main_menu())
                .await?;
        }
        Command::Help => {
            bot.send_message(chat_id, Command::descriptions().to_string())
                .await?;
        }
    }

    Ok(())
}

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    let user_id = q.from.id.0;

    if let (Some(data), Some(message)) = (q.data.as_deref(), q.message.as_ref()) {
        let chat_id = message.chat.id;
        match MenuAction::parse(data) {
            Some(action) => {
                info!("Received action {:?} from user {}", action, user_id);
                let reply = action_reply(action, user_id, chat_id, &state).await;
                bot.send_message(chat_id, reply)
                    .parse_mode(ParseMode::Markdown)
                    .await?;
                // The menu goes out as its own follow-up message after every
                // action rather than riding on the reply itself.
                bot.send_message(chat_id, MENU_PROMPT)
                    .reply_markup(keyboards::main_menu())
                    .await?;
            }
            None => {
                warn!("Unhandled callback data: {}", data);
            }
        }
    } else {
        warn!("Received callback query with no data");
    }

    // Clears the loading spinner on the pressed button.
    bot.answer_callback_query(q.id).await?;

    Ok(())
}

/// Produces the reply text for a menu action, mutating the status store or
/// the chat session where the action calls for it.
pub(crate) async fn action_reply(
    action: MenuAction,
    user_id: u64,
    chat_id: ChatId,
    state: &BotState,
) -> String {
    match action {
        MenuAction::Deposit => {
            let address = wallet::generate_address();
            format!(
                "💰 *Deposit*\n\nSend ETH to this address:\n`{}`\n\nCurrent balance: *{} ETH*",
                address,
                simulation::DEMO_BALANCE_ETH
            )
        }
        MenuAction::Trade => simulation::format_trade_message(simulation::simulate_trade()),
        MenuAction::ToggleTrade => {
            let active = state.trading_status.toggle(user_id).await;
            if active {
                "🤖 Auto-trading *STARTED*".to_string()
            } else {
                "🤖 Auto-trading *STOPPED*".to_string()
            }
        }
        MenuAction::Withdraw => {
            state
                .sessions
                .set(chat_id, ConversationState::AwaitingAddress)
                .await;
            "🏦 *Withdraw*\n\nSend the ETH address to withdraw to (starting with `0x`):"
                .to_string()
        }
        MenuAction::Status => {
            let active = state.trading_status.get_status(user_id).await;
            format!(
                "📊 *Account Status*\n\n\
                Trading: *{}*\n\
                Balance: *{} ETH*\n\
                Profit today: *+{} ETH*\n\
                Total trades: *{}*",
                if active { "ACTIVE" } else { "PAUSED" },
                simulation::DEMO_BALANCE_ETH,
                simulation::daily_profit_eth(),
                simulation::total_trades(),
            )
        }
    }
}

/// Plain-text messages only matter while a chat is awaiting a withdrawal
/// address; everything else is ignored.
pub async fn message_handler(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if let Some(reply) = withdrawal_reply(text, chat_id, &state).await {
        bot.send_message(chat_id, reply)
            .parse_mode(ParseMode::Markdown)
            .await?;
    }

    Ok(())
}

/// Address-collection step: `None` when the chat is idle, a success message
/// on a well-shaped address, a re-prompt otherwise. Retries are unlimited;
/// the chat stays in `AwaitingAddress` until a valid-shaped string arrives.
pub(crate) async fn withdrawal_reply(
    text: &str,
    chat_id: ChatId,
    state: &BotState,
) -> Option<String> {
    if state.sessions.get(chat_id).await != ConversationState::AwaitingAddress {
        return None;
    }

    match wallet::validate_address(text) {
        Ok(()) => {
            state.sessions.set(chat_id, ConversationState::Idle).await;
            let tx_id = wallet::generate_tx_id();
            Some(format!(
                "✅ *Withdrawal submitted!*\n\n\
                Address: `{}`\n\
                Transaction: `{}`\n\n\
                Funds should arrive shortly.",
                text, tx_id
            ))
        }
        Err(e) => {
            debug!("Rejected withdrawal address: {}", e);
            Some(
                "⚠️ That doesn't look like an ETH address. \
                Send an address starting with `0x` (42 characters):"
                    .to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ConversationState;

    const CHAT: ChatId = ChatId(1000);
    const USER: u64 = 7;

    #[test]
    fn action_codes_round_trip() {
        for action in [
            MenuAction::Deposit,
            MenuAction::Trade,
            MenuAction::ToggleTrade,
            MenuAction::Withdraw,
            MenuAction::Status,
        ] {
            assert_eq!(MenuAction::parse(action.as_code()), Some(action));
        }
        assert_eq!(MenuAction::parse("sell_everything"), None);
    }

    #[tokio::test]
    async fn deposit_reply_embeds_address_and_demo_balance() {
        let state = BotState::new();
        let reply = action_reply(MenuAction::Deposit, USER, CHAT, &state).await;
        assert!(reply.contains("0x"));
        assert!(reply.contains("100 ETH"));
        // Deposit must not touch any state.
        assert!(!state.trading_status.get_status(USER).await);
        assert_eq!(state.sessions.get(CHAT).await, ConversationState::Idle);
    }

    #[tokio::test]
    async fn toggling_twice_reports_the_original_status() {
        let state = BotState::new();

        let first = action_reply(MenuAction::ToggleTrade, USER, CHAT, &state).await;
        assert!(first.contains("STARTED"));

        let second = action_reply(MenuAction::ToggleTrade, USER, CHAT, &state).await;
        assert!(second.contains("STOPPED"));

        let status = action_reply(MenuAction::Status, USER, CHAT, &state).await;
        assert!(status.contains("PAUSED"));
    }

    #[tokio::test]
    async fn status_reflects_active_flag() {
        let state = BotState::new();
        state.trading_status.toggle(USER).await;

        let reply = action_reply(MenuAction::Status, USER, CHAT, &state).await;
        assert!(reply.contains("ACTIVE"));
        assert!(reply.contains("100 ETH"));
    }

    #[tokio::test]
    async fn withdraw_moves_chat_into_awaiting_address() {
        let state = BotState::new();

        let reply = action_reply(MenuAction::Withdraw, USER, CHAT, &state).await;
        assert!(reply.contains("0x"));
        assert_eq!(
            state.sessions.get(CHAT).await,
            ConversationState::AwaitingAddress
        );
    }

    #[tokio::test]
    async fn text_is_ignored_while_chat_is_idle() {
        let state = BotState::new();
        assert_eq!(withdrawal_reply("hello", CHAT, &state).await, None);
    }

    #[tokio::test]
    async fn withdrawal_flow_reprompts_until_a_valid_address_arrives() {
        let state = BotState::new();
        action_reply(MenuAction::Withdraw, USER, CHAT, &state).await;

        // Malformed submissions keep the chat waiting, with no retry limit.
        let short = format!("0x{}", "a".repeat(39));
        for bad in ["not-an-address", short.as_str()] {
            let reply = withdrawal_reply(bad, CHAT, &state).await.unwrap();
            assert!(reply.contains("⚠️"));
            assert_eq!(
                state.sessions.get(CHAT).await,
                ConversationState::AwaitingAddress
            );
        }

        let address = format!("0x{}", "a".repeat(40));
        let reply = withdrawal_reply(&address, CHAT, &state).await.unwrap();
        assert!(reply.contains(&address));
        assert!(reply.contains("Transaction: `0x"));
        assert_eq!(state.sessions.get(CHAT).await, ConversationState::Idle);

        // Back to idle: further text is a no-op again.
        assert_eq!(withdrawal_reply(&address, CHAT, &state).await, None);
    }
}
