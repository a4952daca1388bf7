//! Simulated trade outcomes and the cosmetic numbers shown on the status
//! screen. Nothing here touches a market or a ledger.

use rand::Rng;

/// Fixed display balance. There is no ledger behind it.
pub const DEMO_BALANCE_ETH: u32 = 100;

/// Draws a simulated profit/loss in ETH, uniform over `[-5.0, 15.0)`.
pub fn simulate_trade() -> f64 {
    rand::thread_rng().gen_range(-5.0..15.0)
}

/// Renders a trade outcome. Non-negative draws are branded as profit with an
/// explicit `+` sign; negative draws as loss. Two-decimal precision.
pub fn format_trade_message(pnl_eth: f64) -> String {
    if pnl_eth >= 0.0 {
        format!("📈 *Trade executed!*\n\nProfit: *+{:.2} ETH*", pnl_eth)
    } else {
        format!("📉 *Trade executed!*\n\nLoss: *{:.2} ETH*", pnl_eth)
    }
}

/// Cosmetic "profit today" figure, regenerated on every status call.
pub fn daily_profit_eth() -> u32 {
    rand::thread_rng().gen_range(1..=25)
}

/// Cosmetic trade counter, regenerated on every status call.
pub fn total_trades() -> u32 {
    rand::thread_rng().gen_range(50..=200)
}
