use rakeoff_achievements_api::{
    format_e8s, AchievementLevel, CanisterAccount, NeuronAchievementDetails,
};
use std::fmt;

/// The reward tiers, one per line.
pub struct Levels<'a>(pub &'a [AchievementLevel]);

impl fmt::Display for Levels<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No achievement levels configured")?;
        }
        for level in self.0 {
            writeln!(f, "{}", Level(level))?;
        }
        Ok(())
    }
}

struct Level<'a>(&'a AchievementLevel);

impl fmt::Display for Level<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level {}: stake {} -> reward {}",
            self.0.level_id,
            format_e8s(self.0.icp_amount_needed),
            format_e8s(self.0.icp_reward)
        )
    }
}

pub struct Details<'a>(pub &'a NeuronAchievementDetails);

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = self.0;
        writeln!(f, "neuron {}", details.neuron_id)?;
        writeln!(f, "  passes checks:       {}", details.neuron_passes_checks)?;
        writeln!(f, "  current level:       {}", Level(&details.current_level))?;
        match &details.cached_level {
            Some(level) => writeln!(f, "  last rewarded level: {}", Level(level))?,
            None => writeln!(f, "  last rewarded level: none")?,
        }
        writeln!(
            f,
            "  reward due:          {}",
            format_e8s(details.reward_amount_due)
        )?;
        writeln!(
            f,
            "  rewards available:   {}",
            details.canister_rewards_available
        )
    }
}

pub struct Account<'a>(pub &'a CanisterAccount);

impl fmt::Display for Account<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.0;
        writeln!(f, "address: {}", account.icp_address)?;
        writeln!(f, "balance: {}", format_e8s(account.icp_balance))?;
        writeln!(f, "claimed: {}", format_e8s(account.icp_claimed))?;
        writeln!(f, "ongoing transfers: {}", account.ongoing_transfers.len())?;
        for (principal, amount) in &account.ongoing_transfers {
            writeln!(f, "  {principal}: {}", format_e8s(*amount))?;
        }
        Ok(())
    }
}
