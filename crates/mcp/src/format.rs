// Text formatting for tool output.
//
// Pure functions from API records to the text blocks returned to the
// agent. Rewards are minor units of a 6-decimal token; display divides
// by 1_000_000 and renders two decimal places.

use bountyhub_sdk::{Bounty, BountyStats};

const REWARD_MINOR_UNITS: f64 = 1_000_000.0;

/// Render a minor-unit reward string as `$X.XX USDC`.
///
/// Unparseable input is displayed verbatim rather than dropped.
pub fn format_reward(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(amount) => format!("${:.2} USDC", amount / REWARD_MINOR_UNITS),
        Err(_) => raw.to_string(),
    }
}

/// One listing line: `- [id] title - $X.XX USDC (status)`.
pub fn format_bounty_line(bounty: &Bounty) -> String {
    format!(
        "- [{}] {} - {} ({})",
        bounty.id,
        bounty.title,
        format_reward(&bounty.reward),
        bounty.status
    )
}

/// A listing block, one line per bounty, or a fixed message when empty.
pub fn format_bounty_list(bounties: &[Bounty]) -> String {
    if bounties.is_empty() {
        return "No bounties found.".to_string();
    }

    bounties
        .iter()
        .map(format_bounty_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-line detail block for a single bounty.
///
/// The requirements, claimant, and deadline sections are each emitted
/// only when present, independently of one another.
pub fn format_bounty_details(bounty: &Bounty) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", bounty.title, bounty.id));
    out.push_str(&format!(
        "Status: {} | Reward: {}\n",
        bounty.status.to_uppercase(),
        format_reward(&bounty.reward)
    ));

    if bounty.tags.is_empty() {
        out.push_str("Tags: none\n");
    } else {
        out.push_str(&format!("Tags: {}\n", bounty.tags.join(", ")));
    }

    out.push('\n');
    out.push_str(&bounty.description);
    out.push('\n');

    if let Some(requirements) = &bounty.requirements {
        if !requirements.is_empty() {
            out.push_str("\nRequirements:\n");
            for (i, requirement) in requirements.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, requirement));
            }
        }
    }

    if let Some(claimed_by) = &bounty.claimed_by {
        out.push_str(&format!("Claimed by: {}\n", claimed_by));
    }

    if let Some(deadline) = &bounty.deadline {
        out.push_str(&format!("Deadline: {}\n", deadline));
    }

    out
}

/// Board-wide stats block.
pub fn format_stats(stats: &BountyStats) -> String {
    format!(
        "Bounty board stats\n\
         Total bounties: {}\n\
         Open: {}\n\
         Completed: {}\n\
         Total rewards: {}",
        stats.total_bounties,
        stats.open_bounties,
        stats.completed_bounties,
        format_reward(&stats.total_rewards)
    )
}
