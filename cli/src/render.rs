//! Text and JSON output for each command.

use dispute_proceedings::{
    short_hash, ArbitratorCase, ArbitratorStats, DashboardSummary, EvidenceRepository, Profile,
    VoteSummary,
};
use dispute_types::{Case, CaseDetail, ChatMessage, Evidence, PartyAddress};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A success message in text mode, the resulting record in JSON mode.
pub fn notice<T: Serialize + ?Sized>(json: bool, value: &T, message: &str) -> anyhow::Result<()> {
    if json {
        return print_json(value);
    }
    println!("{message}");
    Ok(())
}

pub fn cases(json: bool, cases: &[&Case]) -> anyhow::Result<()> {
    if json {
        return print_json(cases);
    }
    if cases.is_empty() {
        println!("No cases found.");
    }
    for case in cases {
        println!("#{:<4} {:<9} {}", case.id, case.status, case.title);
        println!("      {}  stake {}", case.created_at, case.stake);
        println!(
            "      plaintiff {}  defendant {}",
            case.parties.plaintiff, case.parties.defendant
        );
    }
    Ok(())
}

pub fn case_detail(json: bool, detail: &CaseDetail) -> anyhow::Result<()> {
    if json {
        return print_json(detail);
    }
    let case = &detail.case;
    println!("{} [{}]", case.title, case.status);
    println!();
    println!("Case Summary");
    println!("  {}", detail.summary);
    println!("Parties Involved");
    println!("  Plaintiff: {}", case.parties.plaintiff);
    println!("  Defendant: {}", case.parties.defendant);
    println!("Stake: {}   Filed: {}", case.stake, case.created_at);
    println!("Timeline");
    for entry in &detail.timeline {
        println!("  {}  {}", entry.date, entry.event);
    }
    Ok(())
}

fn print_evidence(item: &Evidence) {
    println!("[{:?}] {} ({:?})", item.kind, item.title, item.status);
    println!("    {}", item.description);
    println!(
        "    by {} at {}  hash {}",
        item.submitted_by,
        item.timestamp,
        short_hash(&item.hash)
    );
}

pub fn evidence_list(json: bool, items: &[Evidence]) -> anyhow::Result<()> {
    if json {
        return print_json(items);
    }
    if items.is_empty() {
        println!("No evidence submitted.");
    }
    items.iter().for_each(print_evidence);
    Ok(())
}

pub fn evidence_repository(json: bool, repository: &EvidenceRepository) -> anyhow::Result<()> {
    if json {
        return print_json(repository);
    }
    let counts = &repository.counts;
    println!(
        "Total Files: {}   Verified: {}   Pending: {}",
        counts.total, counts.verified, counts.pending
    );
    for item in &repository.items {
        print!("case {}: ", item.case_id);
        print_evidence(&item.evidence);
    }
    Ok(())
}

pub fn votes(json: bool, summary: &VoteSummary) -> anyhow::Result<()> {
    if json {
        return print_json(summary);
    }
    println!(
        "For: {}  Against: {}  ({} for)",
        summary.tally.votes_for,
        summary.tally.votes_against,
        summary.for_percent()
    );
    if summary.has_voted {
        println!("You have voted on this case.");
    }
    Ok(())
}

pub fn messages(json: bool, messages: &[ChatMessage]) -> anyhow::Result<()> {
    if json {
        return print_json(messages);
    }
    for message in messages {
        println!("[{}] {}: {}", message.timestamp, message.sender, message.text);
    }
    Ok(())
}

pub fn wallet_status(json: bool, address: &PartyAddress, connected: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "address": address,
            "connected": connected,
        }));
    }
    if connected {
        println!("Connected as {address}");
    } else {
        println!("Not connected");
    }
    Ok(())
}

pub fn arbitrator_stats(json: bool, stats: &ArbitratorStats) -> anyhow::Result<()> {
    if json {
        return print_json(stats);
    }
    println!("Total cases:     {}", stats.total_cases);
    println!("Active cases:    {}", stats.active_cases);
    println!("Completed cases: {}", stats.completed_cases);
    println!("Success rate:    {}%", stats.success_rate);
    println!("Staked:          {}", stats.staked_amount);
    println!("Earnings:        {}", stats.earnings);
    Ok(())
}

pub fn pending_assignments(json: bool, cases: &[ArbitratorCase]) -> anyhow::Result<()> {
    if json {
        return print_json(cases);
    }
    for case in cases {
        println!(
            "#{:<4} {}  {}  {:?} complexity, {} left",
            case.id,
            case.title,
            case.amount,
            case.complexity,
            case.time_left()
        );
        println!("      {}", case.description);
    }
    Ok(())
}

pub fn dashboard(json: bool, summary: &DashboardSummary) -> anyhow::Result<()> {
    if json {
        return print_json(summary);
    }
    println!(
        "Active cases: {}   Pending evidence: {}   Total staked: {}",
        summary.active_cases, summary.pending_evidence, summary.total_staked
    );
    println!("Recent activity");
    for activity in &summary.recent_activity {
        println!("  {:<8} {}", activity.age, activity.message);
    }
    Ok(())
}

pub fn profile(json: bool, profile: &Profile) -> anyhow::Result<()> {
    if json {
        return print_json(profile);
    }
    println!("{} ({})", profile.ens_name, profile.address);
    println!(
        "Cases: {}   Reputation: {:.1}   Joined: {}",
        profile.total_cases, profile.reputation, profile.joined_date
    );
    Ok(())
}
