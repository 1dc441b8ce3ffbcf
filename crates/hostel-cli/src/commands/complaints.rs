use hostel_shared::types::{ComplaintCategory, ComplaintStatus};
use hostel_shared::ParseError;
use hostel_store::Complaint;

use super::{ask_parsed, ask_required, CommandResult, Ctx};
use crate::console::Console;

pub fn submit(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("SUBMIT COMPLAINT");
    for (i, category) in ComplaintCategory::ALL.iter().enumerate() {
        ctx.console.say(&format!("  {}. {category}", i + 1));
    }

    let Some(category) = ask_parsed::<ComplaintCategory>(ctx.console, "\n  Category: ") else {
        return Ok(());
    };
    let Some(description) = ask_required(ctx.console, "  Describe the problem: ") else {
        return Ok(());
    };

    let username = ctx.session.username();
    let room = ctx
        .store
        .find_user(username)
        .and_then(|u| u.room_number)
        .or_else(|| ctx.session.user.room_number.clone());

    let complaint =
        ctx.store
            .submit_complaint(username, room.as_deref(), category, &description, ctx.now)?;
    ctx.console.say(&format!(
        "\nComplaint {} submitted. Status: {}",
        complaint.complaint_id, complaint.status
    ));
    Ok(())
}

pub fn mine(ctx: &mut Ctx<'_>) -> CommandResult {
    let complaints = ctx.store.complaints_for(ctx.session.username());
    ctx.console.header("MY COMPLAINTS");
    print_complaints(ctx.console, &complaints);
    Ok(())
}

pub fn all(ctx: &mut Ctx<'_>) -> CommandResult {
    let complaints = ctx.store.complaints();
    ctx.console.header("ALL COMPLAINTS");
    print_complaints(ctx.console, &complaints);
    if !complaints.is_empty() {
        let open = complaints
            .iter()
            .filter(|c| c.status != ComplaintStatus::Resolved)
            .count();
        ctx.console
            .say(&format!("  Total: {}  Unresolved: {open}", complaints.len()));
    }
    Ok(())
}

pub fn update_status(ctx: &mut Ctx<'_>) -> CommandResult {
    let pending: Vec<Complaint> = ctx
        .store
        .complaints()
        .into_iter()
        .filter(|c| c.status != ComplaintStatus::Resolved)
        .collect();

    ctx.console.header("UPDATE COMPLAINT STATUS");
    if pending.is_empty() {
        ctx.console.say("  No unresolved complaints.");
        return Ok(());
    }
    print_complaints(ctx.console, &pending);

    let Some(id) = ask_required(ctx.console, "  Complaint ID: ") else {
        return Ok(());
    };
    for (i, status) in ComplaintStatus::ALL.iter().enumerate() {
        ctx.console.say(&format!("  {}. {status}", i + 1));
    }
    let Some(status) = ask_status(ctx.console) else {
        return Ok(());
    };

    let updated = ctx.store.update_complaint_status(&id, status, ctx.now)?;
    ctx.console.say(&format!(
        "\nComplaint {} is now {}.",
        updated.complaint_id, updated.status
    ));
    Ok(())
}

/// Accepts a status name or its number in [`ComplaintStatus::ALL`].
fn parse_status(input: &str) -> Result<ComplaintStatus, ParseError> {
    match input.trim().parse::<usize>() {
        Ok(n) => n
            .checked_sub(1)
            .and_then(|i| ComplaintStatus::ALL.get(i).copied())
            .ok_or_else(|| ParseError::Status(input.trim().to_string())),
        Err(_) => input.parse(),
    }
}

fn ask_status(console: &mut dyn Console) -> Option<ComplaintStatus> {
    loop {
        let answer = console.read_line("  New status: ")?;
        match parse_status(&answer) {
            Ok(status) => return Some(status),
            Err(e) => console.say(&format!("  {e}")),
        }
    }
}

fn print_complaints(console: &mut dyn Console, complaints: &[Complaint]) {
    if complaints.is_empty() {
        console.say("  No complaints found.");
        return;
    }
    for c in complaints {
        console.separator();
        console.say(&format!("  ID:        {}", c.complaint_id));
        console.say(&format!(
            "  From:      {} (room {})",
            c.username,
            c.room_number.as_deref().unwrap_or("-")
        ));
        console.say(&format!("  Category:  {}", c.category));
        console.say(&format!("  Details:   {}", c.description));
        console.say(&format!("  Status:    {}", c.status));
        console.say(&format!(
            "  Submitted: {}",
            c.submitted_date.format(hostel_shared::constants::DATETIME_FORMAT)
        ));
        if let Some(resolved) = c.resolved_date {
            console.say(&format!(
                "  Resolved:  {}",
                resolved.format(hostel_shared::constants::DATETIME_FORMAT)
            ));
        }
    }
    console.separator();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{now, run_as, seeded};
    use crate::dispatcher::Action;

    #[test]
    fn test_submit_uses_session_identity_and_room() {
        let (_dir, store) = seeded();
        let console = run_as(
            &store,
            "sarah",
            Action::SubmitComplaint,
            &["bogus", "3", "Tap is leaking"],
        );
        assert!(console.printed("Unknown complaint category"));
        assert!(console.printed("Complaint C0001 submitted. Status: Open"));

        let stored = store.complaints_for("sarah");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].category, ComplaintCategory::Plumbing);
        assert_eq!(stored[0].room_number.as_deref(), Some("101"));
        assert_eq!(stored[0].resolved_date, None);
    }

    #[test]
    fn test_submit_cancelled_by_closed_input() {
        let (_dir, store) = seeded();
        run_as(&store, "sarah", Action::SubmitComplaint, &["1"]);
        assert!(store.complaints().is_empty());
    }

    #[test]
    fn test_my_complaints_only_lists_own() {
        let (_dir, store) = seeded();
        store
            .submit_complaint("fatima", None, ComplaintCategory::Internet, "Wifi down", now())
            .unwrap();
        let console = run_as(&store, "sarah", Action::MyComplaints, &[]);
        assert!(console.printed("No complaints found."));
        assert!(!console.printed("Wifi down"));
    }

    #[test]
    fn test_update_status_flow() {
        let (_dir, store) = seeded();
        store
            .submit_complaint("sarah", Some("101"), ComplaintCategory::Electrical, "Fan broken", now())
            .unwrap();

        let console = run_as(
            &store,
            "warden",
            Action::UpdateComplaintStatus,
            &["c0001", "3"],
        );
        assert!(console.printed("Complaint C0001 is now Resolved."));
        let c = store.find_complaint("C0001").unwrap();
        assert_eq!(c.status, ComplaintStatus::Resolved);
        assert_eq!(c.resolved_date, Some(now()));
    }

    #[test]
    fn test_update_unknown_id_prints_error() {
        let (_dir, store) = seeded();
        store
            .submit_complaint("sarah", None, ComplaintCategory::Other, "Noise", now())
            .unwrap();
        let console = run_as(
            &store,
            "warden",
            Action::UpdateComplaintStatus,
            &["C0099", "in progress"],
        );
        assert!(console.printed("Error: Complaint not found: C0099"));
        assert_eq!(
            store.find_complaint("C0001").unwrap().status,
            ComplaintStatus::Open
        );
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("2"), Ok(ComplaintStatus::InProgress));
        assert_eq!(parse_status("resolved"), Ok(ComplaintStatus::Resolved));
        assert!(parse_status("4").is_err());
    }
}
