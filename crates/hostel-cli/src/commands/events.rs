use hostel_store::NewEvent;

use super::{ask_optional, ask_required, CommandResult, Ctx};

pub fn add(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("ADD EVENT");

    let Some(title) = ask_required(ctx.console, "  Event name: ") else {
        return Ok(());
    };
    let Some(description) = ask_required(ctx.console, "  Details: ") else {
        return Ok(());
    };
    let Some(date) = ask_required(ctx.console, "  Date (YYYY-MM-DD): ") else {
        return Ok(());
    };
    let time = ask_optional(ctx.console, "  Time (optional): ");
    let venue = ask_optional(ctx.console, "  Venue (optional): ");

    let event = ctx.store.add_event(
        NewEvent {
            title,
            description,
            date,
            time,
            venue,
        },
        ctx.now,
    )?;
    ctx.console.say(&format!(
        "\nEvent {} '{}' added for {}.",
        event.event_id,
        event.title, event.date
    ));
    Ok(())
}

pub fn upcoming(ctx: &mut Ctx<'_>) -> CommandResult {
    let events = ctx.store.upcoming_events(ctx.now.date());
    ctx.console.header("UPCOMING EVENTS");
    if events.is_empty() {
        ctx.console.say("  No upcoming events.");
        return Ok(());
    }
    for e in &events {
        ctx.console.separator();
        ctx.console
            .say(&format!("  [{}] {}", e.event_id, e.title));
        let when = match &e.time {
            Some(time) => format!("{} {time}", e.date),
            None => e.date.clone(),
        };
        ctx.console.say(&format!("  When:  {when}"));
        if let Some(venue) = &e.venue {
            ctx.console.say(&format!("  Where: {venue}"));
        }
        if !e.description.is_empty() {
            ctx.console.say(&format!("  {}", e.description));
        }
    }
    ctx.console.separator();
    Ok(())
}
