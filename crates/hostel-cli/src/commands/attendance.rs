use hostel_shared::constants::{DATE_FORMAT, TIME_FORMAT};

use super::{ask_required, CommandResult, Ctx};

/// Mark the logged-in user present for today. The room comes from the
/// account; users without one are asked for it.
pub fn mark(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("MARK ATTENDANCE");

    let username = ctx.session.username();
    let assigned = ctx
        .store
        .find_user(username)
        .and_then(|u| u.room_number)
        .or_else(|| ctx.session.user.room_number.clone());

    let room = match assigned {
        Some(room) => room,
        None => match ask_required(ctx.console, "  Room number: ") {
            Some(room) => room,
            None => return Ok(()),
        },
    };

    let record = ctx.store.mark_attendance(username, &room, ctx.now)?;
    ctx.console.say(&format!(
        "\nAttendance marked for {} (room {}) at {}.",
        record.username,
        record.room_number,
        record.time.format(TIME_FORMAT)
    ));
    Ok(())
}

pub fn mine(ctx: &mut Ctx<'_>) -> CommandResult {
    let records = ctx.store.attendance_for(ctx.session.username());
    ctx.console.header("MY ATTENDANCE");
    if records.is_empty() {
        ctx.console.say("  No attendance recorded yet.");
        return Ok(());
    }
    for r in &records {
        ctx.console.say(&format!(
            "  {}  {}  room {}",
            r.date.format(DATE_FORMAT),
            r.time.format(TIME_FORMAT),
            r.room_number
        ));
    }
    ctx.console
        .say(&format!("\n  Days present: {}", records.len()));
    Ok(())
}

pub fn today(ctx: &mut Ctx<'_>) -> CommandResult {
    let today = ctx.now.date();
    let records = ctx.store.attendance_on(today);
    ctx.console
        .header(&format!("ATTENDANCE FOR {}", today.format(DATE_FORMAT)));
    if records.is_empty() {
        ctx.console.say("  Nobody has marked attendance today.");
        return Ok(());
    }
    for r in &records {
        ctx.console.say(&format!(
            "  {:<16} room {:<6} {}",
            r.username,
            r.room_number,
            r.time.format(TIME_FORMAT)
        ));
    }
    ctx.console.say(&format!("\n  Present: {}", records.len()));
    Ok(())
}
