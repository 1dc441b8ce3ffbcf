use hostel_shared::constants::DATE_FORMAT;

use super::{CommandResult, Ctx};

pub fn show(ctx: &mut Ctx<'_>) -> CommandResult {
    let s = ctx.store.statistics(ctx.now.date());
    let c = &mut *ctx.console;

    c.header(&format!("HOSTEL STATISTICS ({})", s.date.format(DATE_FORMAT)));

    c.say("  Residents");
    c.say(&format!("    Total residents:   {}", s.total_residents));
    c.say(&format!("    Present today:     {}", s.present_today));
    c.say(&format!("    Attendance rate:   {:.1}%", s.attendance_rate));

    c.say("\n  Complaints");
    c.say(&format!("    Total:             {}", s.total_complaints));
    c.say(&format!("    Open:              {}", s.open_complaints));
    c.say(&format!("    In progress:       {}", s.in_progress_complaints));
    c.say(&format!("    Resolved:          {}", s.resolved_complaints));
    c.say(&format!("    Resolution rate:   {:.1}%", s.resolution_rate));
    for (category, count) in &s.complaints_by_category {
        c.say(&format!("      {category:<16} {count}"));
    }

    c.say("\n  Feedback");
    c.say(&format!("    Entries:           {}", s.feedback_count));
    c.say(&format!("    Average rating:    {:.1}", s.average_rating));

    c.say("\n  Rooms");
    c.say(&format!("    Rooms:             {}", s.total_rooms));
    c.say(&format!(
        "    Beds occupied:     {}/{}",
        s.total_occupied, s.total_capacity
    ));
    c.say(&format!("    With free beds:    {}", s.available_rooms));

    c.say("\n  Events");
    c.say(&format!("    Total:             {}", s.total_events));
    c.say(&format!("    Upcoming:          {}", s.upcoming_events));
    Ok(())
}
