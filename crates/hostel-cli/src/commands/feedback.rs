use hostel_shared::constants::{DATE_FORMAT, MAX_RATING, MIN_RATING};

use super::{ask_parsed, ask_required, CommandResult, Ctx};

pub fn submit(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("SUBMIT FEEDBACK");

    let category = ctx
        .console
        .ask("  Category (e.g. Food, Cleanliness; blank for General): ");
    let Some(text) = ask_required(ctx.console, "  Your feedback: ") else {
        return Ok(());
    };
    let prompt = format!("  Rating ({MIN_RATING}-{MAX_RATING}): ");
    let Some(rating) = ask_parsed::<u8>(ctx.console, &prompt) else {
        return Ok(());
    };

    let record = ctx
        .store
        .submit_feedback(ctx.session.username(), &category, &text, rating, ctx.now)?;
    ctx.console.say(&format!(
        "\nThank you! Your {} feedback was recorded ({}/{MAX_RATING}).",
        record.category, record.rating
    ));
    Ok(())
}

pub fn view(ctx: &mut Ctx<'_>) -> CommandResult {
    let records = ctx.store.feedback();
    ctx.console.header("RESIDENT FEEDBACK");
    if records.is_empty() {
        ctx.console.say("  No feedback yet.");
        return Ok(());
    }
    for f in &records {
        ctx.console.separator();
        ctx.console.say(&format!(
            "  {}  {}  [{}]  {}",
            f.date.format(DATE_FORMAT),
            f.username,
            f.category,
            stars(f.rating)
        ));
        ctx.console.say(&format!("  {}", f.feedback));
    }
    ctx.console.separator();

    let total: u32 = records.iter().map(|f| u32::from(f.rating)).sum();
    ctx.console.say(&format!(
        "  Average rating: {:.1}/{MAX_RATING} from {} entries",
        f64::from(total) / records.len() as f64,
        records.len()
    ));
    Ok(())
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    format!(
        "{}{}",
        "*".repeat(filled),
        ".".repeat(usize::from(MAX_RATING) - filled)
    )
}
