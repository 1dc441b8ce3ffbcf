use chrono::Weekday;
use hostel_shared::types::{parse_weekday, weekday_name, DayMenu, WEEK};

use super::{ask_required, CommandResult, Ctx};
use crate::console::Console;

pub fn update_day(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("UPDATE MESS MENU");
    for (i, day) in WEEK.iter().enumerate() {
        ctx.console
            .say(&format!("  {}. {}", i + 1, weekday_name(*day)));
    }

    let Some(day) = ask_day(ctx.console) else {
        return Ok(());
    };
    let current = ctx.store.menu_for_day(day);
    ctx.console.say(&format!(
        "\n  Current {}: {} | {} | {}",
        weekday_name(day),
        current.breakfast,
        current.lunch,
        current.dinner
    ));

    let Some(breakfast) = ask_required(ctx.console, "  Breakfast: ") else {
        return Ok(());
    };
    let Some(lunch) = ask_required(ctx.console, "  Lunch: ") else {
        return Ok(());
    };
    let Some(dinner) = ask_required(ctx.console, "  Dinner: ") else {
        return Ok(());
    };

    ctx.store
        .update_menu_day(day, DayMenu::new(&breakfast, &lunch, &dinner))?;
    ctx.console
        .say(&format!("\nMenu for {} updated.", weekday_name(day)));
    Ok(())
}

fn ask_day(console: &mut dyn Console) -> Option<Weekday> {
    loop {
        let answer = console.read_line("\n  Day: ")?;
        match parse_weekday(&answer) {
            Ok(day) => return Some(day),
            Err(e) => console.say(&format!("  {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{run_as, seeded};
    use crate::dispatcher::Action;

    #[test]
    fn test_update_day_flow() {
        let (_dir, store) = seeded();
        let console = run_as(
            &store,
            "admin",
            Action::UpdateMenuDay,
            &["funday", "friday", "Eggs", "Pasta", "Soup"],
        );
        assert!(console.printed("Unknown weekday: funday"));
        assert!(console.printed("Menu for Friday updated."));

        assert_eq!(
            store.menu_for_day(Weekday::Fri),
            DayMenu::new("Eggs", "Pasta", "Soup")
        );
        // Other days keep their meals.
        assert_eq!(
            store.menu_for_day(Weekday::Mon).breakfast,
            "Paratha, Yogurt, Tea"
        );
    }

    #[test]
    fn test_update_by_number() {
        let (_dir, store) = seeded();
        run_as(&store, "admin", Action::UpdateMenuDay, &["7", "Toast", "Rice", "Stew"]);
        assert_eq!(store.menu_for_day(Weekday::Sun).dinner, "Stew");
    }
}
