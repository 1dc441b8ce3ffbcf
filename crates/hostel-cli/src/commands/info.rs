//! Static content and menu display.

use chrono::Datelike;
use hostel_shared::content::{random_quote, random_tip, EMERGENCY_CONTACTS, HOSTEL_RULES};
use hostel_shared::types::{weekday_name, DayMenu};

use super::{CommandResult, Ctx};
use crate::console::Console;

pub fn rules(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("HOSTEL RULES & REGULATIONS");
    for (i, rule) in HOSTEL_RULES.iter().enumerate() {
        ctx.console.say(&format!("  {:>2}. {rule}", i + 1));
    }
    Ok(())
}

pub fn today_menu(ctx: &mut Ctx<'_>) -> CommandResult {
    let day = ctx.now.weekday();
    let meals = ctx.store.menu_for_day(day);
    ctx.console
        .header(&format!("TODAY'S MESS MENU ({})", weekday_name(day)));
    print_meals(ctx.console, &meals);
    Ok(())
}

pub fn weekly_menu(ctx: &mut Ctx<'_>) -> CommandResult {
    let menu = ctx.store.weekly_menu();
    ctx.console.header("WEEKLY MESS MENU");
    for (day, meals) in menu.iter() {
        ctx.console.say(&format!("\n  {}", weekday_name(day)));
        print_meals(ctx.console, meals);
    }
    Ok(())
}

pub fn contacts(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("EMERGENCY CONTACTS");
    for (service, phone) in EMERGENCY_CONTACTS {
        ctx.console.say(&format!("  {service:<20} {phone}"));
    }
    Ok(())
}

pub fn quote(ctx: &mut Ctx<'_>) -> CommandResult {
    let line = random_quote(&mut *ctx.rng);
    ctx.console.header("MOTIVATIONAL QUOTE");
    ctx.console.say(&format!("  \"{line}\""));
    Ok(())
}

pub fn tip(ctx: &mut Ctx<'_>) -> CommandResult {
    let line = random_tip(&mut *ctx.rng);
    ctx.console.header("HEALTH & STUDY TIP");
    ctx.console.say(&format!("  {line}"));
    Ok(())
}

fn print_meals(console: &mut dyn Console, meals: &DayMenu) {
    console.say(&format!("    Breakfast: {}", meals.breakfast));
    console.say(&format!("    Lunch:     {}", meals.lunch));
    console.say(&format!("    Dinner:    {}", meals.dinner));
}
