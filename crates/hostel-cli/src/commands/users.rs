use hostel_shared::types::Role;
use hostel_store::User;

use super::{ask_optional, ask_parsed, ask_required, CommandResult, Ctx};

pub fn list(ctx: &mut Ctx<'_>) -> CommandResult {
    let users = ctx.store.users();
    ctx.console.header("ALL USERS");
    ctx.console.say(&format!(
        "  {:<16} {:<10} {:<8} Full name",
        "Username", "Role", "Room"
    ));
    ctx.console.separator();
    for u in &users {
        ctx.console.say(&format!(
            "  {:<16} {:<10} {:<8} {}",
            u.username,
            u.role,
            u.room_number.as_deref().unwrap_or("-"),
            u.full_name
        ));
    }
    ctx.console.say(&format!("\n  Total users: {}", users.len()));
    Ok(())
}

pub fn add(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("ADD USER");

    let Some(username) = ask_required(ctx.console, "  Username: ") else {
        return Ok(());
    };
    let Some(password) = ask_required(ctx.console, "  Password: ") else {
        return Ok(());
    };
    let Some(role) = ask_parsed::<Role>(ctx.console, "  Role (resident/warden/admin): ") else {
        return Ok(());
    };
    let Some(full_name) = ask_required(ctx.console, "  Full name: ") else {
        return Ok(());
    };
    let room_number = ask_optional(ctx.console, "  Room number (optional): ");

    let user = ctx.store.add_user(User {
        username,
        password,
        role,
        room_number,
        full_name,
    })?;
    ctx.console
        .say(&format!("\nUser '{}' added as {}.", user.username, user.role));
    Ok(())
}

pub fn delete(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("DELETE USER");
    let Some(username) = ask_required(ctx.console, "  Username to delete: ") else {
        return Ok(());
    };

    if username == ctx.session.username() {
        ctx.console.say("\nYou cannot delete the account you are logged in with.");
        return Ok(());
    }

    let confirm = ctx
        .console
        .ask(&format!("  Delete '{username}'? (y/n): "));
    if !confirm.eq_ignore_ascii_case("y") && !confirm.eq_ignore_ascii_case("yes") {
        ctx.console.say("  Cancelled.");
        return Ok(());
    }

    let removed = ctx.store.delete_user(&username)?;
    ctx.console
        .say(&format!("\nUser '{}' deleted.", removed.username));
    Ok(())
}
