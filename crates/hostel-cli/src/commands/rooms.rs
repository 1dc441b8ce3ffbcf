use hostel_store::Room;

use super::{ask_parsed, ask_required, CommandResult, Ctx};
use crate::console::Console;

pub fn my_room(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("MY ROOM");
    let Some(room) = ctx.store.room_of(ctx.session.username()) else {
        ctx.console
            .say("  You have not been allocated a room yet. Contact the warden.");
        return Ok(());
    };

    ctx.console
        .say(&format!("  Room:      {}", room.room_number));
    ctx.console.say(&format!(
        "  Occupancy: {}/{}",
        room.occupied, room.capacity
    ));
    let mates: Vec<&str> = room
        .residents
        .iter()
        .map(String::as_str)
        .filter(|name| *name != ctx.session.username())
        .collect();
    if mates.is_empty() {
        ctx.console.say("  Roommates: none");
    } else {
        ctx.console
            .say(&format!("  Roommates: {}", mates.join(", ")));
    }
    Ok(())
}

pub fn overview(ctx: &mut Ctx<'_>) -> CommandResult {
    let rooms = ctx.store.rooms();
    ctx.console.header("ROOMS OVERVIEW");
    print_rooms(ctx.console, &rooms);
    Ok(())
}

pub fn allocate(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("ALLOCATE ROOM");
    let available = ctx.store.available_rooms();
    if available.is_empty() {
        ctx.console.say("  No rooms with free beds.");
        return Ok(());
    }
    ctx.console.say("  Rooms with free beds:");
    print_rooms(ctx.console, &available);

    let Some(username) = ask_required(ctx.console, "  Username: ") else {
        return Ok(());
    };
    let Some(room_number) = ask_required(ctx.console, "  Room number: ") else {
        return Ok(());
    };

    let allocation = ctx.store.allocate_room(&username, &room_number)?;
    ctx.console.say(&format!(
        "\n{} allocated to room {} ({}/{}).",
        allocation.user.username,
        allocation.room.room_number,
        allocation.room.occupied,
        allocation.room.capacity
    ));
    Ok(())
}

pub fn add(ctx: &mut Ctx<'_>) -> CommandResult {
    ctx.console.header("ADD ROOM");
    let Some(room_number) = ask_required(ctx.console, "  Room number: ") else {
        return Ok(());
    };
    let Some(capacity) = ask_parsed::<u32>(ctx.console, "  Capacity: ") else {
        return Ok(());
    };

    let room = ctx.store.add_room(&room_number, capacity)?;
    ctx.console.say(&format!(
        "\nRoom {} added with {} beds.",
        room.room_number, room.capacity
    ));
    Ok(())
}

fn print_rooms(console: &mut dyn Console, rooms: &[Room]) {
    if rooms.is_empty() {
        console.say("  No rooms recorded.");
        return;
    }
    console.say(&format!(
        "  {:<8} {:>9}  {:<10} Residents",
        "Room", "Occupied", "Status"
    ));
    console.separator();
    for room in rooms {
        let status = if room.is_available() { "Available" } else { "Full" };
        console.say(&format!(
            "  {:<8} {:>4}/{:<4}  {:<10} {}",
            room.room_number,
            room.occupied,
            room.capacity,
            status,
            room.residents.join(", ")
        ));
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::{run_as, seeded};
    use crate::dispatcher::Action;

    #[test]
    fn test_my_room_lists_roommates() {
        let (_dir, store) = seeded();
        let console = run_as(&store, "sarah", Action::MyRoom, &[]);
        assert!(console.printed("Room:      101"));
        assert!(console.printed("Roommates: fatima"));

        let console = run_as(&store, "aisha", Action::MyRoom, &[]);
        assert!(console.printed("not been allocated"));
    }

    #[test]
    fn test_allocate_flow() {
        let (_dir, store) = seeded();
        let console = run_as(&store, "warden", Action::AllocateRoom, &["aisha", "102"]);
        assert!(console.printed("aisha allocated to room 102 (1/2)."));
        assert_eq!(
            store.find_user("aisha").unwrap().room_number.as_deref(),
            Some("102")
        );
    }

    #[test]
    fn test_allocate_full_room_changes_nothing() {
        let (_dir, store) = seeded();
        let console = run_as(&store, "warden", Action::AllocateRoom, &["aisha", "101"]);
        assert!(console.printed("Error: Room 101 is full (2/2)"));
        assert_eq!(store.find_room("101").unwrap().residents.len(), 2);
        assert_eq!(store.find_user("aisha").unwrap().room_number, None);
    }

    #[test]
    fn test_add_room_flow() {
        let (_dir, store) = seeded();
        let console = run_as(&store, "admin", Action::AddRoom, &["104", "x", "4"]);
        assert!(console.printed("Room 104 added with 4 beds."));
        assert_eq!(store.find_room("104").unwrap().capacity, 4);

        let console = run_as(&store, "admin", Action::AddRoom, &["104", "2"]);
        assert!(console.printed("Error: Room already exists: 104"));

        let console = run_as(&store, "admin", Action::AddRoom, &["105", "0"]);
        assert!(console.printed("Error: Capacity must be at least 1"));
    }

    #[test]
    fn test_overview_marks_full_rooms() {
        let (_dir, store) = seeded();
        let console = run_as(&store, "warden", Action::RoomsOverview, &[]);
        assert!(console
            .output()
            .iter()
            .any(|line| line.contains("101") && line.contains("Full")));
    }
}
