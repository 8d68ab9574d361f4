//! Plain-text views for the terminal shell.

use crate::game::map::LocationGraph;
use crate::game::types::{Direction, Snapshot};
use crate::game::unlock::UnlockTable;

pub const WIN_BANNER: &str = "Voitit pelin!";

/// Inventory heading in the same wording as the item count shown in game.
pub fn inventory_header(count: usize) -> String {
    match count {
        0 => "Sinulla ei ole esineitä".to_string(),
        1 => "Sinulla on yksi esine".to_string(),
        n => format!("Sinulla on {} esinettä", n),
    }
}

/// Full view after a command: location title, the first visible item, the
/// win banner when the game is over, and the inventory.
pub fn render(snapshot: &Snapshot) -> String {
    let mut msg = String::new();
    msg.push_str(&format!("== {} ==\n", snapshot.location_name));

    let mut status = String::new();
    if let Some(item) = &snapshot.visible_item {
        status.push_str(&format!("Näet esineen {}.", item.name));
    }
    if snapshot.game_over {
        status.push_str(WIN_BANNER);
    }
    if !status.is_empty() {
        msg.push_str(&status);
        msg.push('\n');
    }

    msg.push_str(&inventory_header(snapshot.inventory.len()));
    if !snapshot.inventory.is_empty() {
        msg.push_str(": ");
        let names: Vec<&str> = snapshot.inventory.iter().map(|i| i.name.as_str()).collect();
        msg.push_str(&names.join(", "));
    }
    msg.push('\n');
    msg
}

/// Overview of every location, its exits and locks, plus the unlock gates.
pub fn render_map(locations: &LocationGraph, gates: &UnlockTable) -> String {
    let mut msg = String::from("=== Kartta ===\n");
    for (id, loc) in locations.iter() {
        let lock = if loc.locked { " [lukittu]" } else { "" };
        msg.push_str(&format!("{:>2} {}{}\n", id.index(), loc.name, lock));
        let exits: Vec<String> = Direction::ALL
            .iter()
            .filter_map(|d| loc.exits.get(d).map(|dest| format!("{} -> {}", d.token(), dest)))
            .collect();
        if !exits.is_empty() {
            msg.push_str(&format!("    {}\n", exits.join(", ")));
        }
    }
    msg.push_str("=== Portit ===\n");
    for gate in gates.gates() {
        msg.push_str(&format!(
            "{} @ {} avaa {}\n",
            gate.trigger, gate.at, gate.unlocks
        ));
    }
    msg
}
