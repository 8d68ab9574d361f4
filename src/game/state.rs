//! The authored world: locations, items and unlock gates for the one story
//! the game tells. Indices below are positions in [`canonical_world_seed`].

use crate::game::types::{Direction, Item, ItemKind, Location};
use crate::game::unlock::UnlockGate;

/// Where every play-through begins (the old castle tower).
pub const START_LOCATION: usize = 0;

pub const WELL: usize = 1;
pub const DRAGON: usize = 3;
pub const RIVERBANK: usize = 6;
pub const CABIN: usize = 8;
pub const GUILD: usize = 9;
pub const MORDOR: usize = 10;

/// All locations, in index order.
pub fn canonical_world_seed() -> Vec<Location> {
    use Direction::*;

    vec![
        Location::new(
            "Vanha linnantorni",
            "Haluamasi reitti on liian vaarallinen!",
            "torni.jpg",
        )
        .with_exit(East, 1)
        .with_exit(South, 3),
        Location::new(
            "Syvä kaivo",
            "Salaperäinen voima estää liikkumiesen tuohon suuntaan.",
            "kaivo.jpg",
        )
        .with_exit(East, 2)
        .with_exit(South, 4)
        .with_exit(West, 0),
        Location::new(
            "Aurinkoinen metsäaukio",
            "Vaikekulkuinen pusikko estää etenemisen.",
            "aukio.jpg",
        )
        .with_exit(South, 5)
        .with_exit(West, 1),
        Location::new(
            "Nukkuva lohikäärme",
            "Et pääse siitä suunnasta ohittamaan lohikäärmettä.",
            "dragon.jpg",
        )
        .with_exit(North, 0)
        .with_exit(East, 4)
        .with_exit(South, 6),
        // The forest path has no block message; failed moves there stay silent.
        Location::new("Kapea metsäpolku", "", "polku.jpg")
            .with_exit(North, 1)
            .with_exit(East, 5)
            .with_exit(South, 7)
            .with_exit(West, 3),
        Location::new("Vanha portti", "Portti sulkeutui.", "portti.jpg")
            .with_exit(North, 2)
            .with_exit(East, 9)
            .with_exit(South, 8)
            .with_exit(West, 4),
        Location::new(
            "Joen ranta",
            "Joki on liian syvä ylitettäväksi sieltä.",
            "joki.jpg",
        )
        .with_exit(North, 3)
        .with_exit(East, 7),
        Location::new(
            "Tyhjä puupenkki",
            "Metsä on liian tiheä läpäistäväksi.",
            "penkki.jpg",
        )
        .with_exit(North, 4)
        .with_exit(East, 8)
        .with_exit(West, 6),
        Location::new(
            "Vanha mökki, sisältä kuuluu musiikkia",
            "Olet liian peloissasi mennäksesi tuohon suuntaan.",
            "mokki.jpg",
        )
        .with_exit(North, 5)
        .with_exit(West, 7),
        Location::new(
            "Lohikäärmeensurmaajien kilta",
            "Olet vihdoinkin vertaistesi joukossa, eikä tee mieli lähteä vielä.",
            "kilta.jpg",
        )
        .with_exit(West, 5)
        .with_exit(East, 10)
        .locked(),
        Location::new(
            "Mordor",
            "Ei Mordorista noin vain kävellä pois.",
            "mordor.jpg",
        )
        .with_exit(West, 9)
        .locked(),
    ]
}

/// Items lying in the world when the game starts, in insertion order.
pub fn starting_items() -> Vec<Item> {
    vec![
        Item::new(ItemKind::Kivi, RIVERBANK),
        Item::new(ItemKind::Rynnakkokivaari, GUILD),
        Item::new(ItemKind::Olut, GUILD),
    ]
}

/// Items that appear only when another item's effect introduces them.
pub fn extra_items() -> Vec<Item> {
    vec![
        Item::new(ItemKind::Huilu, WELL),
        Item::new(ItemKind::Miekka, CABIN),
        Item::new(ItemKind::Sormus, DRAGON),
        Item::new(ItemKind::Tolkki, GUILD),
    ]
}

pub fn unlock_gates() -> Vec<UnlockGate> {
    vec![
        // Slaying the dragon opens the guild.
        UnlockGate::new(ItemKind::Miekka, DRAGON, GUILD),
        // Shooting the empty can inside the guild opens Mordor.
        UnlockGate::new(ItemKind::Rynnakkokivaari, GUILD, MORDOR),
    ]
}
