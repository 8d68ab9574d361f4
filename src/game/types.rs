use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Positional index of a location in the ordered location list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct LocationId(pub usize);

impl LocationId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The command word the player types for this direction.
    pub fn token(self) -> &'static str {
        match self {
            Direction::North => "pohjoinen",
            Direction::East => "itä",
            Direction::South => "etelä",
            Direction::West => "länsi",
        }
    }

    /// Exact match against a normalized (trimmed, lowercased) command.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.token() == token)
    }
}

/// One variant per authored item. The effect handler is selected by kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Kivi,
    Rynnakkokivaari,
    Olut,
    Huilu,
    Miekka,
    Sormus,
    Tolkki,
}

impl ItemKind {
    pub const ALL: [ItemKind; 7] = [
        ItemKind::Kivi,
        ItemKind::Rynnakkokivaari,
        ItemKind::Olut,
        ItemKind::Huilu,
        ItemKind::Miekka,
        ItemKind::Sormus,
        ItemKind::Tolkki,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Kivi => "kivi",
            ItemKind::Rynnakkokivaari => "rynnäkkökivääri",
            ItemKind::Olut => "olut",
            ItemKind::Huilu => "huilu",
            ItemKind::Miekka => "miekka",
            ItemKind::Sormus => "sormus",
            ItemKind::Tolkki => "tölkki",
        }
    }

    pub fn image(self) -> &'static str {
        match self {
            ItemKind::Kivi => "kivi.png",
            ItemKind::Rynnakkokivaari => "rynkky.png",
            ItemKind::Olut => "olut.png",
            ItemKind::Huilu => "huilu.png",
            ItemKind::Miekka => "miekka.png",
            ItemKind::Sormus => "sormus.png",
            ItemKind::Tolkki => "tölkki.png",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    pub block_message: String,
    pub image: String,
    pub exits: HashMap<Direction, LocationId>,
    #[serde(default)]
    pub locked: bool,
}

impl Location {
    pub fn new(name: &str, block_message: &str, image: &str) -> Self {
        Self {
            name: name.to_string(),
            block_message: block_message.to_string(),
            image: image.to_string(),
            exits: HashMap::new(),
            locked: false,
        }
    }

    pub fn with_exit(mut self, direction: Direction, destination: usize) -> Self {
        self.exits.insert(direction, LocationId(destination));
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// True when some exit of this location leads to `destination`.
    pub fn leads_to(&self, destination: LocationId) -> bool {
        self.exits.values().any(|d| *d == destination)
    }
}

/// An item and the location it rests at while in the world.
///
/// `location` is left untouched while the item sits in the inventory and is
/// rewritten when the item is dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub location: LocationId,
}

impl Item {
    pub fn new(kind: ItemKind, location: usize) -> Self {
        Self {
            kind,
            location: LocationId(location),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn placed(&self) -> PlacedItem {
        PlacedItem {
            name: self.name().to_string(),
            image: self.kind.image().to_string(),
            location: self.location,
        }
    }

    pub fn held(&self) -> HeldItem {
        HeldItem {
            name: self.name().to_string(),
            image: self.kind.image().to_string(),
        }
    }
}

/// An item lying in the world, as shown to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedItem {
    pub name: String,
    pub image: String,
    pub location: LocationId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeldItem {
    pub name: String,
    pub image: String,
}

/// Read-only view of the session handed to the presentation layer after
/// every command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub current_location: LocationId,
    pub location_name: String,
    pub location_image: String,
    pub locked: Vec<bool>,
    pub world: Vec<PlacedItem>,
    /// First world item at the current location; the only one the player sees.
    pub visible_item: Option<PlacedItem>,
    pub inventory: Vec<HeldItem>,
    pub pool: Vec<String>,
    pub game_over: bool,
}
