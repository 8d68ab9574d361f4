//! What happens when the player uses an item.
//!
//! Every item kind has one handler. A handler looks at where the player is
//! and what lies around, and either applies its effect or answers with a
//! flavor line and leaves the world alone. All checks run before the first
//! mutation, and fallible steps run before infallible ones, so a handler
//! never leaves the world half-changed.

use log::info;

use crate::game::errors::GameError;
use crate::game::inventory::ItemRegistry;
use crate::game::map::LocationGraph;
use crate::game::state::{CABIN, GUILD, MORDOR, WELL};
use crate::game::types::{ItemKind, LocationId};
use crate::game::unlock::{UnlockGate, UnlockTable};

/// Everything an effect may read or change.
pub struct EffectContext<'a> {
    pub locations: &'a mut LocationGraph,
    pub items: &'a mut ItemRegistry,
    pub gates: &'a UnlockTable,
    pub current: LocationId,
    pub game_over: &'a mut bool,
}

impl<'a> EffectContext<'a> {
    fn at(&self, location: usize) -> bool {
        self.current == LocationId(location)
    }

    fn require_held(&self, kind: ItemKind) -> Result<(), GameError> {
        match self.items.in_inventory(kind.name()) {
            Some(_) => Ok(()),
            None => Err(GameError::Internal(format!(
                "{} used without being held",
                kind
            ))),
        }
    }

    fn gate(&self, kind: ItemKind) -> Result<UnlockGate, GameError> {
        let gate = self
            .gates
            .gate_for(kind)
            .copied()
            .ok_or_else(|| GameError::MissingGate(kind.name().to_string()))?;
        self.locations.get(gate.unlocks)?;
        Ok(gate)
    }

    /// Delete a held item. Callers run `require_held` first.
    fn consume(&mut self, kind: ItemKind) {
        self.items.remove(kind.name());
    }
}

/// Run the effect of `kind` and return the line to show the player.
pub fn use_item(kind: ItemKind, ctx: &mut EffectContext<'_>) -> Result<String, GameError> {
    match kind {
        ItemKind::Kivi => use_rock(ctx),
        ItemKind::Huilu => use_flute(ctx),
        ItemKind::Miekka => use_sword(ctx),
        ItemKind::Rynnakkokivaari => use_rifle(ctx),
        ItemKind::Olut => use_beer(ctx),
        ItemKind::Sormus => use_ring(ctx),
        ItemKind::Tolkki => Ok("Tölkki on nyt tyhjä. Mietit elämänvalintojasi.".to_string()),
    }
}

/// Dropping the rock into the well brings up the flute.
fn use_rock(ctx: &mut EffectContext<'_>) -> Result<String, GameError> {
    if !ctx.at(WELL) {
        return Ok("Pyörittelet kiveä taskussasi...".to_string());
    }
    ctx.require_held(ItemKind::Kivi)?;
    ctx.items.introduce(ItemKind::Huilu.name())?;
    ctx.consume(ItemKind::Kivi);
    info!("Rock dropped into the well; flute revealed");
    Ok("Pudotat kiven kaivoon.".to_string())
}

/// Playing at the cabin earns the dragon-slaying sword.
fn use_flute(ctx: &mut EffectContext<'_>) -> Result<String, GameError> {
    if !ctx.at(CABIN) {
        return Ok("Kaunis musiikki soi ympärilläsi.".to_string());
    }
    ctx.require_held(ItemKind::Huilu)?;
    ctx.items.introduce(ItemKind::Miekka.name())?;
    ctx.consume(ItemKind::Huilu);
    info!("Flute played at the cabin; sword revealed");
    Ok("Soittosi miellyttää mökin asukkaita. He antavat sinulle legendaarisen lohikäärmeensurmausmiekan.".to_string())
}

/// Slaying the dragon drops the ring and opens the guild.
fn use_sword(ctx: &mut EffectContext<'_>) -> Result<String, GameError> {
    let gate = ctx.gate(ItemKind::Miekka)?;
    if ctx.current != gate.at {
        return Ok("Heiluttelet miekkaasi tylsistyneenä...".to_string());
    }
    ctx.require_held(ItemKind::Miekka)?;
    ctx.items.introduce(ItemKind::Sormus.name())?;
    ctx.locations.unlock(gate.unlocks)?;
    ctx.consume(ItemKind::Miekka);
    info!("Dragon slain; ring revealed and location {} unlocked", gate.unlocks);
    Ok("Heilautat miekkaa ja tapat lohikäärmeen. Lohikäärme pudottaa jotain. Kuulet portin aukeavan jossain.".to_string())
}

/// Shooting the empty can on the guild floor opens Mordor.
fn use_rifle(ctx: &mut EffectContext<'_>) -> Result<String, GameError> {
    let gate = ctx.gate(ItemKind::Rynnakkokivaari)?;
    if ctx.current != gate.at {
        return Ok("Silittelet kivääriäsi ja muistelet armeija-aikoja.".to_string());
    }
    let can = ItemKind::Tolkki.name();
    if !ctx.items.exists_in_world_at(can, gate.at) {
        return Ok("Esittelet pyssyäsi kaikille, mutta et tee vaikutusta keneenkään.".to_string());
    }
    ctx.require_held(ItemKind::Rynnakkokivaari)?;
    ctx.locations.unlock(gate.unlocks)?;
    ctx.items.remove_from_world(can, gate.at);
    ctx.consume(ItemKind::Rynnakkokivaari);
    info!("Can shot in the guild; location {} unlocked", gate.unlocks);
    Ok("Osut tyhjään tölkkiin, jonka jätit toiselle puolelle huonetta. Lohikäärmeensurmaajat ovat vaikuttuneita tarkkuudestasi. Parrakas mies laittaa käden isällisesti olallesi ja toteaa sinun olevan valmis viimeiseen koitokseen.".to_string())
}

/// Drinking the beer in the guild leaves the empty can behind.
fn use_beer(ctx: &mut EffectContext<'_>) -> Result<String, GameError> {
    if !ctx.at(GUILD) {
        return Ok("Et uskalla juopotella julkisella paikalla.".to_string());
    }
    ctx.require_held(ItemKind::Olut)?;
    ctx.items.introduce(ItemKind::Tolkki.name())?;
    ctx.consume(ItemKind::Olut);
    info!("Beer drunk; empty can left in the guild");
    Ok("Juot oluen. Jäljelle jää tyhjä tölkki.".to_string())
}

/// Destroying the ring in Mordor wins the game.
fn use_ring(ctx: &mut EffectContext<'_>) -> Result<String, GameError> {
    if !ctx.at(MORDOR) {
        return Ok(
            "Muutut näkymättömäksi. Tunnet pahantahtoisen tietoisuuden kääntävän huomionsa sinuun."
                .to_string(),
        );
    }
    ctx.require_held(ItemKind::Sormus)?;
    ctx.consume(ItemKind::Sormus);
    *ctx.game_over = true;
    info!("Ring destroyed in Mordor; game won");
    Ok("Pudotat sormuksen tulivuoreen. Voitit pelin!".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::{
        canonical_world_seed, extra_items, starting_items, unlock_gates, DRAGON, RIVERBANK,
    };

    struct World {
        locations: LocationGraph,
        items: ItemRegistry,
        gates: UnlockTable,
        game_over: bool,
    }

    impl World {
        fn new() -> Self {
            let locations = LocationGraph::new(canonical_world_seed());
            let gates = UnlockTable::validate(unlock_gates(), &locations).unwrap();
            Self {
                locations,
                items: ItemRegistry::new(starting_items(), extra_items()).unwrap(),
                gates,
                game_over: false,
            }
        }

        /// Put an item straight into the inventory, wherever it currently is.
        fn hold(&mut self, kind: ItemKind) {
            if self.items.pool().iter().any(|i| i.kind == kind) {
                self.items.introduce(kind.name()).unwrap();
            }
            let loc = self
                .items
                .world_items()
                .iter()
                .find(|i| i.kind == kind)
                .map(|i| i.location)
                .unwrap();
            self.items.take(Some(kind.name()), loc).unwrap();
        }

        fn use_at(&mut self, kind: ItemKind, at: usize) -> Result<String, GameError> {
            let mut ctx = EffectContext {
                locations: &mut self.locations,
                items: &mut self.items,
                gates: &self.gates,
                current: LocationId(at),
                game_over: &mut self.game_over,
            };
            use_item(kind, &mut ctx)
        }
    }

    #[test]
    fn rock_only_works_at_the_well() {
        let mut w = World::new();
        w.hold(ItemKind::Kivi);
        let msg = w.use_at(ItemKind::Kivi, RIVERBANK).unwrap();
        assert_eq!(msg, "Pyörittelet kiveä taskussasi...");
        assert!(w.items.in_inventory("kivi").is_some());

        let msg = w.use_at(ItemKind::Kivi, WELL).unwrap();
        assert_eq!(msg, "Pudotat kiven kaivoon.");
        assert!(w.items.in_inventory("kivi").is_none());
        assert!(w.items.exists_in_world_at("huilu", LocationId(WELL)));
        assert!(!w.game_over);
    }

    #[test]
    fn flute_at_cabin_reveals_sword() {
        let mut w = World::new();
        w.hold(ItemKind::Huilu);
        assert_eq!(w.use_at(ItemKind::Huilu, WELL).unwrap(), "Kaunis musiikki soi ympärilläsi.");
        w.use_at(ItemKind::Huilu, CABIN).unwrap();
        assert!(w.items.exists_in_world_at("miekka", LocationId(CABIN)));
        assert!(w.items.in_inventory("huilu").is_none());
    }

    #[test]
    fn sword_at_dragon_unlocks_guild_and_drops_ring() {
        let mut w = World::new();
        w.hold(ItemKind::Miekka);
        w.use_at(ItemKind::Miekka, CABIN).unwrap();
        assert!(w.locations.is_locked(LocationId(GUILD)));

        let msg = w.use_at(ItemKind::Miekka, DRAGON).unwrap();
        assert!(msg.starts_with("Heilautat miekkaa"));
        assert!(!w.locations.is_locked(LocationId(GUILD)));
        assert!(w.locations.is_locked(LocationId(MORDOR)));
        assert!(w.items.exists_in_world_at("sormus", LocationId(DRAGON)));
        assert!(w.items.in_inventory("miekka").is_none());
    }

    #[test]
    fn rifle_needs_the_can_on_the_guild_floor() {
        let mut w = World::new();
        w.hold(ItemKind::Rynnakkokivaari);
        assert_eq!(
            w.use_at(ItemKind::Rynnakkokivaari, WELL).unwrap(),
            "Silittelet kivääriäsi ja muistelet armeija-aikoja."
        );
        assert_eq!(
            w.use_at(ItemKind::Rynnakkokivaari, GUILD).unwrap(),
            "Esittelet pyssyäsi kaikille, mutta et tee vaikutusta keneenkään."
        );
        assert!(w.locations.is_locked(LocationId(MORDOR)));

        w.hold(ItemKind::Olut);
        w.use_at(ItemKind::Olut, GUILD).unwrap();
        assert!(w.items.exists_in_world_at("tölkki", LocationId(GUILD)));

        let msg = w.use_at(ItemKind::Rynnakkokivaari, GUILD).unwrap();
        assert!(msg.starts_with("Osut tyhjään tölkkiin"));
        assert!(!w.locations.is_locked(LocationId(MORDOR)));
        assert!(!w.items.exists_in_world_at("tölkki", LocationId(GUILD)));
        assert!(w.items.in_inventory("rynnäkkökivääri").is_none());
    }

    #[test]
    fn held_can_does_not_count_for_the_rifle() {
        let mut w = World::new();
        w.hold(ItemKind::Rynnakkokivaari);
        w.hold(ItemKind::Tolkki);
        assert_eq!(
            w.use_at(ItemKind::Rynnakkokivaari, GUILD).unwrap(),
            "Esittelet pyssyäsi kaikille, mutta et tee vaikutusta keneenkään."
        );
        assert_eq!(
            w.use_at(ItemKind::Tolkki, GUILD).unwrap(),
            "Tölkki on nyt tyhjä. Mietit elämänvalintojasi."
        );
        assert!(w.items.in_inventory("tölkki").is_some());
    }

    #[test]
    fn beer_outside_the_guild_is_refused() {
        let mut w = World::new();
        w.hold(ItemKind::Olut);
        assert_eq!(
            w.use_at(ItemKind::Olut, WELL).unwrap(),
            "Et uskalla juopotella julkisella paikalla."
        );
        assert!(w.items.in_inventory("olut").is_some());
        assert!(w.items.pool().iter().any(|i| i.kind == ItemKind::Tolkki));
    }

    #[test]
    fn ring_wins_only_in_mordor() {
        let mut w = World::new();
        w.hold(ItemKind::Sormus);
        let msg = w.use_at(ItemKind::Sormus, GUILD).unwrap();
        assert!(msg.starts_with("Muutut näkymättömäksi."));
        assert!(!w.game_over);
        assert!(w.items.in_inventory("sormus").is_some());

        let msg = w.use_at(ItemKind::Sormus, MORDOR).unwrap();
        assert_eq!(msg, "Pudotat sormuksen tulivuoreen. Voitit pelin!");
        assert!(w.game_over);
        assert!(w.items.in_inventory("sormus").is_none());
    }

    #[test]
    fn effect_without_holding_item_is_internal_error() {
        let mut w = World::new();
        let err = w.use_at(ItemKind::Kivi, WELL).unwrap_err();
        assert!(matches!(err, GameError::Internal(_)));
        assert!(w.items.pool().iter().any(|i| i.kind == ItemKind::Huilu));
    }

    #[test]
    fn missing_gate_is_reported() {
        let mut w = World::new();
        w.hold(ItemKind::Miekka);
        let gates = UnlockTable::validate(vec![], &LocationGraph::new(vec![])).unwrap();
        let mut ctx = EffectContext {
            locations: &mut w.locations,
            items: &mut w.items,
            gates: &gates,
            current: LocationId(DRAGON),
            game_over: &mut w.game_over,
        };
        assert_eq!(
            use_item(ItemKind::Miekka, &mut ctx),
            Err(GameError::MissingGate("miekka".into()))
        );
    }
}
