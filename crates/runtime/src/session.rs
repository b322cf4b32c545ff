//! Collaborator-facing session API.
//!
//! A [`Session`] owns one pet's state and inventory together with the
//! settings and random source the rules need. The UI calls in with discrete
//! requests (act, use an item, come home, save) and reads state back out;
//! nothing here runs on a timer.

use std::path::Path;

use pet_content::GameSettings;
use pet_core::{
    Action, ActionKind, ConsumeOutcome, GameError, Inventory, ItemCategory, PcgRng, PetConfig,
    PetId, PetState, RngOracle, engine,
};

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::repository::{SaveRecord, SaveRepository, read_save_file, write_save_file};

/// One pet being played.
pub struct Session {
    state: PetState,
    inventory: Inventory,
    settings: GameSettings,
    config: PetConfig,
    rng: Box<dyn RngOracle>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    pub fn state(&self) -> &PetState {
        &self.state
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut GameSettings {
        &mut self.settings
    }

    /// Snapshot of the current state and inventory.
    pub fn record(&self) -> SaveRecord {
        SaveRecord::new(self.state.clone(), self.inventory.clone())
    }

    /// Applies an action and returns the resulting state.
    ///
    /// The state is unchanged when the action is rejected.
    pub fn apply_action(&mut self, action: Action) -> Result<&PetState> {
        let kind = action.kind();
        match action.execute(&self.state, &self.config) {
            Ok(next) => {
                self.state = next;
                tracing::debug!(action = %kind, state = ?self.state, "applied action");
                if self.state.is_dead() {
                    tracing::info!(pet = %self.state.pet_id, action = %kind, "pet died");
                }
                Ok(&self.state)
            }
            Err(err) => {
                tracing::warn!(
                    action = %kind,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "action rejected: {err}"
                );
                Err(err.into())
            }
        }
    }

    /// Seconds the UI must wait after `action_name` before allowing it again.
    pub fn cooldown_seconds(&self, action_name: &str) -> u32 {
        self.settings.cooldowns.get(action_name)
    }

    /// Uses one unit of `name` and applies its effect to the pet.
    pub fn consume_item(&mut self, name: &str) -> ConsumeOutcome {
        let outcome = self.inventory.consume(name);
        match &outcome {
            ConsumeOutcome::Consumed {
                item,
                magnitude,
                remaining,
            } => {
                self.state = engine::apply_item(&self.state, item.category, *magnitude);
                tracing::debug!(item = %item.name, magnitude, remaining, "used item");
            }
            ConsumeOutcome::NotFound => {
                tracing::debug!(item = name, "nothing happened; item not held");
            }
        }
        outcome
    }

    /// Maybe grants one item of `category` the pet does not already own.
    pub fn draw_random_reward(&mut self, category: ItemCategory) -> Option<String> {
        let reward = self.inventory.add_random_reward(
            self.settings.catalog.of_category(category),
            self.rng.as_mut(),
        );
        if let Some(name) = &reward {
            tracing::info!(item = %name, %category, "reward granted");
        }
        reward
    }

    /// The pet comes back from `kind`'s screen; some trips bring a reward.
    pub fn return_home(&mut self, kind: ActionKind) -> Option<String> {
        kind.reward_category()
            .and_then(|category| self.draw_random_reward(category))
    }

    pub fn is_dead(&self) -> bool {
        engine::is_dead(&self.state)
    }

    /// Writes the session to a save file, replacing any existing content.
    pub fn save_session(&self, path: &Path) -> Result<()> {
        write_save_file(path, &self.record())?;
        Ok(())
    }

    /// Replaces state and inventory with a save file's content.
    ///
    /// On error the session is left as it was.
    pub fn load_session(&mut self, path: &Path) -> Result<()> {
        self.restore(read_save_file(path)?);
        Ok(())
    }

    /// Writes the session into a repository slot.
    pub fn save_to(&self, repository: &dyn SaveRepository, slot: u32) -> Result<()> {
        repository.save(slot, &self.record())?;
        Ok(())
    }

    /// Replaces state and inventory with a repository slot's content.
    pub fn load_from(&mut self, repository: &dyn SaveRepository, slot: u32) -> Result<()> {
        self.restore(repository.load(slot)?);
        Ok(())
    }

    fn restore(&mut self, record: SaveRecord) {
        self.state = record.state;
        self.inventory = record.inventory;
    }
}

/// Builder for [`Session`].
pub struct SessionBuilder {
    settings: GameSettings,
    config: PetConfig,
    rng: Option<Box<dyn RngOracle>>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            settings: GameSettings::default(),
            config: PetConfig::default(),
            rng: None,
        }
    }
}

impl SessionBuilder {
    /// Settings, scoring and seed from a runtime configuration. Reads the
    /// game configuration file, degrading to defaults if it is unreadable.
    pub fn runtime_config(mut self, config: &RuntimeConfig) -> Self {
        self.settings = GameSettings::load(&config.config_path);
        self.config = config.pet.clone();
        self.rng = Some(Box::new(config.rng()));
        self
    }

    pub fn settings(mut self, settings: GameSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn pet_config(mut self, config: PetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    pub fn seed(self, seed: u64) -> Self {
        self.rng(PcgRng::new(seed))
    }

    /// Starts a fresh game with the configured starter inventory.
    pub fn new_session(self, pet_id: PetId) -> Session {
        let inventory = self.settings.starter_inventory.clone();
        tracing::debug!(pet = %pet_id, items = inventory.total_count(), "new session");
        self.build(PetState::new_game(pet_id), inventory)
    }

    /// Resumes a game from a save file.
    pub fn load_session(self, path: &Path) -> Result<Session> {
        let record = read_save_file(path)?;
        Ok(self.build(record.state, record.inventory))
    }

    /// Resumes a game from a repository slot.
    pub fn load_from(self, repository: &dyn SaveRepository, slot: u32) -> Result<Session> {
        let record = repository.load(slot)?;
        Ok(self.build(record.state, record.inventory))
    }

    fn build(self, state: PetState, inventory: Inventory) -> Session {
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(PcgRng::new(rand::random())));
        Session {
            state,
            inventory,
            settings: self.settings,
            config: self.config,
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pet_core::{ActionError, ItemCatalog, ItemDefinition, StatDelta};

    use crate::error::SessionError;

    /// Always wins the coin flip.
    struct Heads;

    impl RngOracle for Heads {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }
    }

    fn session_with(inventory: Inventory) -> Session {
        let settings = GameSettings {
            starter_inventory: inventory,
            ..GameSettings::default()
        };
        Session::builder()
            .settings(settings)
            .rng(Heads)
            .new_session(PetId(1))
    }

    #[test]
    fn new_session_uses_new_game_stats() {
        let session = Session::builder().seed(1).new_session(PetId(2));
        assert_eq!(session.state(), &PetState::new_game(PetId(2)));
        assert_eq!(session.inventory().total_count(), 10);
        assert!(!session.is_dead());
    }

    #[test]
    fn consuming_food_feeds_the_pet() {
        let mut inventory = Inventory::empty();
        inventory.add(ItemDefinition::food("Apple", "Restores 10 hunger"), 1);
        let mut session = session_with(inventory);

        let outcome = session.consume_item("Apple");
        assert_eq!(outcome.magnitude(), 10);
        assert_eq!(session.state().hunger, 80);
        assert!(session.inventory().is_empty());

        assert_eq!(session.consume_item("Apple"), ConsumeOutcome::NotFound);
        assert_eq!(session.state().hunger, 80);
    }

    #[test]
    fn gifts_cheer_the_pet_up() {
        let mut inventory = Inventory::empty();
        inventory.add(ItemDefinition::gift("Teddy Bear", "Increases happiness +15"), 1);
        let mut session = session_with(inventory);

        session.consume_item("Teddy Bear");
        assert_eq!(session.state().happiness, 85);
    }

    #[test]
    fn return_home_routes_rewards_by_action() {
        let mut session = session_with(Inventory::empty());

        assert_eq!(session.return_home(ActionKind::Feed).as_deref(), Some("Apple"));
        assert_eq!(session.return_home(ActionKind::GoToSleep).as_deref(), Some("Carrot"));
        assert_eq!(session.return_home(ActionKind::TakeToVet).as_deref(), Some("Toy"));
        assert_eq!(session.return_home(ActionKind::Play), None);
        assert_eq!(session.inventory().total_count(), 3);
    }

    #[test]
    fn rewards_run_out_once_everything_is_owned() {
        let mut session = session_with(Inventory::starter(&ItemCatalog::standard()));
        assert_eq!(session.draw_random_reward(ItemCategory::Food), None);
        assert_eq!(session.draw_random_reward(ItemCategory::Gift), None);
    }

    #[test]
    fn dead_pet_cannot_act() {
        let mut session = session_with(Inventory::empty());
        session.state = PetState::new(0, 0, 0, 0, 0, PetId(1));

        let err = session.apply_action(Action::feed()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Action(ActionError::PetDead { kind: ActionKind::Feed })
        ));
        assert_eq!(session.state().score, 0);
    }

    #[test]
    fn play_reports_its_own_score() {
        let mut session = session_with(Inventory::empty());
        let state = session
            .apply_action(Action::play(StatDelta::new(10, 0, -5, -5), 3))
            .unwrap();
        assert_eq!(state.score, 3);
        assert_eq!(state.happiness, 80);
    }

    #[test]
    fn cooldowns_come_from_settings() {
        let settings = GameSettings::from_text(
            r#"{"availableActions":{"feed":{"cooldown":8},"goToSleep":{"cooldown":12}}}"#,
        );
        let session = Session::builder().settings(settings).seed(3).new_session(PetId(0));
        assert_eq!(session.cooldown_seconds("feed"), 8);
        assert_eq!(session.cooldown_seconds("goToSleep"), 12);
        assert_eq!(session.cooldown_seconds("takeToVet"), 5);
        assert_eq!(session.cooldown_seconds("juggle"), 5);
    }
}
