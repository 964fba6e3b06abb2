//! Game state
//!
//! Owns the world and decides who is flying: the autopilot while the menu
//! is open, the player otherwise.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::autopilot::Autopilot;
use super::balloon::Balloon;
use super::menu::MenuFlow;
use super::terrain::Terrain;
use super::tick::FixedStep;
use crate::error::SimError;
use crate::platform::input::{Key, KeyState};
use crate::settings::Settings;

/// Who is driving the balloon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlSource {
    Autopilot,
    Player,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    settings: Settings,
    terrain: Terrain,
    balloon: Balloon,
    scheduler: FixedStep,
    menu: MenuFlow,
    autopilot: Autopilot,
    control: ControlSource,
    running: bool,
}

impl GameState {
    /// Build a world on the default terrain with the balloon mid-screen
    pub fn new(settings: Settings) -> Result<Self, SimError> {
        let terrain = Terrain::from_settings(&settings.terrain);
        Self::with_terrain(settings, terrain)
    }

    /// Build a world on seeded terrain
    pub fn with_seed(settings: Settings, seed: u64) -> Result<Self, SimError> {
        let terrain = Terrain::from_seed(&settings.terrain, seed);
        Self::with_terrain(settings, terrain)
    }

    fn with_terrain(settings: Settings, terrain: Terrain) -> Result<Self, SimError> {
        let scheduler =
            FixedStep::new(settings.physics.dt)?.with_max_substeps(settings.physics.max_substeps);
        let start = settings.viewport() * 0.5;
        let balloon = Balloon::new(start, &settings)?;
        let autopilot = Autopilot::new(&settings.autopilot);

        log::info!(
            "World ready: dt {} s, viewport {}x{}",
            scheduler.dt(),
            settings.display.width,
            settings.display.height
        );

        Ok(Self {
            settings,
            terrain,
            balloon,
            scheduler,
            menu: MenuFlow::new(),
            autopilot,
            control: ControlSource::Autopilot,
            running: true,
        })
    }

    /// Advance the game by `elapsed_ms` of wall time
    ///
    /// Consumes rising edges from the player's keys. Returns the number of
    /// physics sub-steps run.
    pub fn update(&mut self, elapsed_ms: u64, player: &mut KeyState) -> u32 {
        if player.take_rising_edge(Key::Quit) {
            if self.menu.in_menu() {
                log::info!("Quit requested");
                self.running = false;
            } else {
                self.menu.enter(player);
                self.hand_over(ControlSource::Autopilot);
            }
        }
        if !self.running {
            return 0;
        }

        if self.menu.in_menu() {
            let altitude = self.altitude();
            let temp = self.balloon.envelope().temperature();
            self.autopilot.update(altitude, temp);

            self.menu.update_keys(player);
            if !self.menu.in_menu() {
                self.autopilot.reset();
                self.balloon.envelope_mut().set_temp_decay(true);
                self.hand_over(ControlSource::Player);
            }
        }

        match self.control {
            ControlSource::Autopilot => self.scheduler.advance(
                elapsed_ms,
                &self.terrain,
                &self.autopilot,
                &mut self.balloon,
            ),
            ControlSource::Player => {
                self.scheduler
                    .advance(elapsed_ms, &self.terrain, &*player, &mut self.balloon)
            }
        }
    }

    fn hand_over(&mut self, control: ControlSource) {
        if self.control != control {
            log::info!("Control: {:?} -> {:?}", self.control, control);
            self.control = control;
        }
    }

    /// Stop the outer loop
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn balloon(&self) -> &Balloon {
        &self.balloon
    }

    pub fn menu(&self) -> &MenuFlow {
        &self.menu
    }

    pub fn control(&self) -> ControlSource {
        self.control
    }

    pub fn scheduler(&self) -> &FixedStep {
        &self.scheduler
    }

    pub fn burner_on(&self) -> bool {
        self.balloon.envelope().burner_on()
    }

    pub fn valve_open(&self) -> bool {
        self.balloon.envelope().valve_open()
    }

    /// Gondola position, the point the camera follows
    pub fn focus(&self) -> DVec2 {
        self.balloon.gondola().position()
    }

    /// Gondola height above the ground directly below it
    pub fn altitude(&self) -> f64 {
        self.terrain.height_above(self.focus())
    }
}
