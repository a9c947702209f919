//! Orrery demo application
//!
//! Drives the solar system scene headlessly, the way a render loop would:
//! one `update(dt)` per frame followed by a snapshot of every body. Positions
//! are logged instead of drawn.

mod config;

use std::time::Duration;

use config::{AppConfig, RunSettings};
use solar_system::foundation::{logging, time::Timer};
use solar_system::{Catalog, CatalogError, Config, ConfigError, SceneError, SolarSystem};
use thiserror::Error;

/// Application errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog file could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Scene could not be built
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Final frame could not be written
    #[error("Output error: {0}")]
    Output(#[from] ron::Error),
}

pub struct OrreryApp {
    system: SolarSystem,
    run: RunSettings,
}

impl OrreryApp {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let system = match &config.catalog_path {
            Some(path) => {
                let catalog = Catalog::load_from_file(path)?;
                SolarSystem::with_catalog(&config.scene, &catalog)?
            }
            None => SolarSystem::new(&config.scene)?,
        };

        Ok(Self {
            system,
            run: config.run,
        })
    }

    pub fn run(&mut self) {
        log::info!(
            "Running {} frames ({})",
            self.run.frames,
            if self.run.real_time { "real time" } else { "fixed step" }
        );

        let mut timer = Timer::new();
        let frame_budget = Duration::from_secs_f64(1.0 / self.run.target_fps.max(1.0));

        for frame in 1..=self.run.frames {
            let dt = if self.run.real_time {
                std::thread::sleep(frame_budget);
                timer.update()
            } else {
                self.run.step
            };

            self.system.update(dt);

            for body in self.system.frame() {
                log::trace!(
                    "frame {frame} {}: position ({:.3}, {:.3}, {:.3}), rotation {:.3}",
                    body.name,
                    body.position.x,
                    body.position.y,
                    body.position.z,
                    body.rotation
                );
            }

            if self.run.log_every > 0 && frame % self.run.log_every == 0 {
                self.log_summary();
            }
        }

        if self.run.real_time {
            log::info!("Average frame rate: {:.1} fps", timer.average_fps());
        }
    }

    fn log_summary(&self) {
        log::info!(
            "t = {:.2}s after {} frames",
            self.system.elapsed(),
            self.system.frame_count()
        );
        for body in self.system.bodies() {
            let position = body.position();
            log::info!(
                "  {:<8} phi {:.3} theta {:.3} at ({:.3}, {:.3}, {:.3})",
                body.name(),
                body.revolution_phase(),
                body.rotation(),
                position.x,
                position.y,
                position.z
            );
        }
    }

    pub fn final_frame(&self) -> Result<String, AppError> {
        let frame = (
            self.system.sun_frame(),
            self.system.frame(),
            self.system.ring_frames(),
        );
        Ok(ron::ser::to_string_pretty(&frame, ron::ser::PrettyConfig::default())?)
    }
}

fn main() -> Result<(), AppError> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading configuration from {path}");
            AppConfig::load_from_file(&path)?
        }
        None => AppConfig::default(),
    };
    let print_final_frame = config.run.print_final_frame;

    let mut app = OrreryApp::new(config)?;
    app.run();

    if print_final_frame {
        println!("{}", app.final_frame()?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.run.frames = 30;
        config.run.log_every = 0;
        config
    }

    #[test]
    fn test_fixed_step_run_advances_scene() {
        let mut app = OrreryApp::new(quick_config()).unwrap();
        app.run();

        assert_eq!(app.system.frame_count(), 30);
        assert!((app.system.elapsed() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_final_frame_lists_every_body() {
        let app = OrreryApp::new(quick_config()).unwrap();
        let output = app.final_frame().unwrap();
        for name in ["mercury", "earth", "saturn", "neptune"] {
            assert!(output.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_unknown_body_fails_app_setup() {
        let mut config = quick_config();
        config.scene.bodies.push("pluto".to_string());
        assert!(matches!(OrreryApp::new(config), Err(AppError::Scene(_))));
    }

    #[test]
    fn test_missing_catalog_file() {
        let mut config = quick_config();
        config.catalog_path = Some("does/not/exist.ron".to_string());
        assert!(matches!(
            OrreryApp::new(config),
            Err(AppError::Catalog(CatalogError::Io(_)))
        ));
    }
}
