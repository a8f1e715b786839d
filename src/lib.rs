//! # profile-card
//!
//! A terminal profile card: a circular avatar, a "name - id" title and a
//! question line, centred on screen.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use profile_card::{CardError, ProfileCard};
//!
//! fn main() -> Result<(), CardError> {
//!     // Mount the built-in profile with the bundled avatar
//!     let card = ProfileCard::default();
//!
//!     // Take over the terminal until the user quits
//!     card.run()?;
//!
//!     Ok(())
//! }
//! ```

pub mod assets;
mod data;
mod models;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod view;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;
use tracing::{debug, info};

pub use assets::{AssetResolver, BundledAssets, DirectoryAssets, LoadedAssets, StaticAssets};
pub use data::{LoadError, load_profile_from_json};
pub use models::{DEFAULT_DISPLAY_NAME, DEFAULT_QUESTION_TEXT, DEFAULT_STUDENT_ID, Profile};
pub use theme::{Theme, ThemeMode};
pub use ui::{Density, RenderContext};
pub use view::{Node, profile_card_view, profile_view};

/// Error type for profile card operations.
#[derive(Debug, Error)]
pub enum CardError {
    /// Error loading the profile from a file.
    #[error("Failed to load profile: {0}")]
    Load(#[from] LoadError),
    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A mounted profile card: the view tree plus the theme and assets it renders with.
pub struct ProfileCard {
    tree: Node,
    theme: Theme,
    assets: LoadedAssets,
    density: Density,
}

impl ProfileCard {
    /// Mount `profile` once, resolving its assets through `resolver`.
    pub fn new(profile: &Profile, theme: Theme, resolver: &dyn AssetResolver) -> Self {
        let tree = profile_view(profile);
        let assets = LoadedAssets::preload(&tree, resolver);
        info!(
            student_id = %profile.student_id,
            assets = assets.len(),
            "mounted profile card"
        );
        Self {
            tree,
            theme,
            assets,
            density: Density::default(),
        }
    }

    /// Load the profile from a JSON file and mount it.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use profile_card::{BundledAssets, ProfileCard, Theme};
    ///
    /// let card = ProfileCard::from_json("profile.json", Theme::default(), &BundledAssets)
    ///     .expect("Failed to load profile");
    /// ```
    pub fn from_json<P: AsRef<Path>>(
        path: P,
        theme: Theme,
        resolver: &dyn AssetResolver,
    ) -> Result<Self, CardError> {
        let profile = load_profile_from_json(path)?;
        Ok(Self::new(&profile, theme, resolver))
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn context(&self) -> RenderContext<'_> {
        RenderContext {
            theme: &self.theme,
            assets: &self.assets,
            density: self.density,
        }
    }

    /// Run the card in the terminal.
    ///
    /// This takes over the terminal, draws the card, and returns when the
    /// user presses `q`, `Esc` or `Ctrl-C`.
    pub fn run(self) -> Result<(), CardError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &self);
        terminal::restore(&mut term)?;
        info!("profile card closed");
        result
    }
}

impl Default for ProfileCard {
    fn default() -> Self {
        Self::new(&Profile::default(), Theme::default(), &BundledAssets)
    }
}

fn run_event_loop(
    terminal: &mut terminal::CardTerminal,
    card: &ProfileCard,
) -> Result<(), CardError> {
    let ctx = card.context();
    loop {
        terminal.draw(|frame| ui::render(frame, card.tree(), &ctx))?;
        debug!("drew profile card");

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_quit(key) {
                    break;
                }
            }
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            _ => {}
        }
    }

    Ok(())
}

/// Returns true for the keys that close the card.
fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
