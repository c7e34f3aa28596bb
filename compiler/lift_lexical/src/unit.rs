//! Compilation units: identity-bearing containers of one token stream.
//!
//! A unit holds an optional text representation, the generation counter that
//! tags each distinct text, and a lazily computed [`TokenStream`]. The triple
//! lives under a single lock so a generation bump and the reset of the token
//! memo are always observed together.
//!
//! ```text
//! Unloaded(g) ──load/replace──▶ Loaded(g) ──replace(different)──▶ Loaded(g+1)
//!      ▲                                                              │
//!      └────────────────────────── remove ────────────────────────────┘
//!                                (Unloaded(g+2))
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::module::ModuleShared;
use crate::{LexicalError, LexicalModule, ReferenceHandle, TokenRef, TokenStream};

/// Counter of textually distinct contents of a unit.
///
/// Starts at zero and only ever advances by one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub const INITIAL: Generation = Generation(0);

    #[must_use]
    pub const fn next(self) -> Generation {
        Generation(self.0 + 1)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether a unit currently holds a representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnitStatus {
    Unloaded,
    Loaded,
}

struct UnitState {
    /// Relative to the module location; resolved only at load time.
    location: Option<PathBuf>,
    representation: Option<Arc<str>>,
    generation: Generation,
    /// Derived from `representation`; reset on every change.
    tokens: OnceLock<Arc<TokenStream>>,
    /// Set once the unit leaves its module. Never cleared.
    retired: bool,
}

impl UnitState {
    fn tokens(&self) -> Option<Arc<TokenStream>> {
        let text = self.representation.as_ref()?;
        let stream = self.tokens.get_or_init(|| {
            let stream = TokenStream::lex(Arc::clone(text));
            trace!(
                generation = %self.generation,
                tokens = stream.len(),
                "tokenized compilation unit"
            );
            Arc::new(stream)
        });
        Some(Arc::clone(stream))
    }

    fn advance(&mut self) {
        self.generation = self.generation.next();
        self.tokens = OnceLock::new();
        debug!(
            location = ?self.location,
            generation = %self.generation,
            "compilation unit generation advanced"
        );
    }
}

/// The lexical equivalent of a source file.
///
/// Units are created by a [`LexicalModule`] and shared as
/// `Arc<CompilationUnit>`. Every operation takes `&self`.
pub struct CompilationUnit {
    module: Weak<ModuleShared>,
    state: RwLock<UnitState>,
}

impl CompilationUnit {
    pub(crate) fn new(module: Weak<ModuleShared>, location: Option<PathBuf>) -> Self {
        CompilationUnit {
            module,
            state: RwLock::new(UnitState {
                location,
                representation: None,
                generation: Generation::INITIAL,
                tokens: OnceLock::new(),
                retired: false,
            }),
        }
    }

    pub(crate) fn restored(
        module: Weak<ModuleShared>,
        location: Option<PathBuf>,
        representation: Option<String>,
    ) -> Self {
        let unit = CompilationUnit::new(module, location);
        if let Some(text) = representation {
            unit.state.write().representation = Some(Arc::from(text));
        }
        unit
    }

    /// Read this unit's file through the module's file system and install it
    /// as the representation.
    ///
    /// Returns whether the representation changed, like
    /// [`replace_representation`](Self::replace_representation). A unit
    /// retired while the file is being read stays unloaded.
    ///
    /// # Errors
    ///
    /// [`LexicalError::NoRepresentationSource`] if the unit has no location,
    /// has left its module, or the module has no location;
    /// [`LexicalError::IoFailure`] if the read fails.
    pub fn load_persistent_representation(&self) -> Result<bool, LexicalError> {
        let (module, path) = self
            .persistent_source()
            .ok_or(LexicalError::NoRepresentationSource)?;

        // The read happens outside the unit lock.
        let text = module
            .fs
            .read_to_string(&path)
            .map_err(|source| LexicalError::io(&path, source))?;
        debug!(path = %path.display(), bytes = text.len(), "loaded persistent representation");

        Ok(self.replace_representation(text))
    }

    fn persistent_source(&self) -> Option<(Arc<ModuleShared>, PathBuf)> {
        let location = {
            let state = self.state.read();
            if state.retired {
                return None;
            }
            state.location.clone()?
        };
        let module = self.module.upgrade()?;
        let path = module.location.read().as_ref()?.join(location);
        Some((module, path))
    }

    /// Install `text` as the representation.
    ///
    /// Identical text is a no-op. The first value on an unloaded unit is set
    /// without advancing the generation. Any other change advances the
    /// generation by one and drops the token memo, invalidating every
    /// outstanding [`ReferenceHandle`].
    ///
    /// Returns whether the representation changed. A retired unit refuses
    /// every representation and returns `false`.
    pub fn replace_representation(&self, text: impl Into<Arc<str>>) -> bool {
        let text = text.into();
        let mut state = self.state.write();
        if state.retired {
            debug!(location = ?state.location, "ignored representation for retired unit");
            return false;
        }
        let was_loaded = match state.representation.as_deref() {
            Some(current) if *current == *text => return false,
            current => current.is_some(),
        };
        if was_loaded {
            state.advance();
        }
        state.representation = Some(text);
        true
    }

    /// Clear the representation and advance the generation.
    ///
    /// The generation advances even if the unit is already unloaded.
    pub fn remove_representation(&self) {
        let mut state = self.state.write();
        state.representation = None;
        state.advance();
        debug!(location = ?state.location, "removed representation");
    }

    /// Tokens of the current representation, lexed on first access after a
    /// change. `None` when unloaded, which is distinct from empty text.
    pub fn tokens(&self) -> Option<Arc<TokenStream>> {
        self.state.read().tokens()
    }

    /// Generation and tokens read together.
    pub fn snapshot(&self) -> Option<(Generation, Arc<TokenStream>)> {
        let state = self.state.read();
        let tokens = state.tokens()?;
        Some((state.generation, tokens))
    }

    /// A handle to the token at `index` in the current generation.
    ///
    /// `None` when the unit is unloaded or retired, or `index` is out of range.
    pub fn reference(self: &Arc<Self>, index: usize) -> Option<ReferenceHandle> {
        let state = self.state.read();
        if state.retired {
            return None;
        }
        let tokens = state.tokens()?;
        (index < tokens.len())
            .then(|| ReferenceHandle::new(Arc::downgrade(self), state.generation, index))
    }

    /// Fetch a token for a handle captured at `captured`, checking validity
    /// under the same read guard.
    pub(crate) fn resolve(&self, captured: Generation, index: usize) -> Result<TokenRef, LexicalError> {
        let state = self.state.read();
        let invalidated = || LexicalError::Invalidated {
            captured,
            current: (!state.retired).then_some(state.generation),
        };
        if state.retired || state.generation != captured {
            return Err(invalidated());
        }
        let tokens = state.tokens().ok_or_else(invalidated)?;
        if index >= tokens.len() {
            return Err(invalidated());
        }
        Ok(TokenRef::new(tokens, captured, index))
    }

    pub(crate) fn is_current(&self, generation: Generation) -> bool {
        let state = self.state.read();
        !state.retired && state.generation == generation
    }

    pub fn representation(&self) -> Option<Arc<str>> {
        self.state.read().representation.clone()
    }

    pub fn generation(&self) -> Generation {
        self.state.read().generation
    }

    pub fn state(&self) -> UnitStatus {
        if self.state.read().representation.is_some() {
            UnitStatus::Loaded
        } else {
            UnitStatus::Unloaded
        }
    }

    pub fn location(&self) -> Option<PathBuf> {
        self.state.read().location.clone()
    }

    /// Rebind the unit to another relative location. Does not reload.
    ///
    /// # Errors
    ///
    /// [`LexicalError::AbsoluteUnitLocation`] if `location` is absolute.
    pub fn set_location(&self, location: Option<PathBuf>) -> Result<(), LexicalError> {
        if let Some(path) = location.as_deref().filter(|path| path.is_absolute()) {
            return Err(LexicalError::AbsoluteUnitLocation(path.to_path_buf()));
        }
        self.state.write().location = location;
        Ok(())
    }

    /// Location of the owning module, if the unit still has one.
    pub fn module_location(&self) -> Option<PathBuf> {
        if self.is_retired() {
            return None;
        }
        self.module.upgrade()?.location.read().clone()
    }

    pub fn belongs_to(&self, module: &LexicalModule) -> bool {
        !self.is_retired()
            && self
                .module
                .upgrade()
                .is_some_and(|shared| Arc::ptr_eq(&shared, module.shared()))
    }

    /// Whether the unit was removed from its module.
    pub fn is_retired(&self) -> bool {
        self.state.read().retired
    }

    pub(crate) fn has_location(&self, location: &Path) -> bool {
        self.state.read().location.as_deref() == Some(location)
    }

    /// Detach from the module for good: no handle validates afterwards.
    pub(crate) fn retire(&self) {
        let mut state = self.state.write();
        if state.retired {
            return;
        }
        state.retired = true;
        state.representation = None;
        state.advance();
        debug!(location = ?state.location, "retired compilation unit");
    }
}

impl fmt::Debug for CompilationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("CompilationUnit")
            .field("location", &state.location)
            .field("generation", &state.generation)
            .field("loaded", &state.representation.is_some())
            .field("retired", &state.retired)
            .finish_non_exhaustive()
    }
}
