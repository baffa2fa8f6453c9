//! The carousel controller struct.
//!
//! `Carousel` owns the render host, the configuration, the drag phase, and
//! the slot bindings. All mutation happens through `&mut self` on the
//! caller's event loop; there is no interior mutability and no locking.

use crate::carousel::slots::SlotBindings;
use crate::config::CarouselConfig;
use crate::input::DragPhase;
use crate::render::RenderHost;

/// Drag Transition Controller for a three-slot card carousel.
///
/// Construct with [`Carousel::new`], call [`initialize`](crate::carousel::Carousel::initialize)
/// to bind cards, then feed it gesture events:
///
/// - `handle_drag_move` per movement frame,
/// - `handle_drag_end` at release,
/// - `handle_transition_finished` when the render layer reports the settle
///   animation done.
pub struct Carousel<H: RenderHost> {
    pub(crate) host: H,
    pub(crate) config: CarouselConfig,
    pub(crate) phase: DragPhase,
    /// None until `initialize` succeeds; the controller is inert meanwhile.
    pub(crate) slots: Option<SlotBindings>,
}

impl<H: RenderHost> Carousel<H> {
    /// Create an un-initialized carousel with default tunables.
    pub fn new(host: H) -> Self {
        Self::with_config(host, CarouselConfig::default())
    }

    /// Create an un-initialized carousel with explicit tunables.
    pub fn with_config(host: H, config: CarouselConfig) -> Self {
        Self {
            host,
            config,
            phase: DragPhase::Idle,
            slots: None,
        }
    }

    /// Current phase of the gesture cycle.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Current slot bindings, if initialized.
    pub fn slots(&self) -> Option<SlotBindings> {
        self.slots
    }

    /// Whether gesture events would currently be processed.
    pub fn is_listening(&self) -> bool {
        self.slots.is_some() && self.phase.is_listening()
    }

    /// The active tunables.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Borrow the render host (mainly for tests and embedder inspection).
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the render host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
