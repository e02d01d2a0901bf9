//! Render orchestration - lifecycle, data acquisition, and re-render requests
//!
//! [`CardComponent`] owns the card record, the load phase, the quality
//! inputs, and the size tracker, and composes the pure pieces into a layer
//! stack per render pass. All mutation happens on the single event-processing
//! thread: handlers never await each other, the component only sequences the
//! results the environment delivers.
//!
//! Data acquisition is modeled as ticket mint + resolution delivery. The
//! component does no I/O; the embedding environment fetches the payload for a
//! minted [`FetchTicket`] and hands the result back through
//! [`CardComponent::resolve_fetch`]. Tickets carry a monotonically increasing
//! sequence number so a late resolution of a superseded request is rejected
//! as stale (last-request-wins).

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::compose::{select_layers, LayerDescriptor, LoadPhase, RenderState};
use crate::models::CardProtoData;
use crate::proto::{normalize, normalize_direct, RawProtoPayload};
use crate::quality::resolve_quality_name_clamped;
use crate::sizing::{BoxSize, SizeTracker, SizeUnits};

/// Process-unique identity of one card instance, used as the key for the
/// shared box-size observation mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(u64);

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

impl InstanceId {
    fn next() -> Self {
        Self(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The shared box-size observation collaborator. One instance serves many
/// cards; each card attaches exactly once on activation and detaches exactly
/// once on deactivation, however many resize events fire in between.
/// Notifications themselves arrive out of band via
/// [`CardComponent::notify_resize`].
pub trait BoxObserver {
    fn observe(&mut self, instance: InstanceId);
    fn unobserve(&mut self, instance: InstanceId);
}

/// The template-rendering collaborator: consumes one ordered layer stack per
/// render pass and produces whatever tree the host environment renders.
pub trait TemplateSink {
    type Output;
    fn render_layers(&mut self, layers: Vec<LayerDescriptor>) -> Self::Output;
}

/// Transport failure reported by the external fetch collaborator. Retry and
/// timeout policy live with the transport, not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("card fetch failed: {message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Handle for one identifier-driven acquisition. Resolution against a ticket
/// older than the component's current request is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    card_id: String,
    seq: u64,
}

impl FetchTicket {
    /// The identifier this ticket was minted for.
    pub fn card_id(&self) -> &str {
        &self.card_id
    }
}

/// What [`CardComponent::resolve_fetch`] did with a delivered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Payload decoded and stored; the component is `Ready`.
    Applied,
    /// Transport or normalization failed; the component is `Failed`.
    Failed,
    /// A newer request superseded this ticket; nothing changed.
    Stale,
}

/// Host-supplied inputs for a new card instance.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Finish quality tier, interpreted through the active mapping.
    pub quality: u8,
    pub use_legacy_quality_mapping: bool,
    /// Responsive-size hint forwarded opaquely to image layers.
    pub responsive_sizes: String,
    /// Best-effort box size known at construction, 0x0 pre-layout.
    pub initial_box: BoxSize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            // Tier 1 is "plain" under the current mapping.
            quality: 1,
            use_legacy_quality_mapping: false,
            responsive_sizes: String::new(),
            initial_box: BoxSize::default(),
        }
    }
}

/// One card face: owns acquisition state and composes the layer stack.
#[derive(Debug)]
pub struct CardComponent {
    instance_id: InstanceId,
    phase: LoadPhase,
    data: CardProtoData,
    quality: u8,
    use_legacy_quality_mapping: bool,
    responsive_sizes: String,
    tracker: SizeTracker,
    /// Sequence number of the newest acquisition trigger.
    seq: u64,
    /// Whether `seq` belongs to a fetch that has not resolved yet.
    fetch_open: bool,
    needs_render: bool,
    active: bool,
}

impl CardComponent {
    pub fn new(config: CardConfig) -> Self {
        Self {
            instance_id: InstanceId::next(),
            phase: LoadPhase::Loading,
            data: CardProtoData::default(),
            quality: config.quality,
            use_legacy_quality_mapping: config.use_legacy_quality_mapping,
            responsive_sizes: config.responsive_sizes,
            tracker: SizeTracker::new(config.initial_box),
            seq: 0,
            fetch_open: false,
            needs_render: true,
            active: false,
        }
    }

    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn data(&self) -> &CardProtoData {
        &self.data
    }

    pub fn size_units(&self) -> SizeUnits {
        self.tracker.units()
    }

    /// The quality name the next render pass will use.
    pub fn quality_name(&self) -> &'static str {
        resolve_quality_name_clamped(self.quality, self.use_legacy_quality_mapping)
    }

    // ------------------------------------------------------------------
    // Acquisition triggers
    // ------------------------------------------------------------------

    /// Start an identifier-driven acquisition: enter `Loading` and mint a
    /// ticket for the environment's fetch collaborator. A previously
    /// outstanding ticket is superseded immediately; its eventual resolution
    /// will report [`FetchOutcome::Stale`].
    pub fn request_card(&mut self, card_id: impl Into<String>) -> FetchTicket {
        self.seq += 1;
        self.fetch_open = true;
        self.phase = LoadPhase::Loading;
        self.needs_render = true;
        FetchTicket { card_id: card_id.into(), seq: self.seq }
    }

    /// Deliver the result of a fetch. Last-request-wins: a ticket that no
    /// longer matches the current acquisition sequence touches no state.
    pub fn resolve_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<RawProtoPayload, FetchError>,
    ) -> FetchOutcome {
        if !self.fetch_open || ticket.seq != self.seq {
            return FetchOutcome::Stale;
        }
        self.fetch_open = false;
        self.needs_render = true;
        match result {
            Ok(raw) => match normalize(&raw) {
                Ok(data) => {
                    self.data = data;
                    self.phase = LoadPhase::Ready;
                    FetchOutcome::Applied
                }
                Err(err) => {
                    self.phase = LoadPhase::Failed(err.to_string());
                    FetchOutcome::Failed
                }
            },
            Err(err) => {
                self.phase = LoadPhase::Failed(err.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Direct-input acquisition: synchronous lenient normalization. Also
    /// supersedes any fetch still in flight so a late resolution cannot
    /// overwrite the directly supplied record.
    pub fn set_proto_data(&mut self, input: CardProtoData) {
        self.seq += 1;
        self.fetch_open = false;
        self.data = normalize_direct(&input);
        self.phase = LoadPhase::Ready;
        self.needs_render = true;
    }

    // ------------------------------------------------------------------
    // Input-change handlers
    // ------------------------------------------------------------------

    pub fn set_quality(&mut self, quality: u8) {
        self.quality = quality;
        self.needs_render = true;
    }

    pub fn set_legacy_mapping(&mut self, use_legacy: bool) {
        self.use_legacy_quality_mapping = use_legacy;
        self.needs_render = true;
    }

    pub fn set_responsive_sizes(&mut self, sizes: impl Into<String>) {
        self.responsive_sizes = sizes.into();
        self.needs_render = true;
    }

    /// One box-size notification from the shared observer. Every notification
    /// recomputes the units and requests a re-render; none are dropped or
    /// reordered here.
    pub fn notify_resize(&mut self, size: BoxSize) {
        self.tracker.observe(size);
        self.needs_render = true;
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Whether a re-render has been requested since the last
    /// [`take_render_request`](Self::take_render_request). Level-triggered:
    /// the scheduling layer may coalesce multiple requests into one pass.
    pub fn render_pending(&self) -> bool {
        self.needs_render
    }

    /// Consume the pending re-render request, if any.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    /// Compute the layer stack for the current state.
    pub fn render(&self) -> Vec<LayerDescriptor> {
        select_layers(&RenderState {
            phase: &self.phase,
            data: &self.data,
            quality_name: self.quality_name(),
            size_units: self.tracker.units(),
            responsive_sizes: &self.responsive_sizes,
        })
    }

    /// Render and hand the stack to the template collaborator.
    pub fn render_into<S: TemplateSink>(&self, sink: &mut S) -> S::Output {
        sink.render_layers(self.render())
    }

    // ------------------------------------------------------------------
    // Active/inactive lifecycle
    // ------------------------------------------------------------------

    /// Attach to the shared box observer. Idempotent: attaches at most once
    /// until the next [`deactivate`](Self::deactivate).
    pub fn activate(&mut self, observer: &mut dyn BoxObserver) {
        if !self.active {
            self.active = true;
            observer.observe(self.instance_id);
        }
    }

    /// Detach from the shared box observer. Idempotent counterpart of
    /// [`activate`](Self::activate).
    pub fn deactivate(&mut self, observer: &mut dyn BoxObserver) {
        if self.active {
            self.active = false;
            observer.unobserve(self.instance_id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
