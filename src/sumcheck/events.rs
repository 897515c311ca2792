//! Structured protocol events
//!
//! Prover and verifier report progress through an [`EventSink`] instead of
//! printing. Every event is also emitted as a `tracing` event, so a host that
//! only installs a subscriber sees the whole session.

use std::fmt;
use std::sync::Arc;

use crate::field::SumCheckField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolEvent<F: SumCheckField> {
    ProposedSum { sum: F },
    RoundPolynomial { round: usize, evaluations: [F; 2] },
    RoundAccepted { round: usize, challenge: F },
    OracleAccepted { evaluation: F },
    Rejected { round: Option<usize>, reason: String },
}

impl<F: SumCheckField> fmt::Display for ProtocolEvent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolEvent::ProposedSum { sum } => write!(f, "proposed sum {}", sum),
            ProtocolEvent::RoundPolynomial { round, evaluations } => write!(
                f,
                "round {} polynomial g(0) = {}, g(1) = {}",
                round, evaluations[0], evaluations[1]
            ),
            ProtocolEvent::RoundAccepted { round, challenge } => {
                write!(f, "round {} accepted, challenge {}", round, challenge)
            }
            ProtocolEvent::OracleAccepted { evaluation } => {
                write!(f, "oracle query accepted, g(r) = {}", evaluation)
            }
            ProtocolEvent::Rejected {
                round: Some(round),
                reason,
            } => write!(f, "rejected in round {}: {}", round, reason),
            ProtocolEvent::Rejected { round: None, reason } => write!(f, "rejected: {}", reason),
        }
    }
}

pub trait EventSink<F: SumCheckField>: Send + Sync {
    fn on_event(&self, event: &ProtocolEvent<F>);
}

/// Sink that only forwards to `tracing`, at `info` level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl<F: SumCheckField> EventSink<F> for TracingSink {
    fn on_event(&self, event: &ProtocolEvent<F>) {
        tracing::info!(target: "sumcheck_lde::events", "{}", event);
    }
}

/// Optional sink held by the prover and verifier
#[derive(Clone, Default)]
pub(crate) struct Events<F: SumCheckField> {
    sink: Option<Arc<dyn EventSink<F>>>,
}

impl<F: SumCheckField> Events<F> {
    pub(crate) fn set_sink(&mut self, sink: Arc<dyn EventSink<F>>) {
        self.sink = Some(sink);
    }

    pub(crate) fn emit(&self, event: ProtocolEvent<F>) {
        match &event {
            ProtocolEvent::Rejected { .. } => tracing::warn!("{}", event),
            _ => tracing::debug!("{}", event),
        }
        if let Some(sink) = &self.sink {
            sink.on_event(&event);
        }
    }
}

impl<F: SumCheckField> fmt::Debug for Events<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Events")
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
