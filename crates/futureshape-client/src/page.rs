//! One page load.
//!
//! `Page` owns the transport, the router, and the view, and is driven by a
//! single task: link signals, UI intents, and the loading timer are handled
//! one at a time, so no handler ever runs concurrently with another.

use tokio::sync::mpsc;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

use futureshape_core::error::Result;
use futureshape_core::ClientIdentity;

use crate::config::ClientConfig;
use crate::intent::Intent;
use crate::router::Router;
use crate::transport::{ws, ConnectionState, LinkSignal, Origin, Transport, TransportEvent};
use crate::view::View;

pub struct Page<V: View> {
    transport: Transport,
    router: Router,
    view: V,
    status_every: Duration,
    disconnect_notice: String,
}

impl<V: View> Page<V> {
    pub fn new(cfg: &ClientConfig, transport: Transport, view: V) -> Self {
        Self {
            transport,
            router: Router::new(&cfg.ui),
            view,
            status_every: Duration::from_millis(cfg.ui.status_interval_ms),
            disconnect_notice: cfg.ui.disconnect_notice.clone(),
        }
    }

    /// Generate the identity, derive the target from the page origin, and
    /// spawn the link. Returns the page and the signal queue to drive it with.
    pub fn connect(cfg: &ClientConfig, view: V) -> Result<(Self, mpsc::Receiver<LinkSignal>)> {
        let origin = Origin::parse(&cfg.page.origin)?;
        let target = origin.connection_target(&cfg.transport.path);
        let identity = ClientIdentity::generate(origin.secure);

        tracing::info!(%target, secure = origin.secure, "connecting");
        let link = ws::spawn(target, cfg.transport.queue_capacity);

        let transport = Transport::new(identity, link.outbound);
        Ok((Self::new(cfg, transport, view), link.signals))
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn handle_signal(&mut self, sig: LinkSignal) {
        let Some(event) = self.transport.on_signal(sig) else {
            return;
        };

        match event {
            TransportEvent::Connected => self.router.on_connected(&self.transport),
            TransportEvent::Disconnected => self.view.show_notice(&self.disconnect_notice),
            TransportEvent::MessageReceived(env) => {
                self.router.on_message(&self.transport, &mut self.view, env)
            }
        }
    }

    pub fn handle_intent(&mut self, intent: Intent) {
        self.router.handle_intent(&self.transport, &mut self.view, intent);
    }

    pub fn tick(&mut self) {
        self.router.rotate_status(&mut self.view);
    }

    /// Run until the link is gone. Returns the view for inspection.
    ///
    /// Intents wait in their queue until `Connected` has fired.
    pub async fn run(
        mut self,
        mut signals: mpsc::Receiver<LinkSignal>,
        mut intents: mpsc::Receiver<Intent>,
    ) -> V {
        let mut status_tick = time::interval_at(Instant::now() + self.status_every, self.status_every);
        status_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut intents_open = true;
        let mut was_loading = false;

        loop {
            // UI actions are only taken while the connection is open
            let open = self.transport.state() == ConnectionState::Open;
            let loading = open && self.router.is_loading();

            // the first status line is already shown when loading starts
            if loading && !was_loading {
                status_tick.reset();
            }
            was_loading = loading;

            tokio::select! {
                maybe_sig = signals.recv() => {
                    match maybe_sig {
                        Some(sig) => self.handle_signal(sig),
                        None => break,
                    }
                }

                maybe_intent = intents.recv(), if intents_open && open => {
                    match maybe_intent {
                        Some(intent) => self.handle_intent(intent),
                        None => intents_open = false,
                    }
                }

                _ = status_tick.tick(), if loading => self.tick(),
            }
        }

        self.view
    }
}
