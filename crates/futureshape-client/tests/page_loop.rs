//! `Page::run` under paused time: loading timer cadence and intent gating.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use futureshape_client::config;
use futureshape_client::intent::Intent;
use futureshape_client::page::Page;
use futureshape_client::transport::{Link, LinkSignal, Transport};
use futureshape_client::view::{Effect, RecordingView};
use futureshape_core::protocol::payload::SearchRequest;
use futureshape_core::ClientIdentity;

const ME: &str = "client-me";
const DISCONNECTED: &str = "Connection to the server was lost. Please reload the page.";

struct Running {
    signals: mpsc::Sender<LinkSignal>,
    intents: mpsc::Sender<Intent>,
    sent: mpsc::Receiver<String>,
    page: JoinHandle<RecordingView>,
}

impl Running {
    fn start() -> Self {
        let cfg = config::load_from_str("version: 1\nui:\n  status_interval_ms: 1000\n").unwrap();
        let (link, sent, signals) = Link::detached(16);
        let Link {
            outbound,
            signals: signal_rx,
        } = link;
        let transport = Transport::new(ClientIdentity::from_raw(ME), outbound);
        let page = Page::new(&cfg, transport, RecordingView::new());

        let (intents, intent_rx) = mpsc::channel(8);
        let page = tokio::spawn(page.run(signal_rx, intent_rx));

        Self {
            signals,
            intents,
            sent,
            page,
        }
    }

    async fn signal(&self, sig: LinkSignal) {
        self.signals.send(sig).await.unwrap();
    }

    async fn deliver(&self, category: &str, topic: &str, payload: Value) {
        let frame = json!({
            "category": category,
            "topic": topic,
            "payload": payload,
            "client_id": ME
        });
        self.signal(LinkSignal::Frame(frame.to_string())).await;
    }

    /// Visible checkpoint in the effect log.
    async fn mark(&self, name: &str) {
        self.deliver("data", "autocomplete", json!({"results": [], "target": name}))
            .await;
    }

    fn sent_topics(&mut self) -> Vec<String> {
        let mut topics = Vec::new();
        while let Ok(text) = self.sent.try_recv() {
            let v: Value = serde_json::from_str(&text).unwrap();
            topics.push(v["topic"].as_str().unwrap().to_owned());
        }
        topics
    }

    async fn finish(self) -> Vec<Effect> {
        self.signal(LinkSignal::Closed).await;
        drop(self.signals);
        let mut view = self.page.await.unwrap();
        view.take()
    }
}

fn mark(name: &str) -> Effect {
    Effect::Suggestions {
        target: name.into(),
        results: Vec::new(),
    }
}

fn status(text: &str) -> Effect {
    Effect::StatusText(text.into())
}

fn search() -> Intent {
    Intent::Search(SearchRequest {
        target_state: "WA".into(),
        current_state: "OR".into(),
        study_target: "History".into(),
        use_queer_scoring: false,
    })
}

#[tokio::test(start_paused = true)]
async fn status_rotates_at_interval_and_stops_on_finish() {
    let mut run = Running::start();
    run.signal(LinkSignal::Open).await;

    // idle long enough for several missed periods
    sleep(Duration::from_secs(10)).await;

    run.intents.send(search()).await.unwrap();
    sleep(Duration::from_millis(500)).await;
    run.mark("t+500").await;
    sleep(Duration::from_millis(1000)).await;
    run.mark("t+1500").await;
    sleep(Duration::from_millis(1000)).await;

    run.deliver(
        "data",
        "search",
        json!({"response": "PROCESSING_FINISHED", "url": "/results/9"}),
    )
    .await;
    sleep(Duration::from_secs(5)).await;

    assert_eq!(run.sent_topics(), vec!["user-profile-image", "search"]);
    assert_eq!(
        run.finish().await,
        vec![
            Effect::ContentVisible(false),
            status("Looking through colleges..."),
            mark("t+500"),
            status("Comparing majors..."),
            mark("t+1500"),
            status("Checking state policies..."),
            Effect::Navigate("/results/9".into()),
            Effect::Notice(DISCONNECTED.into()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn status_stops_on_invalid_session() {
    let mut run = Running::start();
    run.signal(LinkSignal::Open).await;

    run.intents.send(search()).await.unwrap();
    sleep(Duration::from_millis(1500)).await;

    run.deliver("data", "search", json!({"response": "INVALID_SESSION"}))
        .await;
    sleep(Duration::from_secs(5)).await;

    assert_eq!(
        run.sent_topics(),
        vec!["user-profile-image", "search", "register"]
    );

    let effects = run.finish().await;
    let statuses = effects
        .iter()
        .filter(|e| matches!(e, Effect::StatusText(_)))
        .count();
    assert_eq!(statuses, 2);
    assert_eq!(effects[2], status("Comparing majors..."));
    assert_eq!(effects[3], Effect::ContentVisible(true));
    assert!(matches!(&effects[4], Effect::Notice(n) if n.contains("sign in")));
    assert_eq!(effects[5], Effect::Notice(DISCONNECTED.into()));
    assert_eq!(effects.len(), 6);
}

#[tokio::test(start_paused = true)]
async fn intents_wait_for_connected() {
    let mut run = Running::start();

    run.intents.send(Intent::Login).await.unwrap();
    sleep(Duration::from_millis(100)).await;
    assert!(run.sent_topics().is_empty());

    run.signal(LinkSignal::Open).await;
    sleep(Duration::from_millis(10)).await;
    assert_eq!(run.sent_topics(), vec!["user-profile-image", "register"]);

    assert_eq!(run.finish().await, vec![Effect::Notice(DISCONNECTED.into())]);
}

#[tokio::test(start_paused = true)]
async fn intents_after_disconnect_are_never_sent() {
    let mut run = Running::start();
    run.signal(LinkSignal::Open).await;
    run.signal(LinkSignal::Closed).await;
    sleep(Duration::from_millis(10)).await;

    run.intents.send(Intent::Login).await.unwrap();
    run.intents.send(search()).await.unwrap();
    sleep(Duration::from_secs(3)).await;

    assert_eq!(run.sent_topics(), vec!["user-profile-image"]);
    assert_eq!(run.finish().await, vec![Effect::Notice(DISCONNECTED.into())]);
}
