//! Reactive chart dispatch.
//!
//! A [`Dashboard`] owns the current [`SelectorState`] and a set of subscribed
//! [`ChartHandler`]s. Each [`SelectorEvent`] updates the state and re-runs
//! only the handlers that depend on the changed input, passing their views to
//! a [`ChartRenderer`].

pub mod views;

use crate::dataset::Dataset;
use crate::models::*;

pub const OUTCOME_CHART_ID: &str = "success-pie-chart";
pub const PAYLOAD_CHART_ID: &str = "success-payload-scatter-chart";

/// Derives one chart from the dataset and the current selector state.
pub trait ChartHandler: Send + Sync {
    /// Identifier of the chart region this handler feeds.
    fn id(&self) -> &'static str;

    /// Whether `event` changes an input this handler reads.
    fn depends_on(&self, event: &SelectorEvent) -> bool;

    fn handle(&self, dataset: &Dataset, state: &SelectorState) -> ChartView;
}

/// Displays chart views. The browser page and the text report implement this.
pub trait ChartRenderer {
    fn render(&mut self, chart_id: &str, view: &ChartView);
}

/// Feeds the proportion chart. Reads only the site choice.
pub struct OutcomeHandler;

impl ChartHandler for OutcomeHandler {
    fn id(&self) -> &'static str {
        OUTCOME_CHART_ID
    }

    fn depends_on(&self, event: &SelectorEvent) -> bool {
        matches!(event, SelectorEvent::SiteChanged(_))
    }

    fn handle(&self, dataset: &Dataset, state: &SelectorState) -> ChartView {
        views::outcome_chart(dataset, &state.site)
    }
}

/// Feeds the payload scatter chart. Reads both the site and the range.
pub struct PayloadHandler;

impl ChartHandler for PayloadHandler {
    fn id(&self) -> &'static str {
        PAYLOAD_CHART_ID
    }

    fn depends_on(&self, _event: &SelectorEvent) -> bool {
        true
    }

    fn handle(&self, dataset: &Dataset, state: &SelectorState) -> ChartView {
        views::payload_chart(dataset, state)
    }
}

pub struct Dashboard<R> {
    dataset: Dataset,
    state: SelectorState,
    handlers: Vec<Box<dyn ChartHandler>>,
    renderer: R,
}

impl<R: ChartRenderer> Dashboard<R> {
    /// Subscribe the outcome and payload handlers and render both charts for
    /// the default selector state.
    pub fn new(dataset: Dataset, renderer: R) -> Self {
        Self::with_handlers(
            dataset,
            vec![Box::new(OutcomeHandler), Box::new(PayloadHandler)],
            renderer,
        )
    }

    pub fn with_handlers(
        dataset: Dataset,
        handlers: Vec<Box<dyn ChartHandler>>,
        renderer: R,
    ) -> Self {
        let state = dataset.default_selector();
        let mut dashboard = Self {
            dataset,
            state,
            handlers,
            renderer,
        };
        for handler in &dashboard.handlers {
            let view = handler.handle(&dashboard.dataset, &dashboard.state);
            dashboard.renderer.render(handler.id(), &view);
        }
        dashboard
    }

    /// Apply a selector change and re-render the charts that depend on it.
    ///
    /// Returns the number of charts rendered. An event that leaves the state
    /// unchanged renders nothing.
    pub fn dispatch(&mut self, event: SelectorEvent) -> usize {
        let event = self.normalize(event);
        if !self.apply(&event) {
            tracing::debug!("Selector unchanged, skipping {:?}", event);
            return 0;
        }

        let mut rendered = 0;
        for handler in self.handlers.iter().filter(|h| h.depends_on(&event)) {
            let view = handler.handle(&self.dataset, &self.state);
            tracing::debug!("Rendering {} ({})", handler.id(), view.kind().as_str());
            self.renderer.render(handler.id(), &view);
            rendered += 1;
        }
        rendered
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn normalize(&self, event: SelectorEvent) -> SelectorEvent {
        match event {
            SelectorEvent::RangeChanged(range) => SelectorEvent::RangeChanged(range.ordered()),
            other => other,
        }
    }

    fn apply(&mut self, event: &SelectorEvent) -> bool {
        match event {
            SelectorEvent::SiteChanged(site) if *site != self.state.site => {
                self.state.site = site.clone();
                true
            }
            SelectorEvent::RangeChanged(range) if *range != self.state.payload_range => {
                self.state.payload_range = *range;
                true
            }
            _ => false,
        }
    }
}
