//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use sitenav::menu::LinkItem;
use sitenav::routing::{HandlerResult, RouteParams};
use sitenav::site::{View, ViewSink};

/// Records handler invocations as `name(k=v,...)` strings.
#[derive(Clone, Default)]
pub struct Calls(Arc<Mutex<Vec<String>>>);

impl Calls {
    pub fn new() -> Self {
        Self::default()
    }

    /// A route handler that records itself under `name`.
    pub fn handler(
        &self,
        name: &'static str,
    ) -> impl Fn(&RouteParams) -> HandlerResult + Send + Sync + 'static {
        let calls = self.0.clone();
        move |params: &RouteParams| -> HandlerResult {
            calls.lock().unwrap().push(format_call(name, params));
            Ok(())
        }
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

/// View sink recording every shown view.
#[derive(Default)]
pub struct RecordingSink {
    calls: Calls,
}

impl RecordingSink {
    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }
}

impl ViewSink for RecordingSink {
    fn show(&self, view: &View<'_>) -> HandlerResult {
        self.calls.0.lock().unwrap().push(format_call(view.view, view.params));
        Ok(())
    }
}

fn format_call(name: &str, params: &RouteParams) -> String {
    let args: Vec<_> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{name}({})", args.join(","))
}

/// Links named after `names`, each targeting `/<label>`.
pub fn links(names: &[&str]) -> Vec<LinkItem> {
    names
        .iter()
        .map(|n| LinkItem::new(*n, format!("/{}", n.trim_start_matches('_').to_lowercase())))
        .collect()
}
