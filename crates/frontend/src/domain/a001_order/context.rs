//! Reactive wrapper around [`OrderListController`].
//!
//! The controller decides what to send; this context sends it, tracks the
//! outstanding requests and feeds the results back.

use contracts::domain::a001_order::{OrderStatus, RowRef};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use super::ui::list::state::{Command, OrderListController};
use crate::shared::api_utils::{CancelToken, RequestKind, RequestRegistry};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::BrowserZone;
use crate::system::auth::{self, BrowserSessionStore};

#[derive(Clone, Copy)]
pub struct OrdersContext {
    pub state: RwSignal<OrderListController>,
    config: StoredValue<AppConfig>,
    requests: StoredValue<RequestRegistry, LocalStorage>,
}

impl OrdersContext {
    /// Restore the tab session and provide the context. Starts the initial
    /// load when a token was cached.
    pub fn provide(config: AppConfig) -> Self {
        let (controller, startup) =
            OrderListController::restore(BrowserZone, &BrowserSessionStore);
        let ctx = Self {
            state: RwSignal::new(controller),
            config: StoredValue::new(config),
            requests: StoredValue::new_local(RequestRegistry::default()),
        };
        provide_context(ctx);
        if let Some(command) = startup {
            ctx.dispatch(command);
        }
        ctx
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    pub fn is_busy(&self) -> bool {
        self.state.with(|s| s.is_busy())
    }

    pub fn login(self, password: String) {
        match self.state.try_update(|s| s.begin_authenticate(&password)) {
            Some(Ok(command)) => self.dispatch(command),
            Some(Err(e)) => log::debug!("login ignored: {}", e),
            None => {}
        }
    }

    pub fn logout(self) {
        self.requests.update_value(|r| r.cancel_all());
        self.state.update(|s| s.logout(&BrowserSessionStore));
    }

    pub fn set_query(self, query: String) {
        self.state.update(|s| s.set_query(query));
    }

    pub fn set_status_filter(self, status: Option<OrderStatus>) {
        self.state.update(|s| s.set_status_filter(status));
    }

    pub fn set_date_filter(self, date: Option<chrono::NaiveDate>) {
        self.state.update(|s| s.set_date_filter(date));
    }

    pub fn set_page(self, page: usize) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn request_status_change(self, row_ref: RowRef, new_status: OrderStatus) {
        self.state.update(|s| {
            s.request_status_change(row_ref, new_status);
        });
    }

    pub fn cancel_pending(self) {
        self.state.update(|s| {
            s.cancel_pending();
        });
    }

    pub fn confirm(self) {
        match self.state.try_update(|s| s.confirm()).flatten() {
            Some(Ok(command)) => self.dispatch(command),
            Some(Err(e)) => {
                log::warn!("status change not sent: {}", e);
                alert(e.message());
            }
            None => {}
        }
    }

    fn register(self, kind: RequestKind) -> Option<(u64, CancelToken)> {
        self.requests.try_update_value(|r| r.register(kind))
    }

    fn release(self, id: u64) {
        self.requests.update_value(|r| r.release(id));
    }

    /// Run a controller command and report its result back
    fn dispatch(self, command: Command) {
        let config = self.config.get_value();
        match command {
            Command::Authenticate { password } => {
                let Some((id, cancel)) = self.register(RequestKind::Auth) else {
                    return;
                };
                spawn_local(async move {
                    let result = auth::api::authenticate(&config, password, &cancel).await;
                    self.release(id);
                    let next = self
                        .state
                        .try_update(|s| s.finish_authenticate(result, &BrowserSessionStore))
                        .flatten();
                    if let Some(next) = next {
                        self.dispatch(next);
                    }
                });
            }
            Command::LoadOrders { token, seq } => {
                let Some((id, cancel)) = self.register(RequestKind::Load) else {
                    return;
                };
                spawn_local(async move {
                    let result = api::fetch_orders(&config, &token, &cancel).await;
                    self.release(id);
                    self.state.update(|s| {
                        s.finish_load(seq, result);
                    });
                });
            }
            Command::UpdateStatus { token, update } => {
                let Some((id, cancel)) = self.register(RequestKind::Update) else {
                    return;
                };
                spawn_local(async move {
                    let result = api::update_status(&config, &token, &update, &cancel).await;
                    self.release(id);
                    let Some(outcome) = self.state.try_update(|s| s.finish_update(&update, result))
                    else {
                        return;
                    };
                    if let Some(text) = outcome.alert {
                        alert(&text);
                    }
                    if let Some(reload) = outcome.reload {
                        self.dispatch(reload);
                    }
                });
            }
        }
    }
}

fn alert(text: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(text);
    }
}

/// Hook to access the orders context provided by `App`
pub fn use_orders() -> OrdersContext {
    use_context::<OrdersContext>().expect("OrdersContext not provided")
}
