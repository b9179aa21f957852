use chrono::NaiveDate;
use contracts::domain::a001_order::{Order, OrderStatus, RowRef};

use super::gate::{ConfirmationGate, PendingUpdate};
use super::projection::{filter_positions, page_of, FilterCriteria, OrderPage, PAGE_SIZE};
use crate::shared::api_utils::TransportError;
use crate::shared::date_utils::{BrowserZone, LocalZone};
use crate::shared::errors::{AuthError, FetchError, UpdateError};
use crate::shared::list_utils::page_slice;
use crate::system::auth::{Session, SessionStore};

const NO_ORDERS_TEXT: &str = "কোনো অর্ডার পাওয়া যায়নি।";

/// Network work requested by the controller.
///
/// The UI runs it and reports back through the matching `finish_*` method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Authenticate { password: String },
    LoadOrders { token: String, seq: u64 },
    UpdateStatus { token: String, update: PendingUpdate },
}

/// What to tell the operator after a status update, and what to run next
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub alert: Option<String>,
    pub reload: Option<Command>,
}

/// Owner of the session token and the order collection.
///
/// The only place that decides when the order service is called. Loads are
/// numbered; a response that is not for the latest load is dropped.
#[derive(Clone, Debug)]
pub struct OrderListController<Z = BrowserZone> {
    zone: Z,
    session: Session,
    orders: Vec<Order>,
    /// Positions into `orders` matching `criteria`
    filtered: Vec<usize>,
    criteria: FilterCriteria,
    page: usize,
    gate: ConfirmationGate,
    authenticating: bool,
    login_error: Option<AuthError>,
    load_error: Option<FetchError>,
    load_seq: u64,
    loading: bool,
    updates_in_flight: usize,
    /// Bumped whenever the rendered rows must be rebuilt
    revision: u64,
}

impl<Z: LocalZone> OrderListController<Z> {
    pub fn new(zone: Z) -> Self {
        Self {
            zone,
            session: Session::default(),
            orders: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
            page: 1,
            gate: ConfirmationGate::Idle,
            authenticating: false,
            login_error: None,
            load_error: None,
            load_seq: 0,
            loading: false,
            updates_in_flight: 0,
            revision: 0,
        }
    }

    /// Resume a session cached in this tab; returns the initial load if there is one
    pub fn restore(zone: Z, store: &dyn SessionStore) -> (Self, Option<Command>) {
        let mut controller = Self::new(zone);
        controller.session = Session::restore(store);
        let startup = controller.begin_load().ok();
        if startup.is_some() {
            log::debug!("restored session from tab storage");
        }
        (controller, startup)
    }

    // ------------------------------------------------------------------
    // Сессия
    // ------------------------------------------------------------------

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_authenticating(&self) -> bool {
        self.authenticating
    }

    pub fn login_error(&self) -> Option<&AuthError> {
        self.login_error.as_ref()
    }

    pub fn begin_authenticate(&mut self, password: &str) -> Result<Command, AuthError> {
        if self.authenticating {
            return Err(AuthError::InProgress);
        }
        self.authenticating = true;
        self.login_error = None;
        Ok(Command::Authenticate {
            password: password.to_string(),
        })
    }

    /// Store the token and start the first load, or keep the login view with an error
    pub fn finish_authenticate(
        &mut self,
        result: Result<String, AuthError>,
        store: &dyn SessionStore,
    ) -> Option<Command> {
        self.authenticating = false;
        match result {
            Ok(token) => {
                log::debug!("login succeeded");
                self.session.sign_in(store, token);
                self.login_error = None;
                self.begin_load().ok()
            }
            Err(err) => {
                log::warn!("login failed: {}", err);
                self.login_error = Some(err);
                None
            }
        }
    }

    /// Drop the session and everything loaded under it
    pub fn logout(&mut self, store: &dyn SessionStore) {
        self.session.sign_out(store);
        self.orders.clear();
        self.criteria = FilterCriteria::default();
        self.page = 1;
        self.gate = ConfirmationGate::Idle;
        self.authenticating = false;
        self.login_error = None;
        self.load_error = None;
        self.loading = false;
        self.updates_in_flight = 0;
        // Ответы, которые ещё в пути, относятся к старой сессии
        self.load_seq += 1;
        self.refilter();
        log::debug!("logged out");
    }

    // ------------------------------------------------------------------
    // Загрузка
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) -> Result<Command, FetchError> {
        let token = self
            .session
            .token()
            .ok_or(FetchError::NotAuthenticated)?
            .to_string();
        self.load_seq += 1;
        self.loading = true;
        self.load_error = None;
        Ok(Command::LoadOrders {
            token,
            seq: self.load_seq,
        })
    }

    /// Replace the collection wholesale. Returns `false` for a stale response.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<Order>, FetchError>) -> bool {
        if seq != self.load_seq {
            log::warn!(
                "discarding stale order list response #{} (latest #{})",
                seq,
                self.load_seq
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(orders) => {
                log::debug!("order list #{} loaded: {} rows", seq, orders.len());
                self.orders = orders;
                self.load_error = None;
            }
            Err(err) => {
                log::warn!("order list #{} failed: {}", seq, err);
                self.orders.clear();
                self.load_error = Some(err);
            }
        }
        self.refilter();
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Any request outstanding (drives the spinner)
    pub fn is_busy(&self) -> bool {
        self.authenticating || self.loading || self.updates_in_flight > 0
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ------------------------------------------------------------------
    // Фильтр и пагинация
    // ------------------------------------------------------------------

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_query(&mut self, query: String) {
        self.criteria.query = query;
        self.criteria_changed();
    }

    pub fn set_status_filter(&mut self, status: Option<OrderStatus>) {
        self.criteria.status = status;
        self.criteria_changed();
    }

    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        self.criteria.date = date;
        self.criteria_changed();
    }

    /// Move to another page of the already filtered list
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
        self.revision += 1;
    }

    pub fn page_number(&self) -> usize {
        self.page
    }

    pub fn current_page(&self) -> OrderPage {
        page_of(&self.orders, &self.filtered, self.page)
    }

    pub fn total_matching(&self) -> usize {
        self.filtered.len()
    }

    /// Text of the "no orders" banner, if it should be shown
    pub fn banner(&self) -> Option<&'static str> {
        if self.loading {
            return None;
        }
        if let Some(err) = &self.load_error {
            return Some(err.message());
        }
        if page_slice(&self.filtered, self.page, PAGE_SIZE).is_empty() {
            Some(NO_ORDERS_TEXT)
        } else {
            None
        }
    }

    fn criteria_changed(&mut self) {
        self.page = 1;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_positions(&self.orders, &self.criteria, &self.zone);
        self.revision += 1;
    }

    // ------------------------------------------------------------------
    // Смена статуса
    // ------------------------------------------------------------------

    /// Ask for confirmation of a status change. No network traffic.
    pub fn request_status_change(&mut self, row_ref: RowRef, new_status: OrderStatus) -> bool {
        self.gate.request(PendingUpdate {
            row_ref,
            new_status,
        })
    }

    pub fn pending_update(&self) -> Option<&PendingUpdate> {
        self.gate.pending()
    }

    pub fn cancel_pending(&mut self) -> bool {
        self.gate.cancel().is_some()
    }

    /// Confirm the pending update; `None` when nothing was pending
    pub fn confirm(&mut self) -> Option<Result<Command, UpdateError>> {
        let update = self.gate.confirm()?;
        Some(self.commit_status_change(update))
    }

    pub fn commit_status_change(&mut self, update: PendingUpdate) -> Result<Command, UpdateError> {
        let token = self
            .session
            .token()
            .ok_or(UpdateError::NotAuthenticated)?
            .to_string();
        self.updates_in_flight += 1;
        log::debug!("committing {} for row {}", update.new_status, update.row_ref);
        Ok(Command::UpdateStatus { token, update })
    }

    /// On success reload from the server; the row is never patched locally
    pub fn finish_update(
        &mut self,
        update: &PendingUpdate,
        result: Result<(), UpdateError>,
    ) -> UpdateOutcome {
        self.updates_in_flight = self.updates_in_flight.saturating_sub(1);
        match result {
            Ok(()) => UpdateOutcome {
                alert: Some(format!(
                    "স্ট্যাটাস \"{}\" এ সফলভাবে পরিবর্তিত হয়েছে!",
                    update.new_status
                )),
                reload: self.begin_load().ok(),
            },
            Err(UpdateError::Transport(TransportError::Cancelled)) => UpdateOutcome {
                alert: None,
                reload: None,
            },
            Err(err) => {
                log::warn!("status update for row {} failed: {}", update.row_ref, err);
                // Пересоздать строки, чтобы селектор вернулся к статусу с сервера
                self.revision += 1;
                UpdateOutcome {
                    alert: Some(err.message().to_string()),
                    reload: None,
                }
            }
        }
    }
}
