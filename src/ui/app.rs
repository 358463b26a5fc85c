use std::time::{Duration, Instant};

use crate::config::ConfigStore;
use crate::domain::seed;
use crate::domain::{Card, Money, ServiceStatus, Tab, User};
use crate::store::Store;
use crate::ui::card_form::{CardFormIntent, CardFormReducer, CardFormState};
use crate::ui::deferred::{DeferredAction, DeferredHandle, DeferredScheduler};
use crate::ui::layout::{chrome_for, Chrome};
use crate::ui::login::{LoginIntent, LoginReducer, LoginFormState};
use crate::ui::mvi::Reducer;
use crate::ui::recharge::{RechargeFlowState, RechargeIntent, RechargeReducer};

/// How long a footer notice stays up.
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Entries of the profile menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileItem {
    Notifications,
    Security,
    Settings,
    Help,
    Logout,
}

impl ProfileItem {
    pub const ALL: [ProfileItem; 5] = [
        ProfileItem::Notifications,
        ProfileItem::Security,
        ProfileItem::Settings,
        ProfileItem::Help,
        ProfileItem::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileItem::Notifications => "Notificações",
            ProfileItem::Security => "Segurança e Privacidade",
            ProfileItem::Settings => "Configurações do App",
            ProfileItem::Help => "Ajuda e Suporte",
            ProfileItem::Logout => "Sair da conta",
        }
    }

    /// Unread counter shown next to the label.
    pub fn badge(&self) -> Option<u8> {
        match self {
            ProfileItem::Notifications => Some(2),
            _ => None,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    config: ConfigStore,
    store: Store,
    user: User,
    service_status: Vec<ServiceStatus>,
    size: Option<(u16, u16)>,
    animation_tick: u8,
    notice: Option<(String, Instant)>,
    /// Screen-local state (MVI pattern). Dropped when the screen unmounts.
    login_form: LoginFormState,
    card_form: CardFormState,
    card_selection: usize,
    recharge_flow: RechargeFlowState,
    profile_selection: usize,
    scheduler: DeferredScheduler,
    pending_login: Option<DeferredHandle>,
    /// Recharge the Recharge screen is waiting on.
    pending_recharge: Option<DeferredHandle>,
    /// Recharges left running after their screen unmounted.
    detached_recharges: Vec<DeferredHandle>,
}

impl App {
    pub fn new(config: ConfigStore, scheduler: DeferredScheduler) -> Self {
        Self::with_store(config, scheduler, Store::new())
    }

    pub fn with_store(config: ConfigStore, scheduler: DeferredScheduler, store: Store) -> Self {
        Self {
            should_quit: false,
            config,
            store,
            user: seed::mock_user(),
            service_status: seed::service_status(),
            size: None,
            animation_tick: 0,
            notice: None,
            login_form: LoginFormState::default(),
            card_form: CardFormState::default(),
            card_selection: 0,
            recharge_flow: RechargeFlowState::default(),
            profile_selection: 0,
            scheduler,
            pending_login: None,
            pending_recharge: None,
            detached_recharges: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Stop the loop. Every pending timer is cancelled.
    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.cancel_all_pending();
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn service_status(&self) -> &[ServiceStatus] {
        &self.service_status
    }

    pub fn current_tab(&self) -> Tab {
        self.store.current_tab()
    }

    pub fn login_form(&self) -> &LoginFormState {
        &self.login_form
    }

    pub fn card_form(&self) -> &CardFormState {
        &self.card_form
    }

    pub fn card_selection(&self) -> usize {
        self.card_selection
    }

    pub fn recharge_flow(&self) -> &RechargeFlowState {
        &self.recharge_flow
    }

    pub fn profile_selection(&self) -> usize {
        self.profile_selection
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn pending_login_id(&self) -> Option<u64> {
        self.pending_login.as_ref().map(DeferredHandle::id)
    }

    pub fn pending_recharge_id(&self) -> Option<u64> {
        self.pending_recharge.as_ref().map(DeferredHandle::id)
    }

    pub fn chrome(&self) -> Chrome {
        let width = self.size.map_or(u16::MAX, |(cols, _)| cols);
        chrome_for(width, self.config.get().layout.wide_breakpoint)
    }

    /// True when printable keys belong to a text input rather than to
    /// shortcuts.
    pub fn captures_text(&self) -> bool {
        if !self.store.is_logged_in() {
            return true;
        }
        match self.current_tab() {
            Tab::Cards => matches!(self.card_form, CardFormState::Open { .. }),
            Tab::Recharge => self.recharge_flow.captures_text(),
            Tab::Home | Tab::Profile => false,
        }
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        if self
            .notice
            .as_ref()
            .is_some_and(|(_, shown)| shown.elapsed() >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some((text.into(), Instant::now()));
    }

    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => {
                tracing::info!(path = %self.config.path().display(), "config reloaded");
                self.set_notice("Configuração recarregada");
            }
            Err(err) => {
                tracing::warn!(%err, "config reload failed");
                self.set_notice(format!("Erro ao recarregar configuração: {err}"));
            }
        }
    }

    // ---- Login ----

    pub fn login_input(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login_form, LoginReducer, intent);
    }

    /// Enter on the login form. Schedules the simulated authentication when
    /// both fields are filled.
    pub fn submit_login(&mut self) {
        if self.store.is_logged_in() || self.login_form.is_authenticating() {
            return;
        }
        dispatch_mvi!(self, login_form, LoginReducer, LoginIntent::Submit);
        if self.login_form.is_authenticating() {
            let delay = self.config.get().timing.login_delay();
            let handle = self.scheduler.schedule(delay, DeferredAction::CompleteLogin);
            tracing::debug!(id = handle.id(), "authentication pending");
            self.pending_login = Some(handle);
        }
    }

    pub fn logout(&mut self) {
        if !self.store.is_logged_in() {
            return;
        }
        self.leave_screen(self.current_tab());
        self.store.logout();
        self.login_form = LoginFormState::default();
    }

    // ---- Navigation ----

    pub fn navigate(&mut self, tab: Tab) {
        if !self.store.is_logged_in() || tab == self.current_tab() {
            return;
        }
        self.leave_screen(self.current_tab());
        self.store.set_current_tab(tab);
    }

    pub fn next_tab(&mut self) {
        self.navigate(self.current_tab().next());
    }

    pub fn prev_tab(&mut self) {
        self.navigate(self.current_tab().prev());
    }

    /// Unmount `tab`: its local state is dropped.
    fn leave_screen(&mut self, tab: Tab) {
        match tab {
            Tab::Cards => {
                dispatch_mvi!(self, card_form, CardFormReducer, CardFormIntent::Close);
                self.card_selection = 0;
            }
            Tab::Recharge => {
                if let Some(handle) = self.pending_recharge.take() {
                    if self.config.get().behavior.cancel_pending_on_leave {
                        tracing::debug!(id = handle.id(), "pending recharge cancelled");
                        handle.cancel();
                    } else {
                        self.detached_recharges.push(handle);
                    }
                }
                dispatch_mvi!(self, recharge_flow, RechargeReducer, RechargeIntent::Reset);
            }
            Tab::Profile => self.profile_selection = 0,
            Tab::Home => {}
        }
    }

    // ---- Cards ----

    pub fn move_card_selection(&mut self, delta: isize) {
        let len = self.store.cards().len();
        if len == 0 {
            return;
        }
        self.card_selection = (self.card_selection as isize + delta).rem_euclid(len as isize) as usize;
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.store.cards().get(self.card_selection)
    }

    pub fn card_form_input(&mut self, intent: CardFormIntent) {
        dispatch_mvi!(self, card_form, CardFormReducer, intent);
    }

    /// Save the draft as a new card when both required fields are filled.
    pub fn submit_card_form(&mut self) {
        let submission = self.card_form.submission();
        dispatch_mvi!(self, card_form, CardFormReducer, CardFormIntent::Submit);
        if let Some(card) = submission {
            self.store.add_card(card);
            self.card_selection = self.store.cards().len().saturating_sub(1);
            self.set_notice("Cartão adicionado");
        }
    }

    /// "Recarregar" on a card: opens the Recharge screen with it selected.
    pub fn recharge_selected_card(&mut self) {
        let Some(card_id) = self.selected_card().map(|card| card.id.clone()) else {
            return;
        };
        self.navigate(Tab::Recharge);
        self.recharge_input(RechargeIntent::SelectCard { card_id });
    }

    // ---- Recharge ----

    pub fn recharge_input(&mut self, intent: RechargeIntent) {
        dispatch_mvi!(self, recharge_flow, RechargeReducer, intent);
    }

    /// Card the recharge will go to. A stale pick falls back to the first card.
    pub fn recharge_card(&self) -> Option<&Card> {
        let cards = self.store.cards();
        let picked = match &self.recharge_flow {
            RechargeFlowState::Selecting(draft) => draft.card_id.as_deref(),
            RechargeFlowState::Processing { card_id, .. } => Some(card_id.as_str()),
            RechargeFlowState::Success { .. } => None,
        };
        picked
            .and_then(|id| cards.iter().find(|card| card.id == id))
            .or_else(|| cards.first())
    }

    pub fn cycle_recharge_card(&mut self, delta: isize) {
        let cards = self.store.cards();
        if cards.is_empty() {
            return;
        }
        let current = self
            .recharge_card()
            .and_then(|card| cards.iter().position(|c| c.id == card.id))
            .unwrap_or(0);
        let next = (current as isize + delta).rem_euclid(cards.len() as isize) as usize;
        let card_id = cards[next].id.clone();
        self.recharge_input(RechargeIntent::SelectCard { card_id });
    }

    /// Pay. Moves to Processing and schedules the simulated confirmation.
    pub fn confirm_recharge(&mut self) {
        let Some(card_id) = self.recharge_card().map(|card| card.id.clone()) else {
            return;
        };
        self.recharge_input(RechargeIntent::Confirm { card_id });
        if let RechargeFlowState::Processing { card_id, amount } = &self.recharge_flow {
            let delay = self.config.get().timing.recharge_delay();
            let action = DeferredAction::CompleteRecharge {
                card_id: card_id.clone(),
                amount: *amount,
            };
            let handle = self.scheduler.schedule(delay, action);
            tracing::debug!(id = handle.id(), card_id = %card_id, %amount, "payment pending");
            self.pending_recharge = Some(handle);
        }
    }

    pub fn new_recharge(&mut self) {
        self.recharge_input(RechargeIntent::NewRecharge);
    }

    /// "Voltar ao Início": throw away everything and start over from the seed.
    pub fn back_to_start(&mut self) {
        self.cancel_all_pending();
        self.store.reset();
        self.login_form = LoginFormState::default();
        self.card_form = CardFormState::default();
        self.card_selection = 0;
        self.recharge_flow = RechargeFlowState::default();
        self.profile_selection = 0;
    }

    // ---- Profile ----

    pub fn move_profile_selection(&mut self, delta: isize) {
        let len = ProfileItem::ALL.len() as isize;
        self.profile_selection = (self.profile_selection as isize + delta).rem_euclid(len) as usize;
    }

    pub fn activate_profile_item(&mut self) {
        match ProfileItem::ALL.get(self.profile_selection) {
            Some(ProfileItem::Logout) => self.logout(),
            Some(item) => {
                let label = item.label();
                self.set_notice(format!("{label}: em breve"));
            }
            None => {}
        }
    }

    // ---- Deferred actions ----

    pub fn on_deferred(&mut self, id: u64, action: DeferredAction) {
        match action {
            DeferredAction::CompleteLogin => {
                if self.pending_login.as_ref().map(DeferredHandle::id) != Some(id) {
                    tracing::debug!(id, "stale login completion ignored");
                    return;
                }
                self.pending_login = None;
                self.store.login();
                self.login_form = LoginFormState::default();
            }
            DeferredAction::CompleteRecharge { card_id, amount } => {
                if self.pending_recharge.as_ref().map(DeferredHandle::id) == Some(id) {
                    self.pending_recharge = None;
                    self.complete_recharge(&card_id, amount);
                    let card_name = self
                        .store
                        .state()
                        .card(&card_id)
                        .map(|card| card.name.clone())
                        .unwrap_or_default();
                    self.recharge_input(RechargeIntent::Completed { card_name });
                } else if let Some(pos) = self.detached_recharges.iter().position(|h| h.id() == id) {
                    self.detached_recharges.remove(pos);
                    self.complete_recharge(&card_id, amount);
                } else {
                    tracing::debug!(id, "stale recharge completion ignored");
                }
            }
        }
    }

    fn complete_recharge(&mut self, card_id: &str, amount: Money) {
        self.store.recharge(amount, card_id);
    }

    fn cancel_all_pending(&mut self) {
        if let Some(handle) = self.pending_login.take() {
            handle.cancel();
        }
        if let Some(handle) = self.pending_recharge.take() {
            handle.cancel();
        }
        for handle in self.detached_recharges.drain(..) {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::Money;
    use crate::ui::events::AppEvent;
    use std::path::PathBuf;
    use std::sync::mpsc;

    struct Harness {
        app: App,
        _runtime: tokio::runtime::Runtime,
        _rx: mpsc::Receiver<AppEvent>,
    }

    fn harness(configure: impl FnOnce(&mut Config)) -> Harness {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("runtime");
        let (tx, rx) = mpsc::channel();
        let mut config = Config::default();
        // Timers never fire on their own; tests deliver completions by hand.
        config.timing.login_delay_ms = 600_000;
        config.timing.recharge_delay_ms = 600_000;
        configure(&mut config);
        let store = ConfigStore::new(config, PathBuf::from("/nonexistent/mobifacil.toml"));
        let scheduler = DeferredScheduler::new(runtime.handle().clone(), tx);
        Harness {
            app: App::new(store, scheduler),
            _runtime: runtime,
            _rx: rx,
        }
    }

    fn logged_in(app: &mut App) {
        for ch in "123".chars() {
            app.login_input(LoginIntent::InputChar(ch));
        }
        app.login_input(LoginIntent::SwitchField);
        app.login_input(LoginIntent::InputChar('x'));
        app.submit_login();
        let id = app.pending_login_id().expect("login scheduled");
        app.on_deferred(id, DeferredAction::CompleteLogin);
        assert!(app.store().is_logged_in());
    }

    fn start_payment(app: &mut App, preset_steps: usize) -> u64 {
        app.navigate(Tab::Recharge);
        for _ in 0..preset_steps {
            app.recharge_input(RechargeIntent::NextPreset);
        }
        app.confirm_recharge();
        app.pending_recharge_id().expect("payment scheduled")
    }

    #[test]
    fn empty_login_is_not_submitted() {
        let mut h = harness(|_| {});
        h.app.submit_login();
        assert!(h.app.pending_login_id().is_none());
        assert!(!h.app.login_form().is_authenticating());
    }

    #[test]
    fn login_completes_on_deferred_event() {
        let mut h = harness(|_| {});
        logged_in(&mut h.app);
        assert_eq!(h.app.current_tab(), Tab::Home);
        assert!(h.app.pending_login_id().is_none());
    }

    #[test]
    fn payment_credits_card_and_shows_success() {
        let mut h = harness(|_| {});
        logged_in(&mut h.app);
        // Third preset: R$ 50.
        let id = start_payment(&mut h.app, 3);
        assert!(h.app.recharge_flow().is_processing());

        h.app.on_deferred(
            id,
            DeferredAction::CompleteRecharge {
                card_id: "c1".into(),
                amount: Money::from_reais(50),
            },
        );

        assert_eq!(
            h.app.store().cards()[0].balance,
            Money::from_cents(6450)
        );
        assert_eq!(
            h.app.recharge_flow(),
            &RechargeFlowState::Success {
                amount: Money::from_reais(50),
                card_name: "Meu Cartão".into(),
            }
        );
    }

    #[test]
    fn leaving_recharge_cancels_pending_payment() {
        let mut h = harness(|_| {});
        logged_in(&mut h.app);
        let id = start_payment(&mut h.app, 1);

        h.app.navigate(Tab::Home);
        assert!(h.app.pending_recharge_id().is_none());

        let before = h.app.store().revision();
        h.app.on_deferred(
            id,
            DeferredAction::CompleteRecharge {
                card_id: "c1".into(),
                amount: Money::from_reais(10),
            },
        );
        assert_eq!(h.app.store().revision(), before);
        assert_eq!(h.app.store().cards()[0].balance, Money::from_cents(1450));
    }

    #[test]
    fn keep_pending_applies_recharge_after_leaving() {
        let mut h = harness(|config| config.behavior.cancel_pending_on_leave = false);
        logged_in(&mut h.app);
        let id = start_payment(&mut h.app, 1);

        h.app.navigate(Tab::Cards);
        h.app.on_deferred(
            id,
            DeferredAction::CompleteRecharge {
                card_id: "c1".into(),
                amount: Money::from_reais(10),
            },
        );
        assert_eq!(h.app.store().cards()[0].balance, Money::from_cents(2450));
        assert_eq!(h.app.store().transactions().len(), 4);
    }

    #[test]
    fn back_to_start_reseeds_and_logs_out() {
        let mut h = harness(|_| {});
        logged_in(&mut h.app);
        let id = start_payment(&mut h.app, 2);
        h.app.on_deferred(
            id,
            DeferredAction::CompleteRecharge {
                card_id: "c1".into(),
                amount: Money::from_reais(20),
            },
        );
        h.app.back_to_start();

        assert!(!h.app.store().is_logged_in());
        assert_eq!(h.app.store().cards()[0].balance, Money::from_cents(1450));
        assert_eq!(h.app.store().transactions().len(), 3);
        assert_eq!(h.app.recharge_flow(), &RechargeFlowState::default());
    }

    #[test]
    fn stale_recharge_pick_falls_back_to_first_card() {
        let mut h = harness(|_| {});
        logged_in(&mut h.app);
        h.app.navigate(Tab::Recharge);
        h.app.recharge_input(RechargeIntent::SelectCard {
            card_id: "gone".into(),
        });
        assert_eq!(h.app.recharge_card().map(|c| c.id.as_str()), Some("c1"));
        h.app.cycle_recharge_card(1);
        assert_eq!(h.app.recharge_card().map(|c| c.id.as_str()), Some("c2"));
    }

    #[test]
    fn recharge_from_cards_preselects_card() {
        let mut h = harness(|_| {});
        logged_in(&mut h.app);
        h.app.navigate(Tab::Cards);
        h.app.move_card_selection(1);
        h.app.recharge_selected_card();
        assert_eq!(h.app.current_tab(), Tab::Recharge);
        assert_eq!(h.app.recharge_card().map(|c| c.id.as_str()), Some("c2"));
    }

    #[test]
    fn profile_logout_returns_home_tab() {
        let mut h = harness(|_| {});
        logged_in(&mut h.app);
        h.app.navigate(Tab::Profile);
        h.app.move_profile_selection(-1);
        h.app.activate_profile_item();
        assert!(!h.app.store().is_logged_in());
        assert_eq!(h.app.current_tab(), Tab::Home);
    }

    #[test]
    fn navigation_is_blocked_while_logged_out() {
        let mut h = harness(|_| {});
        h.app.navigate(Tab::Cards);
        assert_eq!(h.app.current_tab(), Tab::Home);
    }
}
