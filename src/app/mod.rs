//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, CheckoutFocus, DashboardState)
//! - Main module - App struct and event loop
//!
//! Everything runs on the event-loop thread. The registration store is handed
//! in by the caller and is only written when the wizard submits.

mod state;

pub use state::{AppMode, AppState, CheckoutFocus, DashboardState};

use crate::checkout::CheckoutSession;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::store::RegistrationStore;
use crate::ui::UiRenderer;
use crate::wizard::{WizardField, WizardStep};
use crate::types::BillingCycle;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    store: RegistrationStore,
    ui_renderer: UiRenderer,
    /// Keybinding context for key lookup and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance.
    ///
    /// Starting in [`AppMode::Checkout`] opens the checkout straight away with
    /// whatever the store holds (or the demo registration).
    pub fn new(store: RegistrationStore, start_mode: AppMode) -> Self {
        info!("Creating new App instance in {:?} mode", start_mode);
        let mut app = Self {
            state: AppState::default(),
            store,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        };
        match start_mode {
            AppMode::Register => {}
            AppMode::Checkout => app.open_checkout(),
            AppMode::Dashboard => app.state.mode = AppMode::Dashboard,
        }
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &RegistrationStore {
        &self.store
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Run the event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context)
            })?;

            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event)? {
                        break; // Exit requested
                    }
                }
            }
        }

        info!("Application loop finished");
        Ok(())
    }

    /// Handle one key press. Returns `true` when the application should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let mode = self.state.mode;
        let action =
            self.keybinding_context
                .resolve(&mode, key_event.code, key_event.modifiers);

        if self.state.help_visible {
            match (action, key_event.code) {
                (Some(KeyAction::Quit), _) => return Ok(true),
                (Some(KeyAction::Help), _) | (_, KeyCode::Esc) => self.toggle_help(),
                _ => {}
            }
            return Ok(false);
        }

        match action {
            Some(KeyAction::Quit) => {
                info!("Quit requested from {:?}", mode);
                return Ok(true);
            }
            Some(KeyAction::Help) => self.toggle_help(),
            Some(action) => match mode {
                AppMode::Register => self.handle_register_action(action)?,
                AppMode::Checkout => self.handle_checkout_action(action),
                AppMode::Dashboard => self.handle_dashboard_action(action),
            },
            None => {
                if let Some(c) = typed_char(&key_event) {
                    self.handle_text_input(c);
                }
            }
        }

        Ok(false)
    }

    fn handle_text_input(&mut self, c: char) {
        match self.state.mode {
            AppMode::Register => self.state.wizard.input_char(c),
            AppMode::Checkout => {
                if self.state.checkout_focus == CheckoutFocus::Coupon {
                    if let Some(checkout) = self.state.checkout.as_mut() {
                        checkout.push_coupon_char(c);
                    }
                }
            }
            AppMode::Dashboard => self.state.dashboard.push_search(c),
        }
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    fn handle_register_action(&mut self, action: KeyAction) -> Result<()> {
        let wizard = &mut self.state.wizard;
        let on_package_step = wizard.step() == WizardStep::Package;

        match action {
            KeyAction::NextField | KeyAction::NavigateDown => {
                if on_package_step {
                    wizard.select_adjacent_package(true);
                } else {
                    wizard.focus_next();
                }
            }
            KeyAction::PreviousField | KeyAction::NavigateUp => {
                if on_package_step {
                    wizard.select_adjacent_package(false);
                } else {
                    wizard.focus_previous();
                }
            }
            KeyAction::AdjustLeft | KeyAction::AdjustRight => {
                let forward = action == KeyAction::AdjustRight;
                if on_package_step {
                    wizard.set_billing_cycle(if forward {
                        BillingCycle::Yearly
                    } else {
                        BillingCycle::Monthly
                    });
                } else if wizard.focused_field() == Some(WizardField::Nationality) {
                    wizard.cycle_nationality(forward);
                }
            }
            KeyAction::DeleteChar => wizard.backspace(),
            KeyAction::Back => {
                wizard.back();
            }
            KeyAction::Select => {
                if on_package_step {
                    self.submit_registration()?;
                } else {
                    let step = wizard.next();
                    self.state.status_message =
                        format!("Step {} of {}: {}", step.number(), WizardStep::TOTAL_STEPS, step);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Hand the wizard's payload to the store and move on to checkout
    fn submit_registration(&mut self) -> Result<()> {
        let payload = self.state.wizard.submit()?;
        info!("Registration submitted for package {:?}", payload.selected_package);
        self.store.set_registration(payload);
        self.open_checkout();
        Ok(())
    }

    fn open_checkout(&mut self) {
        let payload = self.store.registration_or_demo();
        debug!("Opening checkout for package {:?}", payload.selected_package);
        self.state.checkout = Some(CheckoutSession::new(payload));
        self.state.checkout_focus = CheckoutFocus::Addons;
        self.state.mode = AppMode::Checkout;
    }

    // ------------------------------------------------------------------------
    // Checkout
    // ------------------------------------------------------------------------

    fn handle_checkout_action(&mut self, action: KeyAction) {
        let focus = self.state.checkout_focus;
        let Some(checkout) = self.state.checkout.as_mut() else {
            return;
        };

        match action {
            KeyAction::NextField => self.state.checkout_focus = focus.next(),
            KeyAction::PreviousField => self.state.checkout_focus = focus.previous(),
            KeyAction::NavigateUp if focus == CheckoutFocus::Addons => checkout.cursor_up(),
            KeyAction::NavigateDown if focus == CheckoutFocus::Addons => checkout.cursor_down(),
            KeyAction::DeleteChar if focus == CheckoutFocus::Coupon => checkout.pop_coupon_char(),
            KeyAction::Select => match focus {
                CheckoutFocus::Addons => checkout.toggle_current(),
                CheckoutFocus::Coupon => {
                    self.state.status_message = if checkout.apply_coupon() {
                        format!("Coupon applied! {}% off", checkout.coupon_percent())
                    } else {
                        "Invalid coupon code".to_string()
                    };
                }
                CheckoutFocus::Confirm => {
                    let view = checkout.confirm();
                    self.state.dashboard = DashboardState::on(view);
                    self.state.mode = AppMode::Dashboard;
                    self.state.status_message = "Purchase complete. Welcome aboard!".to_string();
                }
            },
            KeyAction::Back => {
                debug!("Leaving checkout for registration");
                self.state.mode = AppMode::Register;
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------------

    fn handle_dashboard_action(&mut self, action: KeyAction) {
        let dashboard = &mut self.state.dashboard;
        match action {
            KeyAction::NextField => dashboard.cycle_view(true),
            KeyAction::PreviousField => dashboard.cycle_view(false),
            KeyAction::NavigateUp => dashboard.scroll_up(),
            KeyAction::NavigateDown => dashboard.scroll_down(),
            KeyAction::DeleteChar => dashboard.pop_search(),
            KeyAction::ClearSearch => dashboard.clear_search(),
            KeyAction::CycleFilter => dashboard.cycle_entry_type(),
            _ => return,
        }
        debug!("Dashboard view {} search {:?}", dashboard.view, dashboard.filter.search);
    }
}

/// The character a key press types, if it types one
fn typed_char(key_event: &KeyEvent) -> Option<char> {
    match key_event.code {
        KeyCode::Char(c)
            if key_event.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
        {
            Some(c)
        }
        _ => None,
    }
}
