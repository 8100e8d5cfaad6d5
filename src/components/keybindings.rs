//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! application mode. The registry is both the source of the nav bar and help
//! overlay text and the lookup the event loop uses to turn keys into actions.
//! Keys with no binding in a mode fall through to text entry.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    /// Move focus to the next input or panel
    NextField,
    /// Move focus to the previous input or panel
    PreviousField,
    /// Cycle a selection backwards (nationality, billing cycle)
    AdjustLeft,
    /// Cycle a selection forwards
    AdjustRight,
    /// Continue / activate the focused element
    Select,
    Back,
    DeleteChar,
    /// Clear the dashboard search box
    ClearSearch,
    /// Cycle the daily report entry-type filter
    CycleFilter,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        // Terminals report Shift alongside BackTab inconsistently.
        let modifiers = if key == KeyCode::BackTab {
            modifiers.difference(KeyModifiers::SHIFT)
        } else {
            modifiers
        };
        self.key == key && self.modifiers == modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        // Letters are reserved for typing, so globals use function and control keys
        self.global_bindings = vec![
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.mode_bindings.insert(
            AppMode::Register,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Previous field"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next field / package"),
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous field / package"),
                Keybinding::new(KeyCode::Left, KeyAction::AdjustLeft, "Left", "Previous option"),
                Keybinding::new(KeyCode::Right, KeyAction::AdjustRight, "Right", "Next option"),
                Keybinding::new(KeyCode::Backspace, KeyAction::DeleteChar, "Bksp", "Delete"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Continue"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Checkout,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next panel"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Previous panel"),
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous add-on"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next add-on"),
                Keybinding::new(KeyCode::Backspace, KeyAction::DeleteChar, "Bksp", "Delete"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Toggle / Apply / Confirm"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to registration"),
            ],
        );

        self.mode_bindings.insert(
            AppMode::Dashboard,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next screen"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Previous screen"),
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::Backspace, KeyAction::DeleteChar, "Bksp", "Delete"),
                Keybinding::new(KeyCode::F(3), KeyAction::CycleFilter, "F3", "Entry type"),
                Keybinding::new(KeyCode::Esc, KeyAction::ClearSearch, "Esc", "Clear search"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Find the action bound to a key in a mode
    pub fn resolve(&self, mode: &AppMode, key: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = match mode {
            AppMode::Register => vec![
                KeyAction::NextField,
                KeyAction::AdjustLeft,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Checkout => vec![
                KeyAction::NextField,
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Dashboard => vec![
                KeyAction::NextField,
                KeyAction::NavigateUp,
                KeyAction::CycleFilter,
                KeyAction::ClearSearch,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                // Paired keys are shown as one item
                let (key_display, action_label) = match action {
                    KeyAction::NavigateUp | KeyAction::NavigateDown => {
                        ("Up/Dn".to_string(), "Navigate".to_string())
                    }
                    KeyAction::AdjustLeft | KeyAction::AdjustRight => {
                        ("Lt/Rt".to_string(), "Choose".to_string())
                    }
                    _ => (binding.display.clone(), binding.description.clone()),
                };
                items.push(NavBarItem {
                    key_display,
                    action_label,
                });
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let mut sections = Vec::new();

        let section = |title: &str, keep: fn(KeyAction) -> bool| {
            let items: Vec<(String, String)> = self
                .get_bindings(mode)
                .into_iter()
                .filter(|b| keep(b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect();
            (!items.is_empty()).then(|| HelpSection {
                title: title.to_string(),
                items,
            })
        };

        sections.extend(section("Navigation", |a| {
            matches!(
                a,
                KeyAction::NavigateUp
                    | KeyAction::NavigateDown
                    | KeyAction::NextField
                    | KeyAction::PreviousField
                    | KeyAction::AdjustLeft
                    | KeyAction::AdjustRight
            )
        }));
        sections.extend(section("Actions", |a| {
            matches!(
                a,
                KeyAction::Select | KeyAction::DeleteChar | KeyAction::ClearSearch | KeyAction::CycleFilter
            )
        }));
        sections.extend(section("General", |a| {
            matches!(a, KeyAction::Back | KeyAction::Help | KeyAction::Quit)
        }));

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_never_bound() {
        let ctx = KeybindingContext::new();
        for mode in [AppMode::Register, AppMode::Checkout, AppMode::Dashboard] {
            for c in ['q', 'b', ' ', '?', 'a'] {
                assert_eq!(ctx.resolve(&mode, KeyCode::Char(c), KeyModifiers::NONE), None);
            }
        }
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctx = KeybindingContext::new();
        for mode in [AppMode::Register, AppMode::Checkout, AppMode::Dashboard] {
            assert_eq!(
                ctx.resolve(&mode, KeyCode::Char('c'), KeyModifiers::CONTROL),
                Some(KeyAction::Quit)
            );
        }
    }

    #[test]
    fn test_back_tab_with_shift() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(&AppMode::Register, KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(KeyAction::PreviousField)
        );
    }

    #[test]
    fn test_nav_items_present_for_each_mode() {
        let ctx = KeybindingContext::new();
        for mode in [AppMode::Register, AppMode::Checkout, AppMode::Dashboard] {
            let items = ctx.get_nav_items(&mode);
            assert!(items.iter().any(|i| i.action_label == "Help"));
        }
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(&AppMode::Dashboard);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Actions", "General"]);
    }
}
