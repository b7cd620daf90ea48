use finder_logging::{finder_error, finder_info};

use crate::render::render_results;
use crate::{
    check_required_elements, update, Document, Effect, InitError, Key, Msg, SearchConfig,
    SearchState, SearchViewModel, Theme, UiBinding,
};

/// Owns the search state and pushes every change into a [`UiBinding`].
///
/// Navigation is performed directly on the binding; every other effect is
/// returned to the caller, which owns timers and the network.
#[derive(Debug)]
pub struct SearchController<B: UiBinding> {
    state: SearchState,
    binding: B,
}

impl<B: UiBinding> SearchController<B> {
    pub fn new(binding: B, config: SearchConfig, theme: Theme) -> Self {
        let mut controller = Self {
            state: SearchState::new(config, theme),
            binding,
        };
        controller.binding.apply_theme(theme);
        let view = controller.state.view();
        controller.render(&view);
        controller
    }

    /// Checks the page for every required element before wiring up search.
    ///
    /// A missing element disables search; the error is logged and returned.
    pub fn initialize(
        document: &dyn Document,
        binding: B,
        config: SearchConfig,
        theme: Theme,
    ) -> Result<Self, InitError> {
        if let Err(err) = check_required_elements(document) {
            finder_error!("Search disabled: {}", err);
            return Err(err);
        }
        finder_info!("Search initialized with theme {}", theme.as_str());
        Ok(Self::new(binding, config, theme))
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        let view = state.view();
        self.state = state;
        if changed {
            self.render(&view);
        }

        let (ui, io): (Vec<Effect>, Vec<Effect>) = effects.into_iter().partition(Effect::is_ui);
        for effect in ui {
            if let Effect::Navigate { path } = effect {
                finder_info!("Navigating to {}", path);
                self.binding.navigate(&path);
            }
        }
        io
    }

    /// Input event: reads the current text from the binding.
    pub fn on_input(&mut self) -> Vec<Effect> {
        let text = self.binding.read_text();
        self.dispatch(Msg::InputChanged(text))
    }

    pub fn on_keydown(&mut self, key: Key) -> Vec<Effect> {
        self.dispatch(Msg::KeyPressed(key))
    }

    pub fn view(&self) -> SearchViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    fn render(&mut self, view: &SearchViewModel) {
        self.binding
            .set_results_html(&render_results(&view.results));
        self.binding.set_results_visible(view.results_visible);
        if view.loader_visible {
            self.binding.show_loader();
        } else {
            self.binding.hide_loader();
        }
        self.binding.apply_theme(view.theme);
    }
}
