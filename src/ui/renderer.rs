//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from `AppState`, then hand
//! it to the layout for the current mode.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout for a `rows` x `cols` pane.
///
/// Does not clear the screen; Zellij redraws the pane on every render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(form) = &vm.form {
        components::render_form_mode(vm, form, theme, cols, rows);
    } else {
        components::render_browse_mode(vm, theme, cols, rows);
    }
}
