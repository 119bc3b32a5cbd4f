//! Top-level render pass
//!
//! Called once per frame from the main loop. Computes the layout, then
//! hands each area to its pane renderer. Overlays (toast, export dialog)
//! draw last so they sit on top.

use ratatui::Frame;

use crate::logic::navigation::visible_rows;
use crate::model::ui::Pane;
use crate::ui::{
    contents::render_contents,
    dialogs::render_export_dialog,
    layout::calculate_layout,
    legend::render_legend,
    preview::render_preview,
    results::render_results,
    search::render_search_input,
    status_bar::render_status_bar,
    tabs::render_tabs,
    toast::render_toast,
    tray::render_tray,
};
use crate::ActiveTab;
use crate::App;

pub fn render(f: &mut Frame, app: &mut App) {
    let layout = calculate_layout(f.area(), app.model.nav.visible);
    let model = &mut app.model;
    let focus = model.ui.focus;

    let match_count = if model.index_loaded {
        Some(model.filtered.len())
    } else {
        None
    };
    render_search_input(
        f,
        layout.search_area,
        &model.filters,
        focus == Pane::Search,
        match_count,
    );

    if let Some(contents_area) = layout.contents_area {
        let rows = visible_rows(&model.nav.groups);
        render_contents(
            f,
            contents_area,
            &model.nav.groups,
            &rows,
            &mut model.ui.nav_state,
            focus == Pane::Contents,
            model.preview.active_path(),
        );
    }

    render_results(
        f,
        layout.results_area,
        &model.filtered,
        model.index_loaded,
        model.index_error.as_deref(),
        &mut model.ui.results_state,
        focus == Pane::Results,
    );

    render_tabs(
        f,
        layout.tabs_area,
        model.ui.active_tab,
        model.selection.len(),
    );

    match model.ui.active_tab {
        ActiveTab::Selection => render_tray(
            f,
            layout.side_area,
            &model.selection,
            &mut model.ui.tray_state,
            focus == Pane::Side,
            model.ui.drag_payload.is_some(),
        ),
        ActiveTab::Preview => render_preview(
            f,
            layout.side_area,
            &model.preview,
            model.ui.preview_scroll,
            focus == Pane::Side,
        ),
    }

    if let Some(legend_area) = layout.legend_area {
        render_legend(f, legend_area, focus, model.ui.vim_mode);
    }

    render_status_bar(f, layout.status_area, model);

    if let Some((message, _)) = &model.ui.toast_message {
        render_toast(f, message);
    }

    if let Some(lines) = &model.ui.export_dialog {
        render_export_dialog(f, lines);
    }
}
