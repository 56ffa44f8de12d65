pub mod app;
pub mod briefing_overlay;
pub mod end_overlay;
pub mod hull_bar;
pub mod legend;
pub mod legend_panel;
pub mod loading_screen;
pub mod run_view;
pub mod scan_panel;
pub mod status_panel;
pub mod warning_overlay;
