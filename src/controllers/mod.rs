mod panel;

pub use panel::PanelHttpController;

use crate::{infrastructure::types::Panel, mk_static};

/// Wrap the panel in its HTTP controller for the lifetime of the program.
pub fn init_panel_controller(panel: Panel) -> &'static PanelHttpController {
    mk_static!(PanelHttpController, PanelHttpController::new(panel))
}
