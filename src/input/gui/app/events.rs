/// User events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event was handed to the presenter; redraw to show it.
    Wake,
}
