/// All commands the keyboard controller can produce.
/// Classification yields one of these; the dispatch step in the controller
/// applies it to the collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RunScript,
    StopScript,
    ClearMessages,
    ToggleMenu,
    AdjustFontSize(FontSizeAction),
}

/// Direction of a font-size adjustment. The actual pixel value is computed
/// at dispatch time from the editor's current and default sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSizeAction {
    Increase,
    Decrease,
    Reset,
}
