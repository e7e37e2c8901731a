//! Color palette for the UI surfaces

pub mod input {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::DarkGray;
    pub const BORDER_ACTIVE: Color = Color::Cyan;
}

pub mod dropdown {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const BG: Color = Color::Black;
    pub const ROW_FG: Color = Color::White;
    pub const ROW_FOCUSED_FG: Color = Color::Black;
    pub const ROW_FOCUSED_BG: Color = Color::Cyan;
}

pub mod history {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::DarkGray;
    pub const INDEX: Color = Color::DarkGray;
    pub const ENTRY: Color = Color::White;
    pub const EMPTY: Color = Color::DarkGray;
    pub const CLEAR_BUTTON: Color = Color::Red;
}

pub mod help {
    use ratatui::style::Color;

    pub const TEXT: Color = Color::DarkGray;
}
