// ABOUTME: UI components for the TUI interface including sidebar menu, terminal pane, and help

pub mod help;
pub mod layout;
pub mod sidebar;
pub mod terminal_pane;

pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use sidebar::SidebarComponent;
pub use terminal_pane::TerminalPaneComponent;
