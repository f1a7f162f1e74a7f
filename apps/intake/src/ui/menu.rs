//! Menu routing: exactly one view is active at a time.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    RequestService,
    ViewRequests,
    About,
    Quit,
}

impl View {
    pub const MENU: [View; 5] = [
        View::Home,
        View::RequestService,
        View::ViewRequests,
        View::About,
        View::Quit,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::RequestService => "Request Service",
            View::ViewRequests => "View Requests",
            View::About => "About",
            View::Quit => "Quit",
        }
    }

    /// Accepts a menu number or a view name.
    pub fn from_choice(input: &str) -> Option<View> {
        let choice = input.trim().to_ascii_lowercase();
        if let Ok(n) = choice.parse::<usize>() {
            return n.checked_sub(1).and_then(|idx| View::MENU.get(idx).copied());
        }

        match choice.as_str() {
            "home" => Some(View::Home),
            "request" | "request service" | "submit" | "new" => Some(View::RequestService),
            "view" | "view requests" | "list" | "requests" => Some(View::ViewRequests),
            "about" => Some(View::About),
            "quit" | "q" | "exit" => Some(View::Quit),
            _ => None,
        }
    }
}

pub fn render_menu() -> String {
    let mut out = String::from("\nMenu\n");
    for (idx, view) in View::MENU.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", idx + 1, view.title());
    }
    out
}
